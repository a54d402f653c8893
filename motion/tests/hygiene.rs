//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the motion crate's production sources for patterns that
//! crash or misbehave inside a browser tab. Each has a budget (ideally zero).
//! If you must add one, you have to fix an existing one first; the budget
//! never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

// Panics abort the wasm instance and freeze the page.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, hint: "propagate or log instead" },
    Budget { pattern: ".expect(", max: 0, hint: "propagate or log instead" },
    Budget { pattern: "panic!(", max: 0, hint: "return a Result" },
    Budget { pattern: "unreachable!(", max: 0, hint: "restructure the match" },
    Budget { pattern: "todo!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" },
];

// Silent loss discards errors without inspecting them.
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, hint: "handle or log the value" },
    Budget { pattern: ".ok()", max: 0, hint: "handle or log the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete unused code" },
];

// Browser-hostile std and rand APIs.
const PLATFORM: &[Budget] = &[
    Budget { pattern: "std::time::Instant", max: 0, hint: "host timestamps only; Instant panics on wasm32" },
    Budget { pattern: "SystemTime", max: 0, hint: "host timestamps only" },
    Budget { pattern: "thread_rng", max: 0, hint: "seed a SmallRng from the host" },
    Budget { pattern: "rand::rng()", max: 0, hint: "seed a SmallRng from the host" },
];

/// Files allowed to name `web_sys` types.
const BROWSER_FILES: &[&str] = &["engine.rs", "render.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `motion/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let mut failures = Vec::new();
    for b in budgets {
        let found = hits(&files, b.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > b.max {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{}`: found {count}, max {} ({})\n{listing}", b.pattern, b.max, b.hint));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_discard_budget() {
    check(DISCARDS);
}

#[test]
fn platform_budget() {
    check(PLATFORM);
}

#[test]
fn web_sys_stays_at_the_edge() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|f| f.content.contains("web_sys"))
        .filter(|f| !BROWSER_FILES.iter().any(|name| f.path.ends_with(name)))
        .map(|f| f.path)
        .collect();
    assert!(offenders.is_empty(), "web_sys used outside {BROWSER_FILES:?}: {offenders:?}");
}

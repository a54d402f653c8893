//! Landing config bootstrap.
//!
//! The page may embed overrides as
//! `<script type="application/json" id="landing-config">{...}</script>`.
//! A missing block means defaults; a broken one is logged and ignored so the
//! page still animates.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use motion::config::{ConfigError, LandingConfig};

/// Id of the optional embedded config block.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Parse the raw text of the config block, if there is one.
///
/// # Errors
///
/// Returns the parse or validation error for a present but unusable block.
pub fn parse_config(raw: Option<&str>) -> Result<LandingConfig, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(LandingConfig::default()),
        Some(text) => LandingConfig::from_json(text),
    }
}

/// Size the carousel to the slides actually rendered. A page without slides
/// keeps the configured count.
#[must_use]
pub fn fit_to_markup(mut config: LandingConfig, rendered_slides: usize) -> LandingConfig {
    if rendered_slides > 0 {
        config.carousel.slide_count = rendered_slides;
    }
    config
}

/// Read the config block from the live document, falling back to defaults.
#[cfg(feature = "csr")]
pub fn read_config() -> LandingConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match parse_config(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default landing config");
            LandingConfig::default()
        }
    }
}

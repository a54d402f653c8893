use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature { icon: "⚡", title: "Instant", body: "Changes reach every device in milliseconds." },
    Feature { icon: "🔒", title: "Private", body: "End-to-end encryption for every workspace." },
    Feature { icon: "🧭", title: "Guided", body: "Onboarding that adapts to each new member." },
    Feature { icon: "🔌", title: "Connected", body: "Plug into the tools your team already uses." },
    Feature { icon: "📈", title: "Insightful", body: "See how work flows across the network." },
    Feature { icon: "🌱", title: "Sustainable", body: "Carbon-aware hosting in every region." },
];

/// Feature grid. The header and each card reveal once as they scroll into view.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="section-header">
                <h2>"Everything you need"</h2>
                <p>"Built for teams that move fast and stay in sync."</p>
            </div>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="grid-item feature-card">
                                <div class="feature-icon">{f.icon}</div>
                                <h3>{f.title}</h3>
                                <p>{f.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

use leptos::prelude::*;

/// Top navigation bar. Drops in from above on load.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="logo" href="#">"Verdant"</a>
            <ul class="nav-links">
                <li><a href="#features">"Features"</a></li>
                <li><a href="#showcase">"Showcase"</a></li>
            </ul>
        </nav>
    }
}

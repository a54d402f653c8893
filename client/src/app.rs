//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    features::Features, hero::Hero, navbar::Navbar, particle_canvas::ParticleCanvas, register_modal::RegisterModal,
    showcase::Showcase,
};
use crate::state::landing::LandingView;
#[cfg(feature = "csr")]
use crate::util::host::{Host, HostHandle};

/// Root application component.
///
/// Provides the shared `LandingView` signal and, in the browser, the host
/// that runs page events through the motion engine.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let landing = RwSignal::new(LandingView::default());
    provide_context(landing);
    #[cfg(feature = "csr")]
    provide_context::<HostHandle>(StoredValue::new_local(Host::new(landing)));

    view! {
        <Title text="Verdant | Launching Soon"/>
        <ParticleCanvas/>
        <Navbar/>
        <main>
            <Hero/>
            <Features/>
            <Showcase/>
        </main>
        <RegisterModal/>
    }
}

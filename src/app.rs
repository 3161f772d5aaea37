//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::studio::StudioPage;
use crate::state::design::DesignState;
use crate::state::results::ResultsState;
use crate::state::template::TemplateParams;

/// Root application component.
///
/// Provides the shared state contexts and sets up routing: a single studio
/// route plus a fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let params = RwSignal::new(TemplateParams::default());
    let design = RwSignal::new(DesignState::default());
    let results = RwSignal::new(ResultsState::default());

    provide_context(params);
    provide_context(design);
    provide_context(results);

    view! {
        <Title text="Bookbinding Template Generator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StudioPage/>
            </Routes>
        </Router>
    }
}

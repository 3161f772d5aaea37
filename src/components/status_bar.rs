//! Bottom status bar showing request state, element count, and export
//! availability.

use leptos::prelude::*;

use crate::state::design::DesignState;
use crate::state::results::ResultsState;

/// Status bar at the bottom of the studio page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let design = expect_context::<RwSignal<DesignState>>();
    let results = expect_context::<RwSignal<ResultsState>>();

    let status_class = move || {
        if results.get().generating {
            "status-bar__dot status-bar__dot--busy"
        } else {
            "status-bar__dot status-bar__dot--idle"
        }
    };

    let status_label = move || {
        if results.get().generating {
            "Generating..."
        } else {
            "Idle"
        }
    };

    let element_count = move || design.get().elements.len();

    view! {
        <div class="status-bar">
            <span class="status-bar__state">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__elements">
                {move || format!("{} design elements", element_count())}
            </span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__export">
                {move || if results.get().can_export() { "SVG ready" } else { "No SVG yet" }}
            </span>
        </div>
    }
}

//! Measurement display for the last successful generation.

use leptos::prelude::*;

use crate::state::results::ResultsState;

/// Measurements panel: leather cut, material figures, hub positions.
///
/// Hidden until the first successful generation. Fields whose figures were
/// missing from the response simply keep whatever they showed before.
#[component]
pub fn MeasurementsPanel() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    view! {
        <Show when=move || results.get().revealed>
            <div class="measurements-panel">
                <h3 class="measurements-panel__title">"Measurements"</h3>

                <dl class="measurements-panel__fields">
                    <dt>"Leather cut (mm)"</dt>
                    <dd>{move || results.get().cut_label}</dd>
                    <dt>"Leather area (cm\u{b2})"</dt>
                    <dd>{move || results.get().leather_area_cm2}</dd>
                    <dt>"Leather area (sq ft)"</dt>
                    <dd>{move || results.get().leather_area_sqft}</dd>
                    <dt>"Boards area (cm\u{b2})"</dt>
                    <dd>{move || results.get().boards_area_cm2}</dd>
                </dl>

                <div class="measurements-panel__hubs">
                    <h4>"Hub positions:"</h4>
                    <ul>
                        {move || {
                            results
                                .get()
                                .hubs
                                .iter()
                                .map(|hub| view! { <li>{hub.label()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

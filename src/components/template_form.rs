//! Dimension form and the generate control.
//!
//! Submitting merges the form fields with the design state into one request
//! payload and posts it to the generation service. The generate control is
//! disabled and relabeled for the duration; it is re-armed on the single
//! exit path of the request task, so success, a service-reported error, and
//! a transport failure all restore it.

use leptos::prelude::*;

use crate::net::types::GenerateRequest;
use crate::state::design::DesignState;
use crate::state::results::ResultsState;
use crate::state::template::TemplateParams;

/// Dimension/structure form with the generate button.
#[component]
pub fn TemplateForm() -> impl IntoView {
    let params = expect_context::<RwSignal<TemplateParams>>();
    let design = expect_context::<RwSignal<DesignState>>();
    let results = expect_context::<RwSignal<ResultsState>>();

    let on_generate = move |_| {
        // The disabled control normally prevents re-entry; guard anyway so a
        // programmatic trigger cannot start a second in-flight request.
        if results.get_untracked().generating {
            return;
        }
        results.update(|r| r.generating = true);

        let request = GenerateRequest::build(&params.get_untracked(), &design.get_untracked());

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::post_generate(&request).await {
                    Ok(response) if response.is_success() => {
                        let measurements = response
                            .measurements
                            .as_ref()
                            .map(crate::net::response::normalize)
                            .unwrap_or_default();
                        results.update(|r| r.absorb(response.svg, measurements));
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "unknown error".to_owned());
                        crate::util::notify::alert(&format!(
                            "Error generating template: {message}"
                        ));
                    }
                    Err(err) => {
                        leptos::logging::error!("generation request failed: {err}");
                        crate::util::notify::alert(
                            "An error occurred while communicating with the server.",
                        );
                    }
                }
                // Re-arm the generate control, whatever happened above.
                results.update(|r| r.generating = false);
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            results.update(|r| r.generating = false);
        }
    };

    view! {
        <div class="template-form">
            <h3 class="template-form__title">"Dimensions"</h3>
            <div class="template-form__grid">
                {param_field(
                    "Book width (mm)",
                    move || params.get().book_w,
                    move |v| params.update(|p| p.book_w = v),
                )}
                {param_field(
                    "Book height (mm)",
                    move || params.get().book_h,
                    move |v| params.update(|p| p.book_h = v),
                )}
                {param_field(
                    "Book thickness (mm)",
                    move || params.get().book_t,
                    move |v| params.update(|p| p.book_t = v),
                )}
                {param_field(
                    "Board thickness (mm)",
                    move || params.get().board_thickness,
                    move |v| params.update(|p| p.board_thickness = v),
                )}
                {param_field(
                    "Turn-in (mm)",
                    move || params.get().turn_in,
                    move |v| params.update(|p| p.turn_in = v),
                )}
                {param_field(
                    "Hinge gap (mm)",
                    move || params.get().hinge_gap,
                    move |v| params.update(|p| p.hinge_gap = v),
                )}
                {param_field(
                    "Square (mm)",
                    move || params.get().square,
                    move |v| params.update(|p| p.square = v),
                )}
                {param_field(
                    "Spine hubs",
                    move || params.get().num_hubs,
                    move |v| params.update(|p| p.num_hubs = v),
                )}
            </div>

            <button
                class="btn btn--primary template-form__generate"
                disabled=move || results.get().generating
                on:click=on_generate
            >
                {move || {
                    if results.get().generating { "Generating..." } else { "Generate template" }
                }}
            </button>
        </div>
    }
}

/// One labeled numeric form field bound to a params getter/setter pair.
fn param_field<G, S>(label: &'static str, get: G, set: S) -> impl IntoView
where
    G: Fn() -> String + Send + Sync + 'static,
    S: Fn(String) + Send + Sync + 'static,
{
    view! {
        <label class="template-form__field">
            {label}
            <input
                type="number"
                prop:value=get
                on:change=move |ev| set(event_target_value(&ev))
            />
        </label>
    }
}

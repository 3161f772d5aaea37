//! Drawing preview and SVG export.

use leptos::prelude::*;

use crate::state::results::ResultsState;

/// Preview panel: inline rendering of the last generated drawing plus the
/// download control.
///
/// Download is disabled until a drawing has been received, and clicking it
/// with no stored artifact is a no-op either way.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    let on_download = move |_| {
        let Some(markup) = results.get_untracked().artifact else {
            return;
        };
        crate::util::download::save_svg(&markup, "binding_template.svg");
    };

    view! {
        <div class="preview-panel">
            <div class="preview-panel__header">
                <h3 class="preview-panel__title">"Template preview"</h3>
                <button
                    class="btn"
                    disabled=move || !results.get().can_export()
                    on:click=on_download
                >
                    "Download SVG"
                </button>
            </div>
            <div
                class="preview-panel__svg"
                inner_html=move || results.get().artifact.unwrap_or_default()
            ></div>
        </div>
    }
}

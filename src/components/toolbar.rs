//! Top bar with the application title.

use leptos::prelude::*;

/// Top toolbar for the studio page.
#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <div class="toolbar">
            <span class="toolbar__title">"Bookbinding Template Generator"</span>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__hint">"Case binding \u{b7} all dimensions in mm"</span>
        </div>
    }
}

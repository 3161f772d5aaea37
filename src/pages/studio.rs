//! Studio page — the template workspace layout.

use leptos::prelude::*;

use crate::components::design_panel::DesignPanel;
use crate::components::measurements_panel::MeasurementsPanel;
use crate::components::preview_panel::PreviewPanel;
use crate::components::status_bar::StatusBar;
use crate::components::template_form::TemplateForm;
use crate::components::toolbar::Toolbar;

/// Studio page — composes the toolbar, the form and design panels, the
/// preview with its measurements, and the status bar.
#[component]
pub fn StudioPage() -> impl IntoView {
    view! {
        <div class="studio-page">
            <Toolbar/>
            <div class="studio-page__layout">
                <div class="studio-page__controls">
                    <TemplateForm/>
                    <DesignPanel/>
                </div>
                <div class="studio-page__output">
                    <PreviewPanel/>
                    <MeasurementsPanel/>
                </div>
            </div>
            <StatusBar/>
        </div>
    }
}

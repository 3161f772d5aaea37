//! UI components for the studio page.

pub mod design_panel;
pub mod measurements_panel;
pub mod preview_panel;
pub mod status_bar;
pub mod template_form;
pub mod toolbar;

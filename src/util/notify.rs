//! Blocking user notifications.

/// Show a blocking alert dialog with the given message.
///
/// Native builds log the message instead.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}

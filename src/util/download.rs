//! File download via a temporary object URL.
//!
//! Packages markup as a blob, points a synthetic anchor at it, clicks the
//! anchor, and revokes the object URL as soon as the click has been
//! dispatched — the URL is the one resource here that the browser will not
//! reclaim on its own. Requires a browser environment; native builds are a
//! no-op.

/// Offer the given SVG markup as a file download named `filename`.
pub fn save_svg(markup: &str, filename: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(markup));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/svg+xml");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            log::warn!("could not package the drawing for download");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        trigger_anchor(&document, &url, filename);
        // Revoked whether or not the anchor click worked.
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (markup, filename);
    }
}

/// Create a single-use download anchor, click it, and remove it.
#[cfg(feature = "csr")]
fn trigger_anchor(document: &web_sys::Document, url: &str, filename: &str) {
    use wasm_bindgen::JsCast;

    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
}

//! Browser download trigger: wraps content in a Blob and clicks a
//! temporary anchor. Fire-and-forget; nothing is returned to the caller.

pub fn trigger_download(filename: &str, mime: &str, content: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            log::warn!("failed to build blob for {filename}");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(el) = document.create_element("a") {
            if let Ok(anchor) = el.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, mime, content);
    }
}

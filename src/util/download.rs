//! Browser file-download helper.
//!
//! Wraps the blob/object-URL/anchor sequence the export button needs so the
//! checklist component stays free of web-sys plumbing.

use wasm_bindgen::{JsCast, JsValue};

/// Offer `contents` to the user as a JSON file download named `file_name`.
///
/// # Errors
///
/// Returns a short message when the browser refuses any step.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "blob creation failed".to_owned())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "object URL creation failed".to_owned())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "anchor creation failed".to_owned())?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

//! Small wrappers over browser APIs: blocking alerts and file downloads.

use js_sys::{Array, Uint8Array};
use ocean::ExportArtifact;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Hand `artifact` to the browser as a file download.
pub fn save_download(artifact: &ExportArtifact) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(artifact.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&artifact.content_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to build blob: {e:?}"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {e:?}"))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

//! Browser platform glue (WASM only)
//!
//! Handles the pieces of file I/O the page needs:
//! - Offering text as a download
//! - Reading the text of a user-picked file

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use crate::persistence::PersistError;

fn js_err(e: JsValue) -> PersistError {
    PersistError::Browser(format!("{:?}", e))
}

/// Save `text` as a file named `file_name` through a temporary anchor
pub fn download_text(file_name: &str, mime_type: &str, text: &str) -> Result<(), PersistError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PersistError::Browser("no document".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| PersistError::Browser("not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Exported {} ({} bytes)", file_name, text.len());
    Ok(())
}

/// Full text content of a picked file
pub async fn read_file_text(file: &File) -> Result<String, PersistError> {
    let value = JsFuture::from(file.text()).await.map_err(js_err)?;
    value
        .as_string()
        .ok_or_else(|| PersistError::Browser("file did not read as text".to_string()))
}

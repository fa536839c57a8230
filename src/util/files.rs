//! Reading picked files into memory for multipart upload.

use wasm_bindgen::JsCast as _;
use wasm_bindgen_futures::JsFuture;

/// A browser `File` read into bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// First file selected in an `<input type="file">`, if any.
pub fn first_selected(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// # Errors
///
/// Returns a description when the browser fails to read the file.
pub async fn read_file(file: &web_sys::File) -> Result<PickedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| "file read returned no data".to_owned())?;
    Ok(PickedFile {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

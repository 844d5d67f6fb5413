//! Photo pipeline WASM bindings.
//!
//! This module exposes the admitpix-core pipeline to the admissions page:
//!
//! - [`validate_photo`] - selection checks before the file is read
//! - [`preview_photo`] - data-URL generation for the preview element
//! - [`compress_photo`] / [`compress_photo_with`] - the full
//!   resize + re-encode + base64 run producing the upload payload
//!
//! All errors cross the boundary as their user-facing message; the page
//! shows it next to the file input and clears the invalid selection.

use admitpix_core::{
    preview_data_url, process, validate_selection, ResizeSpec, SourceImage,
};
use wasm_bindgen::prelude::*;

use crate::types::JsPhotoPayload;

/// Validate a file selection before reading its contents.
///
/// `size` arrives as a JS number (`File.size`); the declared MIME type
/// must be JPEG or PNG and the size at most 2 MiB.
///
/// # Errors
///
/// Returns the user-facing validation message; the page clears the
/// selection so no invalid file is retained.
#[wasm_bindgen]
pub fn validate_photo(mime: &str, size: f64) -> Result<(), JsValue> {
    validate_selection(mime, size as u64)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a preview data URL for the selected photo.
///
/// The preview keeps the source format; compression only happens at
/// submission time. Each new selection's preview supersedes the last.
#[wasm_bindgen]
pub fn preview_photo(name: &str, mime: &str, bytes: &[u8]) -> Result<String, JsValue> {
    let source =
        SourceImage::new(name, mime, bytes.to_vec()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(preview_data_url(&source))
}

/// Run the full pipeline with the production settings (800 px, quality 0.70).
///
/// Returns the `{ base64, type, name }` payload for the submission body.
#[wasm_bindgen]
pub fn compress_photo(name: &str, mime: &str, bytes: &[u8]) -> Result<JsPhotoPayload, JsValue> {
    compress_with_spec(name, mime, bytes, ResizeSpec::default())
}

/// Run the full pipeline with explicit settings.
///
/// `spec` is a plain JS object, e.g. `{ max_width: 800, quality: 0.7 }`.
#[wasm_bindgen]
pub fn compress_photo_with(
    name: &str,
    mime: &str,
    bytes: &[u8],
    spec: JsValue,
) -> Result<JsPhotoPayload, JsValue> {
    let spec: ResizeSpec = serde_wasm_bindgen::from_value(spec)
        .map_err(|e| JsValue::from_str(&format!("Invalid resize settings: {e}")))?;
    compress_with_spec(name, mime, bytes, spec)
}

fn compress_with_spec(
    name: &str,
    mime: &str,
    bytes: &[u8],
    spec: ResizeSpec,
) -> Result<JsPhotoPayload, JsValue> {
    let source =
        SourceImage::new(name, mime, bytes.to_vec()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let payload = process(&source, &spec).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsPhotoPayload::from_payload(payload))
}

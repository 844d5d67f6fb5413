//! Admitpix WASM - browser bindings for the photo pipeline
//!
//! This crate exposes the admitpix-core pipeline to the admissions web
//! page: selection validation, preview generation, and the full
//! compress-and-package run that produces the `photoFile` payload.
//!
//! # Usage
//!
//! ```typescript
//! import init, { validate_photo, preview_photo, compress_photo } from '@admitpix/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // On file selection
//! validate_photo(file.type, file.size);
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! photoPreview.src = preview_photo(file.name, file.type, bytes);
//!
//! // On form submission
//! const payload = compress_photo(file.name, file.type, bytes);
//! data.photoFile = { base64: payload.base64, type: payload.mimeType, name: payload.name };
//! ```

use wasm_bindgen::prelude::*;

mod photo;
mod types;

// Re-export public bindings
pub use photo::{compress_photo, compress_photo_with, preview_photo, validate_photo};
pub use types::JsPhotoPayload;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: set up a panic hook for better error messages in the browser
    // console when the console_error_panic_hook feature is added
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&"admitpix wasm ready".into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

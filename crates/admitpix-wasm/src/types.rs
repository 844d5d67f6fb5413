//! WASM-compatible wrapper types for upload payloads.

use admitpix_core::PhotoPayload;
use wasm_bindgen::prelude::*;

/// Transport payload wrapper for JavaScript.
///
/// Exposes the `{ base64, type, name }` triple the submission body embeds
/// under its `photoFile` field. The strings are copied out of WASM memory
/// on each getter call; payloads are small enough that this is cheap.
#[wasm_bindgen]
pub struct JsPhotoPayload {
    base64: String,
    mime: String,
    name: String,
}

#[wasm_bindgen]
impl JsPhotoPayload {
    /// Standard base64 of the compressed JPEG bytes.
    #[wasm_bindgen(getter)]
    pub fn base64(&self) -> String {
        self.base64.clone()
    }

    /// Declared payload type; always `image/jpeg`.
    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        self.mime.clone()
    }

    /// Transport filename, extension normalized to `.jpg`.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// The payload as a plain `{ base64, type, name }` object, ready to be
    /// merged into the submission body.
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        let object = PayloadObject {
            base64: &self.base64,
            mime: &self.mime,
            name: &self.name,
        };
        serde_wasm_bindgen::to_value(&object).map_err(JsValue::from)
    }
}

/// Wire shape of the payload inside the submission body.
#[derive(serde::Serialize)]
struct PayloadObject<'a> {
    base64: &'a str,
    #[serde(rename = "type")]
    mime: &'a str,
    name: &'a str,
}

impl JsPhotoPayload {
    /// Wrap a core payload for handoff to JavaScript.
    pub(crate) fn from_payload(payload: PhotoPayload) -> Self {
        Self {
            base64: payload.base64,
            mime: payload.mime,
            name: payload.name,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payload_maps_fields() {
        let payload = PhotoPayload {
            base64: "QUJD".to_string(),
            mime: "image/jpeg".to_string(),
            name: "photo.jpg".to_string(),
        };
        let js = JsPhotoPayload::from_payload(payload);

        assert_eq!(js.base64(), "QUJD");
        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!(js.name(), "photo.jpg");
    }
}

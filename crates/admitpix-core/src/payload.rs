//! Transport payloads attached to outgoing submissions.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::encode::CompressedPhoto;

/// Declared type of every compressed photo payload.
///
/// Pinned to JPEG irrespective of the source format, matching the
/// re-encoding stage's output.
pub const PAYLOAD_MIME: &str = "image/jpeg";

/// Base64 photo bundle attached to a submission under the `photoFile` field.
///
/// Serializes as `{ "base64": ..., "type": "image/jpeg", "name": ... }`.
/// The filename extension is rewritten to `.jpg` so the transport name
/// always matches the encoded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoPayload {
    /// Standard base64 of the JPEG bytes.
    pub base64: String,
    /// Always [`PAYLOAD_MIME`].
    #[serde(rename = "type")]
    pub mime: String,
    /// Original filename with its extension normalized to `.jpg`.
    pub name: String,
}

impl PhotoPayload {
    /// Package compressed JPEG bytes under the original selection's name.
    pub fn from_jpeg(photo: &CompressedPhoto, original_name: &str) -> Self {
        Self {
            base64: STANDARD.encode(&photo.jpeg),
            mime: PAYLOAD_MIME.to_string(),
            name: jpg_name(original_name),
        }
    }
}

/// Raw base64 attachment that keeps the original type and name.
///
/// Used for receipt uploads, which are forwarded untouched rather than
/// run through the photo pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePayload {
    pub base64: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub name: String,
}

impl FilePayload {
    /// Encode file bytes as-is, preserving the declared type and name.
    pub fn raw(name: &str, mime: &str, bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
            mime: mime.to_string(),
            name: name.to_string(),
        }
    }
}

/// Replace the final dot-extension with `.jpg`.
///
/// Only a trailing extension containing no further dots or slashes is
/// stripped, so `archive.tar.gz` becomes `archive.tar.jpg` and a name
/// without an extension just gains one.
fn jpg_name(name: &str) -> String {
    let stem = match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    };
    format!("{stem}.jpg")
}


// ============================================================================
// Property-Based Tests
// ============================================================================

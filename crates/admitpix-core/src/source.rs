//! Validated photo selections.

use serde::{Deserialize, Serialize};

use crate::error::PhotoError;

/// Maximum accepted photo size in bytes (2 MiB).
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

/// Accepted source image formats.
///
/// Anything else is rejected at selection time. Note that the declared type
/// only gates the pipeline; the output payload is always JPEG regardless of
/// which variant the source carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    /// Parse a declared MIME string. Returns `None` for unaccepted types.
    pub fn parse(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(ImageMime::Jpeg),
            "image/png" => Some(ImageMime::Png),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }
}

/// Check a file selection before its contents are read.
///
/// Size is checked first, then the declared type, matching the order the
/// upload form applies them. On failure the host clears the selection so no
/// invalid file is retained.
pub fn validate_selection(mime: &str, size: u64) -> Result<ImageMime, PhotoError> {
    if size > MAX_PHOTO_BYTES {
        return Err(PhotoError::FileTooLarge {
            size,
            max: MAX_PHOTO_BYTES,
        });
    }
    ImageMime::parse(mime).ok_or_else(|| PhotoError::UnsupportedType {
        mime: mime.to_string(),
    })
}

/// A validated photo selection.
///
/// Holds the raw bytes together with the declared type and original
/// filename. Values are constructed only through [`SourceImage::new`], so a
/// `SourceImage` always satisfies the size and type invariants.
#[derive(Debug, Clone)]
pub struct SourceImage {
    name: String,
    mime: ImageMime,
    bytes: Vec<u8>,
}

impl SourceImage {
    /// Validate a selection and take ownership of its bytes.
    pub fn new(name: impl Into<String>, mime: &str, bytes: Vec<u8>) -> Result<Self, PhotoError> {
        let mime = validate_selection(mime, bytes.len() as u64)?;
        if bytes.is_empty() {
            return Err(PhotoError::ReadFailed("file is empty".to_string()));
        }
        Ok(Self {
            name: name.into(),
            mime,
            bytes,
        })
    }

    /// Original filename as selected by the user.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared source format.
    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    /// Raw file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

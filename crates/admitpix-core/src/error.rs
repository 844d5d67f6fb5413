//! Error types for the photo pipeline.

use thiserror::Error;

/// Pipeline stage an error belongs to.
///
/// Submission hosts report the failing stage to the user and re-arm the
/// submit action; no stage is retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Selection validation (size and type checks).
    Validate,
    /// Reading the file contents.
    Read,
    /// Decoding the image bytes.
    Decode,
    /// Resizing and JPEG re-encoding.
    Compress,
}

/// Errors produced by the photo pipeline.
///
/// Every failure is terminal for the submission attempt that raised it and
/// never produces a partial payload. Messages are user-facing.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// The selected file exceeds the upload size limit.
    #[error("File is too large: {size} bytes (max {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    /// The declared MIME type is not an accepted image format.
    #[error("Invalid file type: {mime}. Use PNG or JPG.")]
    UnsupportedType { mime: String },

    /// The image bytes could not be decoded.
    #[error("Could not decode image: {0}")]
    DecodeFailed(String),

    /// Resizing or re-encoding the raster to JPEG failed.
    #[error("Could not compress image: {0}")]
    CompressionFailed(String),

    /// The file contents could not be read.
    #[error("Could not read file: {0}")]
    ReadFailed(String),
}

impl PhotoError {
    /// The pipeline stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            PhotoError::FileTooLarge { .. } | PhotoError::UnsupportedType { .. } => Stage::Validate,
            PhotoError::ReadFailed(_) => Stage::Read,
            PhotoError::DecodeFailed(_) => Stage::Decode,
            PhotoError::CompressionFailed(_) => Stage::Compress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_display() {
        let err = PhotoError::FileTooLarge {
            size: 3 * 1024 * 1024,
            max: 2 * 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "File is too large: 3145728 bytes (max 2097152 bytes)"
        );
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = PhotoError::UnsupportedType {
            mime: "image/gif".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid file type: image/gif. Use PNG or JPG.");
    }

    #[test]
    fn test_stage_mapping() {
        let too_large = PhotoError::FileTooLarge { size: 1, max: 0 };
        assert_eq!(too_large.stage(), Stage::Validate);

        let bad_type = PhotoError::UnsupportedType {
            mime: "text/plain".to_string(),
        };
        assert_eq!(bad_type.stage(), Stage::Validate);

        assert_eq!(
            PhotoError::ReadFailed("eof".to_string()).stage(),
            Stage::Read
        );
        assert_eq!(
            PhotoError::DecodeFailed("bad header".to_string()).stage(),
            Stage::Decode
        );
        assert_eq!(
            PhotoError::CompressionFailed("encoder".to_string()).stage(),
            Stage::Compress
        );
    }
}

//! End-to-end photo pipeline: decode, scale, re-encode, package.

use serde::{Deserialize, Serialize};

use crate::decode::{decode_photo, scale_to_max_width};
use crate::encode::encode_jpeg;
use crate::error::PhotoError;
use crate::payload::PhotoPayload;
use crate::source::SourceImage;

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Default JPEG quality factor.
pub const DEFAULT_QUALITY: f32 = 0.70;

/// Resize and re-encode settings for the upload pipeline.
///
/// Passed explicitly into [`process`]; the pipeline reads no ambient
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeSpec {
    /// Widest the output raster may be; wider sources are scaled down.
    pub max_width: u32,
    /// JPEG quality factor, 0.0-1.0.
    pub quality: f32,
}

impl Default for ResizeSpec {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Run the full pipeline on a validated selection.
///
/// Stages run strictly in order -- decode, scale, re-encode, package --
/// and the first failure aborts the run, so no partial payload is ever
/// produced. [`PhotoError::stage`] identifies the failing stage for the
/// caller's message.
pub fn process(source: &SourceImage, spec: &ResizeSpec) -> Result<PhotoPayload, PhotoError> {
    let decoded = decode_photo(source)?;
    let scaled = scale_to_max_width(&decoded, spec.max_width)?;
    let compressed = encode_jpeg(&scaled, spec.quality)?;
    Ok(PhotoPayload::from_jpeg(&compressed, source.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn encoded_bytes(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, format)
            .unwrap();
        buf.into_inner()
    }

    fn decode_payload(payload: &PhotoPayload) -> image::DynamicImage {
        let bytes = STANDARD.decode(&payload.base64).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_wide_jpeg_is_resized() {
        let bytes = encoded_bytes(3000, 2000, ImageFormat::Jpeg);
        let source = SourceImage::new("photo.jpg", "image/jpeg", bytes).unwrap();

        let payload = process(&source, &ResizeSpec::default()).unwrap();
        assert_eq!(payload.mime, "image/jpeg");
        assert_eq!(payload.name, "photo.jpg");

        let out = decode_payload(&payload);
        assert_eq!(out.width(), 800);
        assert_eq!(out.height(), 533);
    }

    #[test]
    fn test_small_png_keeps_dimensions_but_becomes_jpeg() {
        let bytes = encoded_bytes(500, 400, ImageFormat::Png);
        let source = SourceImage::new("photo.png", "image/png", bytes).unwrap();

        let payload = process(&source, &ResizeSpec::default()).unwrap();
        assert_eq!(payload.mime, "image/jpeg");
        assert_eq!(payload.name, "photo.jpg");

        let jpeg = STANDARD.decode(&payload.base64).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]); // JPEG, not PNG

        let out = decode_payload(&payload);
        assert_eq!(out.width(), 500);
        assert_eq!(out.height(), 400);
    }

    #[test]
    fn test_oversized_selection_never_reaches_decode() {
        let bytes = vec![0u8; 3 * 1024 * 1024];
        let err = SourceImage::new("big.jpg", "image/jpeg", bytes).unwrap_err();
        assert!(matches!(err, PhotoError::FileTooLarge { .. }));
        assert_eq!(err.stage(), Stage::Validate);
    }

    #[test]
    fn test_gif_selection_rejected() {
        let err = SourceImage::new("anim.gif", "image/gif", vec![0u8; 1024]).unwrap_err();
        assert!(matches!(err, PhotoError::UnsupportedType { .. }));
    }

    #[test]
    fn test_corrupt_bytes_abort_at_decode() {
        let source = SourceImage::new("photo.jpg", "image/jpeg", vec![0x42; 2048]).unwrap();
        let err = process(&source, &ResizeSpec::default()).unwrap_err();
        assert_eq!(err.stage(), Stage::Decode);
    }

    #[test]
    fn test_pipeline_deterministic() {
        let bytes = encoded_bytes(900, 600, ImageFormat::Jpeg);
        let source = SourceImage::new("photo.jpg", "image/jpeg", bytes).unwrap();

        let first = process(&source, &ResizeSpec::default()).unwrap();
        let second = process(&source, &ResizeSpec::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_spec_is_honored() {
        let bytes = encoded_bytes(640, 480, ImageFormat::Png);
        let source = SourceImage::new("p.png", "image/png", bytes).unwrap();

        let spec = ResizeSpec {
            max_width: 320,
            quality: 0.5,
        };
        let out = decode_payload(&process(&source, &spec).unwrap());
        assert_eq!(out.width(), 320);
        assert_eq!(out.height(), 240);
    }

    #[test]
    fn test_default_spec_constants() {
        let spec = ResizeSpec::default();
        assert_eq!(spec.max_width, 800);
        assert!((spec.quality - 0.70).abs() < f32::EPSILON);
    }
}

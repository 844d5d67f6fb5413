//! JPEG encoding at a fractional quality factor.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use crate::decode::DecodedPhoto;
use crate::error::PhotoError;

/// A photo re-encoded to JPEG, ready for transport packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPhoto {
    /// Output raster width in pixels.
    pub width: u32,
    /// Output raster height in pixels.
    pub height: u32,
    /// JPEG-encoded bytes.
    pub jpeg: Vec<u8>,
}

/// Encode a photo's RGB pixels to JPEG.
///
/// `quality` is the 0.0-1.0 factor the upload form uses (0.70 in
/// production); it maps onto the encoder's 1-100 scale and out-of-range
/// values are clamped rather than rejected.
///
/// # Errors
///
/// Returns `PhotoError::CompressionFailed` if the photo has zero
/// dimensions, the pixel buffer does not match them, or the encoder fails.
pub fn encode_jpeg(photo: &DecodedPhoto, quality: f32) -> Result<CompressedPhoto, PhotoError> {
    if photo.width == 0 || photo.height == 0 {
        return Err(PhotoError::CompressionFailed(format!(
            "invalid dimensions {}x{}",
            photo.width, photo.height
        )));
    }

    let expected_len = (photo.width as usize) * (photo.height as usize) * 3;
    if photo.pixels.len() != expected_len {
        return Err(PhotoError::CompressionFailed(format!(
            "pixel buffer is {} bytes, expected {}",
            photo.pixels.len(),
            expected_len
        )));
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, encoder_quality(quality));

    encoder
        .write_image(
            &photo.pixels,
            photo.width,
            photo.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| PhotoError::CompressionFailed(e.to_string()))?;

    Ok(CompressedPhoto {
        width: photo.width,
        height: photo.height,
        jpeg: buffer.into_inner(),
    })
}

/// Map a 0.0-1.0 quality factor to the encoder's 1-100 scale.
fn encoder_quality(quality: f32) -> u8 {
    ((quality * 100.0).round() as i32).clamp(1, 100) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

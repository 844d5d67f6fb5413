//! Width-bounded downscaling ahead of JPEG re-encoding.

use super::DecodedPhoto;
use crate::error::PhotoError;

/// Scale a photo so its width does not exceed `max_width`.
///
/// Height follows from a single proportional factor,
/// `round(height * max_width / width)`, so the aspect ratio is preserved
/// within rounding. Photos at or under the limit pass through unchanged --
/// nothing is ever upscaled. Only the width is constrained; a tall, narrow
/// photo keeps its full height.
///
/// # Errors
///
/// Returns `PhotoError::CompressionFailed` if `max_width` is zero or the
/// pixel buffer does not match the photo's dimensions.
pub fn scale_to_max_width(
    photo: &DecodedPhoto,
    max_width: u32,
) -> Result<DecodedPhoto, PhotoError> {
    if max_width == 0 {
        return Err(PhotoError::CompressionFailed(
            "target width must be non-zero".to_string(),
        ));
    }

    if photo.width <= max_width {
        return Ok(photo.clone());
    }

    let height = scaled_height(photo.width, photo.height, max_width);

    let rgb_image = photo.to_rgb_image().ok_or_else(|| {
        PhotoError::CompressionFailed("pixel buffer does not match dimensions".to_string())
    })?;

    // Triangle matches the bilinear sampling a canvas draw performs.
    let resized = image::imageops::resize(
        &rgb_image,
        max_width,
        height,
        image::imageops::FilterType::Triangle,
    );

    Ok(DecodedPhoto::from_rgb_image(resized))
}

/// Proportionally scaled height for a width-constrained photo.
fn scaled_height(width: u32, height: u32, max_width: u32) -> u32 {
    let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
    scaled.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_photo(width: u32, height: u32) -> DecodedPhoto {
        // Create a simple gradient photo for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        DecodedPhoto::new(width, height, pixels)
    }

    #[test]
    fn test_scale_wide_photo() {
        let photo = create_test_photo(3000, 2000);
        let scaled = scale_to_max_width(&photo, 800).unwrap();

        assert_eq!(scaled.width, 800);
        assert_eq!(scaled.height, 533); // 2000 * 800 / 3000 = 533.33
        assert_eq!(scaled.pixels.len(), 800 * 533 * 3);
    }

    #[test]
    fn test_photo_at_limit_unchanged() {
        let photo = create_test_photo(800, 600);
        let scaled = scale_to_max_width(&photo, 800).unwrap();

        assert_eq!(scaled.width, 800);
        assert_eq!(scaled.height, 600);
        assert_eq!(scaled.pixels, photo.pixels);
    }

    #[test]
    fn test_small_photo_never_upscaled() {
        let photo = create_test_photo(500, 400);
        let scaled = scale_to_max_width(&photo, 800).unwrap();

        assert_eq!(scaled.width, 500);
        assert_eq!(scaled.height, 400);
    }

    #[test]
    fn test_tall_photo_only_width_constrained() {
        // Height well over the width cap stays untouched.
        let photo = create_test_photo(400, 3000);
        let scaled = scale_to_max_width(&photo, 800).unwrap();

        assert_eq!(scaled.width, 400);
        assert_eq!(scaled.height, 3000);
    }

    #[test]
    fn test_just_over_limit() {
        let photo = create_test_photo(801, 600);
        let scaled = scale_to_max_width(&photo, 800).unwrap();

        assert_eq!(scaled.width, 800);
        assert_eq!(scaled.height, 599); // 600 * 800 / 801 = 599.25
    }

    #[test]
    fn test_extreme_aspect_clamps_height_to_one() {
        let photo = create_test_photo(4000, 1);
        let scaled = scale_to_max_width(&photo, 800).unwrap();

        assert_eq!(scaled.width, 800);
        assert_eq!(scaled.height, 1); // 1 * 800 / 4000 rounds to 0, clamped
    }

    #[test]
    fn test_zero_max_width_error() {
        let photo = create_test_photo(100, 50);
        assert!(scale_to_max_width(&photo, 0).is_err());
    }

    #[test]
    fn test_scaled_height_rounds_half_up() {
        // 1500 * 800 / 3000 = 400.0
        assert_eq!(scaled_height(3000, 1500, 800), 400);
        // 2000 * 800 / 3000 = 533.33 -> 533
        assert_eq!(scaled_height(3000, 2000, 800), 533);
        // 1000 * 800 / 1067 = 749.76 -> 750
        assert_eq!(scaled_height(1067, 1000, 800), 750);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

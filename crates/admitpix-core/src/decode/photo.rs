//! JPEG/PNG decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodedPhoto, Orientation};
use crate::error::PhotoError;
use crate::source::{ImageMime, SourceImage};

/// Decode a validated selection into RGB pixel data.
///
/// JPEG sources get their EXIF orientation applied so the raster matches
/// what the user saw on screen; PNG carries no orientation tag. The
/// downstream resize arithmetic therefore operates on oriented dimensions.
///
/// # Errors
///
/// Returns `PhotoError::DecodeFailed` if the bytes are not a decodable
/// image of the declared format.
pub fn decode_photo(source: &SourceImage) -> Result<DecodedPhoto, PhotoError> {
    let orientation = match source.mime() {
        ImageMime::Jpeg => extract_orientation(source.bytes()),
        ImageMime::Png => Orientation::Normal,
    };

    let cursor = Cursor::new(source.bytes());
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| PhotoError::DecodeFailed(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| PhotoError::DecodeFailed(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(DecodedPhoto::from_rgb_image(oriented.into_rgb8()))
}

/// Extract EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

//! On-screen preview generation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::source::SourceImage;

/// Build a `data:` URL for displaying a selected photo.
///
/// The preview keeps the source format untouched -- compression only
/// happens at submission time. The URL is display-only and never
/// transmitted; each new selection's preview supersedes the previous one.
pub fn preview_data_url(source: &SourceImage) -> String {
    format!(
        "data:{};base64,{}",
        source.mime().as_str(),
        STANDARD.encode(source.bytes())
    )
}

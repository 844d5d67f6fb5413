//! Photo decoding for the upload pipeline.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG selections into RGB pixel data
//! - Applying EXIF orientation to JPEG sources
//! - Width-bounded downscaling ahead of re-encoding
//!
//! # Architecture
//!
//! Decoding is synchronous and allocation-per-call; hosts that must not
//! block (the async uploader, the browser bindings) schedule these
//! functions off their interface thread themselves.

mod photo;
mod resize;
mod types;

pub use photo::decode_photo;
pub use resize::scale_to_max_width;
pub use types::{DecodedPhoto, Orientation};

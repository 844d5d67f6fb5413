//! Admitpix Core - student photo ingestion pipeline
//!
//! This crate turns a user-selected photo into an upload-ready payload for
//! the admissions backend:
//!
//! - Selection validation (size cap, accepted formats)
//! - JPEG/PNG decoding with EXIF orientation handling
//! - Width-bounded downscaling
//! - JPEG re-encoding at a fixed quality factor
//! - Base64 transport packaging and on-screen preview generation
//!
//! The pipeline is a pure function of its inputs plus a [`ResizeSpec`]; it
//! performs no I/O and reads no ambient state. Hosts (the submission client,
//! the browser bindings) own file access and transport.

pub mod decode;
pub mod encode;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod preview;
pub mod sequence;
pub mod source;

pub use error::{PhotoError, Stage};
pub use payload::{FilePayload, PhotoPayload, PAYLOAD_MIME};
pub use pipeline::{process, ResizeSpec, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY};
pub use preview::preview_data_url;
pub use sequence::{Generation, UploadSequence};
pub use source::{validate_selection, ImageMime, SourceImage, MAX_PHOTO_BYTES};

//! JPEG re-encoding for the upload pipeline.
//!
//! Every accepted photo leaves this module as JPEG at the configured
//! quality factor, regardless of the source format. PNG selections are
//! deliberately converted -- the backend stores a single format and the
//! transport filename is rewritten to match.

mod jpeg;

pub use jpeg::{encode_jpeg, CompressedPhoto};

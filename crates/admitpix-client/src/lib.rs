//! Admitpix Client - submission plumbing for the admissions backend
//!
//! Thin async collaborator around `admitpix-core`: it reads files, runs the
//! photo pipeline off the interface thread, and relays form data to the
//! single backend endpoint that owns all persistence and business rules.
//!
//! The endpoint address is injected at construction (or read from
//! `ADMITPIX_ENDPOINT`); nothing here consults ambient global state.

pub mod api;
pub mod types;
pub mod uploader;

pub use api::{SubmissionClient, ENDPOINT_ENV};
pub use types::{AdmissionForm, Course, PaymentForm, StudentDetails, SubmitResponse};
pub use uploader::{PhotoUploader, UploadError};

//! Async orchestration of the photo pipeline.

use std::future::Future;
use std::path::Path;

use admitpix_core::{
    preview_data_url, process, PhotoError, PhotoPayload, ResizeSpec, SourceImage, UploadSequence,
};
use thiserror::Error;
use tracing::debug;

/// Errors from the async upload orchestration.
#[derive(Debug, Error)]
pub enum UploadError {
    /// A pipeline stage failed; the message names the stage's problem.
    #[error(transparent)]
    Photo(#[from] PhotoError),

    /// The background task running the pipeline was cancelled or panicked.
    #[error("Upload task failed: {0}")]
    TaskFailed(String),
}

/// Runs the photo pipeline off the interface thread.
///
/// Stages of one invocation are totally ordered; the first failure aborts
/// it. Overlapping invocations resolve by invocation order: a result is
/// discarded once a newer call has been made, so a slow older run can
/// never overwrite a newer one. Previews and uploads are guarded
/// independently -- re-previewing must not cancel an in-flight submission.
pub struct PhotoUploader {
    spec: ResizeSpec,
    uploads: UploadSequence,
    previews: UploadSequence,
}

impl PhotoUploader {
    pub fn new(spec: ResizeSpec) -> Self {
        Self {
            spec,
            uploads: UploadSequence::new(),
            previews: UploadSequence::new(),
        }
    }

    pub fn spec(&self) -> &ResizeSpec {
        &self.spec
    }

    /// Validate a selection and produce its transport payload.
    ///
    /// Returns `Ok(None)` when a newer `prepare` call superseded this one.
    pub fn prepare(
        &self,
        name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<Option<PhotoPayload>, UploadError>> + '_ {
        // Claim the generation at call time so ordering follows invocation,
        // not first poll.
        let generation = self.uploads.begin();
        let name = name.to_owned();
        let mime = mime.to_owned();
        let spec = self.spec;

        async move {
            let source = SourceImage::new(name, &mime, bytes)?;
            let payload = tokio::task::spawn_blocking(move || process(&source, &spec))
                .await
                .map_err(|e| UploadError::TaskFailed(e.to_string()))??;

            let admitted = self.uploads.admit(generation, payload);
            if admitted.is_none() {
                debug!("Discarding superseded upload result");
            }
            Ok(admitted)
        }
    }

    /// Produce a preview data URL for a selection.
    ///
    /// Returns `Ok(None)` when a newer `preview` call superseded this one.
    pub fn preview(
        &self,
        name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<Option<String>, UploadError>> + '_ {
        let generation = self.previews.begin();
        let name = name.to_owned();
        let mime = mime.to_owned();

        async move {
            let source = SourceImage::new(name, &mime, bytes)?;
            let url = preview_data_url(&source);

            let admitted = self.previews.admit(generation, url);
            if admitted.is_none() {
                debug!("Discarding superseded preview");
            }
            Ok(admitted)
        }
    }

    /// Read a file from disk and prepare it.
    ///
    /// I/O failures surface as `ReadFailed` before validation runs; the
    /// declared type is derived from the file extension.
    pub async fn prepare_from_file(
        &self,
        path: &Path,
    ) -> Result<Option<PhotoPayload>, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PhotoError::ReadFailed(e.to_string()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();

        self.prepare(&name, &mime_for_path(path), bytes).await
    }
}

impl Default for PhotoUploader {
    fn default() -> Self {
        Self::new(ResizeSpec::default())
    }
}

/// Declared MIME type for a filesystem path, by extension.
///
/// Unknown extensions fall through to a type validation will reject.
fn mime_for_path(path: &Path) -> String {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg".to_string(),
        Some("png") => "image/png".to_string(),
        Some(other) => format!("image/{other}"),
        None => "application/octet-stream".to_string(),
    }
}

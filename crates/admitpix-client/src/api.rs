//! HTTP client for the admissions backend.
//!
//! A single external endpoint owns all business logic; every request is
//! either a GET with an `action` query parameter or a JSON POST whose body
//! carries an `action` field plus the form data.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::types::{
    AdmissionForm, Course, CourseListResponse, PaymentForm, StudentDetails,
    StudentDetailsResponse, SubmitResponse,
};

/// Environment variable naming the backend endpoint.
pub const ENDPOINT_ENV: &str = "ADMITPIX_ENDPOINT";

/// Client for the admissions backend with an injected endpoint address.
#[derive(Clone, Debug)]
pub struct SubmissionClient {
    client: Client,
    endpoint: String,
}

impl SubmissionClient {
    /// Build a client for the given backend endpoint.
    ///
    /// Placeholder values are rejected up front so a misdeployed
    /// configuration fails at startup rather than at first submission.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() || endpoint.starts_with("PASTE_") {
            bail!("Backend endpoint is not configured. Please contact support.");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Create a client from the `ADMITPIX_ENDPOINT` environment variable.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .with_context(|| format!("Missing backend endpoint. Set {ENDPOINT_ENV}"))?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET with query parameters, deserializing the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(query)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Backend request failed with status {}: {}", status, error_text);
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse backend response")
    }

    /// POST a JSON body, deserializing the JSON response.
    async fn post_json<T: DeserializeOwned>(&self, body: &Value) -> Result<T> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Backend request failed with status {}: {}", status, error_text);
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse backend response")
    }

    /// Fetch the list of courses open for admission.
    pub async fn course_list(&self) -> Result<Vec<Course>> {
        debug!("Fetching course list");
        let response: CourseListResponse = self.get_json(&[("action", "getCourseList")]).await?;

        if response.status != "success" {
            bail!(response
                .message
                .unwrap_or_else(|| "No courses found.".to_string()));
        }
        Ok(response.data)
    }

    /// Look up a student's course and fee balance by ID.
    pub async fn student_details(&self, student_id: &str) -> Result<StudentDetails> {
        debug!(student_id, "Fetching student details");
        let response: StudentDetailsResponse = self
            .get_json(&[("action", "getStudentDetails"), ("id", student_id)])
            .await?;

        if response.status != "success" {
            bail!(response
                .message
                .unwrap_or_else(|| "Student not found.".to_string()));
        }
        response
            .details
            .context("Backend response is missing student fields")
    }

    /// Submit a completed admission form.
    ///
    /// The compressed photo travels under `photoFile`; a successful
    /// response carries the newly assigned student ID.
    pub async fn submit_admission(&self, form: &AdmissionForm) -> Result<SubmitResponse> {
        let body = request_body(
            "submitAdmission",
            &form.fields,
            ("photoFile", serde_json::to_value(&form.photo)?),
        );

        let response: SubmitResponse = self.post_json(&body).await?;
        if response.status != "success" {
            let message = response
                .message
                .unwrap_or_else(|| "An unknown error occurred.".to_string());
            warn!(%message, "Admission submission rejected");
            bail!(message);
        }

        info!(student_id = ?response.student_id, "Admission submitted");
        Ok(response)
    }

    /// Submit a payment confirmation with its receipt attachment.
    pub async fn submit_payment(&self, form: &PaymentForm) -> Result<SubmitResponse> {
        let body = request_body(
            "submitPayment",
            &form.fields,
            ("receiptFile", serde_json::to_value(&form.receipt)?),
        );

        let response: SubmitResponse = self.post_json(&body).await?;
        if response.status != "success" {
            let message = response
                .message
                .unwrap_or_else(|| "An unknown error occurred.".to_string());
            warn!(%message, "Payment submission rejected");
            bail!(message);
        }

        info!("Payment confirmation submitted");
        Ok(response)
    }
}

/// Assemble a request body: form fields, the `action` tag, one attachment.
///
/// The action and attachment are inserted last so a stray form field can
/// never override them.
fn request_body(action: &str, fields: &Map<String, Value>, attachment: (&str, Value)) -> Value {
    let mut body = fields.clone();
    body.insert("action".to_string(), Value::String(action.to_string()));
    body.insert(attachment.0.to_string(), attachment.1);
    Value::Object(body)
}

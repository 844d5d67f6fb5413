//! Wire types for the admissions backend.
//!
//! Field names mirror the backend's JSON exactly; the backend owns the
//! schema and this crate only relays it.

use admitpix_core::{FilePayload, PhotoPayload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A course open for admission, as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "Total_Due_Amount")]
    pub total_due: f64,
}

/// Envelope for the course list request.
#[derive(Debug, Deserialize)]
pub(crate) struct CourseListResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Course>,
}

/// A student's course and fee balance, from the details lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentDetails {
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "totalDue")]
    pub total_due: f64,
    #[serde(rename = "balanceDue")]
    pub balance_due: f64,
}

/// Envelope for the details lookup; the student fields arrive inline
/// beside `status`.
#[derive(Debug, Deserialize)]
pub(crate) struct StudentDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub details: Option<StudentDetails>,
}

/// Backend acknowledgement for a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Assigned by the backend on successful admission.
    #[serde(rename = "studentID", default)]
    pub student_id: Option<String>,
}

/// Admission form data plus the compressed photo payload.
///
/// `fields` holds the free-form entries of the HTML form; the photo is
/// attached under `photoFile` at submission time.
#[derive(Debug, Clone)]
pub struct AdmissionForm {
    pub fields: Map<String, Value>,
    pub photo: PhotoPayload,
}

impl AdmissionForm {
    pub fn new(photo: PhotoPayload) -> Self {
        Self {
            fields: Map::new(),
            photo,
        }
    }

    /// Add a form field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Payment confirmation form data plus the raw receipt attachment.
///
/// Receipts are forwarded untouched (original type and name), attached
/// under `receiptFile`.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    pub fields: Map<String, Value>,
    pub receipt: FilePayload,
}

impl PaymentForm {
    pub fn new(receipt: FilePayload) -> Self {
        Self {
            fields: Map::new(),
            receipt,
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_parses_backend_keys() {
        let course: Course =
            serde_json::from_str(r#"{"Class": "Grade 5", "Total_Due_Amount": 1500.5}"#).unwrap();
        assert_eq!(course.class, "Grade 5");
        assert!((course.total_due - 1500.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_course_list_envelope() {
        let response: CourseListResponse = serde_json::from_str(
            r#"{"status": "success", "data": [{"Class": "Grade 1", "Total_Due_Amount": 900.0}]}"#,
        )
        .unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.data.len(), 1);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_course_list_error_envelope_has_no_data() {
        let response: CourseListResponse =
            serde_json::from_str(r#"{"status": "error", "message": "No courses found."}"#).unwrap();
        assert_eq!(response.status, "error");
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_student_details_inline_fields() {
        let response: StudentDetailsResponse = serde_json::from_str(
            r#"{
                "status": "success",
                "studentName": "Asha Rao",
                "courseName": "Grade 7",
                "totalDue": 12000.0,
                "balanceDue": 4000.0
            }"#,
        )
        .unwrap();
        let details = response.details.unwrap();
        assert_eq!(details.student_name, "Asha Rao");
        assert_eq!(details.course_name, "Grade 7");
        assert!((details.balance_due - 4000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_student_details_error_has_no_fields() {
        let response: StudentDetailsResponse =
            serde_json::from_str(r#"{"status": "error", "message": "Student not found."}"#).unwrap();
        assert!(response.details.is_none());
        assert_eq!(response.message.as_deref(), Some("Student not found."));
    }

    #[test]
    fn test_submit_response_with_student_id() {
        let response: SubmitResponse =
            serde_json::from_str(r#"{"status": "success", "studentID": "STU-2026-014"}"#).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.student_id.as_deref(), Some("STU-2026-014"));
    }

    #[test]
    fn test_admission_form_builder() {
        let photo = PhotoPayload {
            base64: "QUJD".to_string(),
            mime: "image/jpeg".to_string(),
            name: "photo.jpg".to_string(),
        };
        let form = AdmissionForm::new(photo)
            .field("studentName", "Asha Rao")
            .field("grade", "Grade 7");

        assert_eq!(form.fields["studentName"], "Asha Rao");
        assert_eq!(form.fields["grade"], "Grade 7");
        assert_eq!(form.photo.name, "photo.jpg");
    }
}

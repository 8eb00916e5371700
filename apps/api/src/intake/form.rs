//! Raw form submission, as the browser (or an API client) sent it.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::debug;

use crate::errors::AppError;
use crate::models::lead::{
    Confidence, CurrentRole, FormOption, Internship, LeadProfile, PainPoint, ResumeUpload,
    TargetRole, ROLE_OTHERS_NOT_APPLICABLE,
};

/// Multipart part name carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

pub const UPLOAD_TOO_LARGE_WARNING: &str =
    "Your upload is too large. Please attach a smaller PDF resume.";

/// Every profile field as submitted, plus the optional resume.
/// Kept as strings so a blocked submission can be re-rendered as typed.
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub college: String,
    pub branch: String,
    pub current_role: String,
    pub target_role: String,
    pub role_others: String,
    pub confidence: String,
    pub internship: String,
    pub pain_point: String,
    pub pain_explain: String,
    pub resume: Option<ResumeUpload>,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            college: String::new(),
            branch: String::new(),
            current_role: CurrentRole::default().label().to_string(),
            target_role: TargetRole::default().label().to_string(),
            role_others: String::new(),
            confidence: Confidence::default().to_string(),
            internship: Internship::default().label().to_string(),
            pain_point: PainPoint::default().label().to_string(),
            pain_explain: String::new(),
            resume: None,
        }
    }
}

impl LeadForm {
    /// Assigns a text part by its multipart name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            "college" => &mut self.college,
            "branch" => &mut self.branch,
            "current_role" => &mut self.current_role,
            "target_role" => &mut self.target_role,
            "role_others" => &mut self.role_others,
            "confidence" => &mut self.confidence,
            "internship" => &mut self.internship,
            "pain_point" => &mut self.pain_point,
            "pain_explain" => &mut self.pain_explain,
            other => {
                debug!(field = other, "Ignoring unknown form field");
                return;
            }
        };
        *slot = value;
    }

    /// Attaches the resume. Zero-byte uploads (an untouched file input) count as absent.
    pub fn set_resume(&mut self, upload: ResumeUpload) {
        self.resume = if upload.is_empty() { None } else { Some(upload) };
    }

    pub fn target_role(&self) -> TargetRole {
        TargetRole::from_label(&self.target_role)
    }

    /// Builds the typed profile. `role_others` is only kept when the target role is `Other`.
    pub fn to_profile(&self) -> LeadProfile {
        let target_role = self.target_role();
        let role_others = if target_role == TargetRole::Other {
            self.role_others.trim().to_string()
        } else {
            ROLE_OTHERS_NOT_APPLICABLE.to_string()
        };

        LeadProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            whatsapp: self.whatsapp.trim().to_string(),
            college: self.college.trim().to_string(),
            branch: self.branch.trim().to_string(),
            current_role: CurrentRole::from_label(&self.current_role),
            target_role,
            role_others,
            confidence: Confidence::parse(&self.confidence),
            internship: Internship::from_label(&self.internship),
            pain_point: PainPoint::from_label(&self.pain_point),
            pain_explain: self.pain_explain.trim().to_string(),
        }
    }
}

/// Reads every multipart part into a `LeadForm`.
pub async fn read_multipart(mut multipart: Multipart) -> Result<LeadForm, AppError> {
    let mut form = LeadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed form data", e))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| multipart_error("Could not read resume upload", e))?;
            debug!(file_name = %file_name, size = bytes.len(), "Received resume upload");
            form.set_resume(ResumeUpload { file_name, bytes });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| multipart_error(&format!("Could not read field '{name}'"), e))?;
            form.set_field(&name, value);
        }
    }

    Ok(form)
}

/// Body-limit overruns become `PayloadTooLarge`; anything else is a malformed request.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(UPLOAD_TOO_LARGE_WARNING.to_string())
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_default_form_preselects_first_options() {
        let form = LeadForm::default();
        assert_eq!(form.current_role, "SDE");
        assert_eq!(form.target_role, "SDE");
        assert_eq!(form.confidence, "4");
        assert_eq!(form.internship, "Yes");
        assert_eq!(form.pain_point, "Resume Shortlisting");
        assert!(form.resume.is_none());
    }

    #[test]
    fn test_set_field_ignores_unknown_names() {
        let mut form = LeadForm::default();
        form.set_field("email", "a@b.co".to_string());
        form.set_field("favourite_colour", "teal".to_string());
        assert_eq!(form.email, "a@b.co");
    }

    #[test]
    fn test_empty_upload_counts_as_absent() {
        let mut form = LeadForm::default();
        form.set_resume(ResumeUpload {
            file_name: String::new(),
            bytes: Bytes::new(),
        });
        assert!(form.resume.is_none());

        form.set_resume(ResumeUpload {
            file_name: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4"),
        });
        assert!(form.resume.is_some());
    }

    #[test]
    fn test_role_others_is_na_unless_target_is_other() {
        let mut form = LeadForm::default();
        form.set_field("role_others", "Quant Researcher".to_string());
        form.set_field("target_role", "Analyst".to_string());
        assert_eq!(form.to_profile().role_others, "NA");

        form.set_field("target_role", "Other".to_string());
        let profile = form.to_profile();
        assert_eq!(profile.target_role, TargetRole::Other);
        assert_eq!(profile.role_others, "Quant Researcher");
    }

    #[test]
    fn test_to_profile_trims_and_parses() {
        let mut form = LeadForm::default();
        form.set_field("email", "  rahul@example.com ".to_string());
        form.set_field("confidence", "2".to_string());
        form.set_field("pain_point", "Guidance / Roadmap".to_string());
        form.set_field("internship", "No".to_string());

        let profile = form.to_profile();
        assert_eq!(profile.email, "rahul@example.com");
        assert_eq!(profile.confidence.value(), 2);
        assert_eq!(profile.pain_point, PainPoint::Guidance);
        assert_eq!(profile.internship, Internship::No);
    }
}

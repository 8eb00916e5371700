use thiserror::Error;

use crate::intake::form::LeadForm;
use crate::models::lead::{LeadProfile, ResumeUpload};

/// Shown when a submission is blocked.
pub const MISSING_FIELDS_WARNING: &str = "Please provide at least your Email and Resume.";

/// Which of the two required inputs were absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", MISSING_FIELDS_WARNING)]
pub struct MissingFields {
    pub email: bool,
    pub resume: bool,
}

/// A submission that carries both an email and a resume.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub profile: LeadProfile,
    pub resume: ResumeUpload,
}

/// Blocks unless email (trimmed) is non-empty and a non-empty resume is attached.
/// No other field affects the outcome.
pub fn validate_submission(form: &LeadForm) -> Result<ValidatedSubmission, MissingFields> {
    let resume = form.resume.as_ref().filter(|r| !r.is_empty());
    let missing = MissingFields {
        email: form.email.trim().is_empty(),
        resume: resume.is_none(),
    };

    match resume {
        Some(resume) if !missing.email => Ok(ValidatedSubmission {
            profile: form.to_profile(),
            resume: resume.clone(),
        }),
        _ => Err(missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn pdf_upload() -> ResumeUpload {
        ResumeUpload {
            file_name: "resume.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.7\n"),
        }
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::default();
        for (k, v) in [
            ("name", "Rahul Kumar"),
            ("whatsapp", "9876543210"),
            ("college", "IIT Roorkee"),
            ("branch", "ME"),
            ("target_role", "Other"),
            ("role_others", "Quant"),
            ("pain_explain", "No callbacks"),
        ] {
            form.set_field(k, v.to_string());
        }
        form
    }

    #[test]
    fn test_passes_with_email_and_resume() {
        let mut form = LeadForm::default();
        form.set_field("email", "rahul@example.com".to_string());
        form.resume = Some(pdf_upload());

        let submission = validate_submission(&form).unwrap();
        assert_eq!(submission.profile.email, "rahul@example.com");
        assert_eq!(submission.resume.file_name, "resume.pdf");
    }

    #[test]
    fn test_blocks_without_email_or_resume_for_any_other_fields() {
        for base in [LeadForm::default(), filled_form()] {
            let cases = [
                (String::new(), None),
                ("   ".to_string(), Some(pdf_upload())),
                ("rahul@example.com".to_string(), None),
                (String::new(), Some(pdf_upload())),
            ];
            for (email, resume) in cases {
                let mut form = base.clone();
                form.email = email.clone();
                form.resume = resume.clone();

                let missing = validate_submission(&form).unwrap_err();
                assert_eq!(missing.email, email.trim().is_empty());
                assert_eq!(missing.resume, resume.is_none());
            }
        }
    }

    #[test]
    fn test_blocks_empty_resume_bytes() {
        let mut form = filled_form();
        form.email = "rahul@example.com".to_string();
        form.resume = Some(ResumeUpload {
            file_name: "empty.pdf".to_string(),
            bytes: Bytes::new(),
        });
        let missing = validate_submission(&form).unwrap_err();
        assert!(missing.resume);
        assert!(!missing.email);
    }

    #[test]
    fn test_missing_fields_message() {
        let missing = MissingFields {
            email: true,
            resume: false,
        };
        assert_eq!(missing.to_string(), MISSING_FIELDS_WARNING);
    }
}

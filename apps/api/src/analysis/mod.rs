//! Analysis pipeline: relay lead → extract resume text → compose prompt → generate.
//!
//! The lead relay never blocks the analysis; its outcome is only reported.
//! Extraction and generation failures end the run with an `Error: ...` string.

pub mod handlers;
pub mod prompts;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::prompts::compose_prompt;
use crate::extraction::{ExtractError, ResumeReader};
use crate::intake::validation::ValidatedSubmission;
use crate::leads::LeadSink;
use crate::llm_client::{LlmError, TextGenerator};

pub const LEAD_SAVED_MESSAGE: &str = "Profile Saved!";
pub const LEAD_FAILED_MESSAGE: &str = "Could not save data, but proceeding with AI analysis.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// The three external collaborators of a run.
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    pub leads: &'a dyn LeadSink,
    pub reader: &'a dyn ResumeReader,
    pub llm: &'a dyn TextGenerator,
}

/// Result of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub submission_id: Uuid,
    pub lead_saved: bool,
    /// Markdown report, or the error text shown to the user.
    pub report: Result<String, String>,
}

impl AnalysisOutcome {
    pub fn lead_message(&self) -> &'static str {
        if self.lead_saved {
            LEAD_SAVED_MESSAGE
        } else {
            LEAD_FAILED_MESSAGE
        }
    }
}

pub async fn run_analysis(
    pipeline: Pipeline<'_>,
    submission: ValidatedSubmission,
) -> AnalysisOutcome {
    let submission_id = Uuid::new_v4();
    let span = info_span!("analysis", %submission_id);

    async move {
        let lead_saved = match pipeline.leads.save(&submission.profile).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Lead relay failed: {e}");
                false
            }
        };

        let report = analyze(pipeline, submission)
            .await
            .map_err(|e| format!("Error: {e}"));
        match &report {
            Ok(text) => info!(chars = text.len(), "Analysis complete"),
            Err(e) => warn!("{e}"),
        }

        AnalysisOutcome {
            submission_id,
            lead_saved,
            report,
        }
    }
    .instrument(span)
    .await
}

async fn analyze(
    pipeline: Pipeline<'_>,
    submission: ValidatedSubmission,
) -> Result<String, AnalysisError> {
    let resume_text = pipeline.reader.read(submission.resume.bytes).await?;
    info!(
        file_name = %submission.resume.file_name,
        chars = resume_text.len(),
        "Resume text extracted"
    );

    let prompt = compose_prompt(&submission.profile, &resume_text);
    Ok(pipeline.llm.generate(&prompt).await?)
}


#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::test_support::{CannedGenerator, PagedReader, RecordingSink};
    use super::*;
    use crate::extraction::PdfResumeReader;
    use crate::models::lead::{LeadProfile, ResumeUpload};

    const REPORT: &str = "## 🎯 Market Readiness Score: 64/100";

    fn submission(bytes: &'static [u8]) -> ValidatedSubmission {
        ValidatedSubmission {
            profile: LeadProfile {
                email: "rahul@example.com".to_string(),
                college: "IIT Roorkee".to_string(),
                ..Default::default()
            },
            resume: ResumeUpload {
                file_name: "resume.pdf".to_string(),
                bytes: Bytes::from_static(bytes),
            },
        }
    }

    #[tokio::test]
    async fn test_successful_run_returns_model_text_verbatim() {
        let sink = RecordingSink::default();
        let reader = PagedReader(vec!["Page one. ", "Page two."]);
        let llm = CannedGenerator::replying(REPORT);
        let pipeline = Pipeline {
            leads: &sink,
            reader: &reader,
            llm: &llm,
        };

        let outcome = run_analysis(pipeline, submission(b"%PDF-1.7")).await;

        assert!(outcome.lead_saved);
        assert_eq!(outcome.lead_message(), LEAD_SAVED_MESSAGE);
        assert_eq!(outcome.report.as_deref(), Ok(REPORT));
        assert_eq!(sink.saved.lock().unwrap()[0].email, "rahul@example.com");

        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("Page one. Page two."));
        assert!(prompts[0].contains("IIT Roorkee"));
    }

    #[tokio::test]
    async fn test_failed_lead_relay_does_not_block_generation() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let reader = PagedReader(vec!["Resume"]);
        let llm = CannedGenerator::replying(REPORT);
        let pipeline = Pipeline {
            leads: &sink,
            reader: &reader,
            llm: &llm,
        };

        let outcome = run_analysis(pipeline, submission(b"%PDF-1.7")).await;

        assert!(!outcome.lead_saved);
        assert_eq!(outcome.lead_message(), LEAD_FAILED_MESSAGE);
        assert_eq!(llm.prompts.lock().unwrap().len(), 1);
        assert_eq!(outcome.report.as_deref(), Ok(REPORT));
    }

    #[tokio::test]
    async fn test_generation_error_surfaces_message() {
        let sink = RecordingSink::default();
        let reader = PagedReader(vec!["Resume"]);
        let llm = CannedGenerator::default();
        let pipeline = Pipeline {
            leads: &sink,
            reader: &reader,
            llm: &llm,
        };

        let outcome = run_analysis(pipeline, submission(b"%PDF-1.7")).await;

        assert_eq!(
            outcome.report.unwrap_err(),
            "Error: API error (status 429): Resource has been exhausted"
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_skips_generation() {
        let sink = RecordingSink::default();
        let llm = CannedGenerator::replying(REPORT);
        let pipeline = Pipeline {
            leads: &sink,
            reader: &PdfResumeReader,
            llm: &llm,
        };

        let outcome = run_analysis(pipeline, submission(b"plain text")).await;

        assert_eq!(outcome.report.unwrap_err(), "Error: Uploaded file is not a PDF");
        assert!(outcome.lead_saved);
        assert!(llm.prompts.lock().unwrap().is_empty());
    }
}

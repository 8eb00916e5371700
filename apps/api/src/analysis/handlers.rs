//! Axum route handlers for the scorer page and the JSON analysis API.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::run_analysis;
use crate::errors::AppError;
use crate::intake::form::{read_multipart, LeadForm};
use crate::intake::validation::validate_submission;
use crate::render::{IndexTemplate, CTA_URL};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub submission_id: Uuid,
    pub lead_saved: bool,
    pub analysis: String,
    pub cta_url: &'static str,
    pub generated_at: DateTime<Utc>,
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexTemplate::new(LeadForm::default()).render()?))
}

/// POST /analyze
///
/// Always answers with the page. A blocked or oversized submission only carries
/// the warning; otherwise the lead status and the report (or its error) are shown inline.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Html<String>), AppError> {
    let form = match read_multipart(multipart).await {
        Ok(form) => form,
        Err(AppError::PayloadTooLarge(warning)) => {
            info!("Submission rejected: upload over the body limit");
            let page = IndexTemplate::new(LeadForm::default()).with_warning(warning);
            return Ok((StatusCode::PAYLOAD_TOO_LARGE, Html(page.render()?)));
        }
        Err(e) => return Err(e),
    };

    let page = match validate_submission(&form) {
        Err(missing) => {
            info!(
                missing_email = missing.email,
                missing_resume = missing.resume,
                "Submission blocked"
            );
            IndexTemplate::new(form).with_warning(missing.to_string())
        }
        Ok(submission) => {
            let outcome = run_analysis(state.pipeline(), submission).await;
            IndexTemplate::new(form).with_outcome(&outcome)
        }
    };

    Ok((StatusCode::OK, Html(page.render()?)))
}

/// POST /api/v1/analyze
///
/// Same pipeline for programmatic clients.
pub async fn handle_analyze_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_multipart(multipart).await?;
    let submission =
        validate_submission(&form).map_err(|missing| AppError::Validation(missing.to_string()))?;

    let outcome = run_analysis(state.pipeline(), submission).await;
    let analysis = outcome.report.map_err(AppError::Analysis)?;

    Ok(Json(AnalyzeResponse {
        submission_id: outcome.submission_id,
        lead_saved: outcome.lead_saved,
        analysis,
        cta_url: CTA_URL,
        generated_at: Utc::now(),
    }))
}

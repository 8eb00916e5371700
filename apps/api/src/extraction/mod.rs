//! Resume text extraction.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Uploaded file is not a PDF")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Failed(String),
}

/// Extracts plain text from a PDF, page by page, concatenated in page order.
///
/// Runs on the blocking pool; a panic inside the PDF parser is reported as
/// `ExtractError::Failed` instead of taking the request down.
pub async fn extract_resume_text(bytes: Bytes) -> Result<String, ExtractError> {
    if !bytes.starts_with(PDF_SIGNATURE) {
        return Err(ExtractError::NotPdf);
    }

    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractError::Failed(e.to_string()))
    })
    .await
    .map_err(|e| ExtractError::Failed(format!("PDF parser aborted: {e}")))??;

    debug!(pages = pages.len(), "Extracted resume text");
    Ok(concat_pages(pages))
}

/// Turns an uploaded resume into plain text. Carried in `AppState` as `Arc<dyn ResumeReader>`.
#[async_trait]
pub trait ResumeReader: Send + Sync {
    async fn read(&self, bytes: Bytes) -> Result<String, ExtractError>;
}

/// Reads PDF resumes with `pdf-extract`.
pub struct PdfResumeReader;

#[async_trait]
impl ResumeReader for PdfResumeReader {
    async fn read(&self, bytes: Bytes) -> Result<String, ExtractError> {
        extract_resume_text(bytes).await
    }
}

/// Joins page texts in order with no separator.
pub fn concat_pages<I>(pages: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref());
        text
    })
}

use std::sync::Arc;

use crate::analysis::Pipeline;
use crate::config::Config;
use crate::extraction::ResumeReader;
use crate::leads::LeadSink;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Lead relay. Default: GoogleFormSink.
    pub leads: Arc<dyn LeadSink>,
    /// Resume reader. Default: PdfResumeReader.
    pub reader: Arc<dyn ResumeReader>,
    /// Generative-text backend. Default: LlmClient (Gemini).
    pub llm: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline {
            leads: self.leads.as_ref(),
            reader: self.reader.as_ref(),
            llm: self.llm.as_ref(),
        }
    }
}

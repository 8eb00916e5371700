//! HTML rendering for the scorer page.

pub mod markdown;

use askama::Template;

use crate::analysis::AnalysisOutcome;
use crate::intake::form::LeadForm;
use crate::models::lead::{Confidence, CurrentRole, FormOption, Internship, PainPoint, TargetRole};

/// Destination of the call-to-action shown under every report.
pub const CTA_URL: &str = "https://foreteach.com";

/// One `<option>` in a dropdown or radio group.
pub struct SelectOption {
    pub label: &'static str,
    pub selected: bool,
}

fn options<T: FormOption>(selected: T) -> Vec<SelectOption> {
    T::ALL
        .iter()
        .map(|&opt| SelectOption {
            label: opt.label(),
            selected: opt == selected,
        })
        .collect()
}

pub struct LeadStatus {
    pub saved: bool,
    pub message: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: LeadForm,
    pub current_roles: Vec<SelectOption>,
    pub target_roles: Vec<SelectOption>,
    pub internships: Vec<SelectOption>,
    pub pain_points: Vec<SelectOption>,
    pub confidence: u8,
    pub confidence_min: u8,
    pub confidence_max: u8,
    pub show_role_others: bool,
    pub warning: Option<String>,
    pub lead_status: Option<LeadStatus>,
    pub error: Option<String>,
    pub report_html: Option<String>,
    pub cta_url: &'static str,
}

impl IndexTemplate {
    /// The page with `form` prefilled and nothing else to report.
    pub fn new(form: LeadForm) -> Self {
        let target_role = form.target_role();
        Self {
            current_roles: options(CurrentRole::from_label(&form.current_role)),
            target_roles: options(target_role),
            internships: options(Internship::from_label(&form.internship)),
            pain_points: options(PainPoint::from_label(&form.pain_point)),
            confidence: Confidence::parse(&form.confidence).value(),
            confidence_min: Confidence::MIN,
            confidence_max: Confidence::MAX,
            show_role_others: target_role == TargetRole::Other,
            warning: None,
            lead_status: None,
            error: None,
            report_html: None,
            cta_url: CTA_URL,
            form,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_outcome(mut self, outcome: &AnalysisOutcome) -> Self {
        self.lead_status = Some(LeadStatus {
            saved: outcome.lead_saved,
            message: outcome.lead_message(),
        });
        match &outcome.report {
            Ok(markdown) => self.report_html = Some(markdown::markdown_to_html(markdown)),
            Err(e) => self.error = Some(e.clone()),
        }
        self
    }
}

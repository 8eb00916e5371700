//! Lead relay. Forwards the profile to the Google Form that feeds the lead spreadsheet.
//!
//! The relay is fire-and-forget from the user's point of view: callers log the
//! outcome and carry on with analysis either way.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::lead::LeadProfile;

/// Opaque Google Form entry ids, keyed by lead field.
pub const ENTRY_MAPPING: &[(&str, &str)] = &[
    ("Name", "entry.2050712578"),
    ("Email", "entry.1060699408"),
    ("Whatsapp", "entry.753036163"),
    ("College", "entry.1025328017"),
    ("Branch", "entry.393812671"),
    ("Current_Role", "entry.301448048"),
    ("Target_Role", "entry.522155613"),
    ("Role_Others", "entry.90157928"),
    ("Confidence", "entry.1985230001"),
    ("Internship", "entry.950348418"),
    ("Pain_Point", "entry.1499744374"),
    ("Pain_Explain", "entry.289520657"),
];

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lead store rejected submission (status {0})")]
    Rejected(u16),

    #[error("No form entry mapped for field '{0}'")]
    UnmappedField(&'static str),
}

/// Somewhere a lead can be saved. Carried in `AppState` as `Arc<dyn LeadSink>`.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn save(&self, profile: &LeadProfile) -> Result<(), LeadError>;
}

/// Posts leads to a Google Form `formResponse` endpoint.
#[derive(Clone)]
pub struct GoogleFormSink {
    client: Client,
    form_url: String,
}

impl GoogleFormSink {
    pub fn new(form_url: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(15)).build()?,
            form_url,
        })
    }
}

/// Maps profile fields onto their form entry ids, preserving column order.
pub fn form_payload(profile: &LeadProfile) -> Result<Vec<(&'static str, String)>, LeadError> {
    profile
        .form_entries()
        .into_iter()
        .map(|(key, value)| {
            ENTRY_MAPPING
                .iter()
                .find(|(field, _)| *field == key)
                .map(|(_, entry)| (*entry, value))
                .ok_or(LeadError::UnmappedField(key))
        })
        .collect()
}

#[async_trait]
impl LeadSink for GoogleFormSink {
    async fn save(&self, profile: &LeadProfile) -> Result<(), LeadError> {
        let payload = form_payload(profile)?;
        debug!(fields = payload.len(), "Posting lead to form");

        let response = self
            .client
            .post(&self.form_url)
            .form(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadError::Rejected(status.as_u16()));
        }

        info!(status = status.as_u16(), "Lead saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::{Confidence, TargetRole};

    #[test]
    fn test_every_profile_field_has_an_entry() {
        let payload = form_payload(&LeadProfile::default()).unwrap();
        assert_eq!(payload.len(), ENTRY_MAPPING.len());
    }

    #[test]
    fn test_payload_uses_entry_ids_in_column_order() {
        let profile = LeadProfile {
            name: "Rahul Kumar".to_string(),
            email: "rahul@example.com".to_string(),
            target_role: TargetRole::ProductManager,
            confidence: Confidence::new(5),
            ..Default::default()
        };
        let payload = form_payload(&profile).unwrap();

        assert_eq!(payload[0], ("entry.2050712578", "Rahul Kumar".to_string()));
        assert_eq!(
            payload[1],
            ("entry.1060699408", "rahul@example.com".to_string())
        );
        assert_eq!(
            payload[6],
            ("entry.522155613", "Product Manager".to_string())
        );
        assert_eq!(payload[8], ("entry.1985230001", "5".to_string()));
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let mut ids: Vec<_> = ENTRY_MAPPING.iter().map(|(_, id)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ENTRY_MAPPING.len());
    }
}

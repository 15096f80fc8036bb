//! Learner profile - the typed record built from a completed draft

use anyhow::{anyhow, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::onboarding::flow::{self, field};
use crate::wizard::field::Draft;

/// Answers collected on the personalization branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personalization {
    pub motivation: String,
    pub timeline: String,
    pub certifications: bool,
    pub sources: Vec<String>,
}

/// The completed onboarding record, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub domains: Vec<String>,
    pub weekly_hours: u32,
    pub learning_methods: Vec<String>,
    pub proficiency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Personalization>,
    /// RFC 3339 submission timestamp
    pub submitted_at: String,
}

impl LearnerProfile {
    /// Build a profile from a draft snapshot that already passed step
    /// validation.
    ///
    /// Validation belongs to the wizard; this conversion still refuses
    /// drafts missing required answers so it cannot silently produce a
    /// half-empty profile when called on its own.
    pub fn from_draft(draft: &Draft) -> Result<Self> {
        let text = |name: &str| -> Result<String> {
            draft
                .get(name)
                .and_then(|v| v.as_text())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| anyhow!("draft is missing '{}'", name))
        };
        let tags = |name: &str| -> Vec<String> {
            draft
                .get(name)
                .and_then(|v| v.as_tags())
                .map(|t| t.to_vec())
                .unwrap_or_default()
        };

        let domains = tags(field::DOMAINS);
        if domains.is_empty() {
            return Err(anyhow!("draft is missing '{}'", field::DOMAINS));
        }
        let learning_methods = tags(field::METHODS);
        if learning_methods.is_empty() {
            return Err(anyhow!("draft is missing '{}'", field::METHODS));
        }

        let weekly_hours: u32 = text(field::WEEKLY_HOURS)?
            .parse()
            .map_err(|_| anyhow!("'{}' is not a whole number", field::WEEKLY_HOURS))?;

        let last_name = draft
            .get(field::LAST_NAME)
            .and_then(|v| v.as_text())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let personalization = if flow::personalize_requested(draft) {
            Some(Personalization {
                motivation: text(field::MOTIVATION)?,
                timeline: text(field::TIMELINE)?,
                certifications: draft
                    .get(field::CERTIFICATIONS)
                    .and_then(|v| v.as_flag())
                    .unwrap_or(false),
                sources: tags(field::SOURCES),
            })
        } else {
            None
        };

        Ok(Self {
            first_name: text(field::FIRST_NAME)?,
            last_name,
            domains,
            weekly_hours,
            learning_methods,
            proficiency: text(field::PROFICIENCY)?,
            personalization,
            submitted_at: Utc::now().to_rfc3339(),
        })
    }

    /// Display name: "First Last" or just the first name.
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

//! Draft record types
//!
//! A draft is the in-progress answer set accumulated while the user walks
//! the wizard. Values are deliberately loose: everything a step can collect
//! is a string, a boolean, or an ordered list of strings. Typed
//! interpretation (number ranges, option membership) happens at validation
//! time against the step schema, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answered field.
///
/// Serializes untagged, so a saved draft reads as plain JSON:
/// `{"first_name": "Ada", "certifications": true, "domains": ["DSA"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Yes/no answer (checkboxes, opt-ins)
    Flag(bool),
    /// Free text or a single selected option
    Text(String),
    /// Multi-select answer; insertion order is preserved
    Tags(Vec<String>),
}

impl FieldValue {
    /// The text content, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The tag list, if this is a `Tags` value.
    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            FieldValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    /// The boolean, if this is a `Flag` value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether the value counts as unanswered for validation purposes.
    ///
    /// A flag is never blank - `false` is an answer.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Flag(_) => false,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Tags(tags) => tags.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// The in-progress record being built across wizard steps.
///
/// Keyed by field name. A `BTreeMap` keeps saved drafts and summary
/// screens deterministic.
pub type Draft = BTreeMap<String, FieldValue>;

//! Step and field schemas
//!
//! A wizard is described entirely as data: an ordered sequence of
//! `StepDefinition`s, each carrying the fields it collects. The renderer
//! dispatches on `FieldKind`; the controller validates drafts against the
//! same schema. This replaces per-screen control flow with one generic
//! interpretation of the step list.

use crate::wizard::field::{Draft, FieldValue};

/// What kind of input a field collects and how it validates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Integer entered as text, validated into an inclusive range
    Number { min: u32, max: u32 },
    /// Yes/no answer
    Flag,
    /// Exactly one of the listed options
    Choice { options: Vec<String> },
    /// Any subset of the listed options, order of selection preserved
    MultiSelect { options: Vec<String> },
}

impl FieldKind {
    /// Convenience constructor for `Choice` from string slices.
    pub fn choice(options: &[&str]) -> Self {
        FieldKind::Choice {
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Convenience constructor for `MultiSelect` from string slices.
    pub fn multi_select(options: &[&str]) -> Self {
        FieldKind::MultiSelect {
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One field within a step.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Draft key this field writes to
    pub name: String,
    /// Label shown next to the input
    pub label: String,
    pub kind: FieldKind,
    /// Required fields gate forward navigation; optional fields only
    /// validate when answered
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: true,
        }
    }

    pub fn optional(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
        }
    }

    /// Validate a draft value against this field.
    ///
    /// `None` means the field is unanswered. Optionality only excuses
    /// absence - an answered optional field must still be well-formed.
    pub fn validate(&self, value: Option<&FieldValue>) -> Result<(), String> {
        let value = match value {
            Some(v) if !v.is_blank() => v,
            _ => {
                return if self.required {
                    Err(format!("{} is required", self.label))
                } else {
                    Ok(())
                };
            }
        };

        match &self.kind {
            FieldKind::Text => match value {
                FieldValue::Text(_) => Ok(()),
                _ => Err(format!("{} must be text", self.label)),
            },
            FieldKind::Number { min, max } => {
                let text = value
                    .as_text()
                    .ok_or_else(|| format!("{} must be a number", self.label))?;
                match text.trim().parse::<u32>() {
                    Ok(n) if (*min..=*max).contains(&n) => Ok(()),
                    Ok(n) => Err(format!(
                        "{} must be between {} and {}, got {}",
                        self.label, min, max, n
                    )),
                    Err(_) => Err(format!("{} must be a whole number", self.label)),
                }
            }
            FieldKind::Flag => match value {
                FieldValue::Flag(_) => Ok(()),
                _ => Err(format!("{} must be yes or no", self.label)),
            },
            FieldKind::Choice { options } => {
                let text = value
                    .as_text()
                    .ok_or_else(|| format!("{} must be a single selection", self.label))?;
                if options.iter().any(|o| o == text) {
                    Ok(())
                } else {
                    Err(format!(
                        "{} must be one of: {}",
                        self.label,
                        options.join(", ")
                    ))
                }
            }
            FieldKind::MultiSelect { options } => {
                let tags = value
                    .as_tags()
                    .ok_or_else(|| format!("{} must be a list of selections", self.label))?;
                match tags.iter().find(|t| !options.iter().any(|o| &o == t)) {
                    Some(unknown) => Err(format!(
                        "{} has an unknown selection '{}'",
                        self.label, unknown
                    )),
                    None => Ok(()),
                }
            }
        }
    }
}

/// One screen of the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    /// Stable identifier, used by renderer dispatch and reports
    pub id: String,
    /// Display title, shown in the frame header
    pub title: String,
    /// Fields collected on this screen; may be empty (e.g. a summary)
    pub fields: Vec<FieldSpec>,
}

impl StepDefinition {
    pub fn new(id: &str, title: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            fields,
        }
    }

    /// Look up a field on this step by draft key.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate every field of this step against a draft.
    ///
    /// Returns one message per offending field, keyed by field name.
    /// An empty map means the step passes.
    pub fn validate(&self, draft: &Draft) -> std::collections::BTreeMap<String, String> {
        let mut errors = std::collections::BTreeMap::new();
        for field in &self.fields {
            if let Err(message) = field.validate(draft.get(&field.name)) {
                errors.insert(field.name.clone(), message);
            }
        }
        errors
    }
}

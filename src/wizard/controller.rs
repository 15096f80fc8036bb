//! Wizard state machine
//!
//! `WizardController` drives step progression and owns the draft. Every
//! operation runs to completion on the calling thread; the controller
//! performs no I/O and holds no renderer or sink references - those are
//! passed in at the call sites that need them.

use std::collections::BTreeMap;

use crate::wizard::error::WizardError;
use crate::wizard::field::{Draft, FieldValue};
use crate::wizard::schema::{FieldKind, StepDefinition};

/// Construction-time inputs beyond the step sequence.
///
/// Resume state (a saved draft, a starting index from a previous session)
/// enters here and only here - the controller never persists anything
/// itself.
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    /// Starting step, clamped into `[0, step_count - 1]`
    pub initial_step_index: usize,
    /// Previously accumulated answers
    pub initial_draft: Draft,
}

/// The wizard state machine.
///
/// Mutable state is the current index, the draft, and the queued
/// validation errors; the step sequence is fixed at construction.
#[derive(Debug, Clone)]
pub struct WizardController {
    steps: Vec<StepDefinition>,
    current_index: usize,
    draft: Draft,
    validation_errors: BTreeMap<String, String>,
}

impl WizardController {
    /// Create a controller starting at the first step with an empty draft.
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        Self::with_options(steps, WizardOptions::default())
    }

    /// Create a controller with resume state.
    pub fn with_options(steps: Vec<StepDefinition>, options: WizardOptions) -> Self {
        let last = steps.len().saturating_sub(1);
        Self {
            steps,
            current_index: options.initial_step_index.min(last),
            draft: options.initial_draft,
            validation_errors: BTreeMap::new(),
        }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The active step, if the index is in range.
    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.steps.get(self.current_index)
    }

    pub fn is_last_step(&self) -> bool {
        self.current_index + 1 == self.steps.len()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Messages queued by the last failed `next_step`/`submit`, keyed by
    /// field name. Cleared per field by `set_field`.
    pub fn validation_errors(&self) -> &BTreeMap<String, String> {
        &self.validation_errors
    }

    /// Write a value into the draft.
    ///
    /// For a field declared `MultiSelect`, a `Text` value toggles
    /// membership in the tag list: present values are removed, absent
    /// values appended, preserving selection order. Everything else
    /// overwrites. The only validation side effect is clearing a queued
    /// error for `name`.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        let is_multi = self
            .steps
            .iter()
            .filter_map(|s| s.field(name))
            .any(|f| matches!(f.kind, FieldKind::MultiSelect { .. }));

        match (is_multi, value) {
            (true, FieldValue::Text(option)) => {
                let entry = self
                    .draft
                    .entry(name.to_string())
                    .or_insert_with(|| FieldValue::Tags(Vec::new()));
                // A seeded draft may hold a stray non-list value here
                if !matches!(entry, FieldValue::Tags(_)) {
                    *entry = FieldValue::Tags(Vec::new());
                }
                if let FieldValue::Tags(tags) = entry {
                    if let Some(pos) = tags.iter().position(|t| t == &option) {
                        tags.remove(pos);
                    } else {
                        tags.push(option);
                    }
                }
            }
            (_, value) => {
                self.draft.insert(name.to_string(), value);
            }
        }

        self.validation_errors.remove(name);
    }

    /// Validate the fields of a single step against the current draft.
    ///
    /// Out-of-range indexes validate trivially (there is nothing to fail).
    pub fn validate_step(&self, index: usize) -> BTreeMap<String, String> {
        self.steps
            .get(index)
            .map(|step| step.validate(&self.draft))
            .unwrap_or_default()
    }

    /// Advance to the next step if the current one validates.
    ///
    /// Returns `true` on success; the index is clamped, so a valid last
    /// step reports success without moving. On failure the per-field
    /// messages are queued and the index stays put.
    pub fn next_step(&mut self) -> bool {
        let errors = self.validate_step(self.current_index);
        if !errors.is_empty() {
            self.validation_errors = errors;
            return false;
        }
        self.validation_errors.clear();
        if self.current_index + 1 < self.steps.len() {
            self.current_index += 1;
        }
        true
    }

    /// Step back, clamped at the first step.
    ///
    /// Backward navigation never validates and never touches the draft or
    /// the queued errors - entered data survives a retreat.
    pub fn prev_step(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Jump directly to `index`.
    ///
    /// Permitted only when every step strictly before `index` validates
    /// against the current draft; otherwise the jump is blocked and state
    /// is unchanged. Out-of-range targets are blocked rather than clamped.
    pub fn jump_to(&mut self, index: usize) -> Result<(), WizardError> {
        if index >= self.steps.len() {
            return Err(WizardError::blocked(format!(
                "step index {} is out of range ({} steps)",
                index,
                self.steps.len()
            )));
        }
        for (i, step) in self.steps.iter().take(index).enumerate() {
            if !step.validate(&self.draft).is_empty() {
                return Err(WizardError::blocked(format!(
                    "step {} (\"{}\") is incomplete",
                    i + 1,
                    step.title
                )));
            }
        }
        self.current_index = index;
        self.validation_errors.clear();
        Ok(())
    }

    /// Submit the completed draft.
    ///
    /// Only permitted from the last step, and only when it validates. On
    /// success the sink receives a read-only snapshot exactly once and the
    /// controller is left untouched - discarding it is the caller's call.
    pub fn submit<F>(&mut self, sink: F) -> Result<(), WizardError>
    where
        F: FnOnce(&Draft),
    {
        if !self.is_last_step() {
            return Err(WizardError::blocked(format!(
                "submit is only available from the final step (currently on step {} of {})",
                self.current_index + 1,
                self.steps.len()
            )));
        }
        let errors = self.validate_step(self.current_index);
        if !errors.is_empty() {
            self.validation_errors = errors.clone();
            return Err(WizardError::ValidationFailure { errors });
        }
        self.validation_errors.clear();
        sink(&self.draft);
        Ok(())
    }
}

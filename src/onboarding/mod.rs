//! Onboarding flow - the concrete learner sign-up wizard
//!
//! `flow` defines the step catalog and the personalization branch;
//! `tui` renders it with ratatui and drives a `WizardController`.

pub mod flow;
pub mod tui;

pub use flow::build_steps;
pub use tui::{run_onboarding, WizardOutcome};

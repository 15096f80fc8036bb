//! Generic multi-step wizard engine
//!
//! This module contains the step/draft/validation machinery that the
//! onboarding flow is built on. It is deliberately free of any terminal
//! concerns:
//!
//! - `schema`: step sequences described as data (`StepDefinition`,
//!   `FieldSpec`, `FieldKind`)
//! - `field`: the draft record accumulated across steps (`Draft`,
//!   `FieldValue`)
//! - `controller`: `WizardController`, the state machine driving
//!   navigation, validation, and submission
//! - `error`: the recoverable failure taxonomy (`WizardError`)
//!
//! # Design
//!
//! The controller owns exactly three pieces of mutable state: the current
//! step index, the draft, and the queued validation errors. Step sequences
//! are immutable once a controller is constructed; flows that branch build
//! a new controller over the longer sequence and seed it with the old
//! draft. Rendering and persistence live with the caller - the controller
//! performs no I/O and never suspends.

pub mod controller;
pub mod error;
pub mod field;
pub mod schema;

pub use controller::{WizardController, WizardOptions};
pub use error::WizardError;
pub use field::{Draft, FieldValue};
pub use schema::{FieldKind, FieldSpec, StepDefinition};

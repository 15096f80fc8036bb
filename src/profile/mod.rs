//! Profile module - the submission side of the wizard
//!
//! Converts a completed draft snapshot into a `LearnerProfile`, writes it
//! as JSON, and handles draft save/load for resumable sessions.

pub mod export;
pub mod learner_profile;

pub use export::*;
pub use learner_profile::*;

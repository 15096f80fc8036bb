//! Questline: Onboarding Wizard Library
//!
//! A step/draft/validation wizard engine (`wizard`), the learner
//! onboarding flow built on it (`onboarding`), and the profile output
//! side (`profile`).

pub mod cli;
pub mod onboarding;
pub mod profile;
pub mod utils;
pub mod wizard;

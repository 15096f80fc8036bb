//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::onboarding::flow::FULL_TRACK_LEN;
use crate::profile::export::default_profile_path;

/// Questline - terminal onboarding wizard for building learner profiles
#[derive(Parser, Debug)]
#[command(name = "questline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Saved draft JSON to resume from.
    /// Answers in the draft pre-fill the wizard; quitting mid-flow offers
    /// to write one of these.
    #[arg(short, long)]
    pub draft: Option<PathBuf>,

    /// Output path for the completed profile (JSON).
    /// Defaults to 'questline_profile.json' next to the draft file when
    /// resuming, otherwise in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Step index to resume at (0-based, clamped into range at startup).
    #[arg(long, default_value = "0", value_parser = validate_resume_step)]
    pub resume_step: usize,

    /// Start on the personalization track (the extra motivation/timeline/
    /// certifications/sources steps). Also implied by a draft that opted in.
    #[arg(long, default_value = "false")]
    pub personalize: bool,

    /// Skip the interactive wizard entirely: validate the draft given via
    /// --draft and submit it. Fails with per-field messages when any step
    /// is incomplete.
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a saved draft against the onboarding steps without submitting
    Validate {
        /// Draft JSON file to audit
        draft: PathBuf,
    },
}

impl Cli {
    /// The profile destination, deriving a default when not explicit.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_profile_path(self.draft.as_deref()))
    }
}

/// Validator for the resume-step parameter
fn validate_resume_step(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid step index", s))?;

    if value >= FULL_TRACK_LEN {
        Err(format!(
            "resume-step must be below {}, got {}",
            FULL_TRACK_LEN, value
        ))
    } else {
        Ok(value)
    }
}

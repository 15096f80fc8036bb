//! Questline: Terminal Onboarding Wizard
//!
//! Walks a learner through sign-up and personalization steps in a TUI
//! and writes the completed profile as JSON.

mod cli;
mod onboarding;
mod profile;
mod utils;
mod wizard;

use anyhow::Result;
use clap::Parser;

use cli::{confirm_overwrite, confirm_save_draft, Cli, Commands};
use onboarding::flow;
use onboarding::{run_onboarding, WizardOutcome};
use profile::{
    default_draft_path, display_summary, load_draft, save_draft, write_profile, LearnerProfile,
};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_info,
    print_session_card, print_success,
};
use wizard::{Draft, WizardController, WizardOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Validate { draft } => cli::validate::run_validate(draft),
        };
    }

    // Seed from a saved draft when resuming
    let initial_draft = match &cli.draft {
        Some(path) => load_draft(path)?,
        None => Draft::new(),
    };
    let personalize = cli.personalize || flow::personalize_requested(&initial_draft);
    let output_path = cli.output_path();

    if cli.no_confirm {
        return run_headless(&cli, initial_draft, personalize);
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_session_card(&output_path, cli.draft.as_deref(), personalize);

    match run_onboarding(initial_draft, cli.resume_step, personalize)? {
        WizardOutcome::Completed(draft) => {
            let profile = LearnerProfile::from_draft(&draft)?;

            if output_path.exists() && !confirm_overwrite(&output_path)? {
                print_info("Submission cancelled - profile not written.");
                return Ok(());
            }

            let spinner = create_spinner("Writing profile...");
            write_profile(&profile, &output_path)?;
            finish_with_success(&spinner, "Profile written");

            display_summary(&profile, &output_path);
            print_completion(&profile.first_name);
            Ok(())
        }
        WizardOutcome::Abandoned(draft) => {
            if !draft.is_empty() {
                let draft_path = default_draft_path();
                if confirm_save_draft(&draft_path)? {
                    save_draft(&draft, &draft_path)?;
                    print_success(&format!("Draft saved to {}", draft_path.display()));
                    print_info("Resume later with --draft");
                    return Ok(());
                }
            }
            println!("Cancelled by user.");
            Ok(())
        }
    }
}

/// Non-interactive submission: the draft must already answer every step.
fn run_headless(cli: &Cli, initial_draft: Draft, personalize: bool) -> Result<()> {
    if cli.draft.is_none() {
        anyhow::bail!("--no-confirm requires --draft with a completed draft file");
    }

    let mut controller = WizardController::with_options(
        flow::build_steps(personalize),
        WizardOptions {
            initial_step_index: 0,
            initial_draft,
        },
    );

    // Jumping to the last step proves every earlier step validates;
    // submit then checks the last one.
    let last = controller.step_count() - 1;
    if let Err(err) = controller.jump_to(last) {
        anyhow::bail!("{} (run 'questline validate' for the full report)", err);
    }

    let mut snapshot = None;
    controller
        .submit(|draft| snapshot = Some(draft.clone()))
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    let draft = snapshot.expect("submit succeeded, sink was invoked");

    let profile = LearnerProfile::from_draft(&draft)?;
    let output_path = cli.output_path();
    write_profile(&profile, &output_path)?;
    print_success(&format!("Profile written to {}", output_path.display()));
    Ok(())
}

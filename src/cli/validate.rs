//! Draft audit subcommand
//!
//! Walks every onboarding step against a saved draft and prints a
//! per-step report. Exits non-zero when any step fails, so the command
//! doubles as a scriptable pre-submit check.

use std::path::Path;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::onboarding::flow;
use crate::profile::export::load_draft;
use crate::wizard::{WizardController, WizardOptions};

/// Run `questline validate <draft.json>`.
pub fn run_validate(draft_path: &Path) -> Result<()> {
    let draft = load_draft(draft_path)?;
    let personalize = flow::personalize_requested(&draft);
    let controller = WizardController::with_options(
        flow::build_steps(personalize),
        WizardOptions {
            initial_step_index: 0,
            initial_draft: draft,
        },
    );

    println!();
    println!(
        "    {} {}",
        style("🔎").cyan(),
        style("DRAFT VALIDATION").white().bold()
    );
    println!(
        "    {}",
        style(format!(
            "{} \u{00b7} {} track",
            draft_path.display(),
            if personalize { "personalized" } else { "quick" }
        ))
        .dim()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
        Cell::new("Details").add_attribute(Attribute::Bold),
    ]);

    let mut failed_steps = 0usize;
    for (i, step) in controller.steps().iter().enumerate() {
        let errors = controller.validate_step(i);
        if errors.is_empty() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&step.title),
                Cell::new("✓ complete").fg(Color::Green),
                Cell::new(""),
            ]);
        } else {
            failed_steps += 1;
            let details = errors.values().cloned().collect::<Vec<_>>().join("; ");
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&step.title),
                Cell::new("✗ incomplete").fg(Color::Red),
                Cell::new(details),
            ]);
        }
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
    println!();

    if failed_steps == 0 {
        println!(
            "    {} {}",
            style("✓").green().bold(),
            style("Draft is ready to submit").green()
        );
        println!();
        Ok(())
    } else {
        println!(
            "    {} {}",
            style("✗").red().bold(),
            style(format!("{} step(s) incomplete", failed_steps)).red()
        );
        println!();
        anyhow::bail!("draft failed validation for {} step(s)", failed_steps)
    }
}

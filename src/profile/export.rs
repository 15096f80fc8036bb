//! Profile and draft persistence, plus the post-submit summary card

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::profile::learner_profile::LearnerProfile;
use crate::wizard::field::Draft;

/// File name used when no explicit output path is given.
pub const DEFAULT_PROFILE_FILENAME: &str = "questline_profile.json";

/// Draft file written when the user quits mid-flow and saves progress.
pub const DEFAULT_DRAFT_FILENAME: &str = ".questline_draft.json";

/// Write the completed profile as pretty JSON.
pub fn write_profile(profile: &LearnerProfile, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)
        .context("Failed to serialize profile to JSON")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write profile file: {}", path.display()))?;
    Ok(())
}

/// Save a partial draft for later resumption.
pub fn save_draft(draft: &Draft, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(draft).context("Failed to serialize draft to JSON")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write draft file: {}", path.display()))?;
    Ok(())
}

/// Load a previously saved draft.
pub fn load_draft(path: &Path) -> Result<Draft> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Draft file is not valid JSON: {}", path.display()))
}

/// Default location for the completed profile.
///
/// When resuming from a draft file the profile lands next to it;
/// otherwise it goes to the current directory.
pub fn default_profile_path(draft_path: Option<&Path>) -> PathBuf {
    match draft_path.and_then(|p| p.parent()) {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from(DEFAULT_PROFILE_FILENAME),
        Some(parent) => parent.join(DEFAULT_PROFILE_FILENAME),
        None => PathBuf::from(DEFAULT_PROFILE_FILENAME),
    }
}

/// Default location for a saved draft: the home directory, falling back
/// to the current directory.
pub fn default_draft_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DRAFT_FILENAME)
}

/// Print the post-submit summary card.
pub fn display_summary(profile: &LearnerProfile, output: &Path) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("PROFILE SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("🧑 Name"),
        Cell::new(profile.display_name()),
    ]);
    table.add_row(vec![
        Cell::new("🧭 Domains"),
        Cell::new(profile.domains.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("⏱️  Weekly hours"),
        Cell::new(profile.weekly_hours),
    ]);
    table.add_row(vec![
        Cell::new("📚 Methods"),
        Cell::new(profile.learning_methods.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("📈 Proficiency"),
        Cell::new(&profile.proficiency).fg(Color::Green),
    ]);

    if let Some(personalization) = &profile.personalization {
        table.add_row(vec![
            Cell::new("🎯 Motivation"),
            Cell::new(&personalization.motivation),
        ]);
        table.add_row(vec![
            Cell::new("🗓️  Timeline"),
            Cell::new(&personalization.timeline),
        ]);
        table.add_row(vec![
            Cell::new("🎓 Certifications"),
            Cell::new(if personalization.certifications { "Yes" } else { "No" }),
        ]);
        if !personalization.sources.is_empty() {
            table.add_row(vec![
                Cell::new("🔍 Sources"),
                Cell::new(personalization.sources.join(", ")),
            ]);
        }
    }

    // Indent the table to align with the styled output
    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    println!();
    println!(
        "    {} Saved to {}",
        style("✓").green().bold(),
        style(output.display()).green()
    );
}

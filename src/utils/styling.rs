//! Terminal styling utilities for the non-TUI output paths

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static SCROLL: Emoji<'_, '_> = Emoji("📜 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static COMPASS: Emoji<'_, '_> = Emoji("🧭 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
     ██████╗ ██╗   ██╗███████╗███████╗████████╗
    ██╔═══██╗██║   ██║██╔════╝██╔════╝╚══██╔══╝
    ██║   ██║██║   ██║█████╗  ███████╗   ██║
    ██║▄▄ ██║██║   ██║██╔══╝  ╚════██║   ██║
    ╚██████╔╝╚██████╔╝███████╗███████║   ██║
     ╚══▀▀═╝  ╚═════╝ ╚══════╝╚══════╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("✦").magenta().bold(),
        style("Your learning journey, one quest at a time").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the session card before the wizard starts
pub fn print_session_card(output: &Path, resuming_from: Option<&Path>, personalize: bool) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);
    let track = if personalize {
        "personalized (11 steps)"
    } else {
        "quick (7 steps)"
    };

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Session").cyan().bold(),
        " ".repeat(box_width - 14)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Track:  {:<39}│",
        COMPASS,
        truncate_string(track, 38)
    );
    if let Some(draft) = resuming_from {
        println!(
            "    │  {} Resume: {:<39}│",
            SCROLL,
            truncate_path(draft, 38)
        );
    }
    println!(
        "    │  {} Output: {:<39}│",
        SAVE,
        truncate_path(output, 38)
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion(name: &str) {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style(format!("Welcome aboard, {}! Your quest begins.", name))
            .green()
            .bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}

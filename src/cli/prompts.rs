//! Interactive prompts using dialoguer

use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

/// Ask before clobbering an existing profile file.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Offer to save a partial draft after the user quits mid-flow.
pub fn confirm_save_draft(path: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Save your progress to {}?", path.display()))
        .default(true)
        .interact()?;
    Ok(confirmed)
}

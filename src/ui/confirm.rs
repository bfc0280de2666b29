//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{Result, TfeError};

/// Ask the user to confirm a destructive action
///
/// `--yes` and `--batch` both skip the prompt and proceed.
pub fn confirm_action(prompt: &str, yes: bool, batch: bool) -> Result<bool> {
    if yes || batch {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| TfeError::Config(format!("Failed to read confirmation: {}", e)))
}

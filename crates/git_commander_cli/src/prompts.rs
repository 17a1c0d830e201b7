//! Interactive prompt helpers.
//!
//! Thin wrappers over `dialoguer` and `rpassword` that map terminal failures
//! onto the CLI error type. Command handlers take these as injected closures
//! so tests never touch a terminal.

use dialoguer::{Confirm, Input, Select};

use crate::errors::Error;

/// Asks for a line of free text.
pub fn ask_text(prompt: &str) -> Result<String, Error> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| Error::Prompt(e.to_string()))
}

/// Asks for a line of free text with a pre-filled default.
pub fn ask_text_with_default(prompt: &str, default: &str) -> Result<String, Error> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| Error::Prompt(e.to_string()))
}

/// Asks a yes/no question.
pub fn ask_confirm(prompt: &str, default: bool) -> Result<bool, Error> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))
}

/// Asks for the access token with hidden input.
pub fn ask_token(prompt: &str) -> Result<String, Error> {
    rpassword::prompt_password(format!("{prompt} ")).map_err(|e| Error::Prompt(e.to_string()))
}

/// Presents a selection menu and returns the chosen index.
pub fn select(prompt: &str, items: &[&str]) -> Result<usize, Error> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))
}

//! Interactive prompts for form fields not given on the command line

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::error::Result;

/// Return `value`, or prompt for it with a visible input
pub fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

/// Return `value`, or prompt for it without echo
pub fn password_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()?),
    }
}

//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{LaunchpadError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors, surfacing Ctrl+C as an interrupt.
fn map_dialoguer_err(e: dialoguer::Error) -> LaunchpadError {
    let io: std::io::Error = e.into();
    match io.kind() {
        std::io::ErrorKind::Interrupted => LaunchpadError::Interrupted,
        std::io::ErrorKind::UnexpectedEof => LaunchpadError::InputClosed,
        _ => LaunchpadError::Io(io),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for one line of input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Pause => prompt_pause(prompt, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

fn prompt_pause(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .report(false)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;
    Ok(String::new())
}

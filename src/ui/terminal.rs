//! Styled UI for a real terminal, and the TTY check that picks a UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, LaunchpadTheme, NonInteractiveUI, OutputMode,
    ProgressSpinner, Prompt, SpinnerHandle, UserInterface,
};

/// Colors, live spinners and `dialoguer` line input on stdout.
pub struct TerminalUI {
    term: Term,
    theme: LaunchpadTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = match should_use_colors() {
            true => LaunchpadTheme::new(),
            false => LaunchpadTheme::plain(),
        };
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn line(&self, text: &str) {
        writeln!(&self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        self.line(&self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.line(&self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        self.line(&self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = match self.mode.shows_spinners() {
            true => ProgressSpinner::new(message, self.theme.clone()),
            false => ProgressSpinner::hidden(),
        };
        Box::new(spinner)
    }

    fn show_banner(&mut self, title: &str) {
        let banner = self.theme.format_banner(title);
        self.line(&format!("{}\n", banner));
    }

    fn show_header(&mut self, title: &str) {
        let header = self.theme.format_header(title);
        self.line(&format!("\n{}", header));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            self.line(&self.theme.format_hint(hint));
        }
    }
}

/// `TerminalUI` only when both stdin and stdout are terminals; piped
/// sessions get the line-based UI.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::stdin(mode))
    }
}

//! Everything the operator sees goes through [`UserInterface`].
//!
//! [`create_ui`] picks [`TerminalUI`] on a TTY and [`NonInteractiveUI`]
//! for piped sessions; tests drive [`MockUI`].
//!
//! # Example
//!
//! ```
//! use launchpad::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Project Status");
//! ui.success("All core dependencies are installed!");
//! assert!(ui.has_success("installed"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LaunchpadTheme};

use crate::error::Result;

/// Output and line input for a session.
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    /// Plain line.
    fn message(&mut self, msg: &str);

    /// Line with the success marker.
    fn success(&mut self, msg: &str);

    /// Line with the warning marker.
    fn warning(&mut self, msg: &str);

    /// Line with the error marker.
    fn error(&mut self, msg: &str);

    /// Show a prompt and read one line of input.
    ///
    /// # Errors
    ///
    /// `Interrupted` when the operator presses Ctrl+C, `InputClosed` when
    /// input reaches end of file.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Progress line for one import check. Hidden in quiet mode except
    /// for failures.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    fn show_banner(&mut self, title: &str);

    fn show_header(&mut self, title: &str);

    /// Follow-up suggestion; suppressed in quiet mode.
    fn show_hint(&mut self, hint: &str);
}

/// A running spinner, closed with exactly one `finish_*` call.
pub trait SpinnerHandle {
    fn set_message(&mut self, msg: &str);

    fn finish_success(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);
}

/// One question put to the operator.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Stable name; `MockUI` scripts answers by it.
    pub key: String,
    pub question: String,
    pub prompt_type: PromptType,
}

/// What kind of answer a [`Prompt`] expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Free-form single line of text (may be empty).
    Input,
    /// Wait for Enter; the input is discarded.
    Pause,
}

impl Prompt {
    /// A free-form line prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
        }
    }

    /// A "press enter" prompt.
    pub fn pause(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Pause,
        }
    }
}

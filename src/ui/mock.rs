//! In-memory UI for tests.
//!
//! Everything shown is captured per kind; prompt answers are scripted per key.
//!
//! # Example
//!
//! ```
//! use launchpad::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("choice", vec!["3", "5"]);
//!
//! let prompt = Prompt::input("choice", "Enter your choice (1-5)");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "3");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "5");
//! // Script exhausted: behaves like end of input
//! assert!(ui.prompt(&prompt).is_err());
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{LaunchpadError, Result};

use super::{OutputMode, Prompt, PromptType, SpinnerHandle, UserInterface};

/// A scripted answer: a line of input, or Ctrl+C.
#[derive(Debug, Clone)]
enum Scripted {
    Line(String),
    Interrupt,
}

/// Where a captured line was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Channel {
    Message,
    Success,
    Warning,
    Error,
    Banner,
    Header,
    Hint,
    Spinner,
}

/// Recording [`UserInterface`] with scripted answers.
///
/// Input prompts pop the next scripted answer for their key; once a key's
/// script is exhausted, input prompts fail with `InputClosed` and pause
/// prompts return immediately.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    captured: HashMap<Channel, Vec<String>>,
    scripts: HashMap<String, VecDeque<Scripted>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// An empty script in `Normal` mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next prompts asked under `key` with `responses`, in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let script = self.scripts.entry(key.to_string()).or_default();
        script.extend(responses.into_iter().map(|line| Scripted::Line(line.to_string())));
    }

    /// Answer the next prompt asked under `key` with Ctrl+C.
    pub fn queue_interrupt(&mut self, key: &str) {
        let script = self.scripts.entry(key.to_string()).or_default();
        script.push_back(Scripted::Interrupt);
    }

    fn record(&mut self, channel: Channel, text: &str) {
        self.captured.entry(channel).or_default().push(text.to_string());
    }

    fn lines(&self, channel: Channel) -> &[String] {
        self.captured.get(&channel).map(Vec::as_slice).unwrap_or(&[])
    }

    fn saw(&self, channel: Channel, needle: &str) -> bool {
        self.lines(channel).iter().any(|line| line.contains(needle))
    }

    /// Plain messages, in order.
    pub fn messages(&self) -> &[String] {
        self.lines(Channel::Message)
    }

    pub fn successes(&self) -> &[String] {
        self.lines(Channel::Success)
    }

    pub fn warnings(&self) -> &[String] {
        self.lines(Channel::Warning)
    }

    pub fn errors(&self) -> &[String] {
        self.lines(Channel::Error)
    }

    pub fn banners(&self) -> &[String] {
        self.lines(Channel::Banner)
    }

    pub fn headers(&self) -> &[String] {
        self.lines(Channel::Header)
    }

    /// Labels of every spinner started.
    pub fn spinners(&self) -> &[String] {
        self.lines(Channel::Spinner)
    }

    /// Keys of the prompts asked, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    // The `has_*` lookups match on substrings.

    pub fn has_message(&self, needle: &str) -> bool {
        self.saw(Channel::Message, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.saw(Channel::Success, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.saw(Channel::Warning, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.saw(Channel::Error, needle)
    }

    pub fn has_header(&self, needle: &str) -> bool {
        self.saw(Channel::Header, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.saw(Channel::Hint, needle)
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(Channel::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.record(Channel::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.record(Channel::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.record(Channel::Error, msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());
        let answer = self
            .scripts
            .get_mut(&prompt.key)
            .and_then(VecDeque::pop_front);

        match (answer, prompt.prompt_type) {
            (Some(Scripted::Interrupt), _) => Err(LaunchpadError::Interrupted),
            (Some(Scripted::Line(line)), PromptType::Input) => Ok(line),
            (None, PromptType::Input) => Err(LaunchpadError::InputClosed),
            (_, PromptType::Pause) => Ok(String::new()),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(Channel::Spinner, message);
        Box::new(MockSpinner::new())
    }

    fn show_banner(&mut self, title: &str) {
        self.record(Channel::Banner, title);
    }

    fn show_header(&mut self, title: &str) {
        self.record(Channel::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.record(Channel::Hint, hint);
    }
}

/// Spinner that records what it was told.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// How a [`MockSpinner`] was closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels set while spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The closing line, once finished.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }
}

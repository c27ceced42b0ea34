//! Line-based UI for piped stdin/stdout.
//!
//! Output is plain text without colors or live spinners. Prompts print their
//! question and read a single line; end of input is reported as
//! [`LaunchpadError::InputClosed`].
//!
//! A blocked `read` is restarted after SIGINT, so lines are read on a helper
//! thread and the prompt waits on a channel, polling the interrupt flag.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;

use crate::error::{LaunchpadError, Result};
use crate::shell::interrupt::{self, POLL_INTERVAL};

use super::theme::LaunchpadTheme;
use super::{OutputMode, Prompt, PromptType, SpinnerHandle, UserInterface};

type LineReply = io::Result<Option<String>>;

/// Reads one line per request on a background thread.
struct LineReader {
    requests: Sender<()>,
    replies: Receiver<LineReply>,
    // A request whose line has not been collected yet
    pending: bool,
}

impl LineReader {
    fn spawn(mut input: Box<dyn BufRead + Send>) -> Self {
        let (requests, request_rx) = mpsc::channel::<()>();
        let (reply_tx, replies) = mpsc::channel();

        thread::spawn(move || {
            for () in request_rx {
                let mut line = String::new();
                let reply = match input.read_line(&mut line) {
                    Ok(0) => Ok(None),
                    Ok(_) => Ok(Some(line)),
                    Err(e) => Err(e),
                };
                let done = !matches!(reply, Ok(Some(_)));
                if reply_tx.send(reply).is_err() || done {
                    break;
                }
            }
        });

        Self {
            requests,
            replies,
            pending: false,
        }
    }

    /// Next line with its terminator, `InputClosed` at end of input.
    ///
    /// An interrupt abandons the wait; the line still being read is handed
    /// to the next call.
    fn next_line(&mut self) -> Result<String> {
        if !self.pending {
            if self.requests.send(()).is_err() {
                return Err(LaunchpadError::InputClosed);
            }
            self.pending = true;
        }

        loop {
            match self.replies.recv_timeout(POLL_INTERVAL) {
                Ok(reply) => {
                    self.pending = false;
                    return match reply {
                        Ok(Some(line)) => Ok(line),
                        Ok(None) => Err(LaunchpadError::InputClosed),
                        Err(e) => Err(LaunchpadError::Io(e)),
                    };
                }
                Err(RecvTimeoutError::Timeout) => {
                    if interrupt::take() {
                        return Err(LaunchpadError::Interrupted);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.pending = false;
                    return Err(LaunchpadError::InputClosed);
                }
            }
        }
    }
}

/// UI for sessions whose stdin or stdout is not a terminal.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: LineReader,
    theme: LaunchpadTheme,
}

impl NonInteractiveUI {
    /// Answers come from stdin.
    pub fn stdin(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(BufReader::new(io::stdin())))
    }

    /// Answers come from `input`.
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead + Send>) -> Self {
        Self {
            mode,
            input: LineReader::spawn(input),
            theme: LaunchpadTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        match prompt.prompt_type {
            PromptType::Input => print!("{}: ", prompt.question),
            PromptType::Pause => print!("{}", prompt.question),
        }
        io::stdout().flush().ok();

        let line = self.input.next_line();
        println!();
        let line = line?;

        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        match prompt.prompt_type {
            PromptType::Input => Ok(answer),
            PromptType::Pause => Ok(String::new()),
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(LineSpinner {
            theme: self.theme.clone(),
            verbose: self.mode.shows_spinners(),
        })
    }

    fn show_banner(&mut self, title: &str) {
        println!("{}\n", self.theme.format_banner(title));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", self.theme.format_header(title));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("{}", self.theme.format_hint(hint));
        }
    }
}

/// Spinner that prints only its final line.
///
/// Failures are always printed; successes only when the mode shows progress.
struct LineSpinner {
    theme: LaunchpadTheme,
    verbose: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.verbose {
            println!("  {}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        println!("  {}", self.theme.format_error(msg));
    }
}

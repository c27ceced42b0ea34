//! Menu state machine.
//!
//! The session moves through `Startup → Menu ⇄ Dispatch → Exit`. Invalid
//! input leaves the machine in `Menu`; an interrupt from any state ends in
//! `Exit(Interrupted)`.

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Dashboard,
    Notebooks,
    Status,
    Install,
    Exit,
}

impl MenuChoice {
    /// All entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        Self::Dashboard,
        Self::Notebooks,
        Self::Status,
        Self::Install,
        Self::Exit,
    ];

    /// Parse a line of input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Dashboard),
            "2" => Some(Self::Notebooks),
            "3" => Some(Self::Status),
            "4" => Some(Self::Install),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The input that selects this entry.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dashboard => "1",
            Self::Notebooks => "2",
            Self::Status => "3",
            Self::Install => "4",
            Self::Exit => "5",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Run Streamlit Dashboard",
            Self::Notebooks => "Open Jupyter Notebooks",
            Self::Status => "Check Project Status",
            Self::Install => "Install Dependencies",
            Self::Exit => "Exit",
        }
    }
}

/// Why the session ended normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The operator picked the exit entry.
    Chosen,
    /// The operator pressed Ctrl+C.
    Interrupted,
}

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Probing libraries and data files.
    Startup,
    /// Waiting for a choice.
    Menu,
    /// Running a menu action.
    Dispatch(MenuChoice),
    /// Leaving with a farewell.
    Exit(ExitReason),
    /// Startup gate failed; the menu is never shown.
    Terminated,
}

/// Something that happened in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    StartupPassed,
    StartupFailed,
    Input(String),
    Dispatched,
    Interrupted,
}

impl MenuState {
    /// Transition function.
    ///
    /// Events that do not apply to the current state leave it unchanged.
    pub fn next(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (Self::Exit(reason), _) => Self::Exit(reason),
            (Self::Terminated, _) => Self::Terminated,
            (_, MenuEvent::Interrupted) => Self::Exit(ExitReason::Interrupted),
            (Self::Startup, MenuEvent::StartupPassed) => Self::Menu,
            (Self::Startup, MenuEvent::StartupFailed) => Self::Terminated,
            (Self::Menu, MenuEvent::Input(line)) => match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => Self::Exit(ExitReason::Chosen),
                Some(choice) => Self::Dispatch(choice),
                None => Self::Menu,
            },
            (Self::Dispatch(_), MenuEvent::Dispatched) => Self::Menu,
            (state, _) => state,
        }
    }

    /// Whether the session is over.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Exit(_) | Self::Terminated)
    }
}

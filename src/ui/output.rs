//! How much launchpad prints besides menus and results.

/// Chattiness level picked with `-v` / `-q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Per-library probe lines as well as progress.
    Verbose,
    #[default]
    Normal,
    /// Menus, prompts, results and failures only.
    Quiet,
}

impl OutputMode {
    /// Resolve the global flags. `--quiet` wins over `--verbose`.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    pub fn shows_spinners(&self) -> bool {
        *self != Self::Quiet
    }

    pub fn shows_hints(&self) -> bool {
        *self != Self::Quiet
    }
}

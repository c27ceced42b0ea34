//! Interactive numbered menu.
//!
//! [`state`] holds the explicit state machine; [`controller`] drives it
//! against a [`UserInterface`](crate::ui::UserInterface).

pub mod controller;
pub mod state;

pub use controller::{MenuController, SessionOutcome};
pub use state::{ExitReason, MenuChoice, MenuEvent, MenuState};

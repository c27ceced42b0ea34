//! External process execution and interrupt handling.

pub mod command;
pub mod interrupt;
pub mod mock;

pub use command::{ChildGuard, CommandSpec, ProcessRunner, RunOutcome, SystemRunner};
pub use interrupt::InterruptGuard;
pub use mock::MockRunner;

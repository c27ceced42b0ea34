//! Operator interrupt (Ctrl+C) handling.
//!
//! While an [`InterruptGuard`] is alive, SIGINT no longer terminates
//! launchpad; it only raises a flag that blocking waits poll with [`take`].
//! A child shares the terminal's process group, so it receives the same
//! signal and handles its own shutdown. Guards nest: dropping one restores
//! the disposition that was active when it was installed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// How often a blocking wait checks for an operator interrupt.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
extern "C" fn on_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Scoped SIGINT handler.
#[derive(Debug)]
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sighandler_t,
}

impl InterruptGuard {
    /// Install the handler. A pending interrupt stays pending.
    pub fn install() -> Self {
        #[cfg(unix)]
        {
            let handler = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
            // SAFETY: the handler only performs an atomic store.
            let previous = unsafe { libc::signal(libc::SIGINT, handler) };
            Self { previous }
        }

        #[cfg(not(unix))]
        {
            Self {}
        }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        if self.previous != libc::SIG_ERR {
            // SAFETY: restores the disposition returned by `signal` in `install`.
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}

/// Consume a pending interrupt, if any.
pub fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

/// Record an interrupt as if SIGINT had arrived.
pub fn notify() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Serializes tests that touch the process-wide interrupt flag.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

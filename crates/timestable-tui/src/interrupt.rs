//! Signal-driven shutdown.
//!
//! In raw mode Ctrl+C arrives as a key event, but SIGINT, SIGTERM and SIGHUP
//! sent from outside still need a clean exit (`ctrlc` is built with its
//! `termination` feature for the latter two). The handler only sets a flag;
//! the event loop polls it and quits, which runs the normal terminal teardown.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static RESTORE_HOOK: OnceLock<Box<dyn Fn() + Send + Sync>> = OnceLock::new();
static INSTALLED: OnceLock<()> = OnceLock::new();

/// Installs the signal handler once per process.
///
/// A second signal before the loop notices the first restores the terminal
/// and exits immediately.
pub fn init() {
    INSTALLED.get_or_init(|| {
        if let Err(err) = ctrlc::set_handler(trigger) {
            tracing::warn!(%err, "failed to install signal handler");
        }
    });
}

/// Records an interrupt, force-exiting on the second one.
pub fn trigger() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        if let Some(hook) = RESTORE_HOOK.get() {
            hook();
        }
        std::process::exit(130);
    }
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registers the hook run on a forced exit (the TUI passes terminal restore).
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = RESTORE_HOOK.set(Box::new(hook));
}

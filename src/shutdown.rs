//! Process-wide cooperative shutdown.
//! The ctrl-c handler sets the flag; recursive copies poll it between files
//! and stop with [`FileItemError::Interrupted`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::FileItemError;

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent, signal-safe).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// `Err(Interrupted)` once a shutdown has been requested.
#[inline]
pub fn check() -> Result<(), FileItemError> {
    if is_requested() {
        Err(FileItemError::Interrupted)
    } else {
        Ok(())
    }
}

/// Test/utility-only: clear the flag.
#[cfg(any(test, feature = "test-helpers"))]
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}

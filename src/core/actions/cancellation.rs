use std::sync::atomic::{AtomicBool, Ordering};

/// Samples processed between two polls of a [`CancelToken`].
pub const CANCEL_CHECK_INTERVAL_SAMPLES: usize = 1024;

/// Returned in place of a field or colour buffer the caller abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field generation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Caller-side switch for abandoning a long field computation.
///
/// Implemented for [`NeverCancel`], for `AtomicBool` flags shared with a
/// UI thread, and for any `Fn() -> bool` closure.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// Checks the token when `sample` falls on a poll boundary, so the first
    /// sample of every batch is always checked.
    #[inline]
    fn poll(&self, sample: usize) -> Result<(), Cancelled> {
        if sample % CANCEL_CHECK_INTERVAL_SAMPLES == 0 && self.is_cancelled() {
            return Err(Cancelled);
        }

        Ok(())
    }
}

/// Token for the synchronous entry points; never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }

    #[inline]
    fn poll(&self, _sample: usize) -> Result<(), Cancelled> {
        Ok(())
    }
}

impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crate::ScanError;

/// Why a scan stopped before finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Deadline,
    Interrupted,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Deadline => write!(f, "deadline exceeded"),
            AbortReason::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Caller-supplied limits on a scan.
///
/// The interrupt flag is shared, so a signal handler can hold a clone of
/// [`ScanControl::interrupt_handle`] and flip it from another thread.
#[derive(Debug, Clone, Default)]
pub struct ScanControl {
    deadline: Option<Instant>,
    interrupt: Arc<AtomicBool>,
}

impl ScanControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort once `timeout` has elapsed from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Use an existing interrupt flag instead of a private one.
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::SeqCst);
    }

    /// Whether the scan should stop, and why.
    pub fn abort_reason(&self) -> Option<AbortReason> {
        if self.interrupt.load(Ordering::SeqCst) {
            return Some(AbortReason::Interrupted);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(AbortReason::Deadline),
            _ => None,
        }
    }

    pub fn check(&self) -> Result<(), ScanError> {
        match self.abort_reason() {
            Some(reason) => Err(ScanError::Aborted(reason)),
            None => Ok(()),
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Send-in-progress flag guarding against re-entrant triggers. At most
/// one permit exists at a time; a second `try_begin` while a batch runs
/// returns `None` so the trigger can simply be ignored.
#[derive(Debug, Default)]
pub struct SendGuard {
    in_progress: AtomicBool,
}

impl SendGuard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn try_begin(&self) -> Option<SendPermit<'_>> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SendPermit { guard: self })
    }

    pub fn is_sending(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }
}

/// Held for the duration of one batch; dropping it re-enables the
/// trigger, on normal completion and abort alike.
#[derive(Debug)]
pub struct SendPermit<'a> {
    guard: &'a SendGuard,
}

impl Drop for SendPermit<'_> {
    fn drop(&mut self) {
        self.guard.in_progress.store(false, Ordering::Release);
    }
}

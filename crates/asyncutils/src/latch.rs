use std::sync::atomic::{AtomicBool, Ordering};

/// A gate that lets exactly one caller through until it is reset.
///
/// Used where a noisy source (a camera spotting the same barcode thirty times
/// a second) must produce at most one event.
#[derive(Debug, Default)]
pub struct Latch {
    closed: AtomicBool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the first caller only; everyone after that gets
    /// `false` until [`reset()`](Self::reset).
    pub fn try_close(&self) -> bool {
        self.closed.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.closed.store(false, Ordering::Release);
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

/// A shared one-way flag recording that some branch of the search has reached
/// the final region.
///
/// Once confirmed, the flag never resets; concurrent branches poll it to stop
/// exploring as soon as the question is settled.
pub(crate) struct Verdict(AtomicBool);

impl Verdict {
    pub fn new() -> Verdict {
        Verdict(AtomicBool::new(false))
    }

    pub fn confirm(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_reached(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

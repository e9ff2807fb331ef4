use std::sync::atomic::{AtomicUsize, Ordering};

/// A lock-free counter of worker slots available to the search.
///
/// When a branch point wants to explore successors in parallel, it acquires one
/// slot per spawned worker and returns the slot once the worker is joined.
/// Acquisition never blocks: if no slot is free, the branch is explored inline
/// on the current thread instead.
pub(crate) struct WorkerBudget(AtomicUsize);

impl WorkerBudget {
    pub fn new(slots: usize) -> WorkerBudget {
        WorkerBudget(AtomicUsize::new(slots))
    }

    /// Try to take one worker slot. Returns `false` when the budget is
    /// exhausted, in which case nothing is taken.
    pub fn try_acquire(&self) -> bool {
        self.0
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |slots| {
                slots.checked_sub(1)
            })
            .is_ok()
    }

    /// Return one previously acquired slot.
    pub fn release(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_exhausted_and_returned() {
        let budget = WorkerBudget::new(2);
        assert!(budget.try_acquire());
        assert!(budget.try_acquire());
        assert!(!budget.try_acquire());
        budget.release();
        assert!(budget.try_acquire());
        assert!(!budget.try_acquire());
    }

    #[test]
    fn zero_budget_never_grants() {
        let budget = WorkerBudget::new(0);
        assert!(!budget.try_acquire());
        assert!(!budget.try_acquire());
    }
}

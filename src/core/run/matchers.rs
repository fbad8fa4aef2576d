use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::core::motif::{sigma70, SigmaMatcher};

/// Lazily built per-thread sigma-70 matchers. The matcher's scratch state
/// is not safe for unsynchronized sharing, so each worker constructs its
/// own instance on first use and keeps it for the rest of the run.
pub struct MatcherCache {
    store: ThreadLocal<RefCell<SigmaMatcher>>,
}

impl MatcherCache {
    pub fn new() -> Self {
        Self { store: ThreadLocal::new() }
    }

    pub fn get(&self) -> &RefCell<SigmaMatcher> {
        self.store.get_or(|| RefCell::new(sigma70::matcher(sigma70::MIN_CONFIDENCE)))
    }
}

impl Default for MatcherCache {
    fn default() -> Self {
        Self::new()
    }
}

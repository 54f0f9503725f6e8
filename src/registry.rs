use log::debug;
use std::cell::Cell;
use std::rc::Rc;

/// Process-scoped registry of live accounts.
///
/// Whoever constructs accounts owns (or clones) a registry; every account
/// holds a [`Registration`] guard obtained from it at construction time,
/// so `active_accounts` always equals constructions minus destructions.
/// Clones share the same counter. Single-threaded by design: a concurrent
/// reimplementation would swap the `Rc<Cell<_>>` for an `Arc<AtomicUsize>`.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    live: Rc<Cell<usize>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(0)),
        }
    }

    /// Number of currently live accounts across all variants.
    pub fn active_accounts(&self) -> usize {
        self.live.get()
    }

    /// Record a newly constructed account. Called by the variant
    /// constructors; the returned guard keeps the count accurate for as
    /// long as the account lives.
    pub(crate) fn register(&self, owner: &str) -> Registration {
        self.live.set(self.live.get() + 1);
        debug!(
            "Registered account for {} ({} active)",
            owner,
            self.live.get()
        );
        Registration {
            live: Rc::clone(&self.live),
            owner: owner.to_string(),
        }
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard held by every account; decrements the live count when dropped.
#[derive(Debug)]
pub struct Registration {
    live: Rc<Cell<usize>>,
    owner: String,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        debug!(
            "Deregistered account for {} ({} active)",
            self.owner,
            self.live.get()
        );
    }
}

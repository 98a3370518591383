//! Shared handle through which UI collaborators reach the tracker.

use super::core::ActiveToolTracker;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Reference-counted handle to a single [`ActiveToolTracker`].
///
/// Calls made while the tracker is already borrowed, typically a listener
/// reacting to a notification by calling back into the tracker, are rejected
/// and return `None` instead of re-entering the operation in progress.
#[derive(Clone)]
pub struct SharedTracker {
    inner: Rc<RefCell<ActiveToolTracker>>,
}

/// Non-owning counterpart of [`SharedTracker`], for listeners owned by the
/// tracker itself.
#[derive(Clone)]
pub struct WeakTracker {
    inner: Weak<RefCell<ActiveToolTracker>>,
}

impl SharedTracker {
    pub fn new(tracker: ActiveToolTracker) -> Self {
        Self {
            inner: Rc::new(RefCell::new(tracker)),
        }
    }

    /// Runs `f` with shared access, or returns `None` if the tracker is busy.
    pub fn with<R>(&self, f: impl FnOnce(&ActiveToolTracker) -> R) -> Option<R> {
        match self.inner.try_borrow() {
            Ok(tracker) => Some(f(&tracker)),
            Err(_) => {
                log::debug!("Tracker busy, dropping re-entrant read");
                None
            }
        }
    }

    /// Runs `f` with exclusive access, or returns `None` if the tracker is
    /// busy.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ActiveToolTracker) -> R) -> Option<R> {
        match self.inner.try_borrow_mut() {
            Ok(mut tracker) => Some(f(&mut tracker)),
            Err(_) => {
                log::debug!("Tracker busy, dropping re-entrant call");
                None
            }
        }
    }

    pub fn downgrade(&self) -> WeakTracker {
        WeakTracker {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl WeakTracker {
    /// Creates a handle that never upgrades, for wiring listeners before the
    /// tracker exists.
    pub fn new() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn upgrade(&self) -> Option<SharedTracker> {
        self.inner.upgrade().map(|inner| SharedTracker { inner })
    }
}

impl Default for WeakTracker {
    fn default() -> Self {
        Self::new()
    }
}

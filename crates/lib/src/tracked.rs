//! Change notification for owned children.
//!
//! Only the aggregate roots ([`Guide`](crate::Guide) and
//! [`Content`](crate::Content)) carry a modification timestamp. Their children
//! (steps, options, media, messages) have no timestamp of their own and no
//! stored pointer to their owner. Instead, mutable access to an attached child
//! is handed out as a [`Tracked`] guard that borrows the owner's
//! [`UpdateListener`] for as long as the child is borrowed. When the guard is
//! dropped and the child was borrowed mutably, the owner is notified once.
//!
//! A child that is not attached (freshly built, or returned by a `remove_*`
//! call) can be mutated directly and notifies nobody. Attaching it again binds
//! it to its new owner only.

use std::{
    fmt,
    ops::{Deref, DerefMut},
    sync::Arc,
};

use tracing::trace;

use crate::clock::{Clock, Timestamp};

/// Receives notification that an owned child has been modified.
pub trait UpdateListener {
    fn update_performed(&mut self);
}

/// Modification state of an aggregate root: its last update and the clock
/// used to stamp new ones.
#[derive(Clone)]
pub struct Revision {
    last_update: Option<Timestamp>,
    clock: Arc<dyn Clock>,
}

impl Revision {
    /// Creates a revision stamped with the current time of `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let last_update = Some(clock.now());
        Self { last_update, clock }
    }

    /// Creates a revision for an entity loaded from a document.
    ///
    /// The loaded timestamp is kept until the next mutation.
    pub fn loaded(last_update: Option<Timestamp>, clock: Arc<dyn Clock>) -> Self {
        Self { last_update, clock }
    }

    pub fn last_update(&self) -> Option<&Timestamp> {
        self.last_update.as_ref()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

impl UpdateListener for Revision {
    fn update_performed(&mut self) {
        let now = self.clock.now();
        trace!(last_update = %now, "Stamped modification");
        self.last_update = Some(now);
    }
}

impl fmt::Debug for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Revision")
            .field("last_update", &self.last_update)
            .finish_non_exhaustive()
    }
}

/// Mutable access to a child that notifies its owner on drop if it was
/// mutated.
///
/// Any mutable borrow of the child counts as a mutation, even one that writes
/// back the value already present, so a setter called through the guard
/// stamps the owner exactly like a setter on the owner itself. Reading through
/// the guard stamps nothing.
///
/// ```
/// use guidedoc::{Guide, Step};
///
/// let mut guide = Guide::new("g1");
/// guide.add_step(Step::action("s1"));
/// let before = guide.last_update().cloned();
///
/// if let Some(mut step) = guide.step_mut("s1") {
///     step.set_next("s2");
/// } // guard dropped here, guide stamped
///
/// assert!(guide.last_update().cloned() >= before);
/// assert_eq!(guide.get_step("s1").and_then(|s| s.next()), Some("s2"));
/// ```
pub struct Tracked<'a, T: Clone + PartialEq> {
    value: &'a mut T,
    before: T,
    mutated: bool,
    owner: &'a mut dyn UpdateListener,
}

impl<'a, T: Clone + PartialEq> Tracked<'a, T> {
    pub fn new(value: &'a mut T, owner: &'a mut dyn UpdateListener) -> Self {
        let before = value.clone();
        Self {
            value,
            before,
            mutated: false,
            owner,
        }
    }

    /// Returns true if the child differs from its state when the guard was created.
    pub fn is_changed(&self) -> bool {
        *self.value != self.before
    }

    /// Returns true if the child has been borrowed mutably through this guard.
    pub fn is_mutated(&self) -> bool {
        self.mutated
    }

    /// Puts the child back into its state when the guard was created.
    ///
    /// The owner is not notified on drop unless the child is mutated again.
    pub fn rollback(&mut self) {
        *self.value = self.before.clone();
        self.mutated = false;
    }
}

impl<T: Clone + PartialEq> Deref for Tracked<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T: Clone + PartialEq> DerefMut for Tracked<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.mutated = true;
        self.value
    }
}

impl<T: Clone + PartialEq> Drop for Tracked<'_, T> {
    fn drop(&mut self) {
        if self.mutated {
            self.owner.update_performed();
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug> fmt::Debug for Tracked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

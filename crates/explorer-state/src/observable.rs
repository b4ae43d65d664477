//! Observable set container with per-element change notifications.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::{Rc, Weak};

/// Receives fine-grained membership notifications from an [`ObservableSet`].
///
/// Observers only observe: they are handed the affected element, not the
/// set, so a notification can never re-enter the stores.
pub trait SetObserver<T> {
    fn item_added(&mut self, item: &T);
    fn item_removed(&mut self, item: &T);
}

/// A mutable set that notifies subscribers once per element actually added
/// or removed.
///
/// The per-element granularity is a contract, not an optimization: callers
/// replacing the contents diff against the current membership, so elements
/// that stay in the set produce no notification at all and dependents keyed
/// on individual elements are left untouched. No-op mutations (inserting a
/// present element, removing an absent one) notify nobody.
///
/// Observers are held weakly and pruned once dropped. Single-threaded by
/// construction (`Rc`/`Weak`, no locking).
pub struct ObservableSet<T> {
    items: HashSet<T>,
    observers: Vec<Weak<RefCell<dyn SetObserver<T>>>>,
}

impl<T> Default for ObservableSet<T> {
    fn default() -> Self {
        Self {
            items: HashSet::new(),
            observers: Vec::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableSet")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: Copy + Eq + Hash> ObservableSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element. Returns `true` (and notifies) if it was not present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.items.insert(item) {
            self.notify(|observer| observer.item_added(&item));
            true
        } else {
            false
        }
    }

    /// Remove an element. Returns `true` (and notifies) if it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        if self.items.remove(item) {
            self.notify(|observer| observer.item_removed(item));
            true
        } else {
            false
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Register an observer for future membership changes.
    ///
    /// Only a weak reference is kept; the subscription ends when the caller
    /// drops its `Rc`.
    pub fn subscribe<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: SetObserver<T> + 'static,
    {
        // Unsize the strong pointer first; `Rc::downgrade` cannot infer the
        // `dyn` target from a concrete `&Rc<RefCell<O>>` argument.
        let strong: Rc<RefCell<dyn SetObserver<T>>> = Rc::<RefCell<O>>::clone(observer);
        self.observers.push(Rc::downgrade(&strong));
    }

    fn notify(&mut self, mut event: impl FnMut(&mut dyn SetObserver<T>)) {
        self.observers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                event(&mut *observer.borrow_mut());
                true
            }
            None => false,
        });
    }
}

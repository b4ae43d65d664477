//! Selection bookkeeping for one selectable domain (clusters or documents).

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use crate::observable::{ObservableSet, SetObserver};

/// Tracks which items are currently selected.
///
/// Two instances exist per results view, one keyed by cluster id and one by
/// document id. Membership exactly reflects "currently selected"; order
/// carries no meaning.
#[derive(Debug)]
pub struct SelectionStore<T> {
    selected: ObservableSet<T>,
}

impl<T> Default for SelectionStore<T> {
    fn default() -> Self {
        Self {
            selected: ObservableSet::default(),
        }
    }
}

impl<T: Copy + Eq + Hash> SelectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an item.
    ///
    /// With `keep_selection` set this is a pure XOR toggle into the existing
    /// set (multi-select). Without it, single-select: clicking the sole
    /// selected item deselects it, clicking anything else collapses the
    /// selection to just that item.
    pub fn toggle(&mut self, item: T, keep_selection: bool) {
        if !keep_selection {
            if self.selected.len() == 1 && self.selected.contains(&item) {
                self.selected.remove(&item);
                return;
            }
            self.clear();
        }

        if self.selected.contains(&item) {
            self.selected.remove(&item);
        } else {
            self.selected.insert(item);
        }
    }

    /// Set the selection to exactly `items`.
    ///
    /// Applied as an incremental diff: members not in the new set are
    /// removed, new items are inserted. Items that stay selected are never
    /// removed-and-reinserted, so their observers see nothing.
    pub fn replace(&mut self, items: impl IntoIterator<Item = T>) {
        let incoming: HashSet<T> = items.into_iter().collect();

        let stale: Vec<T> = self
            .selected
            .iter()
            .copied()
            .filter(|item| !incoming.contains(item))
            .collect();
        for item in stale {
            self.selected.remove(&item);
        }

        for item in incoming {
            self.selected.insert(item);
        }
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.contains(item)
    }

    /// Deselect everything, one removal notification per element.
    pub fn clear(&mut self) {
        let all: Vec<T> = self.selected.iter().copied().collect();
        for item in all {
            self.selected.remove(&item);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.selected.iter()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn subscribe<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: SetObserver<T> + 'static,
    {
        self.selected.subscribe(observer);
    }
}

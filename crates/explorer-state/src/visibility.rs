//! Derived visibility of documents.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use explorer_model::{DocId, Document};

use crate::observable::{ObservableSet, SetObserver};

/// The set of documents currently eligible for display.
///
/// An empty set is the "no filter" sentinel: every document is visible.
/// A non-empty set means exactly these ids are visible.
#[derive(Debug, Default)]
pub struct VisibilityStore {
    visible: ObservableSet<DocId>,
}

impl VisibilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, document: &Document) -> bool {
        self.is_visible_id(document.id)
    }

    pub fn is_visible_id(&self, id: DocId) -> bool {
        self.visible.is_empty() || self.visible.contains(&id)
    }

    /// `true` when a filter is active (some selection narrowed the view).
    pub fn is_filtered(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Set the visible ids to exactly `new_ids`.
    ///
    /// Incremental diff, same contract as
    /// [`crate::SelectionStore::replace`]: ids that stay visible produce no
    /// notification.
    pub fn replace(&mut self, new_ids: &BTreeSet<DocId>) {
        let stale: Vec<DocId> = self
            .visible
            .iter()
            .copied()
            .filter(|id| !new_ids.contains(id))
            .collect();
        for id in stale {
            self.visible.remove(&id);
        }

        for id in new_ids {
            self.visible.insert(*id);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocId> {
        self.visible.iter()
    }

    pub fn subscribe<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: SetObserver<DocId> + 'static,
    {
        self.visible.subscribe(observer);
    }
}

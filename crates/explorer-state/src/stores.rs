//! The application-owned state context.
//!
//! [`SearchStores`] replaces the original ambient singletons with one
//! explicitly constructed object owned by the application. Every mutation
//! goes through it, and each mutating call reconciles document visibility
//! before returning, so the rendering layer always reads a fully-applied
//! state.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use explorer_model::{ClusterId, ClusterTree, DocId};
use tracing::{debug, warn};

use crate::observable::SetObserver;
use crate::selection::SelectionStore;
use crate::visibility::VisibilityStore;

/// All stores of one results view, kept mutually consistent.
///
/// Single-threaded by construction: the dataset is held behind `Rc` and
/// reconciliation runs synchronously on the mutating call. The underlying
/// sets are only reachable read-only; external code cannot bypass
/// reconciliation.
#[derive(Debug, Default)]
pub struct SearchStores {
    clusters: Option<Rc<ClusterTree>>,
    cluster_selection: SelectionStore<ClusterId>,
    document_selection: SelectionStore<DocId>,
    visibility: VisibilityStore,
}

impl SearchStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cluster_selection(&self) -> &SelectionStore<ClusterId> {
        &self.cluster_selection
    }

    pub fn document_selection(&self) -> &SelectionStore<DocId> {
        &self.document_selection
    }

    pub fn visibility(&self) -> &VisibilityStore {
        &self.visibility
    }

    pub fn clusters(&self) -> Option<&ClusterTree> {
        self.clusters.as_deref()
    }

    /// Install a new clustering result set.
    ///
    /// Identity comparison, not deep equality: a structurally identical but
    /// distinct tree still counts as a new dataset and clears the cluster
    /// selection. Passing the same `Rc` again is a no-op.
    pub fn set_clusters(&mut self, clusters: Rc<ClusterTree>) {
        let replaced = match &self.clusters {
            Some(previous) => !Rc::ptr_eq(previous, &clusters),
            None => true,
        };
        if !replaced {
            return;
        }

        debug!(
            top_level = clusters.clusters().len(),
            "cluster dataset replaced, resetting cluster selection"
        );
        self.cluster_selection.clear();
        self.clusters = Some(clusters);
        self.reconcile();
    }

    pub fn toggle_cluster(&mut self, id: ClusterId, keep_selection: bool) {
        self.cluster_selection.toggle(id, keep_selection);
        self.reconcile();
    }

    pub fn toggle_document(&mut self, id: DocId, keep_selection: bool) {
        self.document_selection.toggle(id, keep_selection);
        self.reconcile();
    }

    pub fn replace_cluster_selection(&mut self, ids: impl IntoIterator<Item = ClusterId>) {
        self.cluster_selection.replace(ids);
        self.reconcile();
    }

    pub fn replace_document_selection(&mut self, ids: impl IntoIterator<Item = DocId>) {
        self.document_selection.replace(ids);
        self.reconcile();
    }

    pub fn clear_cluster_selection(&mut self) {
        self.cluster_selection.clear();
        self.reconcile();
    }

    pub fn clear_document_selection(&mut self) {
        self.document_selection.clear();
        self.reconcile();
    }

    pub fn subscribe_cluster_selection<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: SetObserver<ClusterId> + 'static,
    {
        self.cluster_selection.subscribe(observer);
    }

    pub fn subscribe_document_selection<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: SetObserver<DocId> + 'static,
    {
        self.document_selection.subscribe(observer);
    }

    pub fn subscribe_visibility<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: SetObserver<DocId> + 'static,
    {
        self.visibility.subscribe(observer);
    }

    /// Recompute the visible-document set from the current selection.
    ///
    /// Documents implied by selected clusters (including all descendants)
    /// unioned with directly selected documents. An empty union leaves the
    /// visibility store in its "no filter" state.
    fn reconcile(&mut self) {
        let mut visible = BTreeSet::new();

        if let Some(tree) = &self.clusters {
            for id in self.cluster_selection.iter() {
                match tree.get(*id) {
                    Some(cluster) => cluster.collect_documents(&mut visible),
                    None => warn!(cluster = %id, "selected cluster missing from current dataset"),
                }
            }
        }

        visible.extend(self.document_selection.iter().copied());

        debug!(visible = visible.len(), "reconciled document visibility");
        self.visibility.replace(&visible);
    }
}

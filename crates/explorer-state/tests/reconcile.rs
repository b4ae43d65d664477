//! Tests for selection-driven visibility reconciliation.

use std::cell::RefCell;
use std::rc::Rc;

use explorer_model::{Cluster, ClusterId, ClusterTree, DocId};
use explorer_state::{SearchStores, SetObserver};

fn cluster(id: u32, label: &str, documents: &[u32], children: Vec<Cluster>) -> Cluster {
    Cluster {
        id: ClusterId::new(id),
        label: label.to_string(),
        score: 0.0,
        documents: documents.iter().copied().map(DocId::new).collect(),
        children,
    }
}

/// `{A: docs=[1,2], children=[{B: docs=[3]}]}` plus an unrelated cluster.
fn sample_tree() -> ClusterTree {
    let b = cluster(1, "B", &[3], vec![]);
    let a = cluster(0, "A", &[1, 2], vec![b]);
    let other = cluster(2, "Other", &[4], vec![]);
    ClusterTree::new(vec![a, other])
}

fn visible(stores: &SearchStores, ids: &[u32]) -> Vec<bool> {
    ids.iter()
        .map(|id| stores.visibility().is_visible_id(DocId::new(*id)))
        .collect()
}

#[test]
fn no_selection_shows_everything() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));

    assert_eq!(visible(&stores, &[1, 2, 3, 4, 99]), vec![true; 5]);
}

#[test]
fn selecting_a_cluster_reveals_its_descendant_documents() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));

    stores.toggle_cluster(ClusterId::new(0), false);

    assert_eq!(
        visible(&stores, &[1, 2, 3, 4]),
        vec![true, true, true, false]
    );
}

#[test]
fn directly_selected_documents_join_the_visible_set() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));

    stores.toggle_cluster(ClusterId::new(0), false);
    stores.toggle_document(DocId::new(5), true);

    assert_eq!(
        visible(&stores, &[1, 2, 3, 5, 4]),
        vec![true, true, true, true, false]
    );
}

#[test]
fn deselecting_everything_drops_the_filter() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));

    stores.toggle_cluster(ClusterId::new(0), false);
    assert!(!stores.visibility().is_visible_id(DocId::new(4)));

    stores.toggle_cluster(ClusterId::new(0), false);
    assert!(stores.cluster_selection().is_empty());
    assert!(stores.visibility().is_visible_id(DocId::new(4)));
}

#[test]
fn document_selection_alone_filters_the_view() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));

    stores.toggle_document(DocId::new(4), false);

    assert_eq!(visible(&stores, &[4, 1]), vec![true, false]);
}

#[test]
fn replacing_the_dataset_clears_cluster_selection() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));
    stores.toggle_cluster(ClusterId::new(0), false);
    assert!(stores.cluster_selection().is_selected(&ClusterId::new(0)));

    // Structurally identical, but a distinct allocation: still a new dataset.
    stores.set_clusters(Rc::new(sample_tree()));

    assert!(stores.cluster_selection().is_empty());
    assert!(stores.visibility().is_visible_id(DocId::new(4)));
}

#[test]
fn installing_the_same_dataset_keeps_the_selection() {
    let mut stores = SearchStores::new();
    let tree = Rc::new(sample_tree());
    stores.set_clusters(Rc::clone(&tree));
    stores.toggle_cluster(ClusterId::new(0), false);

    stores.set_clusters(Rc::clone(&tree));

    assert!(stores.cluster_selection().is_selected(&ClusterId::new(0)));
    assert!(!stores.visibility().is_visible_id(DocId::new(4)));
}

#[test]
fn dataset_replacement_keeps_document_selection() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));
    stores.toggle_document(DocId::new(5), true);

    stores.set_clusters(Rc::new(sample_tree()));

    assert!(stores.document_selection().is_selected(&DocId::new(5)));
    assert_eq!(visible(&stores, &[5, 1]), vec![true, false]);
}

#[derive(Default)]
struct Recorder {
    added: Vec<u32>,
    removed: Vec<u32>,
}

impl SetObserver<DocId> for Recorder {
    fn item_added(&mut self, item: &DocId) {
        self.added.push(item.value());
    }

    fn item_removed(&mut self, item: &DocId) {
        self.removed.push(item.value());
    }
}

#[test]
fn reconciliation_only_touches_changed_documents() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));
    stores.toggle_cluster(ClusterId::new(0), false);

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    stores.subscribe_visibility(&recorder);

    // Documents 1..=3 are already visible; only 5 should be announced.
    stores.toggle_document(DocId::new(5), true);

    let recorder = recorder.borrow();
    assert_eq!(recorder.added, vec![5]);
    assert!(recorder.removed.is_empty());
}

#[test]
fn selecting_a_document_already_visible_changes_nothing() {
    let mut stores = SearchStores::new();
    stores.set_clusters(Rc::new(sample_tree()));
    stores.toggle_cluster(ClusterId::new(0), false);

    let recorder = Rc::new(RefCell::new(Recorder::default()));
    stores.subscribe_visibility(&recorder);

    stores.toggle_document(DocId::new(2), true);

    let recorder = recorder.borrow();
    assert!(recorder.added.is_empty());
    assert!(recorder.removed.is_empty());
}

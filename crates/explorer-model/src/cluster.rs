//! Cluster hierarchy produced by the clustering engine.
//!
//! The tree is read-only input to the state core: the engine builds it, the
//! UI selects into it. [`ClusterTree::from_engine_response`] parses the raw
//! JSON shape the engine returns and assigns stable preorder ids.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::ModelError;
use crate::ids::{ClusterId, DocId};

/// A single search hit.
///
/// Only `id` participates in selection and visibility logic; the remaining
/// fields are carried for the results list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Document {
    pub fn new(id: DocId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            snippet: None,
        }
    }
}

/// One node of the cluster hierarchy.
///
/// `documents` lists the ids directly contained in this node; `children`
/// holds sub-clusters. Clusters form a finite tree, never a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: ClusterId,
    pub label: String,
    pub score: f64,
    pub documents: Vec<DocId>,
    pub children: Vec<Cluster>,
}

impl Cluster {
    /// Collect this cluster's document ids and those of all descendants.
    pub fn collect_documents(&self, out: &mut BTreeSet<DocId>) {
        out.extend(self.documents.iter().copied());
        for child in &self.children {
            child.collect_documents(out);
        }
    }
}

/// One node of the engine's raw JSON response, before ids are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCluster {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub documents: Vec<u32>,
    #[serde(default)]
    pub clusters: Vec<RawCluster>,
}

#[derive(Debug, Deserialize)]
struct EngineResponse {
    #[serde(default)]
    clusters: Vec<RawCluster>,
}

/// The current clustering result set: the top-level clusters plus lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterTree {
    clusters: Vec<Cluster>,
}

impl ClusterTree {
    /// Build a tree from already-constructed clusters.
    ///
    /// Callers are responsible for id uniqueness within the tree.
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    /// Parse the engine's JSON response and assign preorder ids.
    pub fn from_engine_response(json: &str) -> Result<Self, ModelError> {
        let response: EngineResponse = serde_json::from_str(json)?;
        Ok(Self::from_raw(response.clusters))
    }

    /// Convert raw engine nodes into a tree with preorder ids.
    pub fn from_raw(raw: Vec<RawCluster>) -> Self {
        let mut next_id = 0u32;
        let clusters = raw
            .into_iter()
            .map(|node| Self::build(node, &mut next_id))
            .collect();
        Self { clusters }
    }

    fn build(raw: RawCluster, next_id: &mut u32) -> Cluster {
        let id = ClusterId::new(*next_id);
        *next_id += 1;
        Cluster {
            id,
            label: raw.labels.join(", "),
            score: raw.score,
            documents: raw.documents.into_iter().map(DocId::new).collect(),
            children: raw
                .clusters
                .into_iter()
                .map(|child| Self::build(child, next_id))
                .collect(),
        }
    }

    /// Top-level clusters.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Find a cluster anywhere in the tree (depth-first).
    pub fn get(&self, id: ClusterId) -> Option<&Cluster> {
        fn find(clusters: &[Cluster], id: ClusterId) -> Option<&Cluster> {
            for cluster in clusters {
                if cluster.id == id {
                    return Some(cluster);
                }
                if let Some(found) = find(&cluster.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find(&self.clusters, id)
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "clusters": [
            {
                "labels": ["Data", "Mining"],
                "score": 0.8,
                "documents": [1, 2],
                "clusters": [
                    { "labels": ["Text"], "documents": [3] }
                ]
            },
            { "labels": ["Other"], "documents": [4] }
        ]
    }"#;

    #[test]
    fn parses_engine_response_with_preorder_ids() {
        let tree = ClusterTree::from_engine_response(RESPONSE).expect("parse response");

        let top = tree.clusters();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, ClusterId::new(0));
        assert_eq!(top[0].label, "Data, Mining");
        assert_eq!(top[0].children[0].id, ClusterId::new(1));
        assert_eq!(top[1].id, ClusterId::new(2));
    }

    #[test]
    fn lookup_finds_nested_clusters() {
        let tree = ClusterTree::from_engine_response(RESPONSE).expect("parse response");

        let nested = tree.get(ClusterId::new(1)).expect("nested cluster");
        assert_eq!(nested.label, "Text");
        assert!(tree.get(ClusterId::new(99)).is_none());
    }

    #[test]
    fn collect_documents_includes_descendants() {
        let tree = ClusterTree::from_engine_response(RESPONSE).expect("parse response");

        let mut docs = BTreeSet::new();
        tree.clusters()[0].collect_documents(&mut docs);
        let docs: Vec<u32> = docs.into_iter().map(DocId::value).collect();
        assert_eq!(docs, vec![1, 2, 3]);
    }

    #[test]
    fn malformed_response_is_an_error() {
        assert!(ClusterTree::from_engine_response("{ not json").is_err());
    }
}

//! Data model for the cluster explorer results view.
//!
//! This crate defines the read-only inputs the UI state core works with:
//!
//! - **Ids**: [`DocId`] and [`ClusterId`], the opaque identities selection
//!   and visibility sets are keyed by
//! - **Cluster tree**: [`Cluster`] / [`ClusterTree`], the hierarchy produced
//!   by the clustering engine
//! - **Failures**: [`ErrorPayload`] as received from the backend, classified
//!   once at the boundary into a [`ClusteringFailure`]

pub mod cluster;
pub mod error;
pub mod ids;

pub use cluster::{Cluster, ClusterTree, Document, RawCluster};
pub use error::{ClusteringFailure, EngineErrorBody, ErrorPayload, ModelError};
pub use ids::{ClusterId, DocId};

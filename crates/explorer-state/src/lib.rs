//! Reactive UI state for the cluster explorer results view.
//!
//! The architecture separates concerns into:
//!
//! - **ObservableSet**: mutable set with per-element change notifications
//! - **SelectionStore**: toggle/replace/clear semantics over an observable
//!   set (one instance each for clusters and documents)
//! - **VisibilityStore**: the derived set of currently visible documents
//! - **SearchStores**: the owning context that routes every mutation and
//!   reconciles visibility before the mutating call returns
//!
//! Everything here is single-threaded and synchronous: a mutation's
//! dependent recomputation completes before control returns to the caller,
//! so readers never observe torn state.

pub mod observable;
pub mod selection;
pub mod stores;
pub mod visibility;

pub use observable::{ObservableSet, SetObserver};
pub use selection::SelectionStore;
pub use stores::SearchStores;
pub use visibility::VisibilityStore;

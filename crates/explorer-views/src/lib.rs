//! Presentation layer glue for the cluster explorer.
//!
//! Pure mappings from domain values to displayable structures; the actual
//! rendering (widgets, styling) lives outside this workspace.

pub mod error_view;

pub use error_view::{Block, ErrorView, soft_break};

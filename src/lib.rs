//! rstree: hierarchical record tables.
//!
//! A tree of records (roots owning named groups of child records,
//! recursively) with identity-based removal: deleting one row never
//! disturbs other rows that happen to share the same `ID` value.
//!
//! Layers:
//! - [`domain`] — the record store, the removal algorithm, derived state
//! - [`view`] — expand/collapse state, row flattening, rendering
//! - [`cli`] — argument parsing and command dispatch

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;
pub mod view;

pub use domain::{FieldValue, Node, NodeId, StoreError, StoreResult, TreeStore};
pub use view::ExpandState;

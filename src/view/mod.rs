//! View layer: flattening, expansion state, and terminal rendering
//!
//! Consumes read snapshots from the store; never mutates the tree
//! directly.

pub mod expand;
pub mod table;
pub mod tree_fmt;

pub use expand::ExpandState;
pub use table::{render_table, visible_rows, Row};
pub use tree_fmt::TreeStringConvert;

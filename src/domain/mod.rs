//! Domain layer: the record tree and its mutation rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! terminal rendering).

pub mod error;
pub mod node;
pub mod payload;
pub mod store;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use node::{ChildGroup, Node, NodeId};
pub use payload::{parse_payload, RawGroup, RawNode};
pub use store::{TreeIter, TreeStore};
pub use value::FieldValue;

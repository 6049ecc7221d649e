//! Domain-level errors (no I/O concerns)

use thiserror::Error;

/// Errors surfaced by the record store.
///
/// Removing a stale id is deliberately not represented here: it is a
/// silent no-op, so duplicate delete requests on the same row are safe.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

//! Error types for grid construction and queries.

use thiserror::Error;

/// Errors surfaced by [`Grid`](crate::Grid) operations.
///
/// Reading or writing outside the grid is not an error; those calls return
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row does not have the same length as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The caller asked for something structurally impossible.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

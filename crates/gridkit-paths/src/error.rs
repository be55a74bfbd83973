//! Error types for path searches.

use gridkit_core::Coord;
use thiserror::Error;

/// Errors surfaced by the shortest-path engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The start lies outside the grid, or the frontier emptied before any
    /// requested destination was reached.
    #[error("route blocked: no destination reachable from {from}")]
    RouteBlocked { from: Coord },
}

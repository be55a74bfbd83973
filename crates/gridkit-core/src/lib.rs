//! **gridkit-core**: rectangular grids for discrete puzzles.
//!
//! This crate provides the foundational types of the *gridkit* workspace:
//! coordinates and compass directions, a generic [`Grid`] with rotation,
//! subgrid windows and neighbour queries, and [`Region`] decomposition with
//! area, perimeter and side counting.

pub mod disjoint;
pub mod error;
pub mod geom;
pub mod grid;
pub mod region;

pub use disjoint::DisjointSet;
pub use error::GridError;
pub use geom::{Bounds, Coord, Direction, Directions};
pub use grid::{Cells, Grid, Rotation, Subgrids};
pub use region::{Region, regions_of};

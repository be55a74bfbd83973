//! Shortest paths over grids.
//!
//! This crate provides Dijkstra's algorithm for gridkit grids:
//!
//! - **Single route** to one destination or the nearest of several
//!   ([`Map::shortest_path`], [`Map::shortest_path_to_any`])
//! - **All tied routes** of minimum cost ([`Map::shortest_paths`],
//!   [`Map::shortest_paths_to_any`])
//! - **Route cost** only ([`Map::distance`])
//!
//! [`Map`] carries the adjacency rule: obstacle-avoiding unit steps by
//! default, or any weighted rule installed with [`Map::set_neighbours_of`].
//! The free functions in [`dijkstra`] run the same search over any
//! [`Pather`].

pub mod dijkstra;
mod error;
mod map;
mod node;
mod traits;

pub use error::PathError;
pub use map::{Map, NeighboursOf};
pub use traits::{Cost, Pather, Step};

//! Contiguous regions: flood fill, area, perimeter and side counting.
//!
//! A [`Region`] is a frozen set of coordinates. Once built it no longer
//! refers to the grid it came from, so later writes to that grid do not
//! affect it.

use std::collections::{BTreeSet, HashMap};

use crate::disjoint::DisjointSet;
use crate::geom::{Coord, Direction};
use crate::grid::Grid;

/// A set of coordinates, normally one maximal group of cardinally adjacent
/// cells sharing a value.
///
/// Equality and hashing depend only on which coordinates are members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    cells: BTreeSet<Coord>,
}

impl Region {
    /// A region made of exactly `coords`, with no connectivity check.
    pub fn new(coords: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            cells: coords.into_iter().collect(),
        }
    }

    /// The connected component of `grid` containing `start`: every cell
    /// reachable through cardinal steps between equal values.
    ///
    /// Returns `None` if `start` is outside the grid.
    pub fn flood<V: PartialEq>(grid: &Grid<V>, start: Coord) -> Option<Self> {
        grid.cell(start)?;
        let mut visited = vec![false; grid.len()];
        Some(flood_from(grid, start, &mut visited))
    }

    /// Number of cells in the region.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether the region has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` belongs to the region.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.cells.contains(&p)
    }

    /// Member coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Boundary edges as `(inside cell, outward direction)` pairs.
    fn boundary(&self) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        self.cells.iter().flat_map(move |&p| {
            Direction::CARDINAL
                .into_iter()
                .filter(move |&d| !self.contains(p.step(d)))
                .map(move |d| (p, d))
        })
    }

    /// Count of unit cell sides that face a non-member (or the edge of the
    /// grid).
    pub fn perimeter(&self) -> usize {
        self.boundary().count()
    }

    /// Number of straight sides of the region's outline.
    ///
    /// Unit boundary edges facing the same way are merged when they sit next
    /// to each other along the perpendicular axis, so a straight wall of any
    /// length counts once. Holes contribute their own sides.
    pub fn edge_count(&self) -> usize {
        let edges: Vec<(Coord, Direction)> = self.boundary().collect();
        let index: HashMap<(Coord, Direction), usize> =
            edges.iter().enumerate().map(|(i, &e)| (e, i)).collect();

        let mut sides = DisjointSet::new(edges.len());
        for (i, &(p, d)) in edges.iter().enumerate() {
            let along = p.step(d.turn_right());
            if let Some(&j) = index.get(&(along, d)) {
                sides.union(i, j);
            }
        }
        sides.count()
    }
}

impl FromIterator<Coord> for Region {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Partition every cell of `grid` into maximal regions of equal,
/// cardinally adjacent values.
///
/// Regions come back in discovery order: seeds are taken in row-major
/// order, so the first region contains `(0, 0)`.
pub fn regions_of<V: PartialEq>(grid: &Grid<V>) -> Vec<Region> {
    let mut visited = vec![false; grid.len()];
    let mut regions = Vec::new();
    for (i, start) in grid.bounds().iter().enumerate() {
        if visited[i] {
            continue;
        }
        regions.push(flood_from(grid, start, &mut visited));
    }
    regions
}

impl<V: PartialEq> Grid<V> {
    /// See [`regions_of`].
    pub fn regions(&self) -> Vec<Region> {
        regions_of(self)
    }
}

/// Iterative DFS from an in-bounds `start`, marking members in `visited`
/// (indexed row-major).
fn flood_from<V: PartialEq>(grid: &Grid<V>, start: Coord, visited: &mut [bool]) -> Region {
    let width = grid.width();
    let idx = |p: Coord| p.row as usize * width + p.col as usize;

    let mut cells = BTreeSet::new();
    let Some(value) = grid.cell(start) else {
        return Region { cells };
    };

    let mut stack = vec![start];
    visited[idx(start)] = true;
    cells.insert(start);

    while let Some(cp) = stack.pop() {
        for np in cp.neighbors_4() {
            if grid.cell(np) != Some(value) {
                continue;
            }
            let ni = idx(np);
            if !visited[ni] {
                visited[ni] = true;
                stack.push(np);
                cells.insert(np);
            }
        }
    }

    Region { cells }
}

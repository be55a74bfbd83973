//! [`Map`]: a [`Grid`] that knows how to move across itself.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use gridkit_core::{Coord, Directions, Grid, GridError};

use crate::dijkstra;
use crate::error::PathError;
use crate::traits::{Pather, Step};

/// Custom adjacency: the weighted steps leaving a coordinate.
pub type NeighboursOf<V> = Rc<dyn Fn(&Map<V>, Coord) -> Vec<Step>>;

/// A grid plus an adjacency rule for shortest-path queries.
///
/// By default every in-bounds neighbour (cardinal only, unless configured
/// otherwise) whose value is not the obstacle marker can be entered at unit
/// cost. [`set_neighbours_of`](Map::set_neighbours_of) swaps in an arbitrary
/// rule. All [`Grid`] operations are available through `Deref`.
#[derive(Clone)]
pub struct Map<V> {
    grid: Grid<V>,
    obstacle: V,
    directions: Directions,
    neighbours_of: Option<NeighboursOf<V>>,
}

impl<V> Map<V> {
    /// Wrap `grid`, treating cells equal to `obstacle` as impassable.
    pub fn new(grid: Grid<V>, obstacle: V) -> Self {
        Self {
            grid,
            obstacle,
            directions: Directions::CARDINAL,
            neighbours_of: None,
        }
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid<V> {
        &self.grid
    }

    /// Unwrap into the underlying grid.
    pub fn into_grid(self) -> Grid<V> {
        self.grid
    }

    /// The impassable cell value of the default rule.
    #[inline]
    pub fn obstacle(&self) -> &V {
        &self.obstacle
    }

    /// Directions considered by the default rule, and reported to custom
    /// rules.
    #[inline]
    pub fn directions(&self) -> Directions {
        self.directions
    }

    /// Change the directions used by the default rule.
    pub fn set_directions(&mut self, dirs: Directions) -> &mut Self {
        self.directions = dirs;
        self
    }

    /// Replace the adjacency rule.
    ///
    /// `f` receives the map and a coordinate and returns the reachable
    /// neighbours with their edge costs. `dirs` is stored and available to
    /// `f` through [`directions`](Map::directions).
    pub fn set_neighbours_of(
        &mut self,
        f: impl Fn(&Map<V>, Coord) -> Vec<Step> + 'static,
        dirs: Directions,
    ) -> &mut Self {
        self.neighbours_of = Some(Rc::new(f));
        self.directions = dirs;
        self
    }

    /// Go back to the default obstacle rule.
    pub fn clear_neighbours_of(&mut self) -> &mut Self {
        self.neighbours_of = None;
        self
    }
}

impl Map<char> {
    /// Parse puzzle text into a map whose walls are `'#'`.
    pub fn from_input(input: &str) -> Result<Self, GridError> {
        Ok(Self::new(Grid::from_input(input)?, '#'))
    }
}

impl<V: PartialEq> Map<V> {
    /// Searches may only start on the grid.
    fn check_start(&self, from: Coord) -> Result<(), PathError> {
        if self.grid.beyond(from) {
            return Err(PathError::RouteBlocked { from });
        }
        Ok(())
    }

    /// Cheapest route from `from` to `to`, both included.
    ///
    /// A `from` outside the grid fails with [`PathError::RouteBlocked`].
    pub fn shortest_path(&self, from: Coord, to: Coord) -> Result<Vec<Coord>, PathError> {
        self.check_start(from)?;
        dijkstra::shortest_path(self, from, &[to])
    }

    /// Cheapest route from `from` to whichever of `to` is reached first.
    pub fn shortest_path_to_any(&self, from: Coord, to: &[Coord]) -> Result<Vec<Coord>, PathError> {
        self.check_start(from)?;
        dijkstra::shortest_path(self, from, to)
    }

    /// Every cheapest route from `from` to `to`.
    pub fn shortest_paths(&self, from: Coord, to: Coord) -> Result<Vec<Vec<Coord>>, PathError> {
        self.check_start(from)?;
        dijkstra::shortest_paths(self, from, &[to])
    }

    /// Every cheapest route from `from` to whichever of `to` is reached first.
    pub fn shortest_paths_to_any(
        &self,
        from: Coord,
        to: &[Coord],
    ) -> Result<Vec<Vec<Coord>>, PathError> {
        self.check_start(from)?;
        dijkstra::shortest_paths(self, from, to)
    }

    /// Total edge cost of the cheapest route from `from` to `to`.
    pub fn distance(&self, from: Coord, to: Coord) -> Result<u64, PathError> {
        self.check_start(from)?;
        dijkstra::distance(self, from, &[to])
    }
}

impl<V: PartialEq> Pather for Map<V> {
    fn steps(&self, p: Coord, buf: &mut Vec<Step>) {
        match &self.neighbours_of {
            Some(f) => buf.extend(f(self, p)),
            None => buf.extend(
                self.grid
                    .neighbours_where(p, self.directions, |v| *v != self.obstacle)
                    .into_iter()
                    .map(Step::unit),
            ),
        }
    }
}

impl<V> Deref for Map<V> {
    type Target = Grid<V>;

    fn deref(&self) -> &Grid<V> {
        &self.grid
    }
}

impl<V> DerefMut for Map<V> {
    fn deref_mut(&mut self) -> &mut Grid<V> {
        &mut self.grid
    }
}

impl<V: fmt::Debug> fmt::Debug for Map<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("grid", &self.grid)
            .field("obstacle", &self.obstacle)
            .field("directions", &self.directions)
            .field("custom_neighbours", &self.neighbours_of.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HILL: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    const RISK: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    #[test]
    fn default_rule_walks_around_walls() {
        let map = Map::from_input("S.#\n..#\n..E").unwrap();
        let from = map.locate(&'S').unwrap();
        let to = map.locate(&'E').unwrap();
        let path = map.shortest_path(from, to).unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|&p| map.cell(p) != Some(&'#')));
        assert_eq!(map.distance(from, to).unwrap(), 4);
    }

    #[test]
    fn wall_blocks_route() {
        let map = Map::from_input(".#.\n.#.\n.#.").unwrap();
        let err = map
            .shortest_path(Coord::new(0, 0), Coord::new(0, 2))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::RouteBlocked {
                from: Coord::new(0, 0)
            }
        );
        assert!(
            map.shortest_paths(Coord::new(0, 0), Coord::new(2, 2))
                .is_err()
        );
    }

    #[test]
    fn start_outside_grid_is_blocked() {
        let map = Map::from_input("..\n..").unwrap();
        let outside = Coord::new(-1, 0);
        let blocked = Err(PathError::RouteBlocked { from: outside });
        assert_eq!(map.shortest_path(outside, Coord::new(1, 1)), blocked);
        assert!(map.shortest_paths(outside, Coord::new(1, 1)).is_err());
        assert!(
            map.shortest_path_to_any(Coord::new(0, 2), &[Coord::ZERO])
                .is_err()
        );
        assert!(map.distance(Coord::new(2, 0), Coord::ZERO).is_err());
        // A start on the grid may still aim beyond it; that target is never
        // reached.
        assert!(map.shortest_path(Coord::ZERO, outside).is_err());
    }

    #[test]
    fn ordinal_moves_cut_corners() {
        let mut map = Map::from_input("...\n.#.\n...").unwrap();
        assert_eq!(
            map.distance(Coord::new(0, 0), Coord::new(2, 2)).unwrap(),
            4
        );
        map.set_directions(Directions::ALL);
        // (1,1) is a wall, so the diagonal shortcut goes around it.
        assert_eq!(
            map.distance(Coord::new(0, 0), Coord::new(2, 2)).unwrap(),
            3
        );
    }

    #[test]
    fn concentric_rings_to_centre() {
        let grid = Grid::from_fn(5, 5, |p| {
            let ring = (p.row - 2).abs().max((p.col - 2).abs());
            2 - ring
        });
        let map = Map::new(grid, -1);
        let path = map.shortest_path(Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(path.last(), Some(&Coord::new(2, 2)));
    }

    #[test]
    fn height_gated_custom_adjacency() {
        let mut map = Map::from_input(HILL).unwrap();
        let start = map.locate(&'S').unwrap();
        let end = map.locate(&'E').unwrap();
        map.set_cell(start, 'a');
        map.set_cell(end, 'z');

        map.set_neighbours_of(
            |m, p| {
                let Some(&here) = m.cell(p) else {
                    return Vec::new();
                };
                m.neighbours_where(p, m.directions(), |&h| h as u32 <= here as u32 + 1)
                    .into_iter()
                    .map(Step::unit)
                    .collect()
            },
            Directions::CARDINAL,
        );

        let path = map.shortest_path(start, end).unwrap();
        assert_eq!(path.len(), 32);
        assert_eq!(map.distance(start, end).unwrap(), 31);

        // Any of the lowest squares may start the walk; search backwards.
        map.set_neighbours_of(
            |m, p| {
                let Some(&here) = m.cell(p) else {
                    return Vec::new();
                };
                m.neighbours_where(p, m.directions(), |&h| here as u32 <= h as u32 + 1)
                    .into_iter()
                    .map(Step::unit)
                    .collect()
            },
            Directions::CARDINAL,
        );
        let lows = map.locate_all(&'a');
        let best = map.shortest_path_to_any(end, &lows).unwrap();
        assert_eq!(best.len() - 1, 29);
    }

    #[test]
    fn weighted_custom_adjacency() {
        let digits = Grid::from_input(RISK)
            .unwrap()
            .map(|c| c.to_digit(10).unwrap_or(9));
        let mut map = Map::new(digits, 0);
        map.set_neighbours_of(
            |m, p| {
                m.neighbours(p, m.directions())
                    .into_iter()
                    .filter_map(|n| m.cell(n).map(|&risk| Step::new(n, risk)))
                    .collect()
            },
            Directions::CARDINAL,
        );
        let end = Coord::new(9, 9);
        assert_eq!(map.distance(Coord::ZERO, end).unwrap(), 40);

        map.clear_neighbours_of();
        assert_eq!(map.distance(Coord::ZERO, end).unwrap(), 18);
    }

    #[test]
    fn shortest_paths_to_any_uses_reached_target() {
        let map = Map::from_input("....\n....").unwrap();
        let targets = [Coord::new(1, 3), Coord::new(1, 1)];
        let paths = map.shortest_paths_to_any(Coord::ZERO, &targets).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.last() == Some(&Coord::new(1, 1))));
        let one = map.shortest_path_to_any(Coord::ZERO, &targets).unwrap();
        assert_eq!(one, paths[0]);
    }

    #[test]
    fn map_derefs_to_grid() {
        let mut map = Map::from_input("ab\ncd").unwrap();
        assert_eq!(map.width(), 2);
        map.set_cell(Coord::ZERO, '#');
        assert_eq!(map.grid().cell(Coord::ZERO), Some(&'#'));
        assert_eq!(map.obstacle(), &'#');
        assert_eq!(map.into_grid().to_string(), "#b\ncd");
    }
}

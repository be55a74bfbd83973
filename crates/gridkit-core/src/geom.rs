//! Geometry primitives: [`Coord`], [`Direction`], [`Directions`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs, zero-indexed from the top-left corner.
//! Rows grow downwards and columns grow to the right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Components are signed so that probes just outside a
/// grid (row `-1`, say) can be expressed and answered with "absent".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    ///
    /// Arithmetic wraps at the `i32` limits. Grids are anchored at the origin
    /// and far smaller than `i32::MAX`, so a wrapped coordinate is always
    /// outside them.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row.wrapping_add(drow),
            col: self.col.wrapping_add(dcol),
        }
    }

    /// The coordinate one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.offset();
        self.shift(d.row, d.col)
    }

    /// The four cardinal neighbours, clockwise from north.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Direction::CARDINAL.map(|d| self.step(d))
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.row, rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row.wrapping_sub(rhs.row), self.col.wrapping_sub(rhs.col))
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise starting directly above.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The axis-aligned directions, clockwise from north.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row, col)` delta of a single step.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::North => Coord::new(-1, 0),
            Direction::NorthEast => Coord::new(-1, 1),
            Direction::East => Coord::new(0, 1),
            Direction::SouthEast => Coord::new(1, 1),
            Direction::South => Coord::new(1, 0),
            Direction::SouthWest => Coord::new(1, -1),
            Direction::West => Coord::new(0, -1),
            Direction::NorthWest => Coord::new(-1, -1),
        }
    }

    /// Whether the direction is axis-aligned.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    /// The direction 90° clockwise of this one.
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::NorthEast => Direction::SouthEast,
            Direction::East => Direction::South,
            Direction::SouthEast => Direction::SouthWest,
            Direction::South => Direction::West,
            Direction::SouthWest => Direction::NorthWest,
            Direction::West => Direction::North,
            Direction::NorthWest => Direction::NorthEast,
        }
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// Which families of neighbours to enumerate.
///
/// The default is cardinal only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directions {
    pub cardinal: bool,
    pub ordinal: bool,
}

impl Directions {
    /// North, east, south and west.
    pub const CARDINAL: Self = Self {
        cardinal: true,
        ordinal: false,
    };
    /// The four diagonals only.
    pub const ORDINAL: Self = Self {
        cardinal: false,
        ordinal: true,
    };
    /// All eight directions.
    pub const ALL: Self = Self {
        cardinal: true,
        ordinal: true,
    };

    /// Create a direction set.
    #[inline]
    pub const fn new(cardinal: bool, ordinal: bool) -> Self {
        Self { cardinal, ordinal }
    }

    /// Whether `dir` belongs to this set.
    #[inline]
    pub const fn includes(self, dir: Direction) -> bool {
        if dir.is_cardinal() {
            self.cardinal
        } else {
            self.ordinal
        }
    }

    /// The selected directions, clockwise starting directly above.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.includes(d))
    }
}

impl Default for Directions {
    #[inline]
    fn default() -> Self {
        Self::CARDINAL
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Bounds of a `height` × `width` grid anchored at the origin.
    #[inline]
    pub fn of_size(height: usize, width: usize) -> Self {
        Self {
            min: Coord::ZERO,
            max: Coord::new(height as i32, width as i32),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Row-major iterator over every coordinate in the rectangle.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

/// Row-major iterator over the coordinates in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.bounds.max.row || self.bounds.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.max.col {
            self.cur.col = self.bounds.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.max.row {
            return (0, Some(0));
        }
        let w = self.bounds.width() as usize;
        let remaining_in_row = (self.bounds.max.col - self.cur.col) as usize;
        let remaining_rows = (self.bounds.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn coord_orders_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbors_clockwise_from_north() {
        let p = Coord::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Coord::new(4, 5),
                Coord::new(5, 6),
                Coord::new(6, 5),
                Coord::new(5, 4)
            ]
        );
    }

    #[test]
    fn steps_past_i32_limits_wrap() {
        let edge = Coord::new(i32::MAX, 0);
        assert_eq!(edge.step(Direction::South), Coord::new(i32::MIN, 0));
        assert_eq!(edge.shift(1, -1), Coord::new(i32::MIN, -1));
        let corner = Coord::new(i32::MIN, i32::MIN);
        assert_eq!(corner.step(Direction::NorthWest), Coord::new(i32::MAX, i32::MAX));
        assert!(!Bounds::of_size(3, 3).contains(edge.step(Direction::South)));
    }

    #[test]
    fn direction_turns() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::West.turn_right(), Direction::North);
        assert_eq!(Direction::NorthEast.turn_right(), Direction::SouthEast);
        for d in Direction::ALL {
            let mut t = d;
            for _ in 0..4 {
                t = t.turn_right();
            }
            assert_eq!(t, d);
            assert_eq!(d.is_cardinal(), d.turn_right().is_cardinal());
        }
    }

    #[test]
    fn directions_filter() {
        let card: Vec<_> = Directions::CARDINAL.iter().collect();
        assert_eq!(card, Direction::CARDINAL.to_vec());
        let ord: Vec<_> = Directions::ORDINAL.iter().collect();
        assert_eq!(
            ord,
            vec![
                Direction::NorthEast,
                Direction::SouthEast,
                Direction::SouthWest,
                Direction::NorthWest
            ]
        );
        assert_eq!(Directions::ALL.iter().count(), 8);
        assert_eq!(Directions::new(false, false).iter().count(), 0);
        assert_eq!(Directions::default(), Directions::CARDINAL);
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::of_size(2, 3);
        assert_eq!(b.height(), 2);
        assert_eq!(b.width(), 3);
        assert_eq!(b.iter().len(), 6);
        assert!(b.contains(Coord::new(1, 2)));
        assert!(!b.contains(Coord::new(2, 0)));
        assert!(!b.contains(Coord::new(0, -1)));
    }

    #[test]
    fn bounds_iter_row_major() {
        let pts: Vec<_> = Bounds::of_size(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[2], Coord::new(0, 2));
        assert_eq!(pts[3], Coord::new(1, 0));
        assert_eq!(pts[5], Coord::new(1, 2));
    }

    #[test]
    fn empty_bounds_iter() {
        let b = Bounds::of_size(0, 4);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
        assert_eq!(b.iter().len(), 0);
    }
}

//! The [`Grid`] type: a rectangular 2D table of cell values.
//!
//! A `Grid` exclusively owns its backing buffer. Cloning a `Grid` yields a
//! deep copy, and every operation that produces a new grid (rotation,
//! subgrids, [`all_rotations`](Grid::all_rotations)) allocates fresh storage,
//! so two grids never alias each other's cells.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Bounds, BoundsIter, Coord, Directions};

/// Direction of a quarter turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    Clockwise,
    Anticlockwise,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of `V` values, addressed by zero-based [`Coord`]s.
///
/// The size is fixed at construction; cell contents may be changed in place.
/// Equality is structural: same dimensions and same values in the same
/// orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<V> {
    cells: Vec<V>,
    width: usize,
    height: usize,
}

impl<V> Grid<V> {
    /// Build a grid from a list of rows.
    ///
    /// Every row must have the same length as the first one. An input with
    /// no columns produces the empty grid.
    pub fn new(rows: Vec<Vec<V>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        let height = if width == 0 { 0 } else { rows.len() };
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Build a `height` × `width` grid by calling `f` for every coordinate in
    /// row-major order.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(Coord) -> V) -> Self {
        let (height, width) = if height == 0 || width == 0 {
            (0, 0)
        } else {
            (height, width)
        };
        Self {
            cells: Bounds::of_size(height, width).iter().map(&mut f).collect(),
            width,
            height,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The rectangle of valid coordinates.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::of_size(self.height, self.width)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, p: Coord) -> Option<usize> {
        if self.includes(p) {
            Some(p.row as usize * self.width + p.col as usize)
        } else {
            None
        }
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn includes(&self, p: Coord) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` lies outside the grid.
    #[inline]
    pub fn beyond(&self, p: Coord) -> bool {
        !self.includes(p)
    }

    /// The value at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn cell(&self, p: Coord) -> Option<&V> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the value at `p`.
    #[inline]
    pub fn cell_mut(&mut self, p: Coord) -> Option<&mut V> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Write `value` at `p` and return the stored value. Out-of-bounds writes
    /// leave the grid unchanged and return `None`.
    pub fn set_cell(&mut self, p: Coord, value: V) -> Option<&V> {
        let i = self.index(p)?;
        self.cells[i] = value;
        Some(&self.cells[i])
    }

    /// Row-major iterator over `(Coord, &V)` pairs.
    pub fn each_cell(&self) -> Cells<'_, V> {
        Cells {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    /// Replace every cell with `f(coord, old_value)`, visiting cells in
    /// row-major order and writing each result back before the next call.
    pub fn each_cell_mutate(&mut self, mut f: impl FnMut(Coord, &V) -> V) {
        for (i, p) in self.bounds().iter().enumerate() {
            self.cells[i] = f(p, &self.cells[i]);
        }
    }

    /// Top-to-bottom iterator over the rows.
    pub fn each_row(&self) -> std::slice::Chunks<'_, V> {
        self.cells.chunks(self.width.max(1))
    }

    /// The row at index `row`.
    pub fn row(&self, row: usize) -> Option<&[V]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Replace each row with `f(row_index, old_row)`.
    ///
    /// Every replacement must keep the grid's width; otherwise nothing is
    /// written and [`GridError::RaggedRow`] names the first offending row.
    pub fn each_row_mutate(
        &mut self,
        mut f: impl FnMut(usize, &[V]) -> Vec<V>,
    ) -> Result<(), GridError> {
        let mut replaced = Vec::with_capacity(self.cells.len());
        for (i, row) in self.each_row().enumerate() {
            let new_row = f(i, row);
            if new_row.len() != self.width {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: self.width,
                    found: new_row.len(),
                });
            }
            replaced.extend(new_row);
        }
        self.cells = replaced;
        Ok(())
    }

    /// Convert every cell, producing a grid of another value type.
    pub fn map<U>(&self, f: impl FnMut(&V) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Rotate the grid a quarter turn in place and return `self`.
    pub fn rotate(&mut self, rotation: Rotation) -> &mut Self {
        let (h, w) = (self.height, self.width);
        let mut slots: Vec<Option<V>> = std::mem::take(&mut self.cells)
            .into_iter()
            .map(Some)
            .collect();
        // The rotated grid is w rows by h columns; walk it row-major and pull
        // each value from its source index.
        self.cells = Bounds::of_size(w, h)
            .iter()
            .filter_map(|p| {
                let (r, c) = (p.row as usize, p.col as usize);
                let src = match rotation {
                    Rotation::Clockwise => (h - 1 - c) * w + r,
                    Rotation::Anticlockwise => c * w + (w - 1 - r),
                };
                slots[src].take()
            })
            .collect();
        self.width = h;
        self.height = w;
        self
    }

    /// Coordinates of the in-bounds neighbours of `p`, clockwise starting
    /// directly above.
    pub fn neighbours(&self, p: Coord, dirs: Directions) -> Vec<Coord> {
        self.neighbours_where(p, dirs, |_| true)
    }

    /// Like [`neighbours`](Self::neighbours), keeping only those whose value
    /// satisfies `keep`.
    pub fn neighbours_where(
        &self,
        p: Coord,
        dirs: Directions,
        keep: impl Fn(&V) -> bool,
    ) -> Vec<Coord> {
        dirs.iter()
            .map(|d| p.step(d))
            .filter(|&n| self.cell(n).is_some_and(&keep))
            .collect()
    }
}

impl<V: Clone> Grid<V> {
    /// A `height` × `width` grid with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: V) -> Self {
        Self::from_fn(height, width, |_| value.clone())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: V) {
        self.cells.fill(value);
    }

    /// A rotated copy; `self` is untouched.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut copy = self.clone();
        copy.rotate(rotation);
        copy
    }

    /// Independent copies of the grid at 0°, 90°, 180° and 270° clockwise.
    pub fn all_rotations(&self) -> [Grid<V>; 4] {
        let r0 = self.clone();
        let r1 = r0.rotated(Rotation::Clockwise);
        let r2 = r1.rotated(Rotation::Clockwise);
        let r3 = r2.rotated(Rotation::Clockwise);
        [r0, r1, r2, r3]
    }

    /// The `rows` × `cols` window whose top-left corner is `origin`.
    fn window(&self, origin: Coord, rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |p| {
            let i = (origin.row + p.row) as usize * self.width + (origin.col + p.col) as usize;
            self.cells[i].clone()
        })
    }

    /// Lazily yield every `rows` × `cols` window, top-left to bottom-right.
    ///
    /// Fails if either dimension is zero or larger than the grid.
    pub fn each_subgrid(&self, rows: usize, cols: usize) -> Result<Subgrids<'_, V>, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidArgument(format!(
                "subgrid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        if rows > self.height || cols > self.width {
            return Err(GridError::InvalidArgument(format!(
                "subgrid {rows}x{cols} exceeds grid {}x{}",
                self.height, self.width
            )));
        }
        let origins = Bounds::of_size(self.height - rows + 1, self.width - cols + 1);
        Ok(Subgrids {
            grid: self,
            rows,
            cols,
            origins: origins.iter(),
        })
    }

    /// Every `rows` × `cols` window, collected.
    pub fn subgrids(&self, rows: usize, cols: usize) -> Result<Vec<Self>, GridError> {
        Ok(self.each_subgrid(rows, cols)?.collect())
    }
}

impl<V: PartialEq> Grid<V> {
    /// First coordinate, in row-major order, holding `value`.
    pub fn locate(&self, value: &V) -> Option<Coord> {
        self.each_cell().find(|(_, v)| *v == value).map(|(p, _)| p)
    }

    /// Search for each of `values` in turn and return the first hit.
    ///
    /// Earlier entries of `values` take priority over scan position: a match
    /// for `values[0]` anywhere wins over a match for `values[1]` that comes
    /// sooner in row-major order.
    pub fn locate_any(&self, values: &[V]) -> Option<Coord> {
        values.iter().find_map(|v| self.locate(v))
    }

    /// Every coordinate holding `value`, in row-major order.
    pub fn locate_all(&self, value: &V) -> Vec<Coord> {
        self.locate_all_any(std::slice::from_ref(value))
    }

    /// Every coordinate holding any of `values`, in row-major order.
    pub fn locate_all_any(&self, values: &[V]) -> Vec<Coord> {
        self.each_cell()
            .filter(|(_, v)| values.contains(*v))
            .map(|(p, _)| p)
            .collect()
    }

    /// Count how many cells equal `value`.
    pub fn count(&self, value: &V) -> usize {
        self.cells.iter().filter(|v| *v == value).count()
    }
}

impl<V: PartialEq + Clone> Grid<V> {
    /// Whether some rotation of `other` equals `self`.
    pub fn matches_with_rotations(&self, other: &Grid<V>) -> bool {
        other.all_rotations().iter().any(|r| r == self)
    }
}

impl Grid<char> {
    /// Parse puzzle text: one row per non-empty line, one cell per character.
    pub fn from_input(input: &str) -> Result<Self, GridError> {
        Self::new(
            input
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().collect())
                .collect(),
        )
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s)
    }
}

impl<V> TryFrom<Vec<Vec<V>>> for Grid<V> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<V>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl<V: fmt::Display> fmt::Display for Grid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.each_row().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a Grid<V> {
    type Item = (Coord, &'a V);
    type IntoIter = Cells<'a, V>;

    fn into_iter(self) -> Cells<'a, V> {
        self.each_cell()
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, &V)` pairs in a [`Grid`].
#[derive(Clone)]
pub struct Cells<'a, V> {
    grid: &'a Grid<V>,
    inner: BoundsIter,
}

impl<'a, V> Iterator for Cells<'a, V> {
    type Item = (Coord, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let grid: &'a Grid<V> = self.grid;
        grid.cell(p).map(|v| (p, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Cells<'_, V> {}

/// Iterator over fixed-size windows of a [`Grid`], see
/// [`each_subgrid`](Grid::each_subgrid).
pub struct Subgrids<'a, V> {
    grid: &'a Grid<V>,
    rows: usize,
    cols: usize,
    origins: BoundsIter,
}

impl<V: Clone> Iterator for Subgrids<'_, V> {
    type Item = Grid<V>;

    fn next(&mut self) -> Option<Grid<V>> {
        let origin = self.origins.next()?;
        Some(self.grid.window(origin, self.rows, self.cols))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.origins.size_hint()
    }
}

impl<V: Clone> ExactSizeIterator for Subgrids<'_, V> {}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Grid<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.each_row())
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<V>>::deserialize(deserializer)?;
        Grid::new(rows).map_err(serde::de::Error::custom)
    }
}

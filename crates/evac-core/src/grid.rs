//! Grid geometry: cell locations, dimensions, and dense row-major storage.
//!
//! # Layout
//!
//! Every per-cell array in the workspace (occupancy, floor field, scenario
//! cell kinds) is a [`Grid<T>`]: a flat `Vec<T>` in row-major order, so
//! `(row, col)` lives at index `row * cols + col`.
//!
//! A [`Location`] is only ever constructed for in-bounds cells by the
//! helpers here ([`GridDims::check`], [`GridDims::offset`]).  Code that holds
//! a `Location` may index a grid of the same dimensions without re-checking.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{CoreError, CoreResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A `(row, column)` cell coordinate.  Equality is by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if `other` differs from `self` along both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Location) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Fixed `rows × cols` extent of a grid.  Both are non-zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    /// Create dimensions, rejecting empty grids.
    pub fn new(rows: usize, cols: usize) -> CoreResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::InvalidArgument(format!(
                "grid dimensions must be non-zero, got {rows}x{cols}"
            )));
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Validate a raw coordinate pair at an API boundary.
    pub fn check(self, row: usize, col: usize) -> CoreResult<Location> {
        if self.contains(row, col) {
            Ok(Location::new(row, col))
        } else {
            Err(CoreError::OutOfBounds { row, col, rows: self.rows, cols: self.cols })
        }
    }

    /// The cell at `loc + (dr, dc)`, or `None` if that falls off the grid.
    #[inline]
    pub fn offset(self, loc: Location, dr: isize, dc: isize) -> Option<Location> {
        let row = loc.row.checked_add_signed(dr)?;
        let col = loc.col.checked_add_signed(dc)?;
        self.contains(row, col).then_some(Location::new(row, col))
    }

    /// Row-major flat index of an in-bounds location.
    #[inline]
    pub fn index(self, loc: Location) -> usize {
        debug_assert!(self.contains(loc.row, loc.col), "{loc} outside {self}");
        loc.row * self.cols + loc.col
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn location(self, index: usize) -> Location {
        Location::new(index / self.cols, index % self.cols)
    }

    /// Every cell in row-major order.
    pub fn locations(self) -> impl Iterator<Item = Location> {
        (0..self.cell_count()).map(move |i| self.location(i))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ── Grid<T> ───────────────────────────────────────────────────────────────────

/// Dense row-major per-cell storage.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid<T> {
    dims:  GridDims,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(dims: GridDims, value: T) -> Self {
        Self { dims, cells: vec![value; dims.cell_count()] }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Build from a row-major `Vec`.  Fails if the length does not match.
    pub fn from_vec(dims: GridDims, cells: Vec<T>) -> CoreResult<Self> {
        if cells.len() != dims.cell_count() {
            return Err(CoreError::InvalidArgument(format!(
                "expected {} cells for a {dims} grid, got {}",
                dims.cell_count(),
                cells.len()
            )));
        }
        Ok(Self { dims, cells })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Bounds-checked read from raw coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.dims
            .contains(row, col)
            .then(|| &self.cells[row * self.dims.cols + col])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// `(Location, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &T)> + '_ {
        let dims = self.dims;
        self.cells.iter().enumerate().map(move |(i, v)| (dims.location(i), v))
    }
}

impl<T> Index<Location> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, loc: Location) -> &T {
        &self.cells[self.dims.index(loc)]
    }
}

impl<T> IndexMut<Location> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, loc: Location) -> &mut T {
        let i = self.dims.index(loc);
        &mut self.cells[i]
    }
}

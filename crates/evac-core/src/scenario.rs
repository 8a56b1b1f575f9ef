//! The scenario collaborator: grid extent plus blocked/exit predicates.
//!
//! The automaton never builds scenarios itself.  Anything implementing
//! [`Scenario`] can drive it; [`GridScenario`] is the stock implementation,
//! built programmatically via [`GridScenarioBuilder`] or parsed from an ASCII
//! map:
//!
//! ```text
//! ##########
//! #........E
//! #..##....#
//! ##########
//! ```
//!
//! | Char      | Cell             |
//! |-----------|------------------|
//! | `.`       | free             |
//! | `#`       | blocked          |
//! | `E`       | exit             |

use std::str::FromStr;

use crate::{CoreError, CoreResult, Grid, GridDims, Location};

// ── Scenario trait ────────────────────────────────────────────────────────────

/// Read-only description of the environment.
///
/// Coordinates passed to the predicates are always in bounds; callers check
/// against [`rows`](Self::rows) / [`cols`](Self::cols) first.
pub trait Scenario: Send + Sync {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn is_cell_blocked(&self, row: usize, col: usize) -> bool;

    fn is_cell_exit(&self, row: usize, col: usize) -> bool;

    /// Validated grid dimensions.  Fails for zero-sized scenarios.
    fn dims(&self) -> CoreResult<GridDims> {
        GridDims::new(self.rows(), self.cols())
    }

    /// All exit cells in row-major order.
    fn exits(&self) -> Vec<Location> {
        let mut out = Vec::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.is_cell_exit(row, col) {
                    out.push(Location::new(row, col));
                }
            }
        }
        out
    }
}

// ── GridScenario ──────────────────────────────────────────────────────────────

/// What occupies one scenario cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Blocked,
    Exit,
}

impl CellKind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellKind::Free),
            '#' => Some(CellKind::Blocked),
            'E' => Some(CellKind::Exit),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CellKind::Free => '.',
            CellKind::Blocked => '#',
            CellKind::Exit => 'E',
        }
    }
}

/// A scenario stored as a dense grid of [`CellKind`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct GridScenario {
    cells: Grid<CellKind>,
}

impl GridScenario {
    /// An all-free scenario of the given size.
    pub fn open(rows: usize, cols: usize) -> CoreResult<Self> {
        let dims = GridDims::new(rows, cols)?;
        Ok(Self { cells: Grid::filled(dims, CellKind::Free) })
    }

    /// Parse an ASCII map (see the module docs for the alphabet).
    ///
    /// Blank lines are skipped and trailing whitespace is ignored; every
    /// remaining line must have the same width.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let row: Vec<CellKind> = line
                .chars()
                .map(|c| {
                    CellKind::from_char(c).ok_or_else(|| CoreError::Parse {
                        line:    line_no + 1,
                        message: format!("unexpected cell character {c:?}"),
                    })
                })
                .collect::<CoreResult<_>>()?;

            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(CoreError::Parse {
                        line:    line_no + 1,
                        message: format!("row has {} cells, expected {w}", row.len()),
                    });
                }
                Some(_) => {}
            }
            cells.extend(row);
            rows += 1;
        }

        let dims = GridDims::new(rows, width.unwrap_or(0))?;
        Ok(Self { cells: Grid::from_vec(dims, cells)? })
    }

    /// Kind of the cell at an in-bounds location.
    #[inline]
    pub fn cell(&self, loc: Location) -> CellKind {
        self.cells[loc]
    }

    /// Number of cells that are neither blocked nor exits.
    pub fn free_cell_count(&self) -> usize {
        self.cells.as_slice().iter().filter(|&&k| k == CellKind::Free).count()
    }

    /// Render back to the ASCII map format accepted by [`parse`](Self::parse).
    pub fn to_ascii(&self) -> String {
        let dims = self.cells.dims();
        let mut out = String::with_capacity(dims.cell_count() + dims.rows());
        for row in 0..dims.rows() {
            for col in 0..dims.cols() {
                out.push(self.cells[Location::new(row, col)].as_char());
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for GridScenario {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl Scenario for GridScenario {
    fn rows(&self) -> usize {
        self.cells.dims().rows()
    }

    fn cols(&self) -> usize {
        self.cells.dims().cols()
    }

    fn is_cell_blocked(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col) == Some(&CellKind::Blocked)
    }

    fn is_cell_exit(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col) == Some(&CellKind::Exit)
    }
}

// ── GridScenarioBuilder ───────────────────────────────────────────────────────

/// Fluent builder for [`GridScenario`].
///
/// Coordinates are recorded as given and validated in [`build`](Self::build),
/// so the chain stays infallible.  Later writes to the same cell win.
///
/// ```rust
/// use evac_core::{GridScenarioBuilder, Scenario};
///
/// let scenario = GridScenarioBuilder::new(10, 10)
///     .exit(5, 9)
///     .wall(0, 4, 3, 4)
///     .build()
///     .unwrap();
/// assert!(scenario.is_cell_exit(5, 9));
/// assert!(scenario.is_cell_blocked(2, 4));
/// ```
pub struct GridScenarioBuilder {
    rows:   usize,
    cols:   usize,
    writes: Vec<(usize, usize, CellKind)>,
}

impl GridScenarioBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, writes: Vec::new() }
    }

    /// Mark one cell as blocked.
    pub fn block(mut self, row: usize, col: usize) -> Self {
        self.writes.push((row, col, CellKind::Blocked));
        self
    }

    /// Mark one cell as an exit.
    pub fn exit(mut self, row: usize, col: usize) -> Self {
        self.writes.push((row, col, CellKind::Exit));
        self
    }

    /// Block every cell in the inclusive rectangle `(r0, c0)..=(r1, c1)`.
    pub fn wall(mut self, r0: usize, c0: usize, r1: usize, c1: usize) -> Self {
        for row in r0.min(r1)..=r0.max(r1) {
            for col in c0.min(c1)..=c0.max(c1) {
                self.writes.push((row, col, CellKind::Blocked));
            }
        }
        self
    }

    /// Block the outermost ring of cells.
    pub fn border(self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        if rows == 0 || cols == 0 {
            return self;
        }
        self.wall(0, 0, 0, cols - 1)
            .wall(rows - 1, 0, rows - 1, cols - 1)
            .wall(0, 0, rows - 1, 0)
            .wall(0, cols - 1, rows - 1, cols - 1)
    }

    pub fn build(self) -> CoreResult<GridScenario> {
        let mut scenario = GridScenario::open(self.rows, self.cols)?;
        let dims = scenario.cells.dims();
        for (row, col, kind) in self.writes {
            let loc = dims.check(row, col)?;
            scenario.cells[loc] = kind;
        }
        Ok(scenario)
    }
}

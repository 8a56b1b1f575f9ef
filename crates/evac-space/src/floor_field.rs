//! Static floor field: a per-cell "closeness to exit" scalar.
//!
//! # Algorithm
//!
//! Multi-source Dijkstra over the non-blocked cells, seeded with every exit
//! at distance 0.  Edges follow the Moore neighbourhood regardless of how
//! agents move, weighted by the Euclidean offset:
//!
//! | Offset     | Weight |
//! |------------|--------|
//! | orthogonal | 1      |
//! | diagonal   | √2     |
//!
//! The frontier is a binary min-heap with lazy deletion: improving a cell
//! pushes a fresh entry instead of decreasing a key, so popped entries whose
//! distance no longer matches the recorded one are stale and skipped.
//!
//! Once the heap drains, each reachable cell gets
//!
//! ```text
//! field = 1 - distance / max_distance
//! ```
//!
//! so exits hold 1.0 and the farthest reachable cell holds 0.0.
//!
//! # Sentinels
//!
//! Blocked cells store `NaN` and are only exposed as `None`.  Non-blocked
//! cells with no path to an exit store 0.0 and are counted in
//! [`StaticFloorField::unreachable_count`].

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

use evac_core::{Grid, GridDims, Location, Scenario};

use crate::{Neighbourhood, SpaceError, SpaceResult};

// ── Heap entry ────────────────────────────────────────────────────────────────

/// `(distance, cell index)` ordered by distance, then index for
/// deterministic tie-breaking.  Wrapped in `Reverse` to make the max-heap a
/// min-heap.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    dist: f64,
    cell: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.cell.cmp(&other.cell))
    }
}

// ── StaticFloorField ──────────────────────────────────────────────────────────

/// Write-once desirability field, read by every agent every tick.
#[derive(Clone, Debug)]
pub struct StaticFloorField {
    values:       Grid<f64>,
    distances:    Grid<f64>,
    max_distance: f64,
    exit_count:   usize,
    unreachable:  usize,
}

impl StaticFloorField {
    /// Compute the field for `scenario`.
    ///
    /// Fails with [`SpaceError::NoExits`] if the scenario has no non-blocked
    /// exit cell, and with a core error for zero-sized scenarios.
    pub fn compute<S: Scenario + ?Sized>(scenario: &S) -> SpaceResult<Self> {
        let dims = scenario.dims()?;
        let blocked = Grid::from_vec(
            dims,
            dims.locations()
                .map(|loc| scenario.is_cell_blocked(loc.row, loc.col))
                .collect(),
        )?;

        let mut dist = Grid::filled(dims, f64::INFINITY);
        let mut heap: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
        let mut exit_count = 0;

        for loc in dims.locations() {
            if scenario.is_cell_exit(loc.row, loc.col) && !blocked[loc] {
                dist[loc] = 0.0;
                heap.push(Reverse(Frontier { dist: 0.0, cell: dims.index(loc) }));
                exit_count += 1;
            }
        }
        if exit_count == 0 {
            return Err(SpaceError::NoExits);
        }

        let mut max_distance: f64 = 0.0;

        while let Some(Reverse(Frontier { dist: d, cell })) = heap.pop() {
            let loc = dims.location(cell);

            // Skip stale heap entries.
            if d != dist[loc] {
                continue;
            }
            max_distance = max_distance.max(d);

            for next in Neighbourhood::Moore.neighbours(dims, loc) {
                if blocked[next] {
                    continue;
                }
                let step = if loc.is_diagonal_to(next) { SQRT_2 } else { 1.0 };
                let candidate = d + step;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    heap.push(Reverse(Frontier { dist: candidate, cell: dims.index(next) }));
                }
            }
        }

        let (values, unreachable) = normalize(dims, &blocked, &dist, max_distance);

        tracing::info!(
            %dims,
            exits = exit_count,
            max_distance,
            unreachable,
            "static floor field computed"
        );
        if unreachable > 0 {
            tracing::warn!(
                unreachable,
                "open cells with no path to an exit; their field value is 0"
            );
        }

        Ok(Self { values, distances: dist, max_distance, exit_count, unreachable })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.values.dims()
    }

    /// Field value in [0, 1], or `None` for blocked cells.
    #[inline]
    pub fn value(&self, loc: Location) -> Option<f64> {
        let v = self.values[loc];
        (!v.is_nan()).then_some(v)
    }

    /// Geodesic distance to the nearest exit in cell units, or `None` for
    /// blocked and unreachable cells.
    #[inline]
    pub fn distance(&self, loc: Location) -> Option<f64> {
        let d = self.distances[loc];
        d.is_finite().then_some(d)
    }

    /// Largest finite settled distance.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Number of non-blocked exit cells that seeded the search.
    pub fn exit_count(&self) -> usize {
        self.exit_count
    }

    /// Open cells with no path to any exit.
    pub fn unreachable_count(&self) -> usize {
        self.unreachable
    }
}

/// Map raw distances to `1 - d / max`.  Returns the grid and the number of
/// unreachable open cells.
fn normalize(
    dims:         GridDims,
    blocked:      &Grid<bool>,
    dist:         &Grid<f64>,
    max_distance: f64,
) -> (Grid<f64>, usize) {
    let mut values = Grid::filled(dims, f64::NAN);
    let mut unreachable = 0;

    for loc in dims.locations() {
        if blocked[loc] {
            continue;
        }
        let d = dist[loc];
        values[loc] = if !d.is_finite() {
            unreachable += 1;
            0.0
        } else if max_distance > 0.0 {
            1.0 - d / max_distance
        } else {
            1.0
        };
    }
    (values, unreachable)
}

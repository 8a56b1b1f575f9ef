//! Nearest-exit lookup backed by an R-tree.
//!
//! Exit cells are indexed by their centre `[row, col]`.  Queries return the
//! straight-line distance in cell units.  This is a geometric measure and
//! deliberately ignores walls; the floor field's geodesic distance is a
//! separate quantity.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use evac_core::{Location, Scenario};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct ExitEntry {
    point: [f64; 2], // [row, col]
    loc:   Location,
}

impl RTreeObject for ExitEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ExitEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dr = self.point[0] - point[0];
        let dc = self.point[1] - point[1];
        dr * dr + dc * dc
    }
}

#[inline]
fn centre(loc: Location) -> [f64; 2] {
    [loc.row as f64, loc.col as f64]
}

// ── ExitIndex ─────────────────────────────────────────────────────────────────

/// Spatial index over exit cells.
pub struct ExitIndex {
    tree: RTree<ExitEntry>,
}

impl ExitIndex {
    /// Index every exit cell of `scenario`.
    pub fn from_scenario<S: Scenario + ?Sized>(scenario: &S) -> Self {
        Self::from_exits(scenario.exits())
    }

    pub fn from_exits(exits: impl IntoIterator<Item = Location>) -> Self {
        let entries = exits
            .into_iter()
            .map(|loc| ExitEntry { point: centre(loc), loc })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Closest exit to `loc` and its straight-line distance in cells.
    /// `None` if there are no exits.
    pub fn nearest(&self, loc: Location) -> Option<(Location, f64)> {
        let query = centre(loc);
        self.tree
            .nearest_neighbor(&query)
            .map(|e| (e.loc, e.distance_2(&query).sqrt()))
    }
}

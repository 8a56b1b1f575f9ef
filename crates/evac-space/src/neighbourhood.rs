//! Cell connectivity rules.
//!
//! A [`Neighbourhood`] maps a cell to its adjacent in-bounds cells.  It never
//! weights them; the floor field owns distance weighting.  Output order is
//! fixed (row-major over the offset table) so that every consumer that
//! iterates neighbours draws random numbers in the same order run to run.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use evac_core::{GridDims, Location};

use crate::{SpaceError, SpaceResult};

/// Neighbour list; never spills to the heap (at most 8 entries).
pub type Neighbours = SmallVec<[Location; 8]>;

const VON_NEUMANN_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Which adjacent cells count as neighbours.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Neighbourhood {
    /// Up to 4 orthogonal neighbours.
    VonNeumann,
    /// Up to 8 neighbours including diagonals.
    #[default]
    Moore,
}

impl Neighbourhood {
    /// `(d_row, d_col)` offsets in output order.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Neighbourhood::VonNeumann => &VON_NEUMANN_OFFSETS,
            Neighbourhood::Moore => &MOORE_OFFSETS,
        }
    }

    /// In-bounds neighbours of a location already known to be in bounds.
    #[inline]
    pub fn neighbours(self, dims: GridDims, loc: Location) -> Neighbours {
        self.offsets()
            .iter()
            .filter_map(|&(dr, dc)| dims.offset(loc, dr, dc))
            .collect()
    }

    /// Neighbours of a raw coordinate pair, rejecting out-of-bounds input.
    pub fn try_neighbours(self, dims: GridDims, row: usize, col: usize) -> SpaceResult<Neighbours> {
        let loc = dims.check(row, col)?;
        Ok(self.neighbours(dims, loc))
    }
}

impl fmt::Display for Neighbourhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Neighbourhood::VonNeumann => "von-neumann",
            Neighbourhood::Moore => "moore",
        })
    }
}

impl FromStr for Neighbourhood {
    type Err = SpaceError;

    fn from_str(s: &str) -> SpaceResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "von-neumann" | "vonneumann" | "4" => Ok(Neighbourhood::VonNeumann),
            "moore" | "8" => Ok(Neighbourhood::Moore),
            other => Err(SpaceError::UnknownNeighbourhood(other.to_owned())),
        }
    }
}

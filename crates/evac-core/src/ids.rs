//! Strongly typed pedestrian identifier.
//!
//! Ids are handed out by the automaton's pedestrian store in strictly
//! increasing order.  There is no global counter: two automata in the same
//! process both start at `AgentId(0)`.

use std::fmt;

/// Identifier of one pedestrian.  Max ~4.3 billion agents per automaton.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for u32 {
    #[inline(always)]
    fn from(id: AgentId) -> u32 {
        id.0
    }
}

//! The tagged per-cell state: either solved, or pencilled with candidates.

use crate::candidates::CandidateSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Solved(u8),
    Pencil(CandidateSet),
}

impl CellState {
    pub fn is_solved(self) -> bool {
        matches!(self, CellState::Solved(_))
    }

    pub fn solved_value(self) -> Option<u8> {
        match self {
            CellState::Solved(v) => Some(v),
            CellState::Pencil(_) => None,
        }
    }

    pub fn candidates(self) -> Option<CandidateSet> {
        match self {
            CellState::Solved(_) => None,
            CellState::Pencil(c) => Some(c),
        }
    }

    /// A `Pencil` whose candidate set has emptied out: the board it lives on
    /// has no valid completion.
    pub fn is_contradiction(self) -> bool {
        matches!(self, CellState::Pencil(c) if c.is_empty())
    }
}

//! Bounded backtracking fallback for puzzles the deductive techniques can't
//! finish alone: depth-first search, guessing the cell with the fewest
//! remaining candidates first (MRV), propagating each guess like a Lone
//! Single placement, and undoing on contradiction.

use crate::error::SolverError;
use crate::position::{all_positions, Position};
use crate::sudoku::Sudoku;
use crate::techniques::common::place_value;

fn cell_with_fewest_candidates(board: &Sudoku) -> Option<Position> {
    all_positions()
        .filter_map(|p| board.get(p).candidates().map(|c| (p, c.len())))
        .min_by_key(|&(_, len)| len)
        .map(|(p, _)| p)
}

/// Depth-first search over tentative placements, returning the first
/// complete, consistent board found.
pub fn solve(board: &Sudoku) -> Result<Sudoku, SolverError> {
    if board.has_contradiction() {
        return Err(SolverError::Unsolvable);
    }
    if board.is_solved() {
        return Ok(board.clone());
    }

    let Some(p) = cell_with_fewest_candidates(board) else {
        return Err(SolverError::Unsolvable);
    };
    let candidates = board.get(p).candidates().expect("cell_with_fewest_candidates returns a Pencil cell");

    for value in candidates.iter() {
        log::trace!("backtrack: guessing {} at {:?}", value, p);
        let guess = board.apply(&place_value(board, p, value).changed_cells);
        if guess.has_contradiction() {
            log::trace!("backtrack: undoing {} at {:?}", value, p);
            continue;
        }
        match solve(&guess) {
            Ok(solved) => return Ok(solved),
            Err(SolverError::Unsolvable) => {
                log::trace!("backtrack: undoing {} at {:?}", value, p);
                continue;
            }
        }
    }

    Err(SolverError::Unsolvable)
}

//! Helpers shared by the single-placement techniques (Lone Single, Hidden
//! Single) and by the elimination-style techniques.

use crate::candidates::CandidateSet;
use crate::cell::CellState;
use crate::deduction::Deduction;
use crate::position::Position;
use crate::sudoku::Sudoku;

/// Builds the Deduction for placing `value` at `p`: the new `Solved` cell,
/// plus `value` removed from every `Pencil` sharing a house with `p`.
pub fn place_value(board: &Sudoku, p: Position, value: u8) -> Deduction {
    let mut changed_cells = vec![(p, CellState::Solved(value))];
    for (q, state) in board.intersection(&[p]) {
        if let CellState::Pencil(candidates) = state {
            if candidates.contains(value) {
                changed_cells.push((q, CellState::Pencil(candidates - CandidateSet::from_iter([value]))));
            }
        }
    }
    Deduction::new(vec![p], vec![value], changed_cells)
}

/// Removes `values` from every `Pencil` in `intersection(positions)` that
/// carries at least one of them. Returns `None` if nothing would change.
pub fn eliminate_from_intersection(
    board: &Sudoku,
    positions: &[Position],
    values: CandidateSet,
) -> Option<Vec<(Position, CellState)>> {
    let mut changed_cells = Vec::new();
    for (q, state) in board.intersection(positions) {
        if let CellState::Pencil(candidates) = state {
            let reduced = candidates - values;
            if reduced != candidates {
                changed_cells.push((q, CellState::Pencil(reduced)));
            }
        }
    }
    if changed_cells.is_empty() {
        None
    } else {
        Some(changed_cells)
    }
}

use std::iter::FromIterator as _;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_value_removes_candidate_from_housemates() {
        let board = Sudoku::from_grid([[0u8; 9]; 9]).unwrap();
        let p = Position::new(0, 0);
        let deduction = place_value(&board, p, 5);
        assert_eq!(deduction.changed_cells[0], (p, CellState::Solved(5)));
        let housemate = deduction
            .changed_cells
            .iter()
            .find(|&&(q, _)| q == Position::new(0, 1))
            .unwrap();
        match housemate.1 {
            CellState::Pencil(c) => assert!(!c.contains(5)),
            _ => panic!("expected pencil"),
        }
    }
}

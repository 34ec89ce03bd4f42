//! XY-Wing: a pivot with candidates {a,b} and two wings {a,c}, {b,c}, each
//! sharing a house with the pivot but not with each other, force c out of
//! whichever cells see both wings.

use itertools::Itertools;

use crate::candidates::CandidateSet;
use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::position::{self, Position};
use crate::sudoku::Sudoku;

use super::common::eliminate_from_intersection;

pub const NAME: &str = "XY Wing";

fn as_pivot(
    board: &Sudoku,
    pivot: (Position, CandidateSet),
    wing_a: (Position, CandidateSet),
    wing_b: (Position, CandidateSet),
) -> Option<Deduction> {
    let (pivot_pos, pivot_candidates) = pivot;
    let (a_pos, a_candidates) = wing_a;
    let (b_pos, b_candidates) = wing_b;

    if !pivot_pos.shares_house(a_pos) || !pivot_pos.shares_house(b_pos) || a_pos.shares_house(b_pos) {
        return None;
    }
    if (pivot_candidates & a_candidates).len() != 1 || (pivot_candidates & b_candidates).len() != 1 {
        return None;
    }
    if (pivot_candidates | a_candidates | b_candidates).len() != 3 {
        return None;
    }
    let shared = a_candidates & b_candidates;
    if shared.len() != 1 {
        return None;
    }
    let value = shared.single_value();
    let changed_cells = eliminate_from_intersection(board, &[a_pos, b_pos], shared)?;
    Some(Deduction::new(vec![pivot_pos, a_pos, b_pos], vec![value], changed_cells))
}

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    let pencil_pairs: Vec<(Position, CandidateSet)> = position::all_positions()
        .filter_map(|p| board.get(p).candidates().map(|c| (p, c)))
        .filter(|(_, c)| c.len() == 2)
        .collect();

    pencil_pairs.into_iter().tuple_combinations().filter_map(move |(cell0, cell1, cell2)| {
        as_pivot(board, cell0, cell1, cell2)
            .or_else(|| as_pivot(board, cell1, cell0, cell2))
            .or_else(|| as_pivot(board, cell2, cell0, cell1))
    })
}

pub fn first(board: &Sudoku) -> Result<Deduction, NotFound> {
    find(board).next().ok_or(NotFound(NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn classic_wing_eliminates_the_shared_value_from_the_common_cell() {
        let mut cells = [CellState::Pencil(CandidateSet::full()); 81];
        for c in cells.iter_mut() {
            *c = CellState::Pencil(CandidateSet::none());
        }
        let pivot = Position::new(0, 0);
        let wing_a = Position::new(0, 5); // shares row with pivot
        let wing_b = Position::new(5, 0); // shares column with pivot
        let target = Position::new(5, 5); // shares column with wing_a, row with wing_b

        cells[pivot.index()] = CellState::Pencil([1, 2].into_iter().collect());
        cells[wing_a.index()] = CellState::Pencil([1, 3].into_iter().collect());
        cells[wing_b.index()] = CellState::Pencil([2, 3].into_iter().collect());
        cells[target.index()] = CellState::Pencil([3, 4].into_iter().collect());
        let board = Sudoku::from_cells(cells);

        let deduction = first(&board).expect("an xy-wing should be found");
        assert_eq!(deduction.values, vec![3]);
        let (_, state) = deduction
            .changed_cells
            .iter()
            .find(|&&(p, _)| p == target)
            .copied()
            .expect("the cell seeing both wings should lose candidate 3");
        match state {
            CellState::Pencil(c) => assert_eq!(c.values().as_slice(), &[4]),
            _ => panic!("expected pencil"),
        }
    }

    #[test]
    fn not_found_on_a_blank_board() {
        let board = Sudoku::from_grid([[0u8; 9]; 9]).unwrap();
        assert_eq!(first(&board), Err(NotFound(NAME)));
    }
}

//! Hidden Single: a candidate confined to one cell within a house must be
//! placed there, even if that cell still carries other candidates.

use crate::cell::CellState;
use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::sudoku::Sudoku;

use super::common::place_value;

pub const NAME: &str = "Hidden Single";

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    board.houses().flat_map(move |house| {
        (1..=9u8).filter_map(move |value| {
            let mut holders = house.iter().copied().filter(|&p| match board.get(p) {
                CellState::Pencil(c) => c.contains(value),
                CellState::Solved(_) => false,
            });
            let only = holders.next()?;
            if holders.next().is_some() {
                return None;
            }
            Some(place_value(board, only, value))
        })
    })
}

pub fn first(board: &Sudoku) -> Result<Deduction, NotFound> {
    find(board).next().ok_or(NotFound(NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::CandidateSet;
    use crate::position::{self, Position};

    #[test]
    fn finds_a_value_confined_to_one_cell_in_a_row() {
        // Row 0: only column 0 can still hold a 9; every other row-0 cell's
        // pencil has had 9 ruled out directly, regardless of what else remains.
        let mut cells = [CellState::Pencil(CandidateSet::full()); 81];
        for p in position::row(0) {
            if p.column != 0 {
                let mut c = CandidateSet::full();
                c.remove(9);
                cells[p.index()] = CellState::Pencil(c);
            }
        }
        let board = Sudoku::from_cells(cells);
        let deduction = first(&board).expect("a hidden single should exist for value 9 in row 0");
        assert_eq!(deduction.values, vec![9]);
        assert_eq!(deduction.changed_cells[0].0, Position::new(0, 0));
    }

    #[test]
    fn not_found_on_a_blank_board() {
        let board = Sudoku::from_grid([[0u8; 9]; 9]).unwrap();
        assert_eq!(first(&board), Err(NotFound(NAME)));
    }
}

//! Lone Single: a `Pencil` left with exactly one candidate must take it.

use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::position;
use crate::sudoku::Sudoku;

use super::common::place_value;

pub const NAME: &str = "Lone Single";

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    position::all_positions().filter_map(move |p| {
        let candidates = board.get(p).candidates()?;
        (candidates.len() == 1).then(|| place_value(board, p, candidates.single_value()))
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
    fn finds_the_sole_unsolved_cell_in_a_nearly_full_row() {
        let mut grid = [[0u8; 9]; 9];
        grid[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        let board = Sudoku::from_grid(grid).unwrap();
        let deduction = first(&board).unwrap();
        assert_eq!(deduction.values, vec![9]);
        assert_eq!(deduction.changed_cells[0].0, crate::position::Position::new(0, 8));
        assert_eq!(deduction.changed_cells[0].1, CellState::Solved(9));
    }

    #[test]
    fn not_found_on_a_blank_board() {
        let board = Sudoku::from_grid([[0u8; 9]; 9]).unwrap();
        assert_eq!(first(&board), Err(NotFound(NAME)));
    }
}

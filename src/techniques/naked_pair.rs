//! Naked Pair: two `Pencil` cells in a house sharing an identical 2-candidate
//! set lock those two values out of the rest of the house.

use itertools::Itertools;

use crate::candidates::CandidateSet;
use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::position::Position;
use crate::sudoku::Sudoku;

use super::common::eliminate_from_intersection;

pub const NAME: &str = "Naked Pair";

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    board.houses().flat_map(move |house| {
        let pencils: Vec<(Position, CandidateSet)> = house
            .iter()
            .filter_map(|&p| board.get(p).candidates().map(|c| (p, c)))
            .filter(|(_, c)| c.len() == 2)
            .collect();

        pencils.into_iter().tuple_combinations().filter_map(move |((p1, c1), (p2, c2))| {
            if c1 != c2 {
                return None;
            }
            let changed_cells = eliminate_from_intersection(board, &[p1, p2], c1)?;
            Some(Deduction::new(vec![p1, p2], c1.values().to_vec(), changed_cells))
        })
    })
}

pub fn first(board: &Sudoku) -> Result<Deduction, NotFound> {
    find(board).next().ok_or(NotFound(NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;
    use crate::position;

    #[test]
    fn pair_in_a_row_strips_shared_candidates_from_the_rest_of_the_row() {
        let mut cells = [CellState::Pencil(CandidateSet::full()); 81];
        for p in position::row(0) {
            cells[p.index()] = CellState::Pencil(CandidateSet::full());
        }
        let pair: CandidateSet = [3, 7].into_iter().collect();
        cells[Position::new(0, 0).index()] = CellState::Pencil(pair);
        cells[Position::new(0, 1).index()] = CellState::Pencil(pair);
        let third: CandidateSet = [3, 5, 7].into_iter().collect();
        cells[Position::new(0, 2).index()] = CellState::Pencil(third);
        let board = Sudoku::from_cells(cells);

        let deduction = first(&board).expect("a naked pair should be found");
        assert_eq!(deduction.values, vec![3, 7]);
        let (_, state) = deduction
            .changed_cells
            .iter()
            .find(|&&(p, _)| p == Position::new(0, 2))
            .copied()
            .expect("third cell should be reduced");
        match state {
            CellState::Pencil(c) => assert_eq!(c.values().as_slice(), &[5]),
            _ => panic!("expected pencil"),
        }
    }

    #[test]
    fn not_found_on_a_blank_board() {
        let board = Sudoku::from_grid([[0u8; 9]; 9]).unwrap();
        assert_eq!(first(&board), Err(NotFound(NAME)));
    }
}

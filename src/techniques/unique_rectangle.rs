//! Unique Rectangle: four corners of a 2-row-by-2-column rectangle where
//! three ("edge") corners share an identical 2-candidate set; if the fourth
//! also carries both of those candidates, keeping them would let the puzzle
//! complete two different ways (a deadly pattern), so they're stripped from
//! the fourth corner instead.
//!
//! As specified, the "exactly one edge pair shares a box" check approximates
//! a full Type-1 validity check rather than proving it outright; ported as
//! specified rather than tightened.

use itertools::Itertools;

use crate::candidates::CandidateSet;
use crate::cell::CellState;
use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::position::Position;
use crate::sudoku::Sudoku;

pub const NAME: &str = "Unique Rectangle";

fn pairs_sharing_a_box(cells: [Position; 3]) -> usize {
    cells
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.box_index() == b.box_index())
        .count()
}

fn try_rectangle(board: &Sudoku, corners: [Position; 4]) -> Option<Deduction> {
    for fourth_index in 0..4 {
        let fourth_pos = corners[fourth_index];
        let edges: Vec<Position> = corners.iter().copied().enumerate().filter(|&(i, _)| i != fourth_index).map(|(_, p)| p).collect();
        let edges: [Position; 3] = [edges[0], edges[1], edges[2]];

        let edge_candidates: Option<Vec<CandidateSet>> = edges.iter().map(|&p| board.get(p).candidates()).collect();
        let Some(edge_candidates) = edge_candidates else { continue };
        if edge_candidates.iter().any(|c| c.len() != 2) {
            continue;
        }
        let shared = edge_candidates[0];
        if edge_candidates.iter().any(|&c| c != shared) {
            continue;
        }
        if pairs_sharing_a_box(edges) != 1 {
            continue;
        }

        let Some(fourth_candidates) = board.get(fourth_pos).candidates() else { continue };
        if !shared.is_subset_of(fourth_candidates) || fourth_candidates == shared {
            continue;
        }

        let reduced = fourth_candidates - shared;
        let mut positions = edges.to_vec();
        positions.push(fourth_pos);
        let values = shared.values().to_vec();
        return Some(Deduction::new(positions, values, vec![(fourth_pos, CellState::Pencil(reduced))]));
    }
    None
}

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    (0..9u8).combinations(2).flat_map(move |rows| {
        let (r1, r2) = (rows[0], rows[1]);
        (0..9u8).combinations(2).filter_map(move |columns| {
            let (c1, c2) = (columns[0], columns[1]);
            let corners = [
                Position::new(r1, c1),
                Position::new(r1, c2),
                Position::new(r2, c1),
                Position::new(r2, c2),
            ];
            try_rectangle(board, corners)
        })
    })
}

pub fn first(board: &Sudoku) -> Result<Deduction, NotFound> {
    find(board).next().ok_or(NotFound(NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadly_pattern_is_broken_by_stripping_the_fourth_corner() {
        let mut cells = [CellState::Pencil(CandidateSet::none()); 81];
        let xy: CandidateSet = [2, 5].into_iter().collect();
        // Rectangle spans two boxes: a/c sit in box 0, b/d sit in box 1, so
        // exactly one of the three edge pairs (a,c) shares a box.
        let a = Position::new(0, 0);
        let b = Position::new(0, 3);
        let c = Position::new(1, 0);
        let d = Position::new(1, 3); // fourth corner
        cells[a.index()] = CellState::Pencil(xy);
        cells[b.index()] = CellState::Pencil(xy);
        cells[c.index()] = CellState::Pencil(xy);
        let fourth: CandidateSet = [2, 5, 9].into_iter().collect();
        cells[d.index()] = CellState::Pencil(fourth);
        let board = Sudoku::from_cells(cells);

        let deduction = first(&board).expect("a unique rectangle should be found");
        assert_eq!(deduction.values, vec![2, 5]);
        let (_, state) = deduction.changed_cells[0];
        match state {
            CellState::Pencil(c) => assert_eq!(c.values().as_slice(), &[9]),
            _ => panic!("expected pencil"),
        }
    }

    #[test]
    fn not_found_on_a_blank_board() {
        let board = Sudoku::from_grid([[0u8; 9]; 9]).unwrap();
        assert_eq!(first(&board), Err(NotFound(NAME)));
    }
}

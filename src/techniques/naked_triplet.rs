//! Naked Triplet: three `Pencil` cells in a house whose candidates, taken
//! together, span exactly three values.
//!
//! The search is seeded from 2-candidate signatures (ported as specified):
//! a signature that occurs 2 or 3 times among the house's pair cells is
//! grown by absorbing every house pencil whose union with it still has at
//! most 3 distinct values. If that collection lands on exactly 3 cells, it's
//! a triplet. This misses triplets formed purely from three 3-candidate
//! cells with no matching pair seed.

use itertools::Itertools;

use crate::candidates::CandidateSet;
use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::position::Position;
use crate::sudoku::Sudoku;

use super::common::eliminate_from_intersection;

pub const NAME: &str = "Naked Triplet";

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    board.houses().flat_map(move |house| {
        let pencils: Vec<(Position, CandidateSet)> =
            house.iter().filter_map(|&p| board.get(p).candidates().map(|c| (p, c))).collect();

        let seed_signatures: Vec<CandidateSet> =
            pencils.iter().filter(|(_, c)| c.len() == 2).map(|&(_, c)| c).unique().collect();

        seed_signatures.into_iter().filter_map(move |signature| {
            let occurrences = pencils.iter().filter(|&&(_, c)| c == signature).count();
            if !(occurrences == 2 || occurrences == 3) {
                return None;
            }
            let grown: Vec<(Position, CandidateSet)> =
                pencils.iter().copied().filter(|&(_, c)| (c | signature).len() <= 3).collect();
            if grown.len() != 3 {
                return None;
            }
            let union = grown.iter().fold(CandidateSet::none(), |acc, &(_, c)| acc | c);
            if union.len() != 3 {
                return None;
            }
            let positions: Vec<Position> = grown.iter().map(|&(p, _)| p).collect();
            let changed_cells = eliminate_from_intersection(board, &positions, union)?;
            Some(Deduction::new(positions, union.values().to_vec(), changed_cells))
        })
    })
}

pub fn first(board: &Sudoku) -> Result<Deduction, NotFound> {
    find(board).next().ok_or(NotFound(NAME))
}

//! Locked Candidate (Omission): a candidate confined to exactly two cells of
//! a house is also locked out of any other house those two cells share.
//!
//! This single finder subsumes both the "pointing" and "claiming" flavours
//! of locked candidates: it doesn't care which kind of house produced the
//! two-cell confinement, only that the two cells intersect somewhere else.

use crate::candidates::CandidateSet;
use crate::cell::CellState;
use crate::deduction::Deduction;
use crate::error::NotFound;
use crate::position::Position;
use crate::sudoku::Sudoku;

use super::common::eliminate_from_intersection;

pub const NAME: &str = "Locked Candidate";

pub fn find(board: &Sudoku) -> impl Iterator<Item = Deduction> + '_ {
    board.houses().flat_map(move |house| {
        (1..=9u8).filter_map(move |value| {
            let holders: Vec<Position> = house
                .iter()
                .copied()
                .filter(|&p| matches!(board.get(p), CellState::Pencil(c) if c.contains(value)))
                .collect();
            if holders.len() != 2 {
                return None;
            }
            let values = CandidateSet::from_iter([value]);
            let changed_cells = eliminate_from_intersection(board, &holders, values)?;
            Some(Deduction::new(holders, vec![value], changed_cells))
        })
    })
}

pub fn first(board: &Sudoku) -> Result<Deduction, NotFound> {
    find(board).next().ok_or(NotFound(NAME))
}

use std::iter::FromIterator as _;

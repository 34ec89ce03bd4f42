//! The driver: applies techniques to a board in a fixed order until nothing
//! more applies, falling back to backtracking search, and optionally
//! narrates every cycle as a lazy sequence of [`Step`]s.

use crate::backtrack;
use crate::deduction::Deduction;
use crate::error::SolverError;
use crate::position::all_positions;
use crate::techniques;

pub use crate::sudoku::Sudoku;

const BULK_PENCIL_MARKING: &str = "Bulk Pencil Marking";
const BACKTRACK: &str = "Backtrack";

/// One cycle of the driver: which technique fired (or `Bulk Pencil Marking`
/// / `Backtrack` for the two non-technique steps) and what it found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub technique_name: &'static str,
    pub deduction: Deduction,
}

/// Runs techniques to fixpoint and returns the resulting board, falling back
/// to backtracking search if deduction alone can't finish it.
pub fn eliminate(board: Sudoku) -> Result<Sudoku, SolverError> {
    let mut current = board;
    loop {
        if current.has_contradiction() {
            return Err(SolverError::Unsolvable);
        }
        if current.is_solved() {
            return Ok(current);
        }
        match apply_first_matching_technique(&current) {
            Some(next) => current = next,
            None => return backtrack::solve(&current),
        }
    }
}

fn apply_first_matching_technique(board: &crate::sudoku::Sudoku) -> Option<crate::sudoku::Sudoku> {
    for &(name, first) in techniques::ORDERED {
        match first(board) {
            Ok(deduction) => {
                log::debug!("{name} matched, applying {} changed cell(s)", deduction.changed_cells.len());
                return Some(board.apply(&deduction.changed_cells));
            }
            Err(_) => log::trace!("{name} found nothing"),
        }
    }
    None
}

/// A lazy sequence of [`Step`]s narrating a solve. See [`steps`].
pub struct Steps {
    current: Sudoku,
    emitted_bulk_marking: bool,
    finished: bool,
}

/// Narrates a solve as a sequence of steps: first `Bulk Pencil Marking`
/// (unless the board is already solved), then one step per technique cycle,
/// then either nothing more (solved) or one final `Backtrack` step.
pub fn steps(board: Sudoku) -> Steps {
    Steps {
        current: board,
        emitted_bulk_marking: false,
        finished: false,
    }
}

impl Iterator for Steps {
    type Item = Result<Step, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.emitted_bulk_marking {
            self.emitted_bulk_marking = true;
            if self.current.is_solved() {
                self.finished = true;
                return None;
            }
            let changed_cells: Vec<_> =
                all_positions().filter(|&p| !self.current.get(p).is_solved()).map(|p| (p, self.current.get(p))).collect();
            let positions = changed_cells.iter().map(|&(p, _)| p).collect();
            log::debug!("bulk pencil marking over {} cell(s)", changed_cells.len());
            return Some(Ok(Step {
                technique_name: BULK_PENCIL_MARKING,
                deduction: Deduction::new(positions, Vec::new(), changed_cells),
            }));
        }

        if self.current.has_contradiction() {
            self.finished = true;
            return Some(Err(SolverError::Unsolvable));
        }
        if self.current.is_solved() {
            self.finished = true;
            return None;
        }

        for &(name, first) in techniques::ORDERED {
            match first(&self.current) {
                Ok(deduction) => {
                    self.current = self.current.apply(&deduction.changed_cells);
                    log::debug!("{name} matched, applying {} changed cell(s)", deduction.changed_cells.len());
                    if self.current.has_contradiction() {
                        self.finished = true;
                        return Some(Err(SolverError::Unsolvable));
                    }
                    return Some(Ok(Step { technique_name: name, deduction }));
                }
                Err(_) => log::trace!("{name} found nothing"),
            }
        }

        self.finished = true;
        match backtrack::solve(&self.current) {
            Ok(solved) => {
                let changed_cells: Vec<_> = all_positions()
                    .filter(|&p| self.current.get(p) != solved.get(p))
                    .map(|p| (p, solved.get(p)))
                    .collect();
                let positions = changed_cells.iter().map(|&(p, _)| p).collect();
                log::debug!("backtracking solved the remaining {} cell(s)", changed_cells.len());
                Some(Ok(Step {
                    technique_name: BACKTRACK,
                    deduction: Deduction::new(positions, Vec::new(), changed_cells),
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

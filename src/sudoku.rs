//! The 81-cell board: construction from/to a plain integer grid, house
//! accessors, and the `intersection` query every technique is built on.

use crate::candidates::CandidateSet;
use crate::cell::CellState;
use crate::error::GridError;
use crate::position::{self, Position};

const HOUSE_NAMES: [&str; 27] = [
    "row 0", "row 1", "row 2", "row 3", "row 4", "row 5", "row 6", "row 7", "row 8",
    "column 0", "column 1", "column 2", "column 3", "column 4", "column 5", "column 6", "column 7", "column 8",
    "box 0", "box 1", "box 2", "box 3", "box 4", "box 5", "box 6", "box 7", "box 8",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sudoku {
    cells: [CellState; 81],
}

impl Sudoku {
    /// Parses and validates a grid, then performs the initial pencilmark
    /// pass ("Bulk Pencil Marking"): every empty cell starts from the full
    /// candidate set, minus whatever its houses' givens forbid.
    pub fn from_grid(grid: [[u8; 9]; 9]) -> Result<Sudoku, GridError> {
        for (row, line) in grid.iter().enumerate() {
            for (column, &value) in line.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::OutOfRange {
                        row: row as u8,
                        column: column as u8,
                        value,
                    });
                }
            }
        }

        let mut cells = [CellState::Pencil(CandidateSet::full()); 81];
        for row in 0..9u8 {
            for column in 0..9u8 {
                let value = grid[row as usize][column as usize];
                if value != 0 {
                    cells[Position::new(row, column).index()] = CellState::Solved(value);
                }
            }
        }

        for (house_index, house) in position::houses().iter().enumerate() {
            let mut seen = CandidateSet::none();
            for &p in house {
                if let CellState::Solved(v) = cells[p.index()] {
                    if seen.contains(v) {
                        return Err(GridError::DuplicateInHouse {
                            house: HOUSE_NAMES[house_index],
                            value: v,
                        });
                    }
                    seen.insert(v);
                }
            }
        }

        let mut board = Sudoku { cells };
        for p in position::all_positions() {
            if let CellState::Pencil(_) = board.cells[p.index()] {
                let mut candidates = CandidateSet::full();
                for house in board.houses_of(p) {
                    for &q in house {
                        if let CellState::Solved(v) = board.cells[q.index()] {
                            candidates.remove(v);
                        }
                    }
                }
                board.cells[p.index()] = CellState::Pencil(candidates);
            }
        }
        Ok(board)
    }

    pub fn to_grid(&self) -> [[u8; 9]; 9] {
        let mut grid = [[0u8; 9]; 9];
        for p in position::all_positions() {
            if let CellState::Solved(v) = self.cells[p.index()] {
                grid[p.row as usize][p.column as usize] = v;
            }
        }
        grid
    }

    pub fn get(&self, p: Position) -> CellState {
        self.cells[p.index()]
    }

    /// Builds a board directly from cell states, bypassing grid validation
    /// and the bulk pencil-marking pass. Used by technique unit tests that
    /// need a precise, otherwise-unreachable-via-`from_grid` candidate layout.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: [CellState; 81]) -> Sudoku {
        Sudoku { cells }
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.is_solved())
    }

    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|c| c.is_contradiction())
    }

    pub fn rows(&self) -> impl Iterator<Item = [Position; 9]> {
        (0..9u8).map(position::row)
    }

    pub fn columns(&self) -> impl Iterator<Item = [Position; 9]> {
        (0..9u8).map(position::column)
    }

    pub fn boxes(&self) -> impl Iterator<Item = [Position; 9]> {
        (0..9u8).map(position::block)
    }

    /// All 27 houses, in the scan order rows, then columns, then boxes.
    pub fn houses(&self) -> impl Iterator<Item = [Position; 9]> {
        position::houses().into_iter()
    }

    fn houses_of(&self, p: Position) -> [[Position; 9]; 3] {
        [position::row(p.row), position::column(p.column), position::block(p.box_index())]
    }

    /// Positions sharing at least one house with every position in `cells`,
    /// excluding the positions in `cells` themselves.
    pub fn intersection(&self, cells: &[Position]) -> Vec<(Position, CellState)> {
        position::all_positions()
            .filter(|p| !cells.contains(p))
            .filter(|p| cells.iter().all(|&c| p.shares_house(c)))
            .map(|p| (p, self.cells[p.index()]))
            .collect()
    }

    /// Applies a deduction's `changed_cells` and returns the resulting board.
    pub fn apply(&self, changed_cells: &[(Position, CellState)]) -> Sudoku {
        let mut next = self.clone();
        for &(p, state) in changed_cells {
            next.cells[p.index()] = state;
        }
        next
    }
}

//! Board state: a 3×3 grid that only ever gains tokens until reset.

use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Cell, Grid, Token};
use crate::config::BOARD_SIZE;
use crate::rules;

/// Sole owner of the grid. Cells go from empty to occupied exactly once,
/// and only [`Board::reset`] empties them again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the grid. Mutating the copy never touches the board.
    pub fn get(&self) -> Grid {
        self.cells.clone()
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Token at (row, col), or `None` when empty.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<&Token>, BoardError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col].as_ref())
    }

    /// Write `token` into an empty cell. Fails without mutation when the cell
    /// is taken or outside the grid.
    pub fn place(&mut self, row: usize, col: usize, token: &Token) -> Result<(), BoardError> {
        check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        if cell.is_some() {
            return Err(BoardError::Occupied { row, col });
        }
        *cell = Some(token.clone());
        Ok(())
    }

    /// Returns `true` when every cell holds a token.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Empty every cell in place.
    pub fn reset(&mut self) {
        self.cells.iter_mut().flatten().for_each(|cell| *cell = None);
    }

    /// Coordinates of empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(move |(c, _)| (r, c))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Uniformly random empty cell, or `None` on a full board.
    pub fn random_empty_cell<R: Rng>(&self, rng: &mut R) -> Option<(usize, usize)> {
        let free = self.empty_cells().count();
        if free == 0 {
            return None;
        }
        let pick = rng.random_range(0..free);
        self.empty_cells().nth(pick)
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(BoardError::OutOfBounds { row, col });
    }
    Ok(())
}

fn cell_str(cell: &Cell) -> &str {
    cell.as_ref().map_or(".", Token::as_str)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", cell_str(&row[0]), cell_str(&row[1]), cell_str(&row[2]))?;
        }
        Ok(())
    }
}

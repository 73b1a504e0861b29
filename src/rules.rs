//! Terminal-state detection.

use crate::common::{Grid, Line};
use crate::config::LINES;

/// First completed line in [`LINES`] order, if any.
///
/// A line is complete when all three cells hold the same token.
pub fn winning_line(grid: &Grid) -> Option<Line> {
    LINES.iter().copied().find(|&[a, b, c]| {
        let first = &grid[a.0][a.1];
        first.is_some() && *first == grid[b.0][b.1] && *first == grid[c.0][c.1]
    })
}

/// Returns `true` when no cell is empty.
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(Option::is_some)
}

//! Board geometry and defaults.

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Tokens offered to players when none are chosen explicitly.
pub const DEFAULT_TOKENS: [&str; 2] = ["X", "O"];

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";

/// Every winning line, in scan order: rows and columns interleaved by index,
/// then the main diagonal, then the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Map a row-major cell index (0..9) to `(row, col)`.
pub fn cell_to_coords(index: usize) -> Option<(usize, usize)> {
    if index >= NUM_CELLS {
        return None;
    }
    Some((index / BOARD_SIZE, index % BOARD_SIZE))
}

/// Inverse of [`cell_to_coords`].
pub fn coords_to_cell(row: usize, col: usize) -> Option<usize> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(row * BOARD_SIZE + col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_mapping_is_row_major() {
        assert_eq!(cell_to_coords(0), Some((0, 0)));
        assert_eq!(cell_to_coords(5), Some((1, 2)));
        assert_eq!(cell_to_coords(8), Some((2, 2)));
        assert_eq!(cell_to_coords(9), None);
        for i in 0..NUM_CELLS {
            let (r, c) = cell_to_coords(i).unwrap();
            assert_eq!(coords_to_cell(r, c), Some(i));
        }
        assert_eq!(coords_to_cell(3, 0), None);
    }
}

//! Commonly used types and utilities for ease of import.

pub use crate::{
    cell_to_coords, validate_players, Board, GameController, GameEnd, GameState, MoveOutcome,
    Player, PlayerSpec, Rejection, Token,
};

#[cfg(feature = "std")]
pub use crate::cli::{describe_outcome, parse_cell, render_board, run_session};

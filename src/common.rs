//! Common types for tic-tac-toe: tokens, cells, board errors and move outcomes.

use alloc::string::String;
use core::fmt;

use crate::config::BOARD_SIZE;

/// A player's mark, e.g. `"X"`. Any short string works as long as the two
/// players of a session hold different ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Token(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Token::new(token)
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Token(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contents of one square: empty or holding exactly one token.
pub type Cell = Option<Token>;

/// Row-major 3×3 grid of cells.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Three `(row, col)` coordinates forming a completed line.
pub type Line = [(usize, usize); 3];

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the 3×3 grid. Callers must never produce these.
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a token.
    Occupied { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::Occupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Rejection {
    /// No game is in progress.
    Inactive,
    /// The chosen cell already holds a token.
    Occupied,
}

/// Result of a single `play` call.
///
/// Serializes as an object with exactly one key: `{"rejected": "occupied"}`,
/// `{"winner": "Alice"}`, `{"tie": true}` or `{"nextPlayer": "Bob"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(into = "OutcomeRepr", try_from = "OutcomeRepr")
)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// The mover completed a line.
    Winner { name: String },
    /// The board filled up without a line.
    Tie,
    /// The game goes on; `name` moves next.
    NextPlayer { name: String },
}

impl MoveOutcome {
    /// `true` for `Winner` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Winner { .. } | MoveOutcome::Tie)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

#[cfg(feature = "std")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejected: Option<Rejection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tie: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_player: Option<String>,
}

#[cfg(feature = "std")]
impl From<MoveOutcome> for OutcomeRepr {
    fn from(outcome: MoveOutcome) -> Self {
        let mut repr = OutcomeRepr {
            rejected: None,
            winner: None,
            tie: None,
            next_player: None,
        };
        match outcome {
            MoveOutcome::Rejected(why) => repr.rejected = Some(why),
            MoveOutcome::Winner { name } => repr.winner = Some(name),
            MoveOutcome::Tie => repr.tie = Some(true),
            MoveOutcome::NextPlayer { name } => repr.next_player = Some(name),
        }
        repr
    }
}

#[cfg(feature = "std")]
impl TryFrom<OutcomeRepr> for MoveOutcome {
    type Error = &'static str;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        match (repr.rejected, repr.winner, repr.tie, repr.next_player) {
            (Some(why), None, None, None) => Ok(MoveOutcome::Rejected(why)),
            (None, Some(name), None, None) => Ok(MoveOutcome::Winner { name }),
            (None, None, Some(true), None) => Ok(MoveOutcome::Tie),
            (None, None, None, Some(name)) => Ok(MoveOutcome::NextPlayer { name }),
            _ => Err("expected exactly one of rejected, winner, tie: true, nextPlayer"),
        }
    }
}

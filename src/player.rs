use alloc::string::String;

use crate::{board::Board, common::Token, BoardError};

/// Name/token pair supplied by the setup front end when a game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub name: String,
    pub token: Token,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, token: impl Into<Token>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }
}

/// A seated player. Holds no game state; moves are delegated to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: impl Into<Token>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Try to mark (row, col) with this player's token.
    pub fn attempt_move(&self, row: usize, col: usize, board: &mut Board) -> Result<(), BoardError> {
        board.place(row, col, &self.token)
    }
}

impl From<PlayerSpec> for Player {
    fn from(spec: PlayerSpec) -> Self {
        Player::new(spec.name, spec.token)
    }
}

use alloc::borrow::ToOwned;
use alloc::string::String;
use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Grid, Line, MoveOutcome, Rejection},
    config::BOARD_SIZE,
    player::{Player, PlayerSpec},
    rules,
};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameEnd {
    Winner { name: String, line: Line },
    Tie,
}

/// Observable lifecycle of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    AwaitingMove { current: usize },
    Ended(GameEnd),
}

/// One tic-tac-toe session: the board, both players and whose turn it is.
///
/// The controller trusts its inputs: names and tokens are validated by the
/// caller (see [`crate::validate_players`]) and coordinates must lie in the grid.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    players: Option<[Player; 2]>,
    state: GameState,
    moves_played: usize,
}

impl GameController {
    /// Create a session with no players and no game in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            state: GameState::NotStarted,
            moves_played: 0,
        }
    }

    /// Begin a fresh game on an empty board; `player1` moves first.
    pub fn start(&mut self, player1: PlayerSpec, player2: PlayerSpec) {
        debug_assert!(player1.token != player2.token, "players must hold distinct tokens");
        info!(
            "starting game: {} ({}) vs {} ({})",
            player1.name, player1.token, player2.name, player2.token
        );
        self.board = Board::new();
        self.players = Some([Player::from(player1), Player::from(player2)]);
        self.moves_played = 0;
        self.state = GameState::AwaitingMove { current: 0 };
    }

    /// Play the current player's token at (row, col).
    ///
    /// Refusals (no game in progress, occupied cell) come back as
    /// [`MoveOutcome::Rejected`] and leave everything untouched. `Err` is
    /// reserved for coordinates outside the board.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, BoardError> {
        let (current, players) = match (&self.state, &self.players) {
            (GameState::AwaitingMove { current }, Some(players)) => (*current, players),
            _ => {
                debug!("move ({}, {}) rejected: no game in progress", row, col);
                return Ok(MoveOutcome::Rejected(Rejection::Inactive));
            }
        };
        let mover = &players[current];
        match mover.attempt_move(row, col, &mut self.board) {
            Ok(()) => {}
            Err(BoardError::Occupied { .. }) => {
                debug!("move ({}, {}) by {} rejected: occupied", row, col, mover.name());
                return Ok(MoveOutcome::Rejected(Rejection::Occupied));
            }
            Err(e) => return Err(e),
        }
        let name = mover.name().to_owned();
        self.moves_played += 1;
        debug!("{} played ({}, {})", name, row, col);

        if let Some(line) = rules::winning_line(self.board.grid()) {
            info!("{} wins on {:?}", name, line);
            self.state = GameState::Ended(GameEnd::Winner {
                name: name.clone(),
                line,
            });
            return Ok(MoveOutcome::Winner { name });
        }
        if self.board.is_full() {
            info!("board full: tie");
            self.state = GameState::Ended(GameEnd::Tie);
            return Ok(MoveOutcome::Tie);
        }

        let next = (current + 1) % 2;
        let name = players[next].name().to_owned();
        self.state = GameState::AwaitingMove { current: next };
        Ok(MoveOutcome::NextPlayer { name })
    }

    /// [`play`](Self::play) addressed by row-major cell index 0..9.
    pub fn play_cell(&mut self, index: usize) -> Result<MoveOutcome, BoardError> {
        self.play(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Uniformly random empty cell, for simulated play.
    pub fn random_move<R: Rng>(&self, rng: &mut R) -> Option<(usize, usize)> {
        self.board.random_empty_cell(rng)
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Grid {
        self.board.get()
    }

    /// Clear the board and end any game in progress. Player identities are
    /// kept; the next [`start`](Self::start) replaces them.
    pub fn reset(&mut self) {
        info!("resetting session");
        self.board.reset();
        self.state = GameState::NotStarted;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, GameState::AwaitingMove { .. })
    }

    /// Player whose turn it is, or who made the final move once the game has
    /// ended. After a reset this is whoever would have moved next. `None`
    /// until the first [`start`](Self::start).
    pub fn current_player(&self) -> Option<&Player> {
        // turns strictly alternate from seat 0, so the move count fixes the seat
        let seat = match self.state {
            GameState::AwaitingMove { current } => current,
            GameState::Ended(_) => (self.moves_played + 1) % 2,
            GameState::NotStarted => self.moves_played % 2,
        };
        self.players.as_ref().map(|players| &players[seat])
    }

    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Accepted moves since the last start.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn state(&self) -> GameState {
        self.state.clone()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

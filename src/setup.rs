//! Validation of player setup before a game starts.
//!
//! The game controller trusts its inputs, so front ends run these checks
//! first: both names present, both tokens chosen, and tokens distinct.

use alloc::string::String;
use core::fmt;

use crate::common::Token;
use crate::config::DEFAULT_TOKENS;
use crate::player::PlayerSpec;

/// Which of the two seats a setup problem concerns (1 or 2).
pub type Seat = u8;

/// Errors returned by [`validate_players`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Name is empty after trimming.
    EmptyName { seat: Seat },
    /// No token was chosen.
    MissingToken { seat: Seat },
    /// Both seats chose the same token.
    DuplicateTokens,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyName { seat } => write!(f, "Player {} needs a name", seat),
            SetupError::MissingToken { seat } => write!(f, "Player {} needs a token", seat),
            SetupError::DuplicateTokens => write!(f, "Players must have different tokens"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

/// Check raw setup input and build the two player specs.
///
/// Names are trimmed; a blank token counts as missing. Name errors are
/// reported before token errors, seat 1 before seat 2.
pub fn validate_players(
    name1: &str,
    token1: Option<&str>,
    name2: &str,
    token2: Option<&str>,
) -> Result<(PlayerSpec, PlayerSpec), SetupError> {
    let name1 = name1.trim();
    let name2 = name2.trim();
    if name1.is_empty() {
        return Err(SetupError::EmptyName { seat: 1 });
    }
    if name2.is_empty() {
        return Err(SetupError::EmptyName { seat: 2 });
    }
    let token1 = present(token1).ok_or(SetupError::MissingToken { seat: 1 })?;
    let token2 = present(token2).ok_or(SetupError::MissingToken { seat: 2 })?;
    if token1 == token2 {
        return Err(SetupError::DuplicateTokens);
    }
    Ok((
        PlayerSpec::new(String::from(name1), token1),
        PlayerSpec::new(String::from(name2), token2),
    ))
}

fn present(token: Option<&str>) -> Option<Token> {
    token.map(str::trim).filter(|t| !t.is_empty()).map(Token::from)
}

/// The other default token: `"X"` ↔ `"O"`. Used to auto-assign the second
/// seat when the first picks a default token. Returns `None` for custom tokens.
pub fn counterpart_token(token: &str) -> Option<&'static str> {
    match token {
        t if t == DEFAULT_TOKENS[0] => Some(DEFAULT_TOKENS[1]),
        t if t == DEFAULT_TOKENS[1] => Some(DEFAULT_TOKENS[0]),
        _ => None,
    }
}

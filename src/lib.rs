#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod player;
mod rules;
mod setup;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use rules::{is_full, winning_line};
pub use setup::*;
#[cfg(feature = "std")]
pub use logging::init_logging;

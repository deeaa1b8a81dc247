#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod memory;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod search;
#[cfg(feature = "std")]
pub mod session;
mod ship;
pub mod targeting;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use memory::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use search::place_fleet;
#[cfg(feature = "std")]
pub use session::{play, run_match, GameOutcome, MatchReport, PlayOptions, PlayerTally, Seat};
pub use ship::*;
pub use targeting::{DensityMap, DensityPicker, RandomPicker, TargetPicker};
#[cfg(feature = "std")]
pub use ui::render_board;

//! Computer players of increasing strength.

use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError};
use crate::config::PLACEMENT_ATTEMPTS;
use crate::game::Game;
use crate::grid::{Dimensions, Direction, Point};
use crate::memory::StrategyMemory;
use crate::player::Player;
use crate::search::place_fleet;
use crate::targeting::{DensityPicker, RandomPicker};

/// Run the placement search until it succeeds, re-blocking each time.
fn search_placement(rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
    for attempt in 1..=PLACEMENT_ATTEMPTS {
        match place_fleet(board, rng) {
            Ok(()) => return Ok(()),
            Err(BoardError::PlacementExhausted) => {
                log::warn!("placement attempt {} of {} failed", attempt, PLACEMENT_ATTEMPTS);
            }
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::PlacementExhausted)
}

/// Fallback when every cell has already been tried; the board rejects it.
const NOTHING_LEFT: Point = Point::new(0, 0);

/// Stacks its ships in the top-left corner and sweeps the board backwards,
/// ignoring every result.
pub struct AwfulPlayer {
    name: String,
    dims: Dimensions,
    last: Point,
}

impl AwfulPlayer {
    pub fn new(name: impl Into<String>, game: &Game) -> Self {
        Self {
            name: name.into(),
            dims: game.dims(),
            last: Point::new(0, 0),
        }
    }
}

impl Player for AwfulPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        for id in 0..board.game().n_ships() {
            board.place_ship(Point::new(id, 0), id, Direction::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Point {
        if self.last.c > 0 {
            self.last.c -= 1;
        } else {
            self.last.c = self.dims.cols() - 1;
            if self.last.r > 0 {
                self.last.r -= 1;
            } else {
                self.last.r = self.dims.rows() - 1;
            }
        }
        self.last
    }

    fn record_attack_result(&mut self, _point: Point, _outcome: AttackOutcome) {}
}

/// Searched placement; random hunting and random pursuit around hits.
pub struct MediocrePlayer {
    name: String,
    memory: StrategyMemory,
    picker: RandomPicker,
}

impl MediocrePlayer {
    pub fn new(name: impl Into<String>, game: &Game) -> Self {
        Self {
            name: name.into(),
            memory: StrategyMemory::new(game.dims()),
            picker: RandomPicker,
        }
    }

    pub fn memory(&self) -> &StrategyMemory {
        &self.memory
    }
}

impl Player for MediocrePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        search_placement(rng, board)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point {
        self.memory
            .decide(&mut self.picker, rng)
            .unwrap_or(NOTHING_LEFT)
    }

    fn record_attack_result(&mut self, point: Point, outcome: AttackOutcome) {
        self.memory.record(point, &outcome);
    }
}

/// Searched placement; density-weighted hunting and pursuit.
pub struct GoodPlayer {
    name: String,
    memory: StrategyMemory,
    picker: DensityPicker,
}

impl GoodPlayer {
    pub fn new(name: impl Into<String>, game: &Game) -> Self {
        let lengths: Vec<usize> = game.ships().iter().map(|s| s.length()).collect();
        Self {
            name: name.into(),
            memory: StrategyMemory::new(game.dims()),
            picker: DensityPicker::new(lengths),
        }
    }

    pub fn memory(&self) -> &StrategyMemory {
        &self.memory
    }

    /// Lengths of ships not yet known to be destroyed, zero for sunk ones.
    pub fn remaining(&self) -> &[usize] {
        self.picker.remaining()
    }
}

impl Player for GoodPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        search_placement(rng, board)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point {
        self.memory
            .decide(&mut self.picker, rng)
            .unwrap_or(NOTHING_LEFT)
    }

    fn record_attack_result(&mut self, point: Point, outcome: AttackOutcome) {
        if let Some(id) = outcome.ship_id {
            self.picker.forget_ship(id);
        }
        self.memory.record(point, &outcome);
    }
}

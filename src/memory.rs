//! What a computer player has learned about the opponent's board, and the
//! hunt/target state machine driven by those observations.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::AttackOutcome;
use crate::config::PURSUIT_REACH;
use crate::grid::{Dimensions, Grid, Point};
use crate::targeting::TargetPicker;

/// A player's knowledge of one opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Knowledge {
    Unknown,
    Miss,
    Hit,
}

/// Targeting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Search the whole board for a promising untried cell.
    Hunt,
    /// Work the neighbourhood of a recent hit until the ship goes down.
    Target,
}

/// Private per-player shadow of the opponent's board.
#[derive(Debug, Clone)]
pub struct StrategyMemory {
    shadow: Grid<Knowledge>,
    mode: Mode,
    last_attack: Option<Point>,
    shot_hit: bool,
    ship_destroyed: bool,
}

impl StrategyMemory {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            shadow: Grid::new(dims, Knowledge::Unknown),
            mode: Mode::Hunt,
            last_attack: None,
            shot_hit: false,
            ship_destroyed: false,
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.shadow.dims()
    }

    pub fn shadow(&self) -> &Grid<Knowledge> {
        &self.shadow
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_attack(&self) -> Option<Point> {
        self.last_attack
    }

    /// Knowledge of `p`; off-board points read as unknown.
    pub fn knowledge(&self, p: Point) -> Knowledge {
        self.shadow.get(p).copied().unwrap_or(Knowledge::Unknown)
    }

    /// On the board and not yet shot at.
    pub fn is_untried(&self, p: Point) -> bool {
        self.shadow.get(p) == Ok(&Knowledge::Unknown)
    }

    /// Every untried cell, row-major.
    pub fn untried(&self) -> impl Iterator<Item = Point> + '_ {
        self.shadow
            .iter()
            .filter(|(_, k)| **k == Knowledge::Unknown)
            .map(|(p, _)| p)
    }

    /// Untried cells of the cross around the last attacked point, row portion
    /// first.
    pub fn pursuit_candidates(&self) -> Vec<Point> {
        let Some(center) = self.last_attack else {
            return Vec::new();
        };
        if !self.dims().is_valid(center) {
            return Vec::new();
        }
        self.dims()
            .cross(center, PURSUIT_REACH)
            .filter(|&p| self.is_untried(p))
            .collect()
    }

    /// Remember the outcome of our own attack at `p`.
    pub fn record(&mut self, p: Point, outcome: &AttackOutcome) {
        self.last_attack = Some(p);
        self.shot_hit = outcome.hit;
        self.ship_destroyed = outcome.ship_destroyed;
        if outcome.valid {
            let k = if outcome.hit {
                Knowledge::Hit
            } else {
                Knowledge::Miss
            };
            if self.shadow.set(p, k).is_err() {
                log::warn!("valid attack reported at off-board point {}", p);
            }
        }
    }

    /// Choose the next cell to attack. Returns `None` only when no untried
    /// cell is left anywhere.
    pub fn decide<P, R>(&mut self, picker: &mut P, rng: &mut R) -> Option<Point>
    where
        P: TargetPicker + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            match self.mode {
                Mode::Hunt => {
                    if self.shot_hit && !self.ship_destroyed {
                        log::debug!("hit at {:?}, switching to target mode", self.last_attack);
                        self.mode = Mode::Target;
                        continue;
                    }
                    self.ship_destroyed = false;
                    return picker.hunt(self, rng);
                }
                Mode::Target => {
                    if self.ship_destroyed {
                        log::debug!("ship destroyed, back to hunting");
                        self.abandon_pursuit();
                        continue;
                    }
                    let candidates = self.pursuit_candidates();
                    match picker.pursue(self, &candidates, rng) {
                        Some(p) => return Some(p),
                        None => {
                            log::debug!("pursuit cross exhausted, back to hunting");
                            self.abandon_pursuit();
                        }
                    }
                }
            }
        }
    }

    fn abandon_pursuit(&mut self) {
        self.shot_hit = false;
        self.ship_destroyed = false;
        self.mode = Mode::Hunt;
    }
}

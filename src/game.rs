//! Game definition: board dimensions plus the ship catalog.

use alloc::borrow::Cow;
use rand::Rng;

use crate::common::ConfigError;
use crate::config::{MINI_COLS, MINI_ROWS, MINI_SHIP, STANDARD_COLS, STANDARD_ROWS, STANDARD_SHIPS};
use crate::grid::{Dimensions, Point};
use crate::ship::{ShipCatalog, ShipDef, ShipId};

/// Rules shared by both boards of a game. Built once before play and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    dims: Dimensions,
    ships: ShipCatalog,
}

impl Game {
    /// Create a game with no ships.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let dims =
            Dimensions::new(rows, cols).ok_or(ConfigError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            dims,
            ships: ShipCatalog::new(),
        })
    }

    /// 10x10 board with the five standard ships.
    pub fn standard() -> Result<Self, ConfigError> {
        let mut game = Self::new(STANDARD_ROWS, STANDARD_COLS)?;
        for def in STANDARD_SHIPS.iter() {
            game.add_ship_def(def.clone())?;
        }
        Ok(game)
    }

    /// 2x3 board with a single rowboat.
    pub fn mini() -> Result<Self, ConfigError> {
        let mut game = Self::new(MINI_ROWS, MINI_COLS)?;
        game.add_ship_def(MINI_SHIP)?;
        Ok(game)
    }

    /// Add a ship; see [`ShipCatalog::add`] for the rejection rules.
    pub fn add_ship(
        &mut self,
        length: usize,
        symbol: char,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ShipId, ConfigError> {
        self.add_ship_def(ShipDef::named(length, symbol, name))
    }

    pub fn add_ship_def(&mut self, def: ShipDef) -> Result<ShipId, ConfigError> {
        let id = self.ships.add(self.dims, def)?;
        log::debug!(
            "added ship {} '{}' ({}) of length {}",
            id,
            self.ships.symbol(id),
            self.ships.name(id),
            self.ships.length(id)
        );
        Ok(id)
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    pub fn cols(&self) -> usize {
        self.dims.cols()
    }

    pub fn is_valid(&self, p: Point) -> bool {
        self.dims.is_valid(p)
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        self.dims.random_point(rng)
    }

    pub fn ships(&self) -> &ShipCatalog {
        &self.ships
    }

    pub fn n_ships(&self) -> usize {
        self.ships.len()
    }

    pub fn ship_length(&self, id: ShipId) -> usize {
        self.ships.length(id)
    }

    pub fn ship_symbol(&self, id: ShipId) -> char {
        self.ships.symbol(id)
    }

    pub fn ship_name(&self, id: ShipId) -> &str {
        self.ships.name(id)
    }
}

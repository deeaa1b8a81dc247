//! Ship definitions and the ordered catalog that gives each ship its id.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::config::RESERVED_SYMBOLS;
use crate::grid::Dimensions;

/// Index of a ship in its catalog.
pub type ShipId = usize;

/// Length, board symbol and display name of one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipDef {
    length: usize,
    symbol: char,
    name: Cow<'static, str>,
}

impl ShipDef {
    /// Create a ship definition with a static name.
    pub const fn new(length: usize, symbol: char, name: &'static str) -> Self {
        Self {
            length,
            symbol,
            name: Cow::Borrowed(name),
        }
    }

    /// Create a ship definition with any name.
    pub fn named(length: usize, symbol: char, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            length,
            symbol,
            name: name.into(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered set of ships. A ship's position in the catalog is its `ShipId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipCatalog {
    ships: Vec<ShipDef>,
}

impl ShipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `def` after validating it against `dims` and the ships already
    /// present. On error nothing is added.
    pub fn add(&mut self, dims: Dimensions, def: ShipDef) -> Result<ShipId, ConfigError> {
        let length = def.length();
        if length < 1 {
            return Err(ConfigError::InvalidLength);
        }
        if length > dims.rows() && length > dims.cols() {
            return Err(ConfigError::ShipTooLong { length });
        }
        let symbol = def.symbol();
        if !symbol.is_ascii_graphic() {
            return Err(ConfigError::NonPrintableSymbol(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol() == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        let total = self.total_length() + length;
        if total > dims.area() {
            return Err(ConfigError::FleetTooLarge {
                total,
                area: dims.area(),
            });
        }
        self.ships.push(def);
        Ok(self.ships.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Definition for `id`.
    ///
    /// # Panics
    /// If `id` is not a valid ship id.
    pub fn get(&self, id: ShipId) -> &ShipDef {
        &self.ships[id]
    }

    pub fn length(&self, id: ShipId) -> usize {
        self.get(id).length()
    }

    pub fn symbol(&self, id: ShipId) -> char {
        self.get(id).symbol()
    }

    pub fn name(&self, id: ShipId) -> &str {
        self.get(id).name()
    }

    /// Sum of all ship lengths.
    pub fn total_length(&self) -> usize {
        self.ships.iter().map(ShipDef::length).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShipDef> {
        self.ships.iter()
    }
}

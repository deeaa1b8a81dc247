//! Common types: configuration and board errors, shot results.

use core::fmt;

use crate::grid::GridError;
use crate::ship::ShipId;

/// Result of a valid attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that still has untouched segments.
    Hit,
    /// Shot hit the last untouched segment of a ship.
    Destroyed(ShipId),
}

/// The tuple reported back to strategies after every attack, valid or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackOutcome {
    pub valid: bool,
    pub hit: bool,
    pub ship_destroyed: bool,
    pub ship_id: Option<ShipId>,
}

impl AttackOutcome {
    /// Outcome of a rejected attack: nothing hit, nothing destroyed.
    pub const INVALID: AttackOutcome = AttackOutcome {
        valid: false,
        hit: false,
        ship_destroyed: false,
        ship_id: None,
    };
}

impl From<ShotResult> for AttackOutcome {
    fn from(res: ShotResult) -> Self {
        match res {
            ShotResult::Miss => AttackOutcome {
                valid: true,
                ..AttackOutcome::INVALID
            },
            ShotResult::Hit => AttackOutcome {
                valid: true,
                hit: true,
                ..AttackOutcome::INVALID
            },
            ShotResult::Destroyed(id) => AttackOutcome {
                valid: true,
                hit: true,
                ship_destroyed: true,
                ship_id: Some(id),
            },
        }
    }
}

impl From<Result<ShotResult, BoardError>> for AttackOutcome {
    fn from(res: Result<ShotResult, BoardError>) -> Self {
        res.map(AttackOutcome::from).unwrap_or(AttackOutcome::INVALID)
    }
}

/// Errors detected while building a game: bad dimensions or ship definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns outside `1..=MAX`.
    InvalidDimensions { rows: usize, cols: usize },
    /// Ship length below one.
    InvalidLength,
    /// Ship is longer than both the row count and the column count.
    ShipTooLong { length: usize },
    /// Symbol collides with a board glyph.
    ReservedSymbol(char),
    /// Symbol is not a printable, non-space ASCII character.
    NonPrintableSymbol(char),
    /// Another ship already uses this symbol.
    DuplicateSymbol(char),
    /// Total ship length would exceed the number of cells.
    FleetTooLarge { total: usize, area: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { rows, cols } => {
                write!(f, "Board dimensions {}x{} are not supported", rows, cols)
            }
            ConfigError::InvalidLength => write!(f, "Ship length must be at least 1"),
            ConfigError::ShipTooLong { length } => {
                write!(f, "Ship of length {} fits in neither direction", length)
            }
            ConfigError::ReservedSymbol(c) => write!(f, "Symbol '{}' is reserved", c),
            ConfigError::NonPrintableSymbol(c) => {
                write!(f, "Symbol {:?} is not printable", c)
            }
            ConfigError::DuplicateSymbol(c) => {
                write!(f, "Symbol '{}' is already used by another ship", c)
            }
            ConfigError::FleetTooLarge { total, area } => write!(
                f,
                "Ships need {} cells but the board only has {}",
                total, area
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors returned by Board operations. Every failing operation leaves the
/// board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error.
    Grid(GridError),
    /// Ship id is not in the catalog.
    InvalidShipId,
    /// Point is off the board.
    OutOfBounds,
    /// Ship footprint would leave the board.
    ShipOutOfBounds,
    /// A footprint cell is not empty (ship, blocked or shot).
    CellOccupied,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Attempted to remove a ship that is not placed.
    ShipNotPlaced,
    /// The ship is not at the given origin and direction.
    ShipNotAtLocation,
    /// Cell was already hit or missed.
    AlreadyAttacked,
    /// No complete layout could be found.
    PlacementExhausted,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::InvalidShipId => write!(f, "Ship id is out of range"),
            BoardError::OutOfBounds => write!(f, "Point is outside the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::CellOccupied => write!(f, "Ship placement covers a non-empty cell"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipNotPlaced => write!(f, "Ship is not placed on the board"),
            BoardError::ShipNotAtLocation => write!(f, "Ship is not at that location"),
            BoardError::AlreadyAttacked => write!(f, "That cell was already attacked"),
            BoardError::PlacementExhausted => write!(f, "Unable to place all ships"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

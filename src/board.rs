//! One player's board: cell contents plus which ships are still afloat.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::{BLOCKED_SYMBOL, EMPTY_SYMBOL, HIT_SYMBOL, MISS_SYMBOL};
use crate::game::Game;
use crate::grid::{Direction, Grid, Point};
use crate::ship::ShipId;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Temporarily unusable while a placement search runs.
    Blocked,
    /// Untouched segment of the ship with this symbol.
    Ship(char),
    Miss,
    Hit,
}

impl Cell {
    /// Glyph used when printing the board.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Blocked => BLOCKED_SYMBOL,
            Cell::Ship(sym) => *sym,
            Cell::Miss => MISS_SYMBOL,
            Cell::Hit => HIT_SYMBOL,
        }
    }

    /// True for cells that have already been shot at.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Board state for one player.
///
/// A cell holds `Cell::Ship(sym)` only while the ship with that symbol is
/// placed, and ships never overlap.
#[derive(Clone)]
pub struct Board<'g> {
    game: &'g Game,
    cells: Grid<Cell>,
    placed: Vec<bool>,
}

impl<'g> Board<'g> {
    /// Create an empty board (no ships placed).
    pub fn new(game: &'g Game) -> Self {
        Board {
            game,
            cells: Grid::new(game.dims(), Cell::Empty),
            placed: vec![false; game.n_ships()],
        }
    }

    pub fn game(&self) -> &'g Game {
        self.game
    }

    /// Read-only view of every cell.
    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    /// Contents of the cell at `p`.
    pub fn cell(&self, p: Point) -> Result<Cell, BoardError> {
        Ok(*self.cells.get(p)?)
    }

    /// Whether ship `id` is currently on the board.
    pub fn is_placed(&self, id: ShipId) -> bool {
        self.placed.get(id).copied().unwrap_or(false)
    }

    /// Reset every cell to empty. No ship remains placed.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.placed.iter_mut().for_each(|p| *p = false);
    }

    /// Mark half of the board (rounded down) as blocked, picking empty cells
    /// uniformly at random. If fewer empty cells remain, all of them are
    /// blocked.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty = self.cells.count(|c| *c == Cell::Empty);
        let mut remaining = (self.game.dims().area() / 2).min(empty);
        log::trace!("blocking {} of {} empty cells", remaining, empty);
        while remaining > 0 {
            let p = self.game.random_point(rng);
            if let Ok(cell) = self.cells.get_mut(p) {
                if *cell == Cell::Empty {
                    *cell = Cell::Blocked;
                    remaining -= 1;
                }
            }
        }
    }

    /// Turn every blocked cell back into an empty one.
    pub fn unblock(&mut self) {
        for cell in self.cells.values_mut() {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
    }

    /// Place ship `id` with its top or left end at `origin`.
    pub fn place_ship(
        &mut self,
        origin: Point,
        id: ShipId,
        dir: Direction,
    ) -> Result<(), BoardError> {
        self.check_target(origin, id)?;
        if self.placed[id] {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let len = self.game.ship_length(id);
        let footprint = self
            .game
            .dims()
            .footprint(origin, dir, len)
            .ok_or(BoardError::ShipOutOfBounds)?;
        let cells: Vec<Point> = footprint.collect();
        for &p in &cells {
            if *self.cells.get(p)? != Cell::Empty {
                return Err(BoardError::CellOccupied);
            }
        }
        let symbol = self.game.ship_symbol(id);
        for &p in &cells {
            self.cells.set(p, Cell::Ship(symbol))?;
        }
        self.placed[id] = true;
        log::trace!("placed ship {} at {} {:?}", id, origin, dir);
        Ok(())
    }

    /// Remove ship `id`, which must sit exactly at `origin` facing `dir`.
    pub fn unplace_ship(
        &mut self,
        origin: Point,
        id: ShipId,
        dir: Direction,
    ) -> Result<(), BoardError> {
        self.check_target(origin, id)?;
        if !self.placed[id] {
            return Err(BoardError::ShipNotPlaced);
        }
        let len = self.game.ship_length(id);
        let footprint = self
            .game
            .dims()
            .footprint(origin, dir, len)
            .ok_or(BoardError::ShipOutOfBounds)?;
        let cells: Vec<Point> = footprint.collect();
        let symbol = self.game.ship_symbol(id);
        for &p in &cells {
            if *self.cells.get(p)? != Cell::Ship(symbol) {
                return Err(BoardError::ShipNotAtLocation);
            }
        }
        for &p in &cells {
            self.cells.set(p, Cell::Empty)?;
        }
        self.placed[id] = false;
        log::trace!("removed ship {} from {} {:?}", id, origin, dir);
        Ok(())
    }

    /// Fire at `p`.
    ///
    /// A ship counts as destroyed once no other cell in the hit cell's row,
    /// then column, still carries its symbol.
    pub fn attack(&mut self, p: Point) -> Result<ShotResult, BoardError> {
        let cell = *self.cells.get(p).map_err(|_| BoardError::OutOfBounds)?;
        let symbol = match cell {
            Cell::Hit | Cell::Miss => return Err(BoardError::AlreadyAttacked),
            Cell::Empty | Cell::Blocked => {
                self.cells.set(p, Cell::Miss)?;
                log::trace!("attack at {} missed", p);
                return Ok(ShotResult::Miss);
            }
            Cell::Ship(sym) => sym,
        };

        if self.has_other_segment(p, symbol) {
            self.cells.set(p, Cell::Hit)?;
            log::trace!("attack at {} hit '{}'", p, symbol);
            return Ok(ShotResult::Hit);
        }

        let id = (0..self.placed.len())
            .find(|&id| self.placed[id] && self.game.ship_symbol(id) == symbol)
            .ok_or(BoardError::InvalidShipId)?;
        self.cells.set(p, Cell::Hit)?;
        self.placed[id] = false;
        log::debug!("attack at {} destroyed ship {} ({})", p, id, self.game.ship_name(id));
        Ok(ShotResult::Destroyed(id))
    }

    /// True when no ship remains placed.
    pub fn all_destroyed(&self) -> bool {
        self.placed.iter().all(|placed| !placed)
    }

    fn has_other_segment(&self, p: Point, symbol: char) -> bool {
        let dims = self.game.dims();
        let in_row = (0..dims.cols())
            .filter(|&c| c != p.c)
            .any(|c| self.cells.get(Point::new(p.r, c)) == Ok(&Cell::Ship(symbol)));
        in_row
            || (0..dims.rows())
                .filter(|&r| r != p.r)
                .any(|r| self.cells.get(Point::new(r, p.c)) == Ok(&Cell::Ship(symbol)))
    }

    fn check_target(&self, origin: Point, id: ShipId) -> Result<(), BoardError> {
        if id >= self.game.n_ships() {
            return Err(BoardError::InvalidShipId);
        }
        if !self.game.is_valid(origin) {
            return Err(BoardError::OutOfBounds);
        }
        Ok(())
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  cells: {:?},\n  placed: {:?}\n}}",
            self.cells, self.placed
        )
    }
}

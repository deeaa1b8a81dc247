//! Backtracking search for a complete, legal fleet layout.

use core::ops::{Deref, DerefMut};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::PLACEMENT_DEPTH_LIMIT;
use crate::grid::Direction;
use crate::ship::ShipId;

/// Keeps half of a board blocked for as long as it lives and unblocks it on
/// drop, whichever way the holder exits.
pub struct BlockGuard<'b, 'g> {
    board: &'b mut Board<'g>,
}

impl<'b, 'g> BlockGuard<'b, 'g> {
    pub fn new<R: Rng + ?Sized>(board: &'b mut Board<'g>, rng: &mut R) -> Self {
        board.block(rng);
        Self { board }
    }
}

impl<'g> Deref for BlockGuard<'_, 'g> {
    type Target = Board<'g>;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for BlockGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for BlockGuard<'_, '_> {
    fn drop(&mut self) {
        self.board.unblock();
    }
}

/// Place every ship of the catalog on `board`.
///
/// Half of the board is randomly blocked during the search so repeated calls
/// produce different layouts. On success every ship is placed; on failure
/// none of the ships placed by the search remain. Blocked cells are always
/// cleared before returning.
pub fn place_fleet<R: Rng + ?Sized>(board: &mut Board<'_>, rng: &mut R) -> Result<(), BoardError> {
    let mut guard = BlockGuard::new(board, rng);
    if place_from(&mut guard, 0, 0)? {
        log::debug!("placement search succeeded");
        Ok(())
    } else {
        log::debug!("placement search exhausted");
        Err(BoardError::PlacementExhausted)
    }
}

/// Try to place ships `id..` given that ships before `id` are already down.
/// Returns `Ok(false)` after undoing its own placements when no layout works.
fn place_from(board: &mut Board<'_>, id: ShipId, depth: usize) -> Result<bool, BoardError> {
    let game = board.game();
    if id >= game.n_ships() {
        return Ok(true);
    }
    if depth == PLACEMENT_DEPTH_LIMIT {
        log::debug!("placement search hit depth limit at ship {}", id);
        return Ok(false);
    }
    for origin in game.dims().points() {
        for dir in Direction::ALL {
            if board.place_ship(origin, id, dir).is_err() {
                continue;
            }
            if place_from(board, id + 1, depth + 1)? {
                return Ok(true);
            }
            board.unplace_ship(origin, id, dir)?;
        }
    }
    Ok(false)
}

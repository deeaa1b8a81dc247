#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::board::{Board, Cell};
use crate::grid::Point;

/// Text picture of `board`: a header of column digits, then one line per row.
/// With `shots_only`, anything other than hits and misses shows as water.
pub fn render_board(board: &Board<'_>, shots_only: bool) -> String {
    let dims = board.game().dims();
    let mut out = String::from("  ");
    for c in 0..dims.cols() {
        let _ = write!(out, "{}", c);
    }
    out.push('\n');
    for r in 0..dims.rows() {
        let _ = write!(out, "{} ", r);
        for c in 0..dims.cols() {
            let cell = board.cell(Point::new(r, c)).unwrap_or(Cell::Empty);
            let shown = match cell {
                Cell::Hit | Cell::Miss | Cell::Empty => cell,
                _ if shots_only => Cell::Empty,
                _ => cell,
            };
            out.push(shown.symbol());
        }
        out.push('\n');
    }
    out
}


use crate::ship::ShipDef;

/// Largest supported number of rows.
pub const MAX_ROWS: usize = 10;
/// Largest supported number of columns.
pub const MAX_COLS: usize = 10;

/// Recursion depth at which the placement search gives up.
pub const PLACEMENT_DEPTH_LIMIT: usize = 50;

/// How many times a computer player re-blocks and re-runs the placement search
/// before reporting failure.
pub const PLACEMENT_ATTEMPTS: usize = 10;

/// Half-width of the pursuit cross around the last attacked cell.
pub const PURSUIT_REACH: usize = 4;

/// Cell glyphs with a fixed meaning; ship symbols may not reuse them.
pub const EMPTY_SYMBOL: char = '.';
pub const BLOCKED_SYMBOL: char = ' ';
pub const HIT_SYMBOL: char = 'X';
pub const MISS_SYMBOL: char = 'o';
pub const RESERVED_SYMBOLS: [char; 3] = [HIT_SYMBOL, EMPTY_SYMBOL, MISS_SYMBOL];

pub const STANDARD_ROWS: usize = 10;
pub const STANDARD_COLS: usize = 10;
pub const NUM_STANDARD_SHIPS: usize = 5;
pub const STANDARD_SHIPS: [ShipDef; NUM_STANDARD_SHIPS] = [
    ShipDef::new(5, 'A', "aircraft carrier"),
    ShipDef::new(4, 'B', "battleship"),
    ShipDef::new(3, 'D', "destroyer"),
    ShipDef::new(3, 'S', "submarine"),
    ShipDef::new(2, 'P', "patrol boat"),
];

pub const MINI_ROWS: usize = 2;
pub const MINI_COLS: usize = 3;
pub const MINI_SHIP: ShipDef = ShipDef::new(2, 'R', "rowboat");

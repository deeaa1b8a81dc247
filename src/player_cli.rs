#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError};
use crate::game::Game;
use crate::grid::{Dimensions, Direction, Point};
use crate::player::Player;
use crate::ui::render_board;

/// Parse "r c" into a point. Anything else, including negative numbers, is
/// rejected.
pub fn parse_point(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    Some(Point::new(r, c))
}

/// Parse a direction answer: the first non-blank character must be `h` or `v`.
pub fn parse_direction(line: &str) -> Option<Direction> {
    match line.trim().chars().next()? {
        'h' | 'H' => Some(Direction::Horizontal),
        'v' | 'V' => Some(Direction::Vertical),
        _ => None,
    }
}

/// Where a human player's answers come from, one line at a time.
pub trait LineInput {
    /// Append the next line to `buf`. `Ok(0)` means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks stdin for a single line only, so pauses between turns and a second
/// human can read from it as well.
impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineInput for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Prompts are best effort; a broken output stream does not stop the game.
fn say<O: Write>(output: &mut O, args: fmt::Arguments<'_>) {
    let _ = output.write_fmt(args);
    let _ = output.flush();
}

/// A person playing through line-based text input.
pub struct HumanPlayer<I, O> {
    name: String,
    dims: Dimensions,
    input: I,
    output: O,
}

impl HumanPlayer<Stdin, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio(name: impl Into<String>, game: &Game) -> Self {
        Self::new(name, game, io::stdin(), io::stdout())
    }
}

impl<I: LineInput, O: Write> HumanPlayer<I, O> {
    pub fn new(name: impl Into<String>, game: &Game, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            dims: game.dims(),
            input,
            output,
        }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn ask_direction(&mut self, board: &Board<'_>, id: usize) -> Option<Direction> {
        let game = board.game();
        loop {
            say(&mut self.output, format_args!(
                "Enter h or v for direction of {} (length {}): ",
                game.ship_name(id),
                game.ship_length(id)
            ));
            if let Some(dir) = parse_direction(&self.read_line()?) {
                return Some(dir);
            }
        }
    }
}

impl<I: LineInput, O: Write> Player for HumanPlayer<I, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        let game = board.game();
        say(&mut self.output, format_args!(
            "{} must place {} ships.\n",
            self.name,
            game.n_ships()
        ));
        for id in 0..game.n_ships() {
            say(&mut self.output, format_args!("{}", render_board(board, false)));
            let dir = self
                .ask_direction(board, id)
                .ok_or(BoardError::PlacementExhausted)?;
            let end = match dir {
                Direction::Horizontal => "leftmost",
                Direction::Vertical => "topmost",
            };
            loop {
                say(&mut self.output, format_args!(
                    "Enter row and column of {} cell (e.g., 3 5): ",
                    end
                ));
                let line = self.read_line().ok_or(BoardError::PlacementExhausted)?;
                let placed = parse_point(&line)
                    .map(|p| board.place_ship(p, id, dir))
                    .unwrap_or(Err(BoardError::OutOfBounds));
                match placed {
                    Ok(()) => break,
                    Err(e) => {
                        log::debug!("rejected placement for ship {}: {}", id, e);
                        say(&mut self.output, format_args!("The ship can not be placed there.\n"));
                    }
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Point {
        loop {
            say(&mut self.output, format_args!(
                "Enter the row and column to attack (e.g., 3 5): "
            ));
            let Some(line) = self.read_line() else {
                // No more input: forfeit the shot.
                return Point::new(self.dims.rows(), self.dims.cols());
            };
            match parse_point(&line) {
                // Off-board points go back as-is; the board rejects them.
                Some(p) => return p,
                None => say(&mut self.output, format_args!("You must enter two integers.\n")),
            }
        }
    }

    fn record_attack_result(&mut self, _point: Point, _outcome: AttackOutcome) {}
}

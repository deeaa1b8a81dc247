#![cfg(feature = "std")]
//! Turn-taking between two players, single games and multi-game matches.

use std::io::{self, Write};
use std::string::String;
use std::vec::Vec;

use anyhow::Result;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{AttackOutcome, ShotResult};
use crate::game::Game;
use crate::player::{create_player, Player, PlayerKind};
use crate::ui::render_board;

/// A game is abandoned once this many rounds per board cell have passed.
const ROUNDS_PER_CELL: usize = 4;

/// How a single game is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Wait for Enter on stdin after every attack.
    pub pause: bool,
    /// Describe every turn on the output.
    pub narrate: bool,
    /// Round limit; defaults to a multiple of the board area.
    pub max_rounds: Option<usize>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            pause: false,
            narrate: true,
            max_rounds: None,
        }
    }
}

impl PlayOptions {
    /// No narration, no pauses.
    pub fn quiet() -> Self {
        Self {
            narrate: false,
            ..Self::default()
        }
    }
}

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    First,
    Second,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` when a player could not place its ships or the round limit hit.
    pub winner: Option<Seat>,
    /// Rounds started; each round is up to one attack per player.
    pub rounds: usize,
}

impl GameOutcome {
    fn unfinished(rounds: usize) -> Self {
        Self {
            winner: None,
            rounds,
        }
    }
}

/// Play one game. `first` moves first and owns the first board.
pub fn play(
    game: &Game,
    first: &mut dyn Player,
    second: &mut dyn Player,
    rng: &mut SmallRng,
    options: PlayOptions,
    out: &mut dyn Write,
) -> Result<GameOutcome> {
    if game.n_ships() == 0 {
        log::warn!("refusing to play a game without ships");
        return Ok(GameOutcome::unfinished(0));
    }
    let mut first_board = Board::new(game);
    let mut second_board = Board::new(game);
    if !set_up(first, &mut first_board, rng) || !set_up(second, &mut second_board, rng) {
        return Ok(GameOutcome::unfinished(0));
    }

    let limit = options
        .max_rounds
        .unwrap_or(ROUNDS_PER_CELL * game.dims().area());
    let mut rounds = 0;
    let winner = loop {
        if rounds >= limit {
            log::warn!("game abandoned after {} rounds", rounds);
            return Ok(GameOutcome::unfinished(rounds));
        }
        rounds += 1;
        if take_turn(first, second, &mut second_board, rng, options, out)? {
            break Seat::First;
        }
        if take_turn(second, first, &mut first_board, rng, options, out)? {
            break Seat::Second;
        }
    };

    let (victor, loser, victor_board) = match winner {
        Seat::First => (&*first, &*second, &first_board),
        Seat::Second => (&*second, &*first, &second_board),
    };
    log::info!("{} beat {} in {} rounds", victor.name(), loser.name(), rounds);
    if options.narrate {
        writeln!(out, "{} wins!", victor.name())?;
        if loser.is_human() {
            write!(out, "{}", render_board(victor_board, false))?;
        }
    }
    Ok(GameOutcome {
        winner: Some(winner),
        rounds,
    })
}

fn set_up(player: &mut dyn Player, board: &mut Board<'_>, rng: &mut SmallRng) -> bool {
    match player.place_ships(rng, board) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{} could not place ships: {}", player.name(), e);
            false
        }
    }
}

/// One attack by `attacker` on `target`. Returns true if it sank the last ship.
fn take_turn(
    attacker: &mut dyn Player,
    defender: &mut dyn Player,
    target: &mut Board<'_>,
    rng: &mut SmallRng,
    options: PlayOptions,
    out: &mut dyn Write,
) -> Result<bool> {
    let shots_only = attacker.is_human();
    if options.narrate {
        writeln!(
            out,
            "{}'s turn.  Board for {}:",
            attacker.name(),
            defender.name()
        )?;
        write!(out, "{}", render_board(target, shots_only))?;
    }

    let point = attacker.recommend_attack(rng);
    let result = target.attack(point);
    attacker.record_attack_result(point, AttackOutcome::from(result));
    defender.record_attack_by_opponent(point);

    if options.narrate {
        match result {
            Ok(shot) => {
                write!(out, "{} attacked {} ", attacker.name(), point)?;
                match shot {
                    ShotResult::Destroyed(id) => {
                        write!(out, "and destroyed the {}", target.game().ship_name(id))?
                    }
                    ShotResult::Hit => write!(out, "and hit something")?,
                    ShotResult::Miss => write!(out, "and missed")?,
                }
                writeln!(out, ", resulting in:")?;
            }
            Err(e) => writeln!(out, "{} wasted a shot at {} ({}).", attacker.name(), point, e)?,
        }
        write!(out, "{}", render_board(target, shots_only))?;
    }

    let won = target.all_destroyed();
    if options.pause && !won {
        wait_for_enter(out)?;
    }
    Ok(won)
}

fn wait_for_enter(out: &mut dyn Write) -> Result<()> {
    write!(out, "Press enter to continue: ")?;
    out.flush()?;
    let mut line = String::new();
    // Lock per line; human players read from the same stdin.
    io::stdin().read_line(&mut line)?;
    Ok(())
}

/// Wins for one side of a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerTally {
    pub name: String,
    pub kind: PlayerKind,
    pub wins: usize,
    /// Percentage of all trials won.
    pub win_rate: f64,
}

/// Summary of a multi-game match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub rows: usize,
    pub cols: usize,
    pub trials: usize,
    pub players: Vec<PlayerTally>,
    /// Games that ended without a winner.
    pub undecided: usize,
}

/// Play `trials` quiet games between fresh players of the two kinds,
/// alternating who moves first.
pub fn run_match(
    game: &Game,
    contenders: [(PlayerKind, &str); 2],
    trials: usize,
    rng: &mut SmallRng,
) -> Result<MatchReport> {
    let mut wins = [0usize; 2];
    let mut undecided = 0;
    for k in 1..=trials {
        let mut a = create_player(contenders[0].0, contenders[0].1, game);
        let mut b = create_player(contenders[1].0, contenders[1].1, game);
        // Odd games: contender 0 moves first.
        let a_first = k % 2 == 1;
        let outcome = if a_first {
            play(game, a.as_mut(), b.as_mut(), rng, PlayOptions::quiet(), &mut io::sink())?
        } else {
            play(game, b.as_mut(), a.as_mut(), rng, PlayOptions::quiet(), &mut io::sink())?
        };
        match (outcome.winner, a_first) {
            (Some(Seat::First), true) | (Some(Seat::Second), false) => wins[0] += 1,
            (Some(_), _) => wins[1] += 1,
            (None, _) => undecided += 1,
        }
        log::info!("game {} of {}: {:?}", k, trials, outcome);
    }

    let players = contenders
        .iter()
        .zip(wins)
        .map(|(&(kind, name), wins)| PlayerTally {
            name: name.into(),
            kind,
            wins,
            win_rate: if trials == 0 {
                0.0
            } else {
                wins as f64 * 100.0 / trials as f64
            },
        })
        .collect();
    Ok(MatchReport {
        rows: game.rows(),
        cols: game.cols(),
        trials,
        players,
        undecided,
    })
}

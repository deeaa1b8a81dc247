#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{create_player, init_logging, play, run_match, Game, PlayOptions, PlayerKind};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// A mini-game on a 2x3 board with a single rowboat.
    Mini {
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        p2: PlayerKind,
    },
    /// Play the standard game against a computer opponent.
    Human {
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        opponent: PlayerKind,
        #[arg(long, default_value = "Human")]
        name: String,
    },
    /// Watch one standard game between two players.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        p2: PlayerKind,
        #[arg(long, help = "Wait for Enter after every attack")]
        pause: bool,
    },
    /// Play many quiet standard games and report the win rates.
    Match {
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        p2: PlayerKind,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut rng = make_rng(cli.seed);
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Mini { p1, p2 } => {
            let game = Game::mini().context("building mini game")?;
            println!("This mini-game has one ship, a 2-segment rowboat.");
            let mut a = create_player(p1, "Popeye", &game);
            let mut b = create_player(p2, "Bluto", &game);
            let options = PlayOptions {
                pause: a.is_human() || b.is_human(),
                ..PlayOptions::default()
            };
            play(&game, a.as_mut(), b.as_mut(), &mut rng, options, &mut out)?;
        }
        Commands::Human { opponent, name } => {
            let game = Game::standard().context("building standard game")?;
            let mut computer = create_player(opponent, "Computer", &game);
            let mut human = create_player(PlayerKind::Human, name, &game);
            play(
                &game,
                computer.as_mut(),
                human.as_mut(),
                &mut rng,
                PlayOptions {
                    pause: true,
                    ..PlayOptions::default()
                },
                &mut out,
            )?;
        }
        Commands::Play { p1, p2, pause } => {
            let game = Game::standard().context("building standard game")?;
            let mut a = create_player(p1, "Player 1", &game);
            let mut b = create_player(p2, "Player 2", &game);
            let options = PlayOptions {
                pause,
                ..PlayOptions::default()
            };
            let outcome = play(&game, a.as_mut(), b.as_mut(), &mut rng, options, &mut out)?;
            if outcome.winner.is_none() {
                println!("The game ended without a winner.");
            }
        }
        Commands::Match { trials, p1, p2 } => {
            let game = Game::standard().context("building standard game")?;
            let report = run_match(&game, [(p1, "Player 1"), (p2, "Player 2")], trials, &mut rng)?;
            for tally in &report.players {
                println!(
                    "{} ({:?}) won {} of {} games ({:.1}%).",
                    tally.name, tally.kind, tally.wins, report.trials, tally.win_rate
                );
            }
            if report.undecided > 0 {
                println!("{} games ended without a winner.", report.undecided);
            }
        }
    }
    Ok(())
}

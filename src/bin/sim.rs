use anyhow::Context;
use broadside::{init_logging, run_match, Game, PlayerKind};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [trials]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse().context("seed must be an unsigned integer")?;
    let trials: usize = match args.get(2) {
        Some(t) => t.parse().context("trials must be an unsigned integer")?,
        None => 10,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let game = Game::standard()?;
    let report = run_match(
        &game,
        [(PlayerKind::Good, "good"), (PlayerKind::Mediocre, "mediocre")],
        trials,
        &mut rng,
    )?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

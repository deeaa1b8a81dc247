use broadside::{
    create_player, level_from, play, run_match, AwfulPlayer, Game, GoodPlayer, MediocrePlayer,
    PlayOptions, Player, PlayerKind, Seat,
};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn narrated_game_announces_the_winner() {
    let game = Game::mini().unwrap();
    let mut rng = SmallRng::seed_from_u64(17);
    let mut first = GoodPlayer::new("Popeye", &game);
    let mut second = MediocrePlayer::new("Bluto", &game);
    let mut out = Vec::new();
    let outcome = play(
        &game,
        &mut first,
        &mut second,
        &mut rng,
        PlayOptions::default(),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Popeye's turn.  Board for Bluto:\n  012\n"));
    assert!(text.contains("Popeye attacked ("));
    assert!(text.contains(", resulting in:"));
    assert!(text.contains("and destroyed the rowboat"));
    let winner = match outcome.winner {
        Some(Seat::First) => "Popeye",
        Some(Seat::Second) => "Bluto",
        None => panic!("mini game did not finish"),
    };
    assert!(text.ends_with(&format!("{} wins!\n", winner)));
}

#[test]
fn quiet_game_writes_nothing() {
    let game = Game::standard().unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut first = GoodPlayer::new("a", &game);
    let mut second = AwfulPlayer::new("b", &game);
    let mut out = Vec::new();
    let outcome = play(
        &game,
        &mut first,
        &mut second,
        &mut rng,
        PlayOptions::quiet(),
        &mut out,
    )
    .unwrap();
    assert!(outcome.winner.is_some());
    assert!(out.is_empty());
}

#[test]
fn round_limit_ends_the_game() {
    let game = Game::standard().unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut first = MediocrePlayer::new("a", &game);
    let mut second = MediocrePlayer::new("b", &game);
    let options = PlayOptions {
        max_rounds: Some(3),
        ..PlayOptions::quiet()
    };
    let outcome = play(&game, &mut first, &mut second, &mut rng, options, &mut std::io::sink())
        .unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.rounds, 3);
    assert_eq!(first.memory().untried().count(), 97);
}

#[test]
fn game_without_ships_is_not_played() {
    let game = Game::new(3, 3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut first = MediocrePlayer::new("a", &game);
    let mut second = MediocrePlayer::new("b", &game);
    let outcome = play(
        &game,
        &mut first,
        &mut second,
        &mut rng,
        PlayOptions::quiet(),
        &mut std::io::sink(),
    )
    .unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.rounds, 0);
}

#[test]
fn failed_placement_leaves_the_game_undecided() {
    let mut game = Game::new(2, 2).unwrap();
    game.add_ship(1, 'a', "a").unwrap();
    game.add_ship(1, 'b', "b").unwrap();
    game.add_ship(1, 'c', "c").unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut first = MediocrePlayer::new("a", &game);
    let mut second = AwfulPlayer::new("b", &game);
    let outcome = play(
        &game,
        &mut first,
        &mut second,
        &mut rng,
        PlayOptions::quiet(),
        &mut std::io::sink(),
    )
    .unwrap();
    assert_eq!(outcome.winner, None);
}

#[test]
fn match_counts_every_trial() {
    let game = Game::standard().unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    let report = run_match(
        &game,
        [(PlayerKind::Good, "good"), (PlayerKind::Awful, "awful")],
        6,
        &mut rng,
    )
    .unwrap();
    assert_eq!(report.trials, 6);
    assert_eq!((report.rows, report.cols), (10, 10));
    let wins: usize = report.players.iter().map(|t| t.wins).sum();
    assert_eq!(wins + report.undecided, 6);
    for tally in &report.players {
        assert!((tally.win_rate - tally.wins as f64 * 100.0 / 6.0).abs() < 1e-9);
    }
    assert_eq!(report.players[0].kind, PlayerKind::Good);
    assert_eq!(report.players[1].name, "awful");
}

#[test]
fn match_report_serializes_to_json() {
    let game = Game::mini().unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    let report = run_match(
        &game,
        [(PlayerKind::Mediocre, "m"), (PlayerKind::Good, "g")],
        4,
        &mut rng,
    )
    .unwrap();
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["rows"], 2);
    assert_eq!(v["cols"], 3);
    assert_eq!(v["trials"], 4);
    assert_eq!(v["players"][0]["kind"], "mediocre");
    assert_eq!(v["players"][1]["name"], "g");
    assert!(v["undecided"].is_u64());
}

#[test]
fn empty_match_has_zero_rates() {
    let game = Game::mini().unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let report = run_match(
        &game,
        [(PlayerKind::Awful, "a"), (PlayerKind::Awful, "b")],
        0,
        &mut rng,
    )
    .unwrap();
    assert!(report.players.iter().all(|t| t.wins == 0 && t.win_rate == 0.0));
}

#[test]
fn created_players_keep_their_names() {
    let game = Game::standard().unwrap();
    for kind in [PlayerKind::Awful, PlayerKind::Mediocre, PlayerKind::Good] {
        let player = create_player(kind, "Nemo", &game);
        assert_eq!(player.name(), "Nemo");
        assert!(!player.is_human());
    }
}

#[test]
fn log_level_defaults_to_warn() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("OFF")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
}

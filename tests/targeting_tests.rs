use broadside::{
    AttackOutcome, DensityMap, DensityPicker, Dimensions, Grid, Knowledge, Mode, Point,
    RandomPicker, ShotResult, StrategyMemory, TargetPicker,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn dims(rows: usize, cols: usize) -> Dimensions {
    Dimensions::new(rows, cols).unwrap()
}

fn miss() -> AttackOutcome {
    AttackOutcome::from(ShotResult::Miss)
}

fn hit() -> AttackOutcome {
    AttackOutcome::from(ShotResult::Hit)
}

/// Misses on all four neighbours of (5,5), then a hit on (5,5) itself.
fn surrounded_hit() -> StrategyMemory {
    let mut memory = StrategyMemory::new(dims(10, 10));
    for p in [
        Point::new(5, 4),
        Point::new(5, 6),
        Point::new(4, 5),
        Point::new(6, 5),
    ] {
        memory.record(p, &miss());
    }
    memory.record(Point::new(5, 5), &hit());
    memory
}

#[test]
fn density_counts_both_orientations() {
    let shadow = Grid::new(dims(3, 3), Knowledge::Unknown);
    let map = DensityMap::build(&shadow, &[2]);
    assert_eq!(map.get(Point::new(1, 1)), 4);
    assert_eq!(map.get(Point::new(0, 0)), 2);
    assert_eq!(map.get(Point::new(2, 2)), 2);
    assert_eq!(map.get(Point::new(0, 1)), 3);
    assert_eq!(map.get(Point::new(1, 2)), 3);
    assert_eq!(map.counts().iter().map(|(_, n)| *n).max(), Some(4));
    assert_eq!(map.get(Point::new(3, 3)), 0);
}

#[test]
fn density_sums_over_ship_lengths() {
    let shadow = Grid::new(dims(1, 3), Knowledge::Unknown);
    let map = DensityMap::build(&shadow, &[2, 3, 0]);
    assert_eq!(map.get(Point::new(0, 0)), 2);
    assert_eq!(map.get(Point::new(0, 1)), 3);
    assert_eq!(map.get(Point::new(0, 2)), 2);
}

#[test]
fn misses_exclude_runs_but_hits_do_not() {
    let mut shadow = Grid::new(dims(1, 3), Knowledge::Unknown);
    shadow.set(Point::new(0, 1), Knowledge::Miss).unwrap();
    let map = DensityMap::build(&shadow, &[2]);
    assert!(map.counts().iter().all(|(_, n)| *n == 0));

    shadow.set(Point::new(0, 1), Knowledge::Hit).unwrap();
    let map = DensityMap::build(&shadow, &[2]);
    assert_eq!(map.get(Point::new(0, 0)), 1);
    assert_eq!(map.get(Point::new(0, 1)), 2);
    assert_eq!(map.get(Point::new(0, 2)), 1);
}

#[test]
fn densest_prefers_the_first_of_equal_cells() {
    let shadow = Grid::new(dims(3, 3), Knowledge::Unknown);
    let map = DensityMap::build(&shadow, &[2]);
    let corners = [
        Point::new(2, 2),
        Point::new(0, 0),
        Point::new(0, 2),
    ];
    assert_eq!(map.densest(corners), Some(Point::new(2, 2)));
    assert_eq!(map.densest(dims(3, 3).points()), Some(Point::new(1, 1)));
    assert_eq!(map.densest(Vec::new()), None);
}

#[test]
fn record_updates_shadow_only_for_valid_shots() {
    let mut memory = StrategyMemory::new(dims(4, 4));
    memory.record(Point::new(1, 1), &hit());
    memory.record(Point::new(2, 2), &miss());
    memory.record(Point::new(3, 3), &AttackOutcome::INVALID);
    memory.record(Point::new(9, 9), &AttackOutcome::INVALID);
    assert_eq!(memory.knowledge(Point::new(1, 1)), Knowledge::Hit);
    assert_eq!(memory.knowledge(Point::new(2, 2)), Knowledge::Miss);
    assert_eq!(memory.knowledge(Point::new(3, 3)), Knowledge::Unknown);
    assert_eq!(memory.last_attack(), Some(Point::new(9, 9)));
    assert_eq!(memory.untried().count(), 14);
}

#[test]
fn pursuit_candidates_stay_on_the_cross() {
    let memory = surrounded_hit();
    let candidates = memory.pursuit_candidates();
    assert_eq!(candidates.len(), 12);
    for p in &candidates {
        assert!(p.r == 5 || p.c == 5);
        let dist = p.r.abs_diff(5) + p.c.abs_diff(5);
        assert!((2..=4).contains(&dist), "{} is off the cross", p);
    }
    // Row portion first.
    assert_eq!(candidates[0], Point::new(5, 1));
}

#[test]
fn both_pickers_chase_a_surrounded_hit() {
    for seed in 0..8 {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut memory = surrounded_hit();
        let p = memory.decide(&mut RandomPicker, &mut rng).unwrap();
        assert_eq!(memory.mode(), Mode::Target);
        assert!(memory.pursuit_candidates().contains(&p));

        let mut memory = surrounded_hit();
        let mut picker = DensityPicker::new(vec![5, 4, 3, 3, 2]);
        let p = memory.decide(&mut picker, &mut rng).unwrap();
        assert_eq!(memory.mode(), Mode::Target);
        assert!(memory.pursuit_candidates().contains(&p));
        assert_ne!(p, Point::new(5, 5));
    }
}

#[test]
fn destroying_a_ship_returns_to_hunting() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut memory = StrategyMemory::new(dims(10, 10));
    let mut picker = RandomPicker;
    assert_eq!(memory.mode(), Mode::Hunt);

    memory.record(Point::new(2, 2), &hit());
    let p = memory.decide(&mut picker, &mut rng).unwrap();
    assert_eq!(memory.mode(), Mode::Target);

    memory.record(p, &AttackOutcome::from(ShotResult::Destroyed(4)));
    let next = memory.decide(&mut picker, &mut rng).unwrap();
    assert_eq!(memory.mode(), Mode::Hunt);
    assert!(memory.is_untried(next));
}

#[test]
fn exhausted_cross_falls_back_to_hunting() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut memory = StrategyMemory::new(dims(1, 10));
    for c in 1..=4 {
        memory.record(Point::new(0, c), &miss());
    }
    memory.record(Point::new(0, 0), &hit());
    assert!(memory.pursuit_candidates().is_empty());

    let mut picker = DensityPicker::new(vec![2]);
    let p = memory.decide(&mut picker, &mut rng).unwrap();
    assert_eq!(memory.mode(), Mode::Hunt);
    assert!(p.c >= 5);
}

#[test]
fn nothing_left_to_try() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut memory = StrategyMemory::new(dims(1, 3));
    memory.record(Point::new(0, 0), &miss());
    memory.record(Point::new(0, 2), &miss());
    memory.record(Point::new(0, 1), &hit());
    assert_eq!(memory.decide(&mut RandomPicker, &mut rng), None);
    assert_eq!(memory.decide(&mut DensityPicker::new(vec![2]), &mut rng), None);
}

#[test]
fn hunting_never_repeats_a_cell() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut memory = StrategyMemory::new(dims(4, 5));
    let mut seen = Vec::new();
    while let Some(p) = memory.decide(&mut RandomPicker, &mut rng) {
        assert!(!seen.contains(&p));
        seen.push(p);
        memory.record(p, &miss());
    }
    assert_eq!(seen.len(), 20);
}

#[test]
fn density_hunt_picks_a_densest_cell() {
    let mut rng = SmallRng::seed_from_u64(2);
    let memory = StrategyMemory::new(dims(10, 10));
    let mut picker = DensityPicker::new(vec![5, 4, 3, 3, 2]);
    let p = picker.hunt(&memory, &mut rng).unwrap();
    let map = picker.density(&memory);
    let top = map.counts().iter().map(|(_, n)| *n).max().unwrap();
    assert_eq!(map.get(p), top);
}

#[test]
fn forgotten_ships_stop_counting() {
    let mut picker = DensityPicker::new(vec![2, 3]);
    picker.forget_ship(0);
    picker.forget_ship(7);
    assert_eq!(picker.remaining(), &[0, 3]);

    let memory = StrategyMemory::new(dims(1, 3));
    let map = picker.density(&memory);
    assert_eq!(map.get(Point::new(0, 0)), 1);
    assert_eq!(map.get(Point::new(0, 1)), 1);
}

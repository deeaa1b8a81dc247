//! Target selection: how a player picks a cell in hunt and in target mode.
//!
//! The strongest player scores every cell by how many still-possible ship
//! placements cover it and always fires at the densest untried cell. The
//! mid-tier player picks uniformly among untried cells instead.

use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::grid::{Direction, Grid, Point};
use crate::memory::{Knowledge, StrategyMemory};
use crate::ship::ShipId;

/// Cell selection policy plugged into [`StrategyMemory::decide`].
pub trait TargetPicker {
    /// Pick any untried cell. `None` when nothing is left.
    fn hunt<R: Rng + ?Sized>(&mut self, memory: &StrategyMemory, rng: &mut R) -> Option<Point>;

    /// Pick one of `candidates` (untried cells around the last attack).
    /// `None` ends the pursuit.
    fn pursue<R: Rng + ?Sized>(
        &mut self,
        memory: &StrategyMemory,
        candidates: &[Point],
        rng: &mut R,
    ) -> Option<Point>;
}

/// Uniformly random choice, no weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl TargetPicker for RandomPicker {
    fn hunt<R: Rng + ?Sized>(&mut self, memory: &StrategyMemory, rng: &mut R) -> Option<Point> {
        let untried: Vec<Point> = memory.untried().collect();
        untried.choose(rng).copied()
    }

    fn pursue<R: Rng + ?Sized>(
        &mut self,
        _memory: &StrategyMemory,
        candidates: &[Point],
        rng: &mut R,
    ) -> Option<Point> {
        candidates.choose(rng).copied()
    }
}

/// Per-cell count of remaining-ship placements that avoid every known miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityMap {
    counts: Grid<u32>,
}

impl DensityMap {
    /// Count, for each ship with a non-zero remaining length, every horizontal
    /// and every vertical run that stays on the board and touches no known
    /// miss. A cell covered by both a horizontal and a vertical run of the
    /// same ship is counted twice. Known hits do not exclude a run.
    pub fn build(shadow: &Grid<Knowledge>, remaining: &[usize]) -> Self {
        let dims = shadow.dims();
        let mut counts = Grid::new(dims, 0u32);
        for &len in remaining.iter().filter(|&&len| len > 0) {
            for origin in dims.points() {
                for dir in Direction::ALL {
                    let Some(run) = dims.footprint(origin, dir, len) else {
                        continue;
                    };
                    let run: Vec<Point> = run.collect();
                    if run.iter().any(|&p| shadow.get(p) == Ok(&Knowledge::Miss)) {
                        continue;
                    }
                    for p in run {
                        if let Ok(n) = counts.get_mut(p) {
                            *n += 1;
                        }
                    }
                }
            }
        }
        Self { counts }
    }

    /// Density at `p`, zero off the board.
    pub fn get(&self, p: Point) -> u32 {
        self.counts.get(p).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &Grid<u32> {
        &self.counts
    }

    /// Highest value among `points`; ties go to the earliest point.
    pub fn densest(&self, points: impl IntoIterator<Item = Point>) -> Option<Point> {
        let mut best: Option<(Point, u32)> = None;
        for p in points {
            let d = self.get(p);
            match best {
                Some((_, top)) if d <= top => {}
                _ => best = Some((p, d)),
            }
        }
        best.map(|(p, _)| p)
    }
}

/// Density-weighted selection. Tracks the lengths of ships not yet destroyed.
#[derive(Debug, Clone)]
pub struct DensityPicker {
    remaining: Vec<usize>,
}

impl DensityPicker {
    /// Start tracking ships with the given lengths, indexed by ship id.
    pub fn new(lengths: Vec<usize>) -> Self {
        Self { remaining: lengths }
    }

    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Stop counting ship `id`. Unknown ids are ignored.
    pub fn forget_ship(&mut self, id: ShipId) {
        if let Some(len) = self.remaining.get_mut(id) {
            *len = 0;
        }
    }

    pub fn density(&self, memory: &StrategyMemory) -> DensityMap {
        DensityMap::build(memory.shadow(), &self.remaining)
    }
}

impl TargetPicker for DensityPicker {
    fn hunt<R: Rng + ?Sized>(&mut self, memory: &StrategyMemory, _rng: &mut R) -> Option<Point> {
        self.density(memory).densest(memory.untried())
    }

    fn pursue<R: Rng + ?Sized>(
        &mut self,
        memory: &StrategyMemory,
        candidates: &[Point],
        _rng: &mut R,
    ) -> Option<Point> {
        self.density(memory).densest(candidates.iter().copied())
    }
}

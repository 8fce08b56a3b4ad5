//! Uniform random move selection for the computer opponent.

use super::{Cell, OccupiedCells};
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Computer opponent that picks any free cell with equal probability.
#[derive(Debug, Clone)]
pub struct RandomMover<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    /// Creates a new random mover drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Returns the mover's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Draws a cell uniformly from those not in `occupied`.
    ///
    /// Returns `None` only when every cell is taken.
    #[instrument(skip(self, occupied), fields(mover = %self.name, taken = occupied.len()))]
    pub fn choose(&mut self, occupied: &OccupiedCells) -> Option<Cell> {
        let choice = Cell::ALL
            .into_iter()
            .filter(|cell| !occupied.contains(cell))
            .choose(&mut self.rng);
        debug!(?choice, "Random mover chose");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn mover(seed: u64) -> RandomMover<StdRng> {
        RandomMover::new("Computer", StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_never_picks_occupied() {
        let mut mover = mover(7);
        let taken = [Cell::TopLeft, Cell::Center, Cell::BottomRight, Cell::TopRight];
        let occupied: OccupiedCells = taken.into_iter().collect();
        for _ in 0..500 {
            let cell = mover.choose(&occupied).unwrap();
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_single_free_cell() {
        let mut mover = mover(1);
        let occupied: OccupiedCells = Cell::ALL
            .into_iter()
            .filter(|&c| c != Cell::MiddleLeft)
            .collect();
        assert_eq!(mover.choose(&occupied), Some(Cell::MiddleLeft));
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut mover = mover(1);
        let occupied: OccupiedCells = Cell::ALL.into_iter().collect();
        assert_eq!(mover.choose(&occupied), None);
    }

    #[test]
    fn test_roughly_uniform() {
        let mut mover = mover(42);
        let occupied: OccupiedCells = [Cell::Center, Cell::TopCenter].into_iter().collect();
        let trials = 14_000;
        let mut counts: HashMap<Cell, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(mover.choose(&occupied).unwrap()).or_default() += 1;
        }
        assert_eq!(counts.len(), 7);
        let expected = trials / 7;
        for (cell, count) in counts {
            // 2000 expected per cell; allow a wide margin.
            assert!(
                count > expected * 8 / 10 && count < expected * 12 / 10,
                "cell {} drawn {} times",
                cell,
                count
            );
        }
    }
}

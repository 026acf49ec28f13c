//! Deterministic generation of winnable boards.
//!
//! ## Construction
//!
//! Sowing from house `h` empties it and adds one seed to every pit below.
//! The inverse step takes one seed from every pit below an empty house `h`
//! and refills `h` with exactly `h` seeds. Starting from a won board and
//! applying inverse steps yields a board from which replaying those steps in
//! reverse order wins, so every generated board is winnable by construction.
//! The greedy planner then also wins on it, by greedy completeness.
//!
//! ## Determinism
//!
//! Same seed, same sequence of boards. Useful for reproducible puzzle sets
//! and for tests; use [`BoardGenerator::from_entropy`] for interactive play.

use log::trace;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::board::Board;

/// Generator of winnable Tchoukaillon boards.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    rng: ChaCha8Rng,
}

impl BoardGenerator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a winnable board with `houses` houses by applying up to
    /// `moves` inverse sowing steps to a won board.
    ///
    /// Stops early once no inverse step applies, so the hidden solution may
    /// be shorter than `moves`. The store is emptied on the way out: a
    /// fresh puzzle starts with nothing banked.
    ///
    /// # Panics
    ///
    /// Panics if `houses` is zero. A board without houses has nothing to
    /// scramble.
    pub fn winnable(&mut self, houses: usize, moves: usize) -> Board {
        assert!(houses > 0, "Must have at least 1 house");

        // Seed budget: every inverse step takes one seed out of the store.
        let mut pits = vec![0u32; houses + 1];
        pits[0] = moves as u32;

        let mut applied = 0;
        for _ in 0..moves {
            // An inverse step needs an empty house with at least one seed
            // in every pit below it.
            let candidates: SmallVec<[usize; 8]> = (1..=houses)
                .filter(|&h| pits[h] == 0 && pits[..h].iter().all(|&seeds| seeds >= 1))
                .collect();

            let house = match candidates.choose(&mut self.rng) {
                Some(&house) => house,
                None => break,
            };

            for pit in 0..house {
                pits[pit] -= 1;
            }
            pits[house] = house as u32;
            applied += 1;
        }

        trace!(
            "generated a {}-house board after {} inverse steps",
            houses,
            applied
        );

        pits[0] = 0;
        Board::from_configuration(&pits)
    }
}

/*
rng.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridlock.

Gridlock is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridlock is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridlock. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Random sources for the grid generator.
//!
//! The generator only needs uniform integers in a half-open range, which is what the
//! [`RngSource`] trait provides.
//! [`GridRng`] is the seeded implementation. Given the same seed, it produces the same sequence
//! on every platform, so a puzzle can be rebuilt from its seed alone.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random integers.
pub trait RngSource {
    /// Return an integer in `low..high_exclusive`.
    fn next_int(&mut self, low: usize, high_exclusive: usize) -> usize;
}

/// Deterministic random source.
#[derive(Clone, Debug)]
pub struct GridRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GridRng {
    /// Create a [`GridRng`] object from the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a [`GridRng`] object with a random seed.
    ///
    /// The seed is kept so that the puzzle can be reproduced later.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        debug!("Random seed = {seed}");
        Self::new(seed)
    }

    /// Return the seed used to create the object.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngSource for GridRng {
    fn next_int(&mut self, low: usize, high_exclusive: usize) -> usize {
        self.inner.random_range(low..high_exclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = GridRng::new(42);
        let mut rng2 = GridRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_int(0, 1000), rng2.next_int(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GridRng::new(1);
        let mut rng2 = GridRng::new(2);

        let seq1: Vec<usize> = (0..10).map(|_| rng1.next_int(0, 1000)).collect();
        let seq2: Vec<usize> = (0..10).map(|_| rng2.next_int(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = GridRng::new(7);

        for _ in 0..1000 {
            let v = rng.next_int(5, 11);
            assert!((5..11).contains(&v));
        }
    }

    #[test]
    fn test_from_entropy_keeps_seed() {
        let mut rng = GridRng::from_entropy();
        let mut replay = GridRng::new(rng.seed());

        assert_eq!(rng.next_int(0, 1_000_000), replay.next_int(0, 1_000_000));
    }
}

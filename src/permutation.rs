//! Random permutation of record indices
//!
//! One permutation is drawn per run and applied to both stores of a pair,
//! which is what keeps mates aligned after shuffling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices
///
/// Implemented for every `rand::Rng`, so a seeded `StdRng` can be passed in
/// directly when a run has to be reproducible.
pub trait IndexSource {
    /// Uniform integer in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Build the run's random generator: seeded if a seed is given, otherwise
/// seeded from OS entropy
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::debug!("Using seeded random generator (seed={})", seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            log::debug!("Using entropy-seeded random generator");
            StdRng::from_entropy()
        }
    }
}

/// A bijection from logical output position to original record index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// The identity permutation `0..n`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Fisher-Yates shuffle of `0..n`, walking backwards from the last slot
    ///
    /// Every one of the `n!` orderings is reachable. For `n <= 1` no random
    /// values are drawn.
    pub fn shuffled<S: IndexSource + ?Sized>(n: usize, source: &mut S) -> Self {
        let mut perm = Self::identity(n);
        if n < 2 {
            return perm;
        }

        for i in (1..n).rev() {
            let j = source.next_index(i + 1);
            debug_assert!(j <= i, "index source returned {} for bound {}", j, i + 1);
            perm.indices.swap(i, j);
        }
        perm
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// True if every index in `0..len` appears exactly once
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.indices.len()];
        for &idx in &self.indices {
            if idx >= seen.len() || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

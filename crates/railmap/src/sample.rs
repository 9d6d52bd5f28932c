//! Seeded sampling (replay tokens + shrinking draw pools).
//!
//! Purpose
//! - Give every randomized pass (color draws, mutation rounds, destination
//!   slots, optional insertion-order shuffles) the same reproducibility
//!   contract: a `(seed, index)` replay token mixed into a single RNG.
//!
//! Model
//! - `ReplayToken` derives an `StdRng` deterministically, so one map seed
//!   can feed many independent passes by bumping `index`.
//! - `DrawPool` is the draw-without-replacement primitive every sampler
//!   here is built from: uniform pick, swap-remove, done.
//!
//! Code cross-refs: `graph::assign_route_colors`, `mutate::mutate`,
//! `destinations::generate`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Derive the pass RNG.
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform draw-without-replacement over an owned pool.
///
/// Draw order is random but pool membership is exact: every item comes out
/// at most once, and `len` counts what is left.
#[derive(Clone, Debug)]
pub struct DrawPool<T> {
    items: Vec<T>,
}

impl<T> DrawPool<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw one item uniformly; `None` once the pool is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let k = rng.gen_range(0..self.items.len());
        Some(self.items.swap_remove(k))
    }

    /// Draw uniformly among items satisfying `keep`.
    ///
    /// Only the drawn item leaves the pool; rejected items stay available
    /// for later draws under a different predicate.
    pub fn draw_where<R: Rng>(&mut self, rng: &mut R, keep: impl Fn(&T) -> bool) -> Option<T> {
        let eligible: Vec<usize> = (0..self.items.len())
            .filter(|&i| keep(&self.items[i]))
            .collect();
        if eligible.is_empty() {
            return None;
        }
        let k = eligible[rng.gen_range(0..eligible.len())];
        Some(self.items.swap_remove(k))
    }
}

/// Seeded permutation of a slice via pool draws; the input stays untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut pool = DrawPool::new((0..items.len()).collect::<Vec<usize>>());
    let mut out = Vec::with_capacity(items.len());
    while let Some(i) = pool.draw(rng) {
        out.push(items[i].clone());
    }
    out
}

/// `count` reproducible points in the unit box `[0, 1)^2`.
///
/// The unit box keeps the default super-triangle margin comfortably around
/// the cloud; callers wanting other extents scale afterwards.
pub fn random_unit_points(count: usize, token: ReplayToken) -> Vec<crate::geom::Point> {
    let mut rng = token.to_std_rng();
    (0..count)
        .map(|_| crate::geom::Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

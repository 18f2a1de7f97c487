#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
///
/// A single instance is meant to be shared by every component of a run, so all randomness is
/// drawn from one uniform source.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool {
        self.uniform_int(1, 2) == 1
    }

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool {
        self.uniform_real(0., 1.) < probability
    }
}

/// A default random implementation backed by a small, fast, non cryptographic generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    /// Creates a new instance of `DefaultRandom` which produces the same sequence on every run.
    pub fn new_repeatable() -> Self {
        Self::with_seed(0)
    }

    fn with_rng<R, F: FnOnce(&mut SmallRng) -> R>(&self, func: F) -> R {
        // NOTE a poisoned lock still holds a valid generator state
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        func(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max + 1))
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_head_not_tails(&self) -> bool {
        self.with_rng(|rng| rng.gen_bool(0.5))
    }

    fn is_hit(&self, probability: Float) -> bool {
        let probability = if probability.is_nan() { 0. } else { probability.clamp(0., 1.) };
        self.with_rng(|rng| rng.gen_bool(probability))
    }
}

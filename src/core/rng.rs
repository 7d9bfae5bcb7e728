//! Randomness sources for reward generation and event resolution.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the `RandomSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces identical runs
//! - **Scriptable**: `ScriptedRolls` replays fixed values for tests
//!
//! ## Usage
//!
//! ```
//! use card_adventure::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.next_unit();
//! assert!((0.0..1.0).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform `[0, 1)` generator consumed by the reward table and event buttons.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Seeded RNG used for live play.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Replays a fixed list of rolls, then repeats a fallback value.
///
/// Values are clamped into `[0, 1)` so a script can never produce an
/// out-of-range draw.
///
/// ```
/// use card_adventure::core::{RandomSource, ScriptedRolls};
///
/// let mut rolls = ScriptedRolls::new([0.05, 0.6]).with_fallback(0.99);
/// assert_eq!(rolls.next_unit(), 0.05);
/// assert_eq!(rolls.next_unit(), 0.6);
/// assert_eq!(rolls.next_unit(), 0.99);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    queue: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRolls {
    /// Create a script from the given rolls. The fallback defaults to `0.0`.
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: rolls.into_iter().map(clamp_unit).collect(),
            fallback: 0.0,
        }
    }

    /// A script that always returns `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new([]).with_fallback(value)
    }

    /// Set the value returned once the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, value: f64) -> Self {
        self.fallback = clamp_unit(value);
        self
    }

    /// Append more rolls to the end of the script.
    pub fn push(&mut self, roll: f64) {
        self.queue.push_back(clamp_unit(roll));
    }

    /// Number of scripted rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

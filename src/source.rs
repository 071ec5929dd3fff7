//! Random sources for the decision functions.
//!
//! Both estimators only ever need one primitive: a uniform integer over a
//! half-open range. Routing every draw through [`RandomSource`] lets callers
//! plug in a seeded generator, a scripted sequence, or a real forecasting
//! backend without touching the estimators.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform integer draws.
pub trait RandomSource {
    /// Draws an integer uniformly from `low..high`.
    fn draw(&mut self, low: i64, high: i64) -> i64;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
///
/// # Example
///
/// ```
/// use farmdash::source::{RandomSource, RngSource};
///
/// let mut source = RngSource::seeded(7);
/// let value = source.draw(10, 50);
/// assert!((10..50).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed sequence of values, then repeats a fallback.
///
/// Values are returned as given, without regard to the requested range.
///
/// # Example
///
/// ```
/// use farmdash::source::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([49, 10]);
/// assert_eq!(source.draw(10, 50), 49);
/// assert_eq!(source.draw(10, 50), 10);
/// assert_eq!(source.draw(-2, 2), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<i64>,
    fallback: i64,
}

impl ScriptedSource {
    /// Scripts `values` in order; once drained every draw returns `0`.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        ScriptedSource {
            queue: values.into_iter().collect(),
            fallback: 0,
        }
    }

    /// A source that always returns `value`.
    pub fn constant(value: i64) -> Self {
        ScriptedSource {
            queue: VecDeque::new(),
            fallback: value,
        }
    }

    /// Sets the value returned after the scripted values run out.
    pub fn with_fallback(mut self, fallback: i64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, _low: i64, _high: i64) -> i64 {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

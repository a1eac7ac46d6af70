// src/random.rs

//! Defines `SeededRandom`, the linear-congruential generator behind every
//! random decision in a composition.
//!
//! The recurrence is `state = (state * 9301 + 49297) mod 233280` and each draw
//! returns `state / 233280`. The state is held as an `f64` so that every step
//! rounds exactly like the IEEE-754 doubles of the embedded script, including
//! for negative seeds where the remainder keeps the sign of the dividend.

/// Multiplier of the recurrence.
pub const MULTIPLIER: f64 = 9301.0;
/// Increment of the recurrence.
pub const INCREMENT: f64 = 49297.0;
/// Modulus of the recurrence; also the exclusive bound of `state`.
pub const MODULUS: f64 = 233280.0;

/// Seeded pseudo-random source. One instance lives for one generation call.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: f64,
    trace: Option<Vec<f64>>,
}

impl SeededRandom {
    /// Creates a generator whose first `next()` advances from `seed`.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed as f64,
            trace: None,
        }
    }

    /// Creates a generator that records every value returned by `next()`.
    pub fn with_trace(seed: i64) -> Self {
        Self {
            state: seed as f64,
            trace: Some(Vec::new()),
        }
    }

    /// Advances the state and returns a value in `[0, 1)` (negative seeds
    /// yield values in `(-1, 0]`).
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        let value = self.state / MODULUS;
        if let Some(trace) = self.trace.as_mut() {
            trace.push(value);
        }
        value
    }

    /// Returns `floor(next() * bound)`.
    pub fn next_int(&mut self, bound: i64) -> i64 {
        (self.next() * bound as f64).floor() as i64
    }

    /// Returns a shuffled copy of `items` (Fisher-Yates, last index down to 1).
    ///
    /// Exactly one `next()` is consumed per swap, in descending index order.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = (self.next() * (i + 1) as f64).floor();
            // Only a negative seed can push j outside [0, i].
            let j = j.clamp(0.0, i as f64) as usize;
            out.swap(i, j);
        }
        out
    }

    /// Values drawn so far, if this generator was created with `with_trace`.
    pub fn trace(&self) -> Option<&[f64]> {
        self.trace.as_deref()
    }

    /// Consumes the generator, returning its recorded trace (empty if untraced).
    pub fn into_trace(self) -> Vec<f64> {
        self.trace.unwrap_or_default()
    }
}

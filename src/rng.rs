const MULTIPLIER: u64 = 25_173;
const INCREMENT: u64 = 13_849;
const MODULUS: u64 = 32_768;

/// Linear congruential generator driving every random interval in a run.
///
/// The sequence depends only on the seed: two generators built from the same
/// seed yield the same values in the same order.
#[derive(Clone, Debug)]
pub struct LinearCongruential {
    seed: i64,
    register: u64,
}

impl LinearCongruential {
    pub fn new(seed: i64) -> Self {
        // (A * s + C) mod M == (A * (s mod M) + C) mod M, so reducing here
        // keeps the recurrence in range without changing the sequence.
        // Negative seeds reduce to their non-negative residue.
        Self {
            seed,
            register: seed.rem_euclid(MODULUS as i64) as u64,
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Advances the register and returns a fraction in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.register = (MULTIPLIER * self.register + INCREMENT) % MODULUS;
        self.register as f64 / MODULUS as f64
    }

    pub fn between(&mut self, low: f64, high: f64) -> f64 {
        (high - low) * self.next() + low
    }
}

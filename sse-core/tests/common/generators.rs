//! Seeded generators for stochastic tests
//!
//! Uses a seeded RNG for reproducibility. Print the seed on failure for
//! replay via `SSE_TEST_SEED`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("SSE_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Random read sizes, mostly small so terminators land on edges.
    pub fn read_sizes(&mut self, count: usize) -> Vec<usize> {
        (0..count)
            .map(|_| {
                if self.rng.gen_bool(0.8) {
                    self.rng.gen_range(1..=4)
                } else {
                    self.rng.gen_range(5..=64)
                }
            })
            .collect()
    }

    /// Uniform count in `lo..=hi`.
    pub fn rng_count(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..=hi)
    }

    /// One of the three line terminators.
    pub fn line_ending(&mut self) -> &'static str {
        match self.rng.gen_range(0..3) {
            0 => "\n",
            1 => "\r\n",
            _ => "\r",
        }
    }

    /// A terminator that cannot merge with `prev` into a single `\r\n`.
    pub fn line_ending_after(&mut self, prev: &str) -> &'static str {
        match self.line_ending() {
            "\n" if prev == "\r" => "\r\n",
            ending => ending,
        }
    }

    /// Short printable payload without line breaks.
    pub fn payload(&mut self) -> String {
        let len = self.rng.gen_range(0..12);
        (0..len)
            .map(|_| {
                let c = self.rng.gen_range(b' '..=b'~');
                c as char
            })
            .collect()
    }
}

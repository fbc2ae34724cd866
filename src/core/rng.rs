//! RNG module - seedable randomness for the AI opponent
//!
//! The AI picks its column uniformly at random with no board inspection, so
//! all it needs is a deterministic, seedable source of small integers.
//! A fixed seed reproduces the full AI column sequence in tests.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for logging/restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// Uniform random column source for the AI player.
///
/// No retry logic lives here: if a picked column turns out to be full, the
/// engine rejects that sub-move and the turn sequence ends.
#[derive(Debug, Clone)]
pub struct ColumnPicker {
    rng: SimpleRng,
    cols: usize,
}

impl ColumnPicker {
    pub fn new(seed: u32, cols: usize) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            cols,
        }
    }

    /// Pick a column uniformly from [0, cols)
    pub fn pick(&mut self) -> usize {
        self.rng.next_range(self.cols as u32) as usize
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}

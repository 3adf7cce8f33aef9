//! RNG module - seeded generator for shape draws and spawn columns
//!
//! A session owns its generator, so the same seed replays the same sequence
//! of shapes and spawn positions.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by multiplication so the result depends on the high bits;
    /// the low bits of a power-of-two LCG have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_range requires a non-empty range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for Monte Carlo sampling.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. A seeded Monte Carlo scheme
//! relies on this to draw the identical point set on every call.

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use quadrature_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let x = rng.uniform(0.0, 2.0); // [0.0, 2.0)
/// assert!(x >= 0.0 && x < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    ///
    /// # Example
    /// ```
    /// use quadrature_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// assert_eq!(rng.get_state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the thread-local OS-seeded generator
    ///
    /// Two generators created this way are not expected to produce the same
    /// sequence. Used by unseeded Monte Carlo schemes.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replaying a stream from a known point)
    ///
    /// # Example
    /// ```
    /// use quadrature_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let state = rng.get_state();
    ///
    /// let mut replay = RngManager::new(state);
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use quadrature_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let u = rng.next_f64();
    /// assert!(u >= 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^64
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random f64 uniformly distributed in [low, high)
    ///
    /// `low + (high - low) * u` can round up to `high` for wide ranges; such
    /// draws are discarded and redrawn so the upper bound stays exclusive.
    ///
    /// # Panics
    /// Panics if low >= high or `high - low` is not finite
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        assert!(low < high, "low must be less than high");

        let width = high - low;
        assert!(width.is_finite(), "range width must be finite");
        loop {
            let x = low + width * self.next_f64();
            if x < high {
                return x;
            }
        }
    }
}

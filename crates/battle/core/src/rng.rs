//! Injected "next integer in range" capability.
//!
//! Anything random around a battle (pack opening, shuffles) takes an
//! [`Intner`] instead of reaching for a global generator, so callers and
//! tests stay deterministic.

/// Source of uniformly distributed integers.
pub trait Intner {
    /// Returns a value in `0..n`. Returns 0 when `n == 0`.
    fn intn(&mut self, n: u32) -> u32;
}

impl<T: Intner + ?Sized> Intner for &mut T {
    fn intn(&mut self, n: u32) -> u32 {
        (**self).intn(n)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Same seed, same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl Intner for PcgRng {
    /// Uniform in `0..n`: outputs below `2^32 mod n` are redrawn so the
    /// final modulo carries no bias.
    fn intn(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % n;
            }
        }
    }
}

// Minimal seeded PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It exists so a maze can be replayed exactly from a recorded seed.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        // Marsaglia / Vigna family. Simple, fast, decent for simulation noise.
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    pub fn next_bool(&mut self) -> bool {
        // High bit; the low bits of xorshift64* are the weakest.
        self.next_u64() >> 63 != 0
    }

    #[inline]
    pub fn gen_range_u32(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = high - low;
        low + self.next_u32() % span
    }

    #[inline]
    pub fn gen_range_usize(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        let span = (high - low) as u32;
        let v = self.next_u32() % span;
        low + v as usize
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// `xoroshiro128+` generator used to lay out random scenes reproducibly.
///
/// Not cryptographically secure. Identical seeds yield identical shape
/// layouts on every platform, which keeps demo scenes and regression tests
/// comparable run to run.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Seeds the generator from one 64-bit value via SplitMix64 expansion.
    pub fn from_seed(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(GOLDEN_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm = seed;
        let mut state = [splitmix64(&mut sm), splitmix64(&mut sm)];
        if state == [0, 0] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, mut s1] = self.state;
        let result = s0.wrapping_add(s1);
        s1 ^= s0;
        self.state = [s0.rotate_left(55) ^ s1 ^ (s1 << 14), s1.rotate_left(36)];
        result
    }

    /// Next float in `[0, 1)` built from the high 23 state bits.
    pub fn next_f32(&mut self) -> f32 {
        let bits = ((self.next_u64() >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Uniform float in `[from, to)`; returns `from` when the range is empty.
    pub fn range_f32(&mut self, from: f32, to: f32) -> f32 {
        if to <= from {
            return from;
        }
        from + (to - from) * self.next_f32()
    }

    /// Uniform integer in the inclusive range `[min, max]` (rejection sampled).
    pub fn range_usize(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "invalid range: {min}..={max}");
        let span = (max - min) as u64 + 1;
        let bound = u64::MAX - u64::MAX % span;
        let value = loop {
            let candidate = self.next_u64();
            if candidate < bound {
                break candidate % span;
            }
        };
        min + value as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Prng::from_seed(7);
        let mut b = Prng::from_seed(7);
        for _ in 0..16 {
            assert_eq!(a.next_f32().to_bits(), b.next_f32().to_bits());
        }
    }

    #[test]
    fn ranges_stay_in_bounds() {
        let mut prng = Prng::from_seed(0xDEAD_BEEF);
        for _ in 0..1000 {
            let f = prng.range_f32(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&f));
            let n = prng.range_usize(3, 8);
            assert!((3..=8).contains(&n));
        }
        assert_eq!(prng.range_usize(4, 4), 4);
        assert_eq!(prng.range_f32(2.0, 2.0), 2.0);
    }
}

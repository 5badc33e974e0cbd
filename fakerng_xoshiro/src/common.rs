// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Expand a `u64` seed into two state words using `SplitMix64`.
///
/// The first draw becomes the low word, the second the high word.
macro_rules! from_splitmix {
    ($seed:expr) => {{
        let mut rng = crate::SplitMix64::seed_from_u64($seed);
        let s0 = rng.next_u64();
        let s1 = rng.next_u64();
        (s0, s1)
    }};
}

/// Implement the xoroshiro iteration (parameters a = 55, b = 14, c = 36).
macro_rules! impl_xoroshiro_u64 {
    ($self:expr) => {
        $self.s1 ^= $self.s0;
        $self.s0 = $self.s0.rotate_left(55) ^ $self.s1 ^ ($self.s1 << 14);
        $self.s1 = $self.s1.rotate_left(36);
    };
}

/// Implement a jump function for a two-word generator of the xoroshiro
/// family.
macro_rules! impl_jump {
    (u64, $self:expr, [$j0:expr, $j1:expr]) => {
        const JUMP: [u64; 2] = [$j0, $j1];
        let mut s0 = 0;
        let mut s1 = 0;
        for j in &JUMP {
            for b in 0..64 {
                if (j & 1 << b) != 0 {
                    s0 ^= $self.s0;
                    s1 ^= $self.s1;
                }
                $self.next_u64();
            }
        }
        $self.s0 = s0;
        $self.s1 = s1;
    };
}

// Deterministic, portable seed hashing and pseudo-random number generation.
//
// Implements the gallery's seeded draw stream: an arbitrary seed string is
// folded into four 32-bit words by parallel FNV-1a accumulators, and those
// words become the state of a xoshiro128+-style generator whose outputs are
// floats in the unit interval. This is a hand-rolled implementation with
// zero external dependencies, chosen for portability and to guarantee
// identical output across all platforms.
//
// This crate is the single source of randomness for the whole Lumen
// project: `lumen_artwork` (palette and layout generation) draws from it at
// generation time and `lumen_tuner` (batch quality scoring) replays the
// same contract offline. By sharing one generator we avoid external RNG
// crates and guarantee that a seed string reproduces the same artwork
// everywhere.
//
// **Critical constraint: determinism.** Every function here must produce
// bit-identical output given the same inputs, regardless of platform,
// compiler version, or optimization level. The float quotient
// `u32 / 0xffff_ffff` is part of the published recipe — golden-seed tests
// downstream pin its exact results — so it must not be "improved" into a
// mantissa-fill conversion, and the sampler arithmetic must keep its exact
// expression order.

use serde::{Deserialize, Serialize};

/// FNV-1a offset basis; every hash lane starts from it.
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a prime for the 32-bit fold.
const FNV_PRIME: u32 = 0x0100_0193;

/// XOR salts decorrelating the four hash lanes. Lane 0 is the plain
/// FNV-1a stream; the others diverge from the first fold step onward.
const LANE_SALTS: [u32; 4] = [0x0000_0000, 0xdead_beef, 0xcafe_babe, 0x1234_5678];

/// Substitute for word 0 when a seed hashes to the all-zero state, which
/// would make the generator emit a constant zero stream.
const ZERO_STATE_FALLBACK: u32 = 0x1234_5678;

/// Hash a seed string into four 32-bit state words.
///
/// Runs an FNV-1a fold independently in four lanes, each initialized to the
/// offset basis XORed with a distinct salt. The fold consumes the string's
/// UTF-16 code units (the recipe's "character codes"), so ASCII seeds hash
/// one byte per step. Never fails: the empty string is valid and hashes to
/// the four (nonzero) lane bases.
pub fn hash_seed(seed: &str) -> [u32; 4] {
    let mut words = LANE_SALTS.map(|salt| FNV_OFFSET_BASIS ^ salt);
    for unit in seed.encode_utf16() {
        for w in &mut words {
            *w ^= u32::from(unit);
            *w = w.wrapping_mul(FNV_PRIME);
        }
    }
    if words == [0, 0, 0, 0] {
        words[0] = ZERO_STATE_FALLBACK;
    }
    words
}

/// Xoshiro128+-style PRNG over the four hashed seed words.
///
/// One instance serves exactly one generation call: the artwork pipeline
/// threads a single `ArtRng` through parameter derivation, palette jitter,
/// and layout placement, so the position of every draw in the stream is
/// part of the reproducibility contract. The state is never reseeded
/// mid-stream and never shared between calls.
///
/// The period far exceeds the few hundred draws one generation consumes,
/// so no repetition is observable within a call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtRng {
    s: [u32; 4],
}

impl ArtRng {
    /// Create a generator from a seed string via [`hash_seed`].
    pub fn from_seed(seed: &str) -> Self {
        Self { s: hash_seed(seed) }
    }

    /// Create a generator from four explicit state words.
    ///
    /// Callers are expected to pass words produced by [`hash_seed`]; an
    /// all-zero state is degenerate (constant zero stream).
    pub fn from_words(words: [u32; 4]) -> Self {
        Self { s: words }
    }

    /// Advance the state and return the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let result = self.s[0].wrapping_add(self.s[3]);

        let t = self.s[1] << 9;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(11);

        result
    }

    /// Next draw as a float: `next_u32() / 0xffff_ffff`.
    ///
    /// The divisor is the fixed constant `u32::MAX`, so the quotient spans
    /// the closed unit interval; the value 1.0 is reachable only when the
    /// raw draw is exactly `0xffff_ffff` (probability 2⁻³²). That quotient
    /// is the recipe the rest of the engine is pinned to.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform float in `[min, max)`: `min + next() * (max - min)`.
    ///
    /// Consumes exactly one draw.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `[min, max]` — the upper bound is inclusive.
    ///
    /// Computed as `floor(range(min, max + 1))`, consuming exactly one
    /// draw. The float rounding at the boundary gives `max` a slightly
    /// different probability mass than interior values, and the 2⁻³² draw
    /// of exactly 1.0 lands on `max + 1`; both quirks are deliberate parts
    /// of the tuned recipe and must not be corrected here.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        self.range(f64::from(min), f64::from(max) + 1.0).floor() as i32
    }

    /// `true` with probability `p`. Consumes exactly one draw.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick a uniformly random element. Consumes exactly one draw.
    ///
    /// Panics if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick: items must be non-empty");
        let idx = self.int(0, items.len() as i32 - 1) as usize;
        &items[idx]
    }
}

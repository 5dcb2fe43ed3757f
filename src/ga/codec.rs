//! Conversions between a bounded real value and a fixed-length bit string.
//!
//! The encoded integer is read big-endian (gene 0 is the most significant
//! bit). Decoding interpolates linearly so that `0` maps to `lower` and
//! `2^B - 1` maps to `upper`.

use super::types::{Chromosome, Population};
use rand::Rng;

/// Longest chromosome that can be decoded through a `u64`.
pub const MAX_BITS: usize = 63;

/// Smallest `B` with `2^B >= (upper - lower) / precision + 1`.
///
/// The result is always at least 1. Callers validate `upper > lower` and
/// `precision > 0` beforehand (see [`GaConfig::validate`](super::GaConfig::validate)).
///
/// # Examples
///
/// ```
/// use u_bitga::ga::codec::bit_length;
///
/// assert_eq!(bit_length(0.0, 1.0, 1.0), 1);   // 2 values
/// assert_eq!(bit_length(0.0, 3.0, 1.0), 2);   // 4 values
/// assert_eq!(bit_length(0.0, 4.0, 1.0), 3);   // 5 values
/// ```
pub fn bit_length(lower: f64, upper: f64, precision: f64) -> usize {
    let count = (upper - lower) / precision + 1.0;
    let mut bits: i32 = 1;
    // Powers of two are exact in f64, so the comparison is exact too.
    while bits < f64::MAX_EXP && 2f64.powi(bits) < count {
        bits += 1;
    }
    bits as usize
}

/// Unsigned big-endian integer value of a gene sequence.
///
/// # Panics
/// Panics if `genes` is longer than 64.
pub fn to_integer(genes: &[bool]) -> u64 {
    assert!(genes.len() <= 64, "at most 64 genes fit in a u64");
    genes.iter().fold(0u64, |acc, &g| (acc << 1) | g as u64)
}

/// Big-endian `bits`-gene chromosome holding `value`.
///
/// Higher bits of `value` that do not fit are dropped.
pub fn from_integer(value: u64, bits: usize) -> Chromosome {
    let genes = (0..bits)
        .rev()
        .map(|shift| shift < 64 && (value >> shift) & 1 == 1)
        .collect();
    Chromosome::new(genes)
}

/// Largest integer a `bits`-gene chromosome can hold.
fn max_integer(bits: usize) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Decodes a chromosome to its real value in `[lower, upper]`.
///
/// `lower + v / (2^bits - 1) * (upper - lower)`, where `v` is the big-endian
/// integer value. An empty chromosome decodes to `lower`.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::codec::{decode, from_integer};
///
/// assert_eq!(decode(&from_integer(0, 4), 0.0, 15.0, 4), 0.0);
/// assert_eq!(decode(&from_integer(15, 4), 0.0, 15.0, 4), 15.0);
/// assert!((decode(&from_integer(5, 4), 0.0, 15.0, 4) - 5.0).abs() < 1e-12);
/// ```
pub fn decode(chromosome: &Chromosome, lower: f64, upper: f64, bits: usize) -> f64 {
    debug_assert_eq!(chromosome.len(), bits, "chromosome length must equal bits");
    let max = max_integer(bits);
    if max == 0 {
        return lower;
    }
    let v = to_integer(chromosome.genes());
    let value = lower + (v as f64 / max as f64) * (upper - lower);
    // Rounding in `lower + (upper - lower)` may land one ulp above `upper`.
    value.min(upper)
}

/// Encodes a real value into a `bits`-gene chromosome.
///
/// Lossy: the value is normalized to `[0, 1]` (clipped to the domain),
/// scaled to `[0, 2^bits - 1]` and truncated. Decoding the result gives the
/// nearest representable value at or below `x`, up to floating-point error.
pub fn encode(x: f64, lower: f64, upper: f64, bits: usize) -> Chromosome {
    let normalized = ((x - lower) / (upper - lower)).clamp(0.0, 1.0);
    let v = (normalized * max_integer(bits) as f64) as u64;
    from_integer(v, bits)
}

/// A chromosome whose genes are independent fair coin flips.
pub fn random_chromosome<R: Rng>(bits: usize, rng: &mut R) -> Chromosome {
    Chromosome::new((0..bits).map(|_| rng.random_bool(0.5)).collect())
}

/// `size` random chromosomes of `bits` genes each.
pub fn init_population<R: Rng>(size: usize, bits: usize, rng: &mut R) -> Population {
    let mut population = Population::new(bits);
    for _ in 0..size {
        population.push(random_chromosome(bits, rng));
    }
    population
}

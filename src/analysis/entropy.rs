//! Quantization and Shannon entropy over bucket histograms

use std::collections::HashMap;
use std::hash::Hash;

use crate::io::configuration::{LUMA_BLUE, LUMA_GREEN, LUMA_RED};
use crate::io::error::{Result, invalid_argument};

/// Reject sensitivities that can't define a bucket width
///
/// A step so small that `255 / sensitivity` overflows would send every
/// non-zero value to the same infinite bucket, so those are rejected too.
///
/// # Errors
///
/// Returns `InvalidArgument` unless `sensitivity` is finite, positive and
/// coarse enough to quantize the full 8-bit range
pub fn validate_sensitivity(sensitivity: f64) -> Result<f64> {
    if !(sensitivity.is_finite() && sensitivity > 0.0) {
        return Err(invalid_argument(
            "color_sensitivity",
            &sensitivity,
            &"must be a finite value greater than zero",
        ));
    }
    if !(f64::from(u8::MAX) / sensitivity).is_finite() {
        return Err(invalid_argument(
            "color_sensitivity",
            &sensitivity,
            &"too small to quantize 8-bit values",
        ));
    }
    Ok(sensitivity)
}

/// Histogram key of `value` for a quantization step of `sensitivity`
///
/// The key is the bit pattern of [`quantize`]'s result with `-0.0` folded
/// into `+0.0`, so two values share a bucket exactly when they quantize to
/// the same float, however large `value / sensitivity` gets.
pub fn bucket(value: f64, sensitivity: f64) -> u64 {
    // -0.0 + 0.0 is +0.0, every other value is unchanged
    (quantize(value, sensitivity) + 0.0).to_bits()
}

/// Round `value` to the nearest multiple of `sensitivity`
pub fn quantize(value: f64, sensitivity: f64) -> f64 {
    (value / sensitivity).round() * sensitivity
}

/// ITU-R BT.601 luma of an RGB triple
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_BLUE.mul_add(
        f64::from(b),
        LUMA_GREEN.mul_add(f64::from(g), LUMA_RED * f64::from(r)),
    )
}

/// Count occurrences of each key
pub fn histogram<K, I>(keys: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy in bits of a frequency distribution
///
/// `total` is the number of observations the counts were drawn from.
/// An empty distribution has entropy 0 by definition.
pub fn shannon_entropy<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let count = count as f64;
            // p * log2(1/p) keeps a single certain bucket at +0.0
            (count / total) * (total / count).log2()
        })
        .sum()
}

/// Entropy of the distinct keys in `keys`
pub fn entropy_of<K, I>(keys: I) -> f64
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let counts = histogram(keys);
    let total = counts.values().sum();
    shannon_entropy(counts.into_values(), total)
}

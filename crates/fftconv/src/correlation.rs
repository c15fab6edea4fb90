//! Correlation of integer sequences via FFT multiplication.
//!
//! Correlating `a` with `b` is multiplying `a` by `b` reversed. Folding the
//! linear result onto itself gives every cyclic alignment at once, which is
//! how the best rotation of one sequence against another is found in
//! O(n log n).

use num_traits::PrimInt;
use tracing::debug;

use crate::error::{FftError, Result};
use crate::fft_poly::multiply_with;
use crate::options::{MultiplyOptions, OutputLength, PrecisionPolicy};

/// Linear cross-correlation with the default precision policy.
pub fn cross_correlate<T: PrimInt>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    cross_correlate_with(a, b, PrecisionPolicy::default())
}

/// Linear cross-correlation.
///
/// Returns `a.len() + b.len() - 1` entries (empty if either input is
/// empty). Entry `m` is `Σ_i a[i] · b[i + b.len() - 1 - m]`, so the last
/// entry pairs `a[0]` with `b[0]` and lag increases towards the front.
///
/// # Errors
///
/// Same as [`multiply_with`].
pub fn cross_correlate_with<T: PrimInt>(
    a: &[T],
    b: &[T],
    precision: PrecisionPolicy,
) -> Result<Vec<T>> {
    let reversed: Vec<T> = b.iter().rev().copied().collect();
    let opts = MultiplyOptions::default()
        .with_output_len(OutputLength::Exact)
        .with_precision(precision);
    multiply_with(a, &reversed, &opts)
}

/// Cyclic correlation with the default precision policy.
pub fn cyclic_correlation<T: PrimInt>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    cyclic_correlation_with(a, b, PrecisionPolicy::default())
}

/// Cyclic correlation of two equal-length sequences.
///
/// Entry `s` is `Σ_i a[i] · b[(i + s) mod len]`: the score of `b` rotated
/// left by `s` against `a`.
///
/// # Errors
///
/// - `FftError::LengthMismatch` if the lengths differ.
/// - `FftError::InvalidInput` if folding overflows `T`.
/// - Anything [`multiply_with`] returns.
pub fn cyclic_correlation_with<T: PrimInt>(
    a: &[T],
    b: &[T],
    precision: PrecisionPolicy,
) -> Result<Vec<T>> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let len = a.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let linear = cross_correlate_with(a, b, precision)?;
    debug_assert_eq!(linear.len(), 2 * len - 1);

    // Shift s collects lag len-1-s plus, once b wraps, lag 2·len-1-s.
    (0..len)
        .map(|s| {
            let direct = linear[len - 1 - s];
            if s == 0 {
                return Ok(direct);
            }
            direct.checked_add(&linear[2 * len - 1 - s]).ok_or_else(|| {
                FftError::InvalidInput(format!("cyclic correlation at shift {s} overflows"))
            })
        })
        .collect()
}

/// Best cyclic alignment of `b` against `a`.
///
/// Returns the shift and its score, preferring the smallest shift on ties,
/// or `None` for empty input.
///
/// # Errors
///
/// Same as [`cyclic_correlation`].
pub fn max_cyclic_correlation<T: PrimInt>(a: &[T], b: &[T]) -> Result<Option<(usize, T)>> {
    let scores = cyclic_correlation(a, b)?;
    let best = scores
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, T)>, (shift, score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((shift, score)),
        });
    if let Some((shift, _)) = best {
        debug!(len = a.len(), shift, "best cyclic alignment");
    }
    Ok(best)
}

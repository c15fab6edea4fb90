//! Convolution drivers built on the FFT.
//!
//! Pipeline: zero-pad to a power of two, forward transform, pointwise
//! multiply, inverse transform, round the real parts back to integers.
//!
//! Rounding is exact only while every output coefficient stays below 2^53
//! in magnitude and the transform error stays below one half, which for
//! long operands is the tighter limit. `MultiplyOptions::precision` decides
//! whether inputs that may cross either line are rejected, logged, or
//! accepted as-is.

use num_traits::{NumCast, PrimInt};
use tracing::debug;

use crate::complex::Complex;
use crate::error::{FftError, Result};
use crate::fft_core::{fft_forward, fft_inverse};
use crate::options::MultiplyOptions;
use crate::precision::{to_exact_f64, PrecisionEstimate};

/// Transform length for operands of the given lengths: the smallest power
/// of two `>= len_a + len_b`, or 0 when both are empty.
#[must_use]
pub fn transform_len(len_a: usize, len_b: usize) -> usize {
    match len_a + len_b {
        0 => 0,
        total => total.next_power_of_two(),
    }
}

/// Multiply two integer polynomials with default options.
///
/// `a[i]` is the coefficient of `x^i`. The result has the padded
/// power-of-two length; see [`multiply_with`] for the other policies.
///
/// ```
/// let product = fftconv::multiply(&[1i64, 2, 3], &[4, 5, 6]).unwrap();
/// assert_eq!(product, vec![4, 13, 28, 27, 18, 0, 0, 0]);
/// ```
pub fn multiply<T: PrimInt>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    multiply_with(a, b, &MultiplyOptions::default())
}

/// Multiply two integer polynomials.
///
/// Both inputs empty yields an empty vector. One input empty yields the
/// zero polynomial in the requested length.
///
/// # Errors
///
/// - `FftError::InvalidInput` if a coefficient is above 2^53 in magnitude
///   or a rounded product does not fit `T`.
/// - `FftError::PrecisionRisk` if rounding may not recover the exact product
///   (see [`PrecisionEstimate`]) and `opts.precision` is `Reject`.
pub fn multiply_with<T: PrimInt>(a: &[T], b: &[T], opts: &MultiplyOptions) -> Result<Vec<T>> {
    let n = transform_len(a.len(), b.len());
    let out_len = opts.result_len(a.len(), b.len(), n);
    if a.is_empty() || b.is_empty() {
        return Ok(vec![T::zero(); out_len]);
    }

    PrecisionEstimate::of(a, b, n)?.enforce(opts.precision)?;

    let mut fa = to_buffer(a, n)?;
    let mut fb = to_buffer(b, n)?;

    fft_forward(&mut fa)?;
    fft_forward(&mut fb)?;

    let mut product = pointwise_multiply(&fa, &fb)?;

    fft_inverse(&mut product)?;

    debug!(len_a = a.len(), len_b = b.len(), n, "fft multiply");
    round_to_integers(&product[..out_len])
}

/// Square an integer polynomial with default options.
pub fn square<T: PrimInt>(a: &[T]) -> Result<Vec<T>> {
    square_with(a, &MultiplyOptions::default())
}

/// Square an integer polynomial, reusing a single forward transform.
///
/// Same output and errors as `multiply_with(a, a, opts)`.
pub fn square_with<T: PrimInt>(a: &[T], opts: &MultiplyOptions) -> Result<Vec<T>> {
    let n = transform_len(a.len(), a.len());
    let out_len = opts.result_len(a.len(), a.len(), n);
    if a.is_empty() {
        return Ok(Vec::new());
    }

    PrecisionEstimate::of(a, a, n)?.enforce(opts.precision)?;

    let mut coeffs = to_buffer(a, n)?;

    // Forward transform only once for squaring
    fft_forward(&mut coeffs)?;
    for coeff in &mut coeffs {
        *coeff = *coeff * *coeff;
    }
    fft_inverse(&mut coeffs)?;

    debug!(len = a.len(), n, "fft square");
    round_to_integers(&coeffs[..out_len])
}

/// Linear convolution of two real sequences.
///
/// Returns `a.len() + b.len() - 1` values, or an empty vector if either
/// input is empty. Values carry the usual floating-point error; nothing is
/// rounded.
pub fn convolve(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let n = transform_len(a.len(), b.len());

    let mut fa = real_buffer(a, n);
    let mut fb = real_buffer(b, n);
    fft_forward(&mut fa)?;
    fft_forward(&mut fb)?;
    let mut product = pointwise_multiply(&fa, &fb)?;
    fft_inverse(&mut product)?;

    debug!(len_a = a.len(), len_b = b.len(), n, "fft convolve");
    Ok(product[..a.len() + b.len() - 1]
        .iter()
        .map(|c| c.real)
        .collect())
}

/// Pointwise product of two frequency-domain buffers.
///
/// # Errors
///
/// `FftError::LengthMismatch` if the buffers differ in length.
pub fn pointwise_multiply(a: &[Complex], b: &[Complex]) -> Result<Vec<Complex>> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| x * y).collect())
}

/// Copy integer coefficients into the real parts of a zeroed length-`n` buffer.
fn to_buffer<T: PrimInt>(coeffs: &[T], n: usize) -> Result<Vec<Complex>> {
    let mut buffer = vec![Complex::ZERO; n];
    for (slot, &c) in buffer.iter_mut().zip(coeffs) {
        *slot = Complex::from_real(to_exact_f64(c)?);
    }
    Ok(buffer)
}

fn real_buffer(values: &[f64], n: usize) -> Vec<Complex> {
    let mut buffer = vec![Complex::ZERO; n];
    for (slot, &v) in buffer.iter_mut().zip(values) {
        *slot = Complex::from_real(v);
    }
    buffer
}

/// Round real parts half-to-even and convert to `T`; imaginary parts are noise.
fn round_to_integers<T: PrimInt>(buffer: &[Complex]) -> Result<Vec<T>> {
    buffer
        .iter()
        .map(|c| {
            let rounded = c.real.round_ties_even();
            <T as NumCast>::from(rounded).ok_or_else(|| {
                FftError::InvalidInput(format!("coefficient {rounded} does not fit the output type"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OutputLength, PrecisionPolicy};

    fn exact() -> MultiplyOptions {
        MultiplyOptions::default().with_output_len(OutputLength::Exact)
    }

    fn naive_multiply(a: &[i64], b: &[i64]) -> Vec<i64> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let mut out = vec![0; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                out[i + j] += x * y;
            }
        }
        out
    }

    #[test]
    fn transform_len_values() {
        assert_eq!(transform_len(0, 0), 0);
        assert_eq!(transform_len(1, 0), 1);
        assert_eq!(transform_len(1, 1), 2);
        assert_eq!(transform_len(3, 3), 8);
        assert_eq!(transform_len(4, 4), 8);
        assert_eq!(transform_len(5, 4), 16);
    }

    #[test]
    fn multiply_small_polynomials() {
        let got = multiply(&[1i64, 2, 3], &[4, 5, 6]).unwrap();
        assert_eq!(got, vec![4, 13, 28, 27, 18, 0, 0, 0]);
    }

    #[test]
    fn multiply_exact_length() {
        let got = multiply_with(&[1i64, 2, 3], &[4, 5, 6], &exact()).unwrap();
        assert_eq!(got, vec![4, 13, 28, 27, 18]);
    }

    #[test]
    fn multiply_identity() {
        assert_eq!(multiply(&[5i32], &[1]).unwrap(), vec![5, 0]);
    }

    #[test]
    fn multiply_both_empty() {
        assert!(multiply::<i64>(&[], &[]).unwrap().is_empty());
        assert!(multiply_with::<i64>(&[], &[], &exact()).unwrap().is_empty());
    }

    #[test]
    fn multiply_one_empty_is_zero_polynomial() {
        assert_eq!(multiply(&[1i64, 2, 3], &[]).unwrap(), vec![0, 0, 0, 0]);
        assert!(multiply_with(&[], &[7i64], &exact()).unwrap().is_empty());
    }

    #[test]
    fn multiply_negative_coefficients() {
        // (1 - x)(1 + x) = 1 - x^2
        let got = multiply_with(&[1i64, -1], &[1, 1], &exact()).unwrap();
        assert_eq!(got, vec![1, 0, -1]);
    }

    #[test]
    fn multiply_asymmetric_matches_naive() {
        let a: Vec<i64> = (1..=37).map(|i| (i * 7919) % 1000 - 500).collect();
        let b: Vec<i64> = vec![3, -1, 4, 1, -5];
        let got = multiply_with(&a, &b, &exact()).unwrap();
        assert_eq!(got, naive_multiply(&a, &b));
    }

    #[test]
    fn multiply_large_digits_matches_naive() {
        // Base-10^4 limbs of two 400-digit numbers, no carries applied.
        let a: Vec<i64> = (0..100).map(|i| (i * 1237 + 11) % 10_000).collect();
        let b: Vec<i64> = (0..100).map(|i| (i * 4099 + 3) % 10_000).collect();
        let got = multiply_with(&a, &b, &exact()).unwrap();
        assert_eq!(got, naive_multiply(&a, &b));
    }

    #[test]
    fn multiply_unsigned() {
        let got = multiply_with(&[255u32, 255], &[255, 1], &exact()).unwrap();
        assert_eq!(got, vec![65_025, 65_280, 255]);
    }

    #[test]
    fn multiply_output_overflows_type() {
        let opts = exact().with_precision(PrecisionPolicy::Allow);
        let err = multiply_with(&[100i8], &[100], &opts).unwrap_err();
        assert!(matches!(err, FftError::InvalidInput(_)));
    }

    #[test]
    fn multiply_rejects_precision_risk_by_default() {
        let big = vec![1i64 << 40; 16];
        let err = multiply(&big, &big).unwrap_err();
        assert!(matches!(err, FftError::PrecisionRisk { .. }));
    }

    /// Deterministic coefficients in `[-range, range)`.
    fn pseudo_random(len: usize, range: i64, mut state: u64) -> Vec<i64> {
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                #[allow(clippy::cast_possible_wrap)]
                let bits = (state >> 33) as i64;
                bits.rem_euclid(2 * range) - range
            })
            .collect()
    }

    #[test]
    fn multiply_rejects_rounding_error_below_output_ceiling() {
        // Output bound is 2^40 · 4096 = 2^52, yet the transform error exceeds 1/2
        let a = pseudo_random(4096, 1 << 20, 1);
        let b = pseudo_random(4096, 1 << 20, 2);
        match multiply_with(&a, &b, &exact()) {
            Err(FftError::PrecisionRisk { error, .. }) => assert!(error >= 0.5),
            Ok(got) => assert_eq!(got, naive_multiply(&a, &b)),
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            square_with(&a, &exact()),
            Err(FftError::PrecisionRisk { .. })
        ));
    }

    #[test]
    fn multiply_accepted_long_operands_are_exact() {
        let a = pseudo_random(4096, 1 << 14, 3);
        let b = pseudo_random(4096, 1 << 14, 4);
        let got = multiply_with(&a, &b, &exact()).unwrap();
        assert_eq!(got, naive_multiply(&a, &b));
    }

    #[test]
    fn multiply_rejects_inexact_coefficient() {
        let err = multiply(&[(1i64 << 53) + 1], &[1]).unwrap_err();
        assert!(matches!(err, FftError::InvalidInput(_)));
    }

    #[test]
    fn multiply_warn_policy_still_computes() {
        // 2^27 · 2^27 = 2^54 is exact in f64 even though the bound check fails
        let opts = exact().with_precision(PrecisionPolicy::Warn);
        let got = multiply_with(&[1i64 << 27], &[1i64 << 27], &opts).unwrap();
        assert_eq!(got, vec![1i64 << 54]);
    }

    #[test]
    fn square_matches_multiply() {
        let a: Vec<i64> = vec![3, 0, -2, 9, 4, 1];
        let squared = square_with(&a, &exact()).unwrap();
        let multiplied = multiply_with(&a, &a, &exact()).unwrap();
        assert_eq!(squared, multiplied);
        assert_eq!(square(&a).unwrap().len(), 16);
    }

    #[test]
    fn square_empty() {
        assert!(square::<u8>(&[]).unwrap().is_empty());
    }

    #[test]
    fn convolve_real_sequences() {
        let got = convolve(&[0.5, 1.5], &[2.0, -1.0, 4.0]).unwrap();
        let expected = [1.0, 2.5, 0.5, 6.0];
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-12, "got {g}, expected {e}");
        }
    }

    #[test]
    fn convolve_empty() {
        assert!(convolve(&[], &[1.0]).unwrap().is_empty());
    }

    #[test]
    fn pointwise_multiply_simple() {
        let a = [Complex::new(3.0, 0.0), Complex::new(0.0, 1.0)];
        let b = [Complex::new(7.0, 0.0), Complex::new(0.0, 1.0)];
        let c = pointwise_multiply(&a, &b).unwrap();
        assert_eq!(c, vec![Complex::new(21.0, 0.0), Complex::new(-1.0, 0.0)]);
    }

    #[test]
    fn pointwise_multiply_length_mismatch() {
        let err = pointwise_multiply(&[Complex::ONE; 4], &[Complex::ONE; 8]).unwrap_err();
        assert_eq!(err, FftError::LengthMismatch { left: 4, right: 8 });
    }
}

//! Magnitude and rounding error estimation for FFT multiplication.
//!
//! Rounding back to integers recovers the exact product only when two
//! conditions hold: every output coefficient is within 2^53, the range `f64`
//! represents exactly, and the floating-point error of the transforms stays
//! below one half. That error grows with the input norms and with the
//! number of butterfly levels, so large operands can fail the second
//! condition long before they reach 2^53.

use num_traits::{PrimInt, ToPrimitive};
use tracing::warn;

use crate::constants::{MAX_ROUNDING_ERROR, MAX_SAFE_INTEGER, ROUNDING_ERROR_GROWTH};
use crate::error::{FftError, Result};
use crate::options::PrecisionPolicy;

/// `MAX_SAFE_INTEGER` as an integer, for comparisons before conversion.
const MAX_SAFE_MAGNITUDE: u128 = 1 << 53;

/// Bounds on the output of a convolution computed with transforms of
/// length `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionEstimate {
    /// Largest input magnitude of the first operand.
    pub max_a: f64,
    /// Largest input magnitude of the second operand.
    pub max_b: f64,
    /// Bound on `|c_k|` for every output coefficient.
    pub bound: f64,
    /// Estimated absolute rounding error on any output coefficient.
    pub error: f64,
}

impl PrecisionEstimate {
    /// Estimate the output of multiplying `a` by `b` through transforms of
    /// length `n`.
    ///
    /// `bound` is `max|a| · max|b| · min(len_a, len_b)`: each output
    /// coefficient sums at most `min(len_a, len_b)` products.
    ///
    /// `error` is `‖a‖₂ · ‖b‖₂ · ε · (ROUNDING_ERROR_GROWTH · log2(n) + 1)`,
    /// the usual forward error bound of an FFT convolution.
    ///
    /// # Errors
    ///
    /// `FftError::InvalidInput` if a coefficient is above 2^53 in magnitude
    /// and so cannot enter the transform exactly.
    pub fn of<T: PrimInt>(a: &[T], b: &[T], n: usize) -> Result<Self> {
        let (max_a, norm_a) = magnitudes(a)?;
        let (max_b, norm_b) = magnitudes(b)?;
        #[allow(clippy::cast_precision_loss)]
        let terms = a.len().min(b.len()) as f64;
        let levels = f64::from(n.max(1).ilog2());
        Ok(Self {
            max_a,
            max_b,
            bound: max_a * max_b * terms,
            error: norm_a * norm_b * f64::EPSILON * (ROUNDING_ERROR_GROWTH * levels + 1.0),
        })
    }

    /// Whether rounding the result is exact.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.bound <= MAX_SAFE_INTEGER && self.error < MAX_ROUNDING_ERROR
    }

    /// Apply `policy` to this estimate.
    ///
    /// # Errors
    ///
    /// `FftError::PrecisionRisk` if the estimate is unsafe and `policy` is
    /// `Reject`.
    pub fn enforce(&self, policy: PrecisionPolicy) -> Result<()> {
        if self.is_safe() {
            return Ok(());
        }
        match policy {
            PrecisionPolicy::Reject => Err(FftError::PrecisionRisk {
                bound: self.bound,
                error: self.error,
            }),
            PrecisionPolicy::Warn => {
                warn!(
                    bound = self.bound,
                    error = self.error,
                    max_a = self.max_a,
                    max_b = self.max_b,
                    "convolution may not round to the exact product"
                );
                Ok(())
            }
            PrecisionPolicy::Allow => Ok(()),
        }
    }
}

/// Convert a coefficient to `f64`, rejecting values that would lose bits.
pub(crate) fn to_exact_f64<T: PrimInt>(value: T) -> Result<f64> {
    let wide = value
        .to_i128()
        .ok_or_else(|| FftError::InvalidInput("coefficient exceeds the i128 range".into()))?;
    if wide.unsigned_abs() > MAX_SAFE_MAGNITUDE {
        return Err(FftError::InvalidInput(format!(
            "coefficient {wide} exceeds 2^53 and cannot be represented exactly"
        )));
    }
    #[allow(clippy::cast_precision_loss)]
    Ok(wide as f64)
}

/// Largest magnitude and Euclidean norm of `values`.
fn magnitudes<T: PrimInt>(values: &[T]) -> Result<(f64, f64)> {
    let (max, sum_sq) = values.iter().try_fold((0.0_f64, 0.0_f64), |(max, sum_sq), &v| {
        let x = to_exact_f64(v)?;
        Ok::<_, FftError>((max.max(x.abs()), x.mul_add(x, sum_sq)))
    })?;
    Ok((max, sum_sq.sqrt()))
}

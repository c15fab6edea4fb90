//! Core FFT transform: forward and inverse over complex `f64` samples.

use std::f64::consts::PI;

use tracing::trace;

use crate::bit_reverse::bit_reverse_permutation;
use crate::complex::Complex;
use crate::error::{FftError, Result};

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Evaluate at the roots of unity `e^(-2πik/n)`.
    Forward,
    /// Interpolate back to coefficients, including the `1/n` normalization.
    Inverse,
}

impl Direction {
    /// Map the classic `invert` flag onto a direction.
    #[must_use]
    pub fn from_invert(invert: bool) -> Self {
        if invert {
            Self::Inverse
        } else {
            Self::Forward
        }
    }

    /// Sign of the twiddle angle.
    fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}

/// Transform `data` in place.
///
/// The length must be a power of two. Otherwise `FftError::InvalidSize` is
/// returned and `data` is left untouched.
///
/// Uses the iterative Cooley-Tukey network: bit-reversal permutation, then
/// butterflies of width 2, 4, …, n. Twiddles inside a block advance by the
/// recurrence `w = w · w_span` rather than fresh `cos`/`sin` calls.
pub fn transform(data: &mut [Complex], direction: Direction) -> Result<()> {
    let n = data.len();
    if !n.is_power_of_two() {
        return Err(FftError::InvalidSize { len: n });
    }

    trace!(len = n, ?direction, "fft transform");

    bit_reverse_permutation(data);

    let sign = direction.sign();
    let mut span = 2;
    while span <= n {
        let half = span / 2;
        #[allow(clippy::cast_precision_loss)]
        let angle = sign * 2.0 * PI / span as f64;
        let w_span = Complex::cis(angle);

        for offset in (0..n).step_by(span) {
            let mut w = Complex::ONE;
            for k in 0..half {
                let front = data[offset + k];
                let back = w * data[offset + k + half];
                data[offset + k] = front + back;
                data[offset + k + half] = front - back;
                w = w * w_span;
            }
        }
        span *= 2;
    }

    if direction == Direction::Inverse {
        #[allow(clippy::cast_precision_loss)]
        let inv_n = 1.0 / n as f64;
        for elem in data.iter_mut() {
            *elem = elem.scale(inv_n);
        }
    }

    Ok(())
}

/// Forward transform in place.
pub fn fft_forward(data: &mut [Complex]) -> Result<()> {
    transform(data, Direction::Forward)
}

/// Inverse transform in place, normalized by `1/n`.
pub fn fft_inverse(data: &mut [Complex]) -> Result<()> {
    transform(data, Direction::Inverse)
}

//! Double-precision complex numbers used as FFT samples.

use std::ops::{Add, Mul, Sub};

/// A complex number with `f64` components.
///
/// Plain value type: every operation returns a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub real: f64,
    /// Imaginary part.
    pub imag: f64,
}

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0i`, the starting twiddle of every butterfly block.
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Create a complex number from its parts.
    #[inline]
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Create a complex number with zero imaginary part.
    #[inline]
    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }

    /// Point on the unit circle: `cos(angle) + i sin(angle)`.
    #[inline]
    #[must_use]
    pub fn cis(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Multiply both parts by a real factor.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.real * factor, self.imag * factor)
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

//! # fftconv
//!
//! Iterative radix-2 Cooley-Tukey FFT over complex `f64` samples, and
//! O(n log n) polynomial multiplication built on it.
//!
//! Integer results are exact while every output coefficient stays within
//! 2^53 in magnitude and the estimated transform rounding error stays below
//! one half; see [`precision`] and [`PrecisionPolicy`].

pub mod bit_reverse;
pub mod complex;
pub mod constants;
pub mod correlation;
pub mod error;
pub mod fft_core;
pub mod fft_poly;
pub mod options;
pub mod precision;

// Re-exports
pub use bit_reverse::reverse_bits;
pub use complex::Complex;
pub use correlation::{cross_correlate, cyclic_correlation, max_cyclic_correlation};
pub use error::{FftError, Result};
pub use fft_core::{fft_forward, fft_inverse, transform, Direction};
pub use fft_poly::{convolve, multiply, multiply_with, square, square_with, transform_len};
pub use options::{MultiplyOptions, OutputLength, PrecisionPolicy};

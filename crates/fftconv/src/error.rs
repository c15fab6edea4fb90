//! Error type for transforms and convolutions.

/// Errors raised by the FFT engine and the convolution drivers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FftError {
    /// Buffer length is not a power of two.
    #[error("invalid transform size: {len} is not a power of two")]
    InvalidSize {
        /// Offending buffer length.
        len: usize,
    },

    /// Two buffers that must pair up element by element differ in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },

    /// Input or output cannot be carried through `f64` exactly.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rounding may not recover the exact integer product: outputs may
    /// exceed 2^53, or the transform error may reach one half.
    #[error("precision risk: coefficients may reach {bound:e} with rounding error up to {error:.3}")]
    PrecisionRisk {
        /// Upper bound on any output coefficient magnitude.
        bound: f64,
        /// Estimated absolute rounding error on any output coefficient.
        error: f64,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, FftError>;

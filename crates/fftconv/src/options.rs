//! Multiplication options and configuration.

use serde::{Deserialize, Serialize};

/// Length of the coefficient vector returned by the multiply drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLength {
    /// Full power-of-two transform length, high coefficients left as zero.
    #[default]
    Padded,
    /// Exactly `a.len() + b.len() - 1` coefficients.
    Exact,
}

/// What to do when rounding may not recover the exact integer product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionPolicy {
    /// Fail with `FftError::PrecisionRisk`.
    #[default]
    Reject,
    /// Log a warning and compute anyway.
    Warn,
    /// Compute anyway without notice.
    Allow,
}

/// Options for the integer multiply drivers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplyOptions {
    /// Length policy for the returned coefficients.
    pub output_len: OutputLength,
    /// Handling of inputs large enough to risk rounding errors.
    pub precision: PrecisionPolicy,
}

impl MultiplyOptions {
    /// Padded output with no precision check.
    #[must_use]
    pub fn unchecked() -> Self {
        Self {
            output_len: OutputLength::Padded,
            precision: PrecisionPolicy::Allow,
        }
    }

    /// Set the output length policy.
    #[must_use]
    pub fn with_output_len(mut self, output_len: OutputLength) -> Self {
        self.output_len = output_len;
        self
    }

    /// Set the precision policy.
    #[must_use]
    pub fn with_precision(mut self, precision: PrecisionPolicy) -> Self {
        self.precision = precision;
        self
    }

    /// Number of coefficients to return for inputs of the given lengths.
    ///
    /// `padded_len` is the transform length already chosen for the inputs.
    #[must_use]
    pub fn result_len(&self, len_a: usize, len_b: usize, padded_len: usize) -> usize {
        match self.output_len {
            OutputLength::Padded => padded_len,
            OutputLength::Exact if len_a == 0 || len_b == 0 => 0,
            OutputLength::Exact => len_a + len_b - 1,
        }
    }
}

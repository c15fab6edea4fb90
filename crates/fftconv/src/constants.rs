//! Numeric ceilings shared by the transform and the drivers.

/// Largest integer magnitude `f64` holds exactly: 2^53.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rounding error, in units of `‖a‖·‖b‖·ε`, accumulated per butterfly level
/// of a forward/inverse transform pair with recurrence twiddles.
pub const ROUNDING_ERROR_GROWTH: f64 = 8.0;

/// Largest estimated absolute error that still rounds to the exact integer.
pub const MAX_ROUNDING_ERROR: f64 = 0.5;

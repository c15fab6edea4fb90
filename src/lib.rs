//! Shared helpers for the fftconv integration tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `warn` so precision warnings show up.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Schoolbook O(n·m) polynomial product, `a.len() + b.len() - 1` terms.
#[must_use]
pub fn naive_multiply(a: &[i64], b: &[i64]) -> Vec<i64> {
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

/// Apply base-`base` carries to little-endian digit products.
///
/// Test-only reference for checking integer multiplication end to end.
#[must_use]
pub fn carry_digits(coeffs: &[i64], base: i64) -> Vec<i64> {
    let mut out = Vec::with_capacity(coeffs.len() + 2);
    let mut carry = 0;
    for &c in coeffs {
        let v = c + carry;
        out.push(v % base);
        carry = v / base;
    }
    while carry > 0 {
        out.push(carry % base);
        carry /= base;
    }
    while out.len() > 1 && out.last() == Some(&0) {
        out.pop();
    }
    out
}

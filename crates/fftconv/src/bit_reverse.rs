//! Bit-reversal indexing for the iterative butterfly network.

use crate::complex::Complex;

/// Reverse the low `log` bits of `index`.
///
/// Bits of `index` at or above `log` are ignored. `log == 0` maps every
/// index to 0, matching a transform of length 1.
///
/// # Panics
///
/// Panics if `log > usize::BITS`.
#[inline]
#[must_use]
pub fn reverse_bits(index: usize, log: u32) -> usize {
    assert!(
        log <= usize::BITS,
        "cannot reverse {log} bits of a {}-bit index",
        usize::BITS
    );
    if log == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - log)
}

/// Reorder `data` so that element `i` moves to `reverse_bits(i, log2(len))`.
///
/// The length must be a power of two; `transform` checks this before calling.
pub(crate) fn bit_reverse_permutation(data: &mut [Complex]) {
    let n = data.len();
    if n <= 2 {
        return;
    }
    debug_assert!(n.is_power_of_two());
    let log = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i, log);
        // i < j: each pair swaps once, fixed points never swap
        if i < j {
            data.swap(i, j);
        }
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use fftconv::{fft_forward, fft_inverse, Complex};

fuzz_target!(|data: &[u8]| {
    // Any length is accepted; non-powers of two must be rejected untouched
    let original: Vec<Complex> = data
        .chunks(2)
        .map(|c| Complex::new(f64::from(c[0]), f64::from(*c.get(1).unwrap_or(&0))))
        .collect();
    let mut buf = original.clone();

    if !original.len().is_power_of_two() {
        assert!(fft_forward(&mut buf).is_err());
        assert_eq!(buf, original);
        return;
    }

    fft_forward(&mut buf).unwrap();
    fft_inverse(&mut buf).unwrap();
    for (got, want) in buf.iter().zip(&original) {
        assert!((got.real - want.real).abs() < 1e-6, "{got:?} vs {want:?}");
        assert!((got.imag - want.imag).abs() < 1e-6, "{got:?} vs {want:?}");
    }
});

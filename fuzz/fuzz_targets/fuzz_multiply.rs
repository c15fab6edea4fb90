#![no_main]

use libfuzzer_sys::fuzz_target;

use fftconv::{multiply_with, MultiplyOptions, OutputLength};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte splits the rest into two operands of signed bytes
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let a: Vec<i64> = data[1..split].iter().map(|&x| i64::from(x as i8)).collect();
    let b: Vec<i64> = data[split..].iter().map(|&x| i64::from(x as i8)).collect();

    let mut expected = Vec::new();
    if !a.is_empty() && !b.is_empty() {
        expected = vec![0i64; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                expected[i + j] += x * y;
            }
        }
    }

    let opts = MultiplyOptions::default().with_output_len(OutputLength::Exact);
    let got = multiply_with(&a, &b, &opts).expect("byte-sized coefficients never overflow");
    assert_eq!(got, expected, "FFT != schoolbook for {a:?} * {b:?}");
});

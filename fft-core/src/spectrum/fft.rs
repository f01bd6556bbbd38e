//! In-place iterative radix-2 Cooley-Tukey FFT
//!
//! Operates entirely in the caller-supplied buffer; no planning step,
//! no internal allocation.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Transform `x` in place.
///
/// Forward (`inverse = false`) computes the DFT; inverse computes the
/// inverse DFT with 1/n normalization.
///
/// The length of `x` must be a power of two (lengths 0 and 1 are no-ops).
/// Callers zero-pad to the next power of two before invoking.
pub fn transform(x: &mut [Complex64], inverse: bool) {
    let n = x.len();
    debug_assert!(n <= 1 || n.is_power_of_two(), "FFT length must be a power of two");
    if n <= 1 {
        return;
    }

    // Bit-reversal permutation: element i swaps with its bit-reversed index j,
    // maintained incrementally across iterations.
    let mut j = 0usize;
    for i in 0..n {
        if j > i {
            x.swap(i, j);
        }
        let mut m = n >> 1;
        while j >= m && m > 0 {
            j -= m;
            m >>= 1;
        }
        j += m;
    }

    // Butterfly stages with doubling span. The twiddle factor w rotates
    // incrementally by wlen per butterfly instead of calling cos/sin each
    // time, which keeps the inner loop multiply-only.
    let mut len = 2;
    while len <= n {
        let ang = 2.0 * PI / len as f64 * if inverse { 1.0 } else { -1.0 };
        let wlen = Complex64::new(ang.cos(), ang.sin());
        for base in (0..n).step_by(len) {
            let mut w = Complex64::new(1.0, 0.0);
            for k in 0..len / 2 {
                let u = x[base + k];
                let v = x[base + k + len / 2] * w;
                x[base + k] = u + v;
                x[base + k + len / 2] = u - v;
                w *= wlen;
            }
        }
        len <<= 1;
    }

    if inverse {
        let scale = 1.0 / n as f64;
        for sample in x.iter_mut() {
            *sample *= scale;
        }
    }
}

/// Forward DFT, in place.
pub fn forward(x: &mut [Complex64]) {
    transform(x, false);
}

/// Inverse DFT with 1/n normalization, in place.
pub fn inverse(x: &mut [Complex64]) {
    transform(x, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn to_complex(reals: &[f64]) -> Vec<Complex64> {
        reals.iter().map(|&r| Complex64::new(r, 0.0)).collect()
    }

    #[test]
    fn test_impulse_transforms_to_flat_spectrum() {
        // Standard identity: delta at index 0 -> all-ones spectrum
        let mut x = to_complex(&[1.0, 0.0, 0.0, 0.0]);
        forward(&mut x);

        for bin in &x {
            assert!((bin.re - 1.0).abs() < 1e-12);
            assert!(bin.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_round_trip_restores_input() {
        let signal: Vec<f64> = (0..64).map(|n| (0.3 * n as f64).sin() + 0.1 * n as f64).collect();
        let mut x = to_complex(&signal);

        forward(&mut x);
        inverse(&mut x);

        for (restored, original) in x.iter().zip(signal.iter()) {
            assert!((restored.re - original).abs() < 1e-9);
            assert!(restored.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_linearity() {
        let a: Vec<f64> = (0..32).map(|n| (0.5 * n as f64).cos()).collect();
        let b: Vec<f64> = (0..32).map(|n| 0.25 * n as f64).collect();

        let mut fa = to_complex(&a);
        let mut fb = to_complex(&b);
        let mut fsum = to_complex(&a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect::<Vec<_>>());

        forward(&mut fa);
        forward(&mut fb);
        forward(&mut fsum);

        for i in 0..32 {
            let expected = fa[i] + fb[i];
            assert!((fsum[i] - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn test_sine_wave_peaks_at_its_bin() {
        let n = 128usize;
        let cycles = 8.0;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * cycles * i as f64 / n as f64).sin())
            .collect();

        let mut x = to_complex(&signal);
        forward(&mut x);

        let (peak_bin, _) = x[..n / 2]
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm().partial_cmp(&b.norm()).unwrap())
            .unwrap();

        assert_eq!(peak_bin, cycles as usize);
        // Full-scale sine concentrates N/2 of magnitude in its bin
        assert!((x[peak_bin].norm() - n as f64 / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_lengths_are_noops() {
        let mut empty: Vec<Complex64> = vec![];
        forward(&mut empty);

        let mut single = vec![Complex64::new(3.5, 0.0)];
        forward(&mut single);
        assert_eq!(single[0], Complex64::new(3.5, 0.0));

        inverse(&mut single);
        assert_eq!(single[0], Complex64::new(3.5, 0.0));
    }

    #[test]
    fn test_inverse_applies_one_over_n() {
        // Constant input: forward puts n*c in bin 0; inverse of that
        // spectrum must come back to c, not n*c
        let mut x = to_complex(&[2.0; 8]);
        forward(&mut x);
        assert!((x[0].re - 16.0).abs() < 1e-12);

        inverse(&mut x);
        // inverse of the forward-of-constant round-trips through both scalings
        for sample in &x {
            assert!((sample.re - 2.0).abs() < 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip(reals in prop::collection::vec(-1000.0f64..1000.0, 16)) {
            let mut x = to_complex(&reals);
            forward(&mut x);
            inverse(&mut x);

            for (restored, original) in x.iter().zip(reals.iter()) {
                let tol = 1e-9 * original.abs().max(1.0);
                prop_assert!((restored.re - original).abs() < tol);
                prop_assert!(restored.im.abs() < tol);
            }
        }
    }
}

use crate::filter::IirCoefficients;
use crate::Complex;

use rayon::prelude::*;
use std::f64::consts::PI;

pub const DEFAULT_POINTS: usize = 1000;

/// Sample `b(z) / a(z)` at `points` evenly spaced angles around the unit
/// circle, starting at z = 1.
///
/// Coefficients are in powers of z^-1, as used by the filters. A pole on
/// the unit circle gives an infinite or NaN value at that point.
///
/// When `b` and `a` differ in length, the shorter one is padded with
/// trailing zeros. Evaluating each list as a plain polynomial in z instead
/// would be off by a factor of z^(len(a) - len(b)): same magnitude, wrong
/// phase. Designed filters always have three of each, so they agree.
pub fn frequency_response(b: &[f64], a: &[f64], points: usize)
                          -> Vec<Complex<f64>>
{
    // pad the shorter polynomial so both have the same degree in z
    let order = b.len().max(a.len());
    (0..points).into_par_iter().map(|i| {
        let omega = 2.0 * PI * i as f64 / points as f64;
        let z = Complex::from_polar(&1.0, &omega);
        polyval(b, order, z) / polyval(a, order, z)
    }).collect()
}

// horner, highest degree first
fn polyval(coef: &[f64], order: usize, z: Complex<f64>) -> Complex<f64> {
    let padding = std::iter::repeat(&0.0).take(order - coef.len());
    let mut acc = Complex::new(0.0, 0.0);
    for c in coef.iter().chain(padding) {
        acc = acc * z + Complex::new(*c, 0.0);
    }
    acc
}

/// A sampled frequency response, along with the rate it was designed for.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    rate: f64,
    values: Vec<Complex<f64>>,
}

impl FrequencyResponse {
    pub fn new(b: &[f64], a: &[f64], points: usize, rate: f64) -> Self {
        let values = frequency_response(b, a, points);
        let bad = values.iter().filter(|v| !(v.re.is_finite()
                                              && v.im.is_finite())).count();
        if bad > 0 {
            log::warn!("frequency response has {} non-finite points \
                        (pole on the unit circle?)", bad);
        }
        FrequencyResponse { rate, values }
    }

    pub fn of(coef: &IirCoefficients, points: usize, rate: f64) -> Self {
        Self::new(&coef.b, &coef.a, points, rate)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Complex<f64>] {
        &self.values
    }

    /// Response at z = 1.
    pub fn dc(&self) -> Option<Complex<f64>> {
        self.values.first().cloned()
    }

    /// Frequency that index `i` is plotted at. The whole response is laid
    /// out over [0, rate / 2].
    pub fn frequency(&self, i: usize) -> f64 {
        i as f64 * self.rate / (2.0 * self.values.len() as f64)
    }

    /// (frequency, |H|) pairs, ready for plotting.
    pub fn magnitudes(&self) -> impl Iterator<Item=(f64, f64)> + '_ {
        self.values.iter().enumerate().map(move |(i, v)| {
            (self.frequency(i), v.norm())
        })
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.re.is_finite() && v.im.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{design_iir, Discretization};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn two_point_average() {
        // |H| = |cos(w / 2)|
        let h = frequency_response(&[0.5, 0.5], &[1.0], 8);
        assert_eq!(h.len(), 8);
        for (i, v) in h.iter().enumerate() {
            let w = 2.0 * PI * i as f64 / 8.0;
            assert_abs_diff_eq!(v.norm(), (w / 2.0).cos().abs(),
                                epsilon = 1e-12);
        }
        assert_abs_diff_eq!(h[0].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h[4].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_pole() {
        // 1 / (1 - 0.5 z^-1) at z = -1 is 1 / 1.5
        let h = frequency_response(&[1.0], &[1.0, -0.5], 4);
        assert_relative_eq!(h[0].re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(h[2].re, 1.0 / 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(h[2].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn uneven_lengths_keep_phase() {
        // at z = i, 1 / (1 - 0.5 z^-1) = 0.8 - 0.4i, while 1 / (z - 0.5)
        // would give -0.4 - 0.8i
        let h = frequency_response(&[1.0], &[1.0, -0.5], 4);
        assert_relative_eq!(h[1].re, 0.8, epsilon = 1e-12);
        assert_relative_eq!(h[1].im, -0.4, epsilon = 1e-12);
        let plain = Complex::new(1.0, 0.0) / Complex::new(-0.5, 1.0);
        assert_relative_eq!(h[1].norm(), plain.norm(), epsilon = 1e-12);
    }

    #[test]
    fn pole_on_unit_circle_is_not_finite() {
        let h = FrequencyResponse::new(&[1.0], &[1.0, -1.0], 16, 1000.0);
        assert_eq!(h.len(), 16);
        assert!(!h.is_finite());
        let dc = h.dc().unwrap();
        assert!(!(dc.re.is_finite() && dc.im.is_finite()));
        for v in &h.values()[1..] {
            assert!(v.re.is_finite() && v.im.is_finite());
        }
    }

    #[test]
    fn designed_filters_are_finite() {
        for method in Discretization::ALL.iter() {
            let coef = design_iir(*method, 0.1, 1000.0).unwrap();
            let h = FrequencyResponse::of(&coef, DEFAULT_POINTS, 1000.0);
            assert_eq!(h.len(), DEFAULT_POINTS);
            assert!(h.is_finite(), "{} response not finite", method);

            let dc = h.dc().unwrap();
            let expected = coef.b.iter().sum::<f64>()
                / coef.a.iter().sum::<f64>();
            assert_relative_eq!(dc.re, expected, epsilon = 1e-9,
                                max_relative = 1e-9);
            assert_abs_diff_eq!(dc.im, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn frequency_axis_spans_half_rate() {
        let h = FrequencyResponse::new(&[1.0], &[1.0], 1000, 1000.0);
        assert_eq!(h.frequency(0), 0.0);
        assert_eq!(h.frequency(500), 250.0);
        let last = h.magnitudes().last().unwrap();
        assert_relative_eq!(last.0, 499.5);
        assert_relative_eq!(last.1, 1.0);
    }
}

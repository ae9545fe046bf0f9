use super::{dot, Window};
use crate::error::{self, FilterError, Result};
use crate::signal::Samples;

use rayon::prelude::*;
use std::f64::consts::PI;

/// Design a windowed-sinc lowpass.
///
/// `cutoff` is a fraction of the sample rate, in (0, 0.5). The taps are
/// symmetric about `(taps - 1) / 2` and normalized to sum to 1, so the
/// filter has unity gain at DC. A window that zeroes every tap (Blackman
/// with two taps) has nothing to normalize and is an error.
pub fn design_fir(cutoff: f64, taps: usize, window: Window)
                  -> Result<Vec<f64>>
{
    if taps < 2 {
        return Err(FilterError::TooFewTaps(taps));
    }
    error::check_cutoff(cutoff, 0.5)?;

    let mid = (taps - 1) as f64 / 2.0;
    let wc = 2.0 * PI * cutoff;
    let mut coef: Vec<f64> = (0..taps).map(|i| {
        let x = i as f64 - mid;
        let ideal = if x == 0.0 {
            wc
        } else {
            (wc * x).sin() / x
        };
        ideal * window.at(i, taps)
    }).collect();

    let sum: f64 = coef.iter().sum();
    if sum == 0.0 {
        return Err(FilterError::ZeroGain);
    }
    for c in coef.iter_mut() {
        *c /= sum;
    }
    Ok(coef)
}

/// Convolve `signal` with `taps`.
///
/// Outputs before index `taps.len()` are left at zero rather than computed
/// from partial history. Each output only reads the input, so they are
/// computed in parallel.
pub fn apply_fir(signal: &Samples, taps: &[f64]) -> Result<Samples> {
    if taps.is_empty() {
        return Err(FilterError::EmptyCoefficients);
    }
    let x = signal.samples();
    let n = taps.len();
    let out: Vec<f64> = (0..x.len()).into_par_iter().map(|i| {
        if i < n {
            0.0
        } else {
            dot(&x[i + 1 - n..=i], taps)
        }
    }).collect();
    Ok(signal.replace(out))
}

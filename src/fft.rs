use crate::signal::Samples;
use crate::Complex;

/// Full spectrum of a complex buffer, as (frequency, value) pairs running
/// from -rate/2 up to just below rate/2, scaled by 1/sqrt(N).
pub fn fft(input: &Samples<Complex<f64>>) -> Vec<(f64, Complex<f64>)> {
    let rate = input.rate();
    let mut data = input.samples().to_vec();
    let mut output = vec![Complex::new(0.0, 0.0); data.len()];
    let mut planner = rustfft::FFTplanner::new(false);
    let fft = planner.plan_fft(data.len());
    fft.process(&mut data, &mut output);

    // move the negative-frequency half in front of DC
    let len = output.len();
    output.rotate_right(len / 2);
    let start = -((len / 2) as f64);
    let fstep = rate / len as f64;
    let norm = 1.0 / (len as f64).sqrt();
    output.into_iter().enumerate()
        .map(|(i, v)| ((start + i as f64) * fstep, v * norm))
        .collect()
}

/// Non-negative half of the spectrum of a real buffer.
pub fn rfft(input: &Samples) -> Vec<(f64, Complex<f64>)> {
    let complex: Vec<Complex<f64>> = input.samples().iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    let mut output = fft(&input.replace(complex));
    output.drain(0..output.len() / 2);
    output
}

/// Frequency of the strongest non-DC bin of a real buffer.
pub fn peak_frequency(input: &Samples) -> Option<f64> {
    rfft(input).into_iter()
        .filter(|(f, _)| *f > 0.0)
        .max_by(|a, b| {
            a.1.norm().partial_cmp(&b.1.norm())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(f, _)| f)
}

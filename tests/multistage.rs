use multistage::filter::{self, Discretization, Window};
use multistage::signal::{self, Samples, Signal};
use multistage::{fft, FilterError, Multistage};

fn tone(freq: f64) -> Samples {
    signal::sine(1000.0, freq, 0.0).take(1.0).sampled().unwrap()
}

#[test]
fn fir_leaves_warm_up_at_zero() {
    let input = tone(50.0);
    assert_eq!(input.len(), 1000);
    let taps = filter::design_fir(0.1, 31, Window::Blackman).unwrap();
    let out = filter::apply_fir(&input, &taps).unwrap();

    assert_eq!(out.len(), 1000);
    assert!(out.samples()[..31].iter().all(|&v| v == 0.0));
    let tail = &out.samples()[31..];
    assert!(tail.iter().any(|&v| v != 0.0));
    // a 50 Hz tone is well inside the passband
    let peak = tail.iter().cloned().fold(0.0, f64::max);
    assert!(peak > 0.9 && peak < 1.05, "passband peak {}", peak);
}

#[test]
fn fir_rejects_stopband_tone() {
    let taps = filter::design_fir(0.1, 31, Window::Blackman).unwrap();
    let pass = filter::apply_fir(&tone(50.0), &taps).unwrap();
    let stop = filter::apply_fir(&tone(300.0), &taps).unwrap();
    let rms = |s: &Samples| {
        let tail = &s.samples()[31..];
        (tail.iter().map(|v| v * v).sum::<f64>() / tail.len() as f64).sqrt()
    };
    assert!(rms(&stop) < 0.01 * rms(&pass));
}

#[test]
fn mixed_input_keeps_low_tone() {
    let low = tone(50.0);
    let high = tone(300.0);
    let mixed: Vec<f64> = low.samples().iter().zip(high.samples())
        .map(|(a, b)| a + 0.5 * b)
        .collect();
    let input = Samples::new(1000.0, mixed).unwrap();
    let out = Multistage::new().run(&input).unwrap();
    assert_eq!(fft::peak_frequency(&input), Some(50.0));
    assert_eq!(fft::peak_frequency(&out.fir_output), Some(50.0));
}

#[test]
fn full_run_is_deterministic() {
    let input = tone(50.0);
    let first = Multistage::new().run(&input).unwrap();
    let second = Multistage::new().run(&input).unwrap();
    assert_eq!(first, second);

    let denominators: Vec<_> = first.branches.iter()
        .map(|b| b.coefficients.a)
        .collect();
    assert!(denominators.windows(2).all(|w| w[0] == w[1]));
    for b in &first.branches {
        assert!(b.response.is_finite(), "{} not finite", b.method);
        assert_eq!(b.output.len(), input.len());
    }
    assert!(first.branch(Discretization::Bilinear).is_some());
}

#[test]
fn one_tap_fir_is_rejected() {
    assert_eq!(filter::design_fir(0.1, 1, Window::Hamming),
               Err(FilterError::TooFewTaps(1)));
    assert!("hann".parse::<Window>().is_err());
}

use super::Signal;
use super::times::Times;

/// Any iterator, read as samples at `rate`.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    rate: f64,
    samples: I,
}

impl<I> Signal for FromIter<I> where I: Iterator {
    type Sample = I::Item;
    fn next(&mut self) -> Option<Self::Sample> {
        self.samples.next()
    }
    fn rate(&self) -> f64 {
        self.rate
    }
}

pub fn from_iter<I>(rate: f64, samples: I) -> FromIter<I>
where
    I: Iterator,
{
    FromIter { rate, samples }
}

/// Sample `f(t)` at every instant n / rate.
pub fn from_func<F, A>(rate: f64, f: F) -> impl Signal<Sample=A>
where
    F: FnMut(f64) -> A,
{
    from_iter(rate, Times::new(rate).map(f))
}

/// Real sinusoid, sin(2 pi freq t + phase).
pub fn sine(rate: f64, freq: f64, phase: f64) -> impl Signal<Sample=f64> {
    use std::f64::consts::PI;
    from_func(rate, move |t| (PI * 2.0 * freq * t + phase).sin())
}

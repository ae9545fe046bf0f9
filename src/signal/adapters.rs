use super::Signal;

/// Plain iterator over the samples of a signal.
#[derive(Debug, Clone)]
pub struct Iter<S> {
    signal: S,
}

impl<S> Iter<S> where S: Signal {
    pub(super) fn new(signal: S) -> Self {
        Iter { signal }
    }
}

impl<S> Iterator for Iter<S> where S: Signal {
    type Item = S::Sample;
    fn next(&mut self) -> Option<Self::Item> {
        self.signal.next()
    }
}

/// The first `duration` seconds of a signal, rounded to whole samples.
#[derive(Clone, Debug)]
pub struct Take<S> {
    signal: S,
    remaining: usize,
}

impl<S> Take<S> where S: Signal {
    pub(super) fn new(signal: S, duration: f64) -> Self {
        // negative or NaN durations saturate to zero samples
        Take {
            remaining: (signal.rate() * duration).round() as usize,
            signal,
        }
    }
}

impl<S> Signal for Take<S> where S: Signal {
    type Sample = S::Sample;
    fn next(&mut self) -> Option<Self::Sample> {
        self.remaining = self.remaining.checked_sub(1)?;
        self.signal.next()
    }
    fn rate(&self) -> f64 {
        self.signal.rate()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FilterError;
    use crate::signal::{self, Signal};

    #[test]
    fn take_rounds_to_whole_samples() {
        let s = signal::from_iter(10.0, 0..).take(0.44).sampled().unwrap();
        assert_eq!(s.samples(), &[0, 1, 2, 3]);
        let s = signal::from_iter(10.0, 0..).take(0.46).sampled().unwrap();
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn take_stops_at_end_of_source() {
        let s = signal::from_iter(4.0, vec![1.0, 2.0].into_iter()).take(10.0);
        assert_eq!(s.rate(), 4.0);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn nothing_taken_is_empty() {
        let s = signal::sine(1000.0, 50.0, 0.0).take(0.0).sampled();
        assert_eq!(s, Err(FilterError::EmptySignal));
    }
}

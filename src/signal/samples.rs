use crate::error::{self, FilterError, Result};

/// A finite, non-empty run of samples at a known rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<A = f64> {
    rate: f64,
    data: Vec<A>,
}

impl<A> Samples<A> {
    pub fn new(rate: f64, data: Vec<A>) -> Result<Self> {
        error::check_rate(rate)?;
        if data.is_empty() {
            return Err(FilterError::EmptySignal);
        }
        Ok(Samples { rate, data })
    }

    // same rate, same length; callers uphold the length
    pub(crate) fn replace<B>(&self, data: Vec<B>) -> Samples<B> {
        debug_assert_eq!(data.len(), self.data.len());
        Samples { rate: self.rate, data }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn samples(&self) -> &[A] {
        &self.data
    }

    /// Pairs of (time, sample), starting at t = 0.
    pub fn times(&self) -> impl Iterator<Item=(f64, &A)> + '_ {
        let rate = self.rate;
        self.data.iter().enumerate().map(move |(i, v)| (i as f64 / rate, v))
    }
}

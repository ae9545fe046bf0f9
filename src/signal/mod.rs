use crate::error::Result;

mod times;

mod samples;
pub use samples::*;

mod sources;
pub use sources::*;

mod adapters;
pub use adapters::*;

/// A lazily produced sequence of samples at a fixed rate.
pub trait Signal {
    type Sample;
    fn next(&mut self) -> Option<Self::Sample>;
    fn rate(&self) -> f64;

    fn iter(self) -> Iter<Self> where Self: Sized {
        Iter::new(self)
    }

    fn take(self, duration: f64) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, duration)
    }

    /// Drain a finite signal into a buffer.
    fn sampled(self) -> Result<Samples<Self::Sample>>
    where
        Self: Sized,
    {
        let rate = self.rate();
        Samples::new(rate, self.iter().collect())
    }
}

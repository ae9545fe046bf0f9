use crate::error::FilterError;

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Tapering applied to a truncated ideal impulse response.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Window {
    /// No tapering at all.
    Rectangular,
    Hamming,
    Blackman,
}

impl Window {
    pub const ALL: [Window; 3] = [
        Window::Rectangular,
        Window::Hamming,
        Window::Blackman,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Window::Rectangular => "rectangular",
            Window::Hamming => "hamming",
            Window::Blackman => "blackman",
        }
    }

    /// Window weight at tap `i` of `len`. `len` must be at least 2.
    ///
    /// Weights are never negative; the Blackman endpoints are exactly zero
    /// rather than a rounding error either side of it.
    pub fn at(&self, i: usize, len: usize) -> f64 {
        let x = 2.0 * PI * i as f64 / (len - 1) as f64;
        let w = match self {
            Window::Rectangular => 1.0,
            Window::Hamming => 0.54 - 0.46 * x.cos(),
            Window::Blackman => 0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos(),
        };
        w.max(0.0)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Window {
    type Err = FilterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "none" => Ok(Window::Rectangular),
            "hamming" => Ok(Window::Hamming),
            "blackman" => Ok(Window::Blackman),
            _ => Err(FilterError::UnknownWindow(s.to_owned())),
        }
    }
}

use std::fmt;

/// Errors from filter design and application.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Sample rate is not a positive, finite number.
    InvalidRate(f64),
    /// Cutoff is not in `(0, limit)`.
    InvalidCutoff { cutoff: f64, limit: f64 },
    /// A windowed-sinc design needs at least two taps.
    TooFewTaps(usize),
    /// Windowed taps sum to zero, so they can't be normalized to unit gain.
    ZeroGain,
    /// Window name that doesn't name any known window.
    UnknownWindow(String),
    /// Signal has no samples.
    EmptySignal,
    /// Numerator or denominator has no coefficients.
    EmptyCoefficients,
    /// Recursion needs the leading denominator coefficient to be 1.
    LeadingDenominator(f64),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FilterError::*;
        match self {
            InvalidRate(rate) => {
                write!(f, "sample rate must be positive, got {}", rate)
            },
            InvalidCutoff { cutoff, limit } => {
                write!(f, "cutoff must be in (0, {}), got {}", limit, cutoff)
            },
            TooFewTaps(taps) => {
                write!(f, "need at least 2 taps, got {}", taps)
            },
            ZeroGain => {
                write!(f, "windowed taps sum to zero, try more taps")
            },
            UnknownWindow(name) => write!(f, "unknown window type {:?}", name),
            EmptySignal => write!(f, "signal has no samples"),
            EmptyCoefficients => write!(f, "filter has no coefficients"),
            LeadingDenominator(a0) => {
                write!(f, "leading denominator coefficient must be 1, got {}",
                       a0)
            },
        }
    }
}

impl std::error::Error for FilterError {}

// validation shared by the designers and the signal buffer

pub(crate) fn check_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidRate(rate))
    }
}

pub(crate) fn check_cutoff(cutoff: f64, limit: f64) -> Result<()> {
    // NaN fails both comparisons
    if cutoff > 0.0 && cutoff < limit {
        Ok(())
    } else {
        Err(FilterError::InvalidCutoff { cutoff, limit })
    }
}

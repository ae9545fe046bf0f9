use super::{Convolve, Filter};
use crate::error::{self, FilterError, Result};
use crate::signal::Samples;

use std::collections::VecDeque;
use std::f64::consts::PI;
use std::fmt;

/// How the shared second-order analog prototype is carried into the
/// digital domain.
///
/// Every method uses the same pre-warped denominator; they only differ in
/// the numerator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Discretization {
    MatchedAnalog,
    Derivative,
    ImpulseInvariance,
    Bilinear,
}

impl Discretization {
    pub const ALL: [Discretization; 4] = [
        Discretization::MatchedAnalog,
        Discretization::Derivative,
        Discretization::ImpulseInvariance,
        Discretization::Bilinear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Discretization::MatchedAnalog => "matched analog",
            Discretization::Derivative => "derivative",
            Discretization::ImpulseInvariance => "impulse invariance",
            Discretization::Bilinear => "bilinear",
        }
    }

    fn numerator(&self, proto: &Prototype, a1: f64, a2: f64) -> [f64; 3] {
        match self {
            Discretization::MatchedAnalog => [1.0 + a1, -(1.0 + a1), 0.0],
            Discretization::Derivative => [-a2, a1, 1.0 - a1],
            Discretization::ImpulseInvariance => {
                [proto.omega.powi(2), 0.0, 0.0]
            },
            Discretization::Bilinear => [1.0 - a1, 0.0, a1 - 1.0],
        }
    }
}

impl fmt::Display for Discretization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pre-warped analog prototype for one cutoff at one rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prototype {
    pub rate: f64,
    /// digital cutoff, radians per sample
    pub omega: f64,
    /// pre-warping factor, omega / tan(omega / 2)
    pub s: f64,
}

impl Prototype {
    /// `cutoff` is in Hz and must lie strictly below Nyquist.
    pub fn new(cutoff: f64, rate: f64) -> Result<Self> {
        error::check_rate(rate)?;
        // tan blows up at nyquist, so check before touching it
        error::check_cutoff(cutoff, rate / 2.0)?;
        let omega = 2.0 * PI * cutoff / rate;
        Ok(Prototype {
            rate,
            omega,
            s: omega / (omega / 2.0).tan(),
        })
    }

    /// Denominator `[1, a1, a2]` shared by every discretization.
    pub fn denominator(&self) -> [f64; 3] {
        let fs2 = 2.0 * self.rate;
        let a1 = -(fs2 - self.s) / (fs2 + self.s);
        let a2 = 2.0 / (fs2 + self.s);
        [1.0, a1, a2]
    }

    pub fn discretize(&self, method: Discretization) -> IirCoefficients {
        let a = self.denominator();
        IirCoefficients {
            b: method.numerator(self, a[1], a[2]),
            a,
        }
    }
}

/// Second-order transfer function,
/// `(b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 + a2 z^-2)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IirCoefficients {
    pub b: [f64; 3],
    pub a: [f64; 3],
}

impl IirCoefficients {
    /// Run the recursion over a whole signal.
    pub fn apply(&self, signal: &Samples) -> Result<Samples> {
        apply_iir(signal, &self.b, &self.a)
    }
}

pub fn design_iir(method: Discretization, cutoff: f64, rate: f64)
                  -> Result<IirCoefficients>
{
    Ok(Prototype::new(cutoff, rate)?.discretize(method))
}

/// Direct-form I recursion over a whole signal.
///
/// `a[0]` must be exactly 1. History before the start of the signal is
/// absent rather than padded, which is the same as starting from rest.
pub fn apply_iir(signal: &Samples, b: &[f64], a: &[f64]) -> Result<Samples> {
    let mut filter = DirectForm::new(b.to_vec(), a.to_vec())?;
    let out: Vec<f64> = signal.samples().iter()
        .map(|&v| filter.apply(v))
        .collect();
    Ok(signal.replace(out))
}

/// Direct-form I filter of any order, one sample at a time.
#[derive(Clone, Debug)]
pub struct DirectForm<A> {
    b: Vec<f64>,
    // feedback coefficients past a0, negated
    na: Vec<f64>,

    // state, most recent first
    x: VecDeque<A>,
    y: VecDeque<A>,
}

impl<A> DirectForm<A> where A: Convolve<f64> {
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() {
            return Err(FilterError::EmptyCoefficients);
        }
        match a.first() {
            None => return Err(FilterError::EmptyCoefficients),
            Some(&a0) if a0 != 1.0 => {
                return Err(FilterError::LeadingDenominator(a0));
            },
            Some(_) => (),
        }
        Ok(DirectForm {
            x: VecDeque::with_capacity(b.len()),
            y: VecDeque::with_capacity(a.len()),
            na: a[1..].iter().map(|c| -c).collect(),
            b,
        })
    }
}

impl<A> Filter<A> for DirectForm<A> where A: Convolve<f64> {
    type Output = A;
    fn apply(&mut self, value: A) -> A {
        let mut out = A::zero();
        out.accumulate(&value, &self.b[0]);
        for (c, v) in self.b[1..].iter().zip(self.x.iter()) {
            out.accumulate(v, c);
        }
        for (c, v) in self.na.iter().zip(self.y.iter()) {
            out.accumulate(v, c);
        }

        self.x.push_front(value);
        self.x.truncate(self.b.len() - 1);
        self.y.push_front(out.clone());
        self.y.truncate(self.na.len());
        out
    }
}

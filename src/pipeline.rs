//! The multistage run: one FIR lowpass, then each IIR discretization fed
//! from the FIR output.

use crate::error::Result;
use crate::filter::{self, Discretization, IirCoefficients, Window};
use crate::response::{self, FrequencyResponse};
use crate::signal::Samples;

use rayon::prelude::*;
use std::fmt;

/// Stages of a run, in the only order they happen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    FirDesign,
    FirApply,
    IirDesign(Discretization),
    IirApply(Discretization),
    Response(Discretization),
    Collect,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::FirDesign => write!(f, "fir design"),
            Stage::FirApply => write!(f, "fir apply"),
            Stage::IirDesign(m) => write!(f, "iir design ({})", m),
            Stage::IirApply(m) => write!(f, "iir apply ({})", m),
            Stage::Response(m) => write!(f, "frequency response ({})", m),
            Stage::Collect => write!(f, "collect"),
        }
    }
}

/// Parameters for a multistage run.
///
/// Defaults: FIR cutoff 0.1 of the rate, 31 taps, Blackman window, IIR
/// cutoff 0.1 Hz and 1000 response points.
#[derive(Clone, Debug, PartialEq)]
pub struct Multistage {
    fir_cutoff: f64,
    taps: usize,
    window: Window,
    iir_cutoff: f64,
    points: usize,
}

/// One IIR discretization, run on the FIR output.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub method: Discretization,
    pub coefficients: IirCoefficients,
    pub output: Samples,
    pub response: FrequencyResponse,
}

/// Everything a run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput {
    pub taps: Vec<f64>,
    pub fir_output: Samples,
    /// one per discretization, in [`Discretization::ALL`] order
    pub branches: Vec<Branch>,
}

impl PipelineOutput {
    pub fn branch(&self, method: Discretization) -> Option<&Branch> {
        self.branches.iter().find(|b| b.method == method)
    }

    /// FIR output followed by each IIR output.
    pub fn outputs(&self) -> impl Iterator<Item=&Samples> + '_ {
        std::iter::once(&self.fir_output)
            .chain(self.branches.iter().map(|b| &b.output))
    }
}

impl Default for Multistage {
    fn default() -> Self {
        Multistage {
            fir_cutoff: 0.1,
            taps: 31,
            window: Window::Blackman,
            iir_cutoff: 0.1,
            points: response::DEFAULT_POINTS,
        }
    }
}

impl Multistage {
    pub fn new() -> Self {
        Self::default()
    }

    /// FIR cutoff, as a fraction of the sample rate.
    pub fn fir_cutoff(mut self, cutoff: f64) -> Self {
        self.fir_cutoff = cutoff;
        self
    }

    pub fn taps(mut self, taps: usize) -> Self {
        self.taps = taps;
        self
    }

    pub fn window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// IIR cutoff, in Hz.
    pub fn iir_cutoff(mut self, cutoff: f64) -> Self {
        self.iir_cutoff = cutoff;
        self
    }

    /// Number of frequency response points.
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn run(&self, input: &Samples) -> Result<PipelineOutput> {
        let rate = input.rate();

        log::debug!("{}: cutoff {}, {} taps, {} window", Stage::FirDesign,
                    self.fir_cutoff, self.taps, self.window);
        let taps = filter::design_fir(self.fir_cutoff, self.taps, self.window)?;

        log::debug!("{}: {} samples", Stage::FirApply, input.len());
        let fir_output = filter::apply_fir(input, &taps)?;

        // branches only read the fir output, so they can run side by side
        let branches = Discretization::ALL[..].par_iter()
            .map(|&method| self.branch(method, &fir_output, rate))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("{}: {} outputs", Stage::Collect, branches.len() + 1);
        log::info!("filtered {} samples at {} Hz through {} stages",
                   input.len(), rate, branches.len() + 1);
        Ok(PipelineOutput { taps, fir_output, branches })
    }

    fn branch(&self, method: Discretization, input: &Samples, rate: f64)
              -> Result<Branch>
    {
        log::debug!("{}: cutoff {} Hz", Stage::IirDesign(method),
                    self.iir_cutoff);
        let coefficients = filter::design_iir(method, self.iir_cutoff, rate)?;
        log::debug!("{}: b = {:?}, a = {:?}", Stage::IirApply(method),
                    coefficients.b, coefficients.a);
        let output = coefficients.apply(input)?;
        log::debug!("{}: {} points", Stage::Response(method), self.points);
        let response = FrequencyResponse::of(&coefficients, self.points, rate);
        Ok(Branch { method, coefficients, output, response })
    }
}

// wickedly useful re-export
pub use num::Complex;

pub mod error;
pub use error::FilterError;

pub mod signal;
pub use signal::{Samples, Signal};

pub mod filter;
pub use filter::{Discretization, Filter, Window};

pub mod response;
pub use response::FrequencyResponse;

pub mod fft;

pub mod pipeline;
pub use pipeline::Multistage;

pub mod plot;

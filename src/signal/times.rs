/// Sample instants, n / rate, for n = 0, 1, 2, ...
#[derive(Debug, Clone)]
pub struct Times {
    step: u64,
    rate: f64,
}

impl Times {
    pub fn new(rate: f64) -> Self {
        Times { step: 0, rate }
    }
}

impl Iterator for Times {
    type Item = f64;
    fn next(&mut self) -> Option<f64> {
        // divide rather than accumulate, so late samples don't drift
        let t = self.step as f64 / self.rate;
        self.step += 1;
        Some(t)
    }
}

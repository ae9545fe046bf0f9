use std::ops::{AddAssign, Mul};
use num::Zero;

/// Sample types that can be scaled by a coefficient `C` and summed.
///
/// This is what lets real-valued taps run over complex samples.
pub trait Convolve<C>: Clone + Zero {
    fn accumulate(&mut self, a: &Self, c: &C);
}

impl<C, A> Convolve<C> for A
where
    C: Clone,
    A: Clone + Zero + AddAssign<A> + Mul<C, Output=A>,
{
    fn accumulate(&mut self, a: &Self, c: &C) {
        *self += a.clone() * c.clone();
    }
}

/// Inner product of `values` against `coef`, pairing them in order.
pub fn dot<C, A>(values: &[A], coef: &[C]) -> A where A: Convolve<C> {
    let mut accum = A::zero();
    for (v, c) in values.iter().zip(coef.iter()) {
        accum.accumulate(v, c);
    }
    accum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;

    #[test]
    fn dot_pairs_in_order() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        // shorter side wins
        assert_eq!(dot(&[1.0, 2.0], &[1.0, 1.0, 1.0]), 3.0);
    }

    #[test]
    fn complex_samples_real_coefficients() {
        let v = [Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)];
        assert_eq!(dot(&v, &[2.0, 0.5]), Complex::new(2.0, 3.0));
    }
}

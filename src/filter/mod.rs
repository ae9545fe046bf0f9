mod convolve;
pub use convolve::*;

mod window;
pub use window::*;

mod fir;
pub use fir::*;

mod iir;
pub use iir::*;

// by rights, this should just be FnMut(A) -> A
// but... fn_traits is not yet stable (??!)
pub trait Filter<A> {
    type Output;
    fn apply(&mut self, value: A) -> Self::Output;
}

use super::Vec2;
use rand::Rng;

/// Supplies uniform random numbers in `[0,1)` to the sampling kernels.
///
/// Kernels only ever advance the draw cursor of a source, so handing each thread
/// (or each lane of a data parallel kernel) its own source keeps results reproducible.
pub trait RandomSource {
    /// Draws the next uniform value in `[0,1)`.
    fn next_uniform(&mut self) -> f32;

    /// Draws two consecutive values, the first becoming `x`.
    fn next_sample(&mut self) -> Vec2 {
        let x = self.next_uniform();
        let y = self.next_uniform();
        Vec2::new(x, y)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f32 {
        self.next_f32()
    }
}

use super::{RandomSource, Vec2, Vec3};

/// Maps a 2D sample from `[0,1)²` onto the implementer.
/// All possible points have approximately equal probability.
pub trait Uniform {
    fn uniform(&self, sample: Vec2) -> Vec3;

    /// Like `uniform`, but draws the 2D sample from `rng` first.
    fn uniform_from<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec3 {
        self.uniform(rng.next_sample())
    }
}

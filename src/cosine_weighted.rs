use super::{RandomSource, Vec3};

/// Performs cosine weighted sampling, e.g. for monte carlo estimators of diffuse reflection.
pub trait CosineWeighted {
    fn cosine_weighted<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec3;
}

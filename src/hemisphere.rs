use super::{CosineWeighted, RandomSource, Uniform, Vec2, Vec3};
use cgmath::prelude::*;
use std::f32::consts::PI;

/// Components of a unit normal below this bound are never close to parallel with their axis.
const SQRT_OF_ONE_THIRD: f32 = 0.577_350_269_189_625_8;

/// Draws a direction about the unit `normal` with density proportional to the cosine of
/// its angle to `normal`, consuming two values from `rng`.
///
/// `normal` must already be normalized, otherwise the result is not of unit length.
#[inline]
pub fn sample_hemisphere_cosine<R>(normal: Vec3, rng: &mut R) -> Vec3
where
    R: RandomSource + ?Sized,
{
    debug_assert!(
        (normal.magnitude2() - 1.0).abs() < 1e-3,
        "Hemisphere normal must be normalized, got {:?}",
        normal
    );

    let up = rng.next_uniform().sqrt(); // cos(theta)
    let over = (1.0 - up * up).max(0.0).sqrt(); // sin(theta)
    let around = rng.next_uniform() * 2.0 * PI;

    let (tangent, bitangent) = orthonormal_basis(normal);

    up * normal + (around.cos() * over) * tangent + (around.sin() * over) * bitangent
}

/// Completes the unit `normal` to an orthonormal basis, returning the two tangents.
///
/// The helper axis is picked so it is always at least ~54.7° away from `normal`,
/// which keeps the cross products well conditioned.
#[inline]
pub fn orthonormal_basis(normal: Vec3) -> (Vec3, Vec3) {
    let not_normal = if normal.x.abs() < SQRT_OF_ONE_THIRD {
        Vec3::unit_x()
    } else if normal.y.abs() < SQRT_OF_ONE_THIRD {
        Vec3::unit_y()
    } else {
        Vec3::unit_z()
    };

    let tangent = normal.cross(not_normal).normalize();
    let bitangent = normal.cross(tangent).normalize();

    (tangent, bitangent)
}

/// The unit hemisphere on the side of a plane that `normal` points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hemisphere {
    pub normal: Vec3,
}

impl Hemisphere {
    pub fn new(normal: Vec3) -> Self {
        Hemisphere {
            normal: normal.normalize(),
        }
    }
}

impl CosineWeighted for Hemisphere {
    fn cosine_weighted<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_hemisphere_cosine(self.normal, rng)
    }
}

impl Uniform for Hemisphere {
    /// Samples the hemisphere uniformly by solid angle.
    fn uniform(&self, sample: Vec2) -> Vec3 {
        let up = sample.x;
        let over = (1.0 - up * up).max(0.0).sqrt();
        let around = 2.0 * PI * sample.y;

        let (tangent, bitangent) = orthonormal_basis(self.normal);

        up * self.normal + (around.cos() * over) * tangent + (around.sin() * over) * bitangent
    }
}

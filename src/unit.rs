use super::cosine_weighted::CosineWeighted;
use super::disk::sample_disk_concentric;
use super::hemisphere::{sample_hemisphere_cosine, Hemisphere};
use super::source::RandomSource;
use super::sphere::sample_sphere_uniform;
use super::uniform::Uniform;
use super::{Vec2, Vec3};

/// The sphere of radius 1 around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSphere;

impl Uniform for UnitSphere {
    fn uniform(&self, sample: Vec2) -> Vec3 {
        sample_sphere_uniform(sample)
    }
}

/// The disk of radius 1 around the origin, in the xy plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDisk;

impl Uniform for UnitDisk {
    fn uniform(&self, sample: Vec2) -> Vec3 {
        sample_disk_concentric(sample)
    }
}

/// A hemisphere of radius 1, with the bottom disk aligned to a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitHemisphere {
    PosX, NegX,
    PosY, NegY,
    PosZ, NegZ
}

impl UnitHemisphere {
    /// The axis the hemisphere opens towards.
    pub fn normal(&self) -> Vec3 {
        match self {
            &UnitHemisphere::PosX => Vec3::new(1.0, 0.0, 0.0),
            &UnitHemisphere::NegX => Vec3::new(-1.0, 0.0, 0.0),
            &UnitHemisphere::PosY => Vec3::new(0.0, 1.0, 0.0),
            &UnitHemisphere::NegY => Vec3::new(0.0, -1.0, 0.0),
            &UnitHemisphere::PosZ => Vec3::new(0.0, 0.0, 1.0),
            &UnitHemisphere::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

impl Uniform for UnitHemisphere {
    /// Samples the hemisphere uniformly by solid angle.
    fn uniform(&self, sample: Vec2) -> Vec3 {
        Hemisphere { normal: self.normal() }.uniform(sample)
    }
}

impl CosineWeighted for UnitHemisphere {
    fn cosine_weighted<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_hemisphere_cosine(self.normal(), rng)
    }
}

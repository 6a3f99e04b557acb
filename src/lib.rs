//! Importance sampling kernels for a path tracer, for instance:
//! * drawing cosine weighted directions about a surface normal with [`sample_hemisphere_cosine`](fn.sample_hemisphere_cosine.html),
//! * mapping a 2D sample from `[0,1)²` onto the unit sphere or the unit disk, either through the free
//!   functions or the [`Uniform`](trait.Uniform.html) trait on [`UnitSphere`](struct.UnitSphere.html),
//!   [`UnitDisk`](struct.UnitDisk.html), [`UnitHemisphere`](enum.UnitHemisphere.html) and [`Triangle`](struct.Triangle.html),
//! * stratified sets of 2D samples with [`Stratified`](sequence/struct.Stratified.html).
//!
//! Every kernel is a pure function of its inputs. The only state touched is the draw cursor of the
//! caller owned [`RandomSource`](trait.RandomSource.html), so each thread or lane should own one.

#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate cgmath;
#[macro_use]
extern crate log;
extern crate rand;

mod cosine_weighted;
mod disk;
mod hash;
mod hemisphere;
mod source;
mod sphere;
mod tri;
mod uniform;
mod unit;
pub mod sequence;
pub mod stats;

pub use self::cosine_weighted::CosineWeighted;
pub use self::disk::sample_disk_concentric;
pub use self::hash::{pcg3d, PcgLane};
pub use self::hemisphere::{orthonormal_basis, sample_hemisphere_cosine, Hemisphere};
pub use self::source::RandomSource;
pub use self::sphere::{sample_sphere_uniform, sample_sphere_uniform_spherical};
pub use self::tri::{sample_bary, Triangle};
pub use self::uniform::Uniform;
pub use self::unit::*;
pub use self::sequence::Stratified;

/// A 2D sample point, both components expected in `[0,1)`.
pub type Vec2 = cgmath::Vector2<f32>;

/// A direction or a position, callers tell them apart by convention.
pub type Vec3 = cgmath::Vector3<f32>;

/// Largest `f32` strictly below one.
pub const ONE_MINUS_EPSILON: f32 = 0.99999994;

use super::{Vec2, Vec3};
use std::f32::consts::PI;

/// Maps a sample from `[0,1)²` to a point uniformly distributed on the unit sphere.
///
/// `sample.x` picks the height, which is uniform on `[-1,1]` for a uniform sphere,
/// `sample.y` picks the azimuth. No rejection, the inversion is exact.
#[inline]
pub fn sample_sphere_uniform(sample: Vec2) -> Vec3 {
    let z = 1.0 - 2.0 * sample.x;
    // round-off can push |z| past one near the poles
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * sample.y;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Spherical coordinate formulation of [`sample_sphere_uniform`](fn.sample_sphere_uniform.html).
///
/// Takes the azimuth `theta = 2π·sample.x` and the polar angle `phi = acos(1 - 2·sample.y)`
/// and returns `(sin phi cos theta, sin phi sin theta, cos phi)`. Since `sin(acos(z))` is
/// `sqrt(1 - z²)`, this is the height based mapping with the sample axes swapped.
#[inline]
pub fn sample_sphere_uniform_spherical(sample: Vec2) -> Vec3 {
    sample_sphere_uniform(Vec2::new(sample.y, sample.x))
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::prelude::*;
    use sequence::Stratified;
    use source::test::seeded;
    use stats::{mean, ZoneHistogram};
    use RandomSource;
    use ONE_MINUS_EPSILON;

    #[test]
    fn test_poles() {
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), sample_sphere_uniform(Vec2::new(0.0, 0.0)));
        assert_eq!(Vec3::new(0.0, 0.0, -1.0), sample_sphere_uniform(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_equator() {
        let p = sample_sphere_uniform(Vec2::new(0.5, 0.25));
        assert_relative_eq!(0.0, p.x, epsilon = 1e-6);
        assert_relative_eq!(1.0, p.y, epsilon = 1e-6);
        assert_relative_eq!(0.0, p.z, epsilon = 1e-6);
    }

    #[test]
    fn test_spherical_matches_explicit_angles() {
        for sample in Stratified::new(32, 32) {
            let theta = 2.0 * PI * sample.x;
            let phi = (1.0 - 2.0 * sample.y).acos();
            let expected = Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
            let p = sample_sphere_uniform_spherical(sample);
            assert!(
                (p - expected).magnitude() < 1e-4,
                "{:?} != {:?} for {:?}",
                p,
                expected,
                sample
            );
        }
    }

    #[test]
    fn test_grid_samples_on_unit_sphere() {
        for sample in Stratified::new(256, 256) {
            assert_relative_eq!(1.0, sample_sphere_uniform(sample).magnitude(), epsilon = 1e-5);
            assert_relative_eq!(
                1.0,
                sample_sphere_uniform_spherical(sample).magnitude(),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn test_boundary_samples_are_finite() {
        let edges = [0.0, ONE_MINUS_EPSILON];
        for &x in &edges {
            for &y in &edges {
                for p in &[
                    sample_sphere_uniform(Vec2::new(x, y)),
                    sample_sphere_uniform_spherical(Vec2::new(x, y)),
                ] {
                    assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
                    assert_relative_eq!(1.0, p.magnitude(), epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_no_excess_density_at_poles() {
        let mut rng = seeded();
        let mut height = ZoneHistogram::sphere(10);
        let mut spherical = ZoneHistogram::sphere(10);
        for _ in 0..200_000 {
            height.push(sample_sphere_uniform(rng.next_sample()).z);
            spherical.push(sample_sphere_uniform_spherical(rng.next_sample()).z);
        }
        assert!(height.max_relative_deviation() < 0.05);
        assert!(spherical.max_relative_deviation() < 0.05);
    }

    #[test]
    fn test_second_moment_estimate() {
        // integral of z^2 over the sphere is 4pi/3, estimated with pdf 1/(4pi)
        let mut rng = seeded();
        let estimate = 4.0 * PI * mean((0..100_000).map(|_| {
            let z = sample_sphere_uniform(rng.next_sample()).z;
            z * z
        }));
        assert!((estimate - 4.0 * PI / 3.0).abs() < 0.06);
    }
}

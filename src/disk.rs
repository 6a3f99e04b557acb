use super::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Maps a sample from `[0,1)²` to a point uniformly distributed on the unit disk in the xy plane.
///
/// Uses the concentric mapping of Shirley and Chiu, which maps concentric squares to
/// concentric circles. Unlike the naive polar mapping it keeps neighbouring samples
/// neighbours, so stratified sample sets stay well distributed on the disk.
#[inline]
pub fn sample_disk_concentric(sample: Vec2) -> Vec3 {
    let offset = 2.0 * sample - Vec2::new(1.0, 1.0);

    if offset.x == 0.0 && offset.y == 0.0 {
        return Vec3::new(0.0, 0.0, 0.0);
    }

    let (r, theta) = if offset.x.abs() > offset.y.abs() {
        (offset.x, FRAC_PI_4 * (offset.y / offset.x))
    } else {
        (offset.y, FRAC_PI_2 - FRAC_PI_4 * (offset.x / offset.y))
    };

    r * Vec3::new(theta.cos(), theta.sin(), 0.0)
}

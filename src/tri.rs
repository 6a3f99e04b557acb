use super::{Uniform, Vec2, Vec3};

/// A triangle given by its three corner positions, e.g. an emitter of an area light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Triangle { a, b, c }
    }
}

impl Uniform for Triangle {
    fn uniform(&self, sample: Vec2) -> Vec3 {
        let bary = sample_bary(sample);

        bary[0] * self.a + bary[1] * self.b + bary[2] * self.c
    }
}

/// Warps a sample from `[0,1)²` to barycentric coordinates uniformly distributed by area.
pub fn sample_bary(sample: Vec2) -> [f32; 3] {
    let sqrt_u = sample.x.sqrt();

    [1.0 - sqrt_u, (sqrt_u * (1.0 - sample.y)), (sqrt_u * sample.y)]
}

//! Lane local random numbers from the pcg3d hash.
//!
//! @article{Jarzynski2020Hash,
//!   author =       {Mark Jarzynski and Marc Olano},
//!   title =        {Hash Functions for GPU Rendering},
//!   year =         2020,
//!   journal =      {Journal of Computer Graphics Techniques (JCGT)},
//!   volume =       9,
//!   number =       3,
//!   pages =        {20--38},
//!   url =          {http://jcgt.org/published/0009/03/02/},
//! }

use super::RandomSource;

/// Permuted congruential hash of three 32 bit keys.
pub fn pcg3d(v: [u32; 3]) -> [u32; 3] {
    let [mut x, mut y, mut z] = v;

    x = x.wrapping_mul(1664525).wrapping_add(1013904223);
    y = y.wrapping_mul(1664525).wrapping_add(1013904223);
    z = z.wrapping_mul(1664525).wrapping_add(1013904223);

    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));

    x ^= x >> 16;
    y ^= y >> 16;
    z ^= z >> 16;

    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));

    [x, y, z]
}

/// A random source owned by a single lane of a data parallel kernel.
///
/// Needs no heap and no shared state: the lane is keyed by its pixel and frame,
/// every draw hashes the key together with a private cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcgLane {
    key: [u32; 3],
    cursor: u32,
}

impl PcgLane {
    pub fn new(x: u32, y: u32, frame: u32) -> Self {
        PcgLane {
            key: [x, y, frame],
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }
}

impl RandomSource for PcgLane {
    #[inline]
    fn next_uniform(&mut self) -> f32 {
        let [x, y, frame] = self.key;
        let hash = pcg3d([x, y ^ self.cursor.wrapping_mul(0x9e37_79b9), frame.wrapping_add(self.cursor)]);
        self.cursor = self.cursor.wrapping_add(1);
        // 24 mantissa bits keep the result strictly below one
        (hash[0] >> 8) as f32 * (1.0 / 16_777_216.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pcg3d_is_deterministic() {
        assert_eq!(pcg3d([1, 2, 3]), pcg3d([1, 2, 3]));
        assert_ne!(pcg3d([1, 2, 3]), pcg3d([1, 2, 4]));
    }

    #[test]
    fn test_lane_draws_in_unit_interval() {
        let mut lane = PcgLane::new(17, 42, 3);
        for _ in 0..10_000 {
            let u = lane.next_uniform();
            assert!(u >= 0.0 && u < 1.0, "draw {} outside [0,1)", u);
        }
        assert_eq!(10_000, lane.cursor());
    }

    #[test]
    fn test_lanes_with_equal_keys_agree() {
        let mut a = PcgLane::new(5, 6, 7);
        let mut b = PcgLane::new(5, 6, 7);
        for _ in 0..64 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn test_neighbouring_lanes_differ() {
        let draws = |x| {
            let mut lane = PcgLane::new(x, 0, 0);
            (0..8).map(|_| lane.next_uniform()).collect::<Vec<_>>()
        };
        assert_ne!(draws(0), draws(1));
    }

    #[test]
    fn test_lane_mean_is_near_one_half() {
        let mut lane = PcgLane::new(640, 480, 1);
        let n = 100_000;
        let sum: f64 = (0..n).map(|_| lane.next_uniform() as f64).sum();
        assert!((sum / n as f64 - 0.5).abs() < 0.01);
    }
}

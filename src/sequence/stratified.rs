use source::RandomSource;
use {Vec2, ONE_MINUS_EPSILON};

/// Splits `[0,1)²` into a grid of `nx` by `ny` strata and yields one sample per stratum,
/// row by row.
///
/// Without jitter every sample sits in the center of its stratum, which makes for a
/// deterministic, evenly spaced sample set. With jitter, each sample is placed uniformly
/// at random within its stratum.
pub struct Stratified<'a> {
    nx: u32,
    ny: u32,
    next: u32,
    jitter: Option<&'a mut dyn RandomSource>,
}

impl<'a> Stratified<'a> {
    /// Cell centered samples on an `nx` by `ny` grid.
    pub fn new(nx: u32, ny: u32) -> Self {
        Stratified {
            nx: Self::strata(nx, "x"),
            ny: Self::strata(ny, "y"),
            next: 0,
            jitter: None,
        }
    }

    /// Samples jittered within their strata, drawing two values from `rng` per sample.
    pub fn jittered(nx: u32, ny: u32, rng: &'a mut dyn RandomSource) -> Self {
        Stratified {
            jitter: Some(rng),
            ..Self::new(nx, ny)
        }
    }

    fn strata(count: u32, axis: &str) -> u32 {
        if count == 0 {
            warn!("Stratified sampling with zero strata along {}, using a single stratum", axis);
            1
        } else {
            count
        }
    }

    /// Total amount of samples in the set.
    pub fn sample_count(&self) -> usize {
        self.nx as usize * self.ny as usize
    }
}

impl<'a> Iterator for Stratified<'a> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next as usize >= self.sample_count() {
            return None;
        }

        let x = self.next % self.nx;
        let y = self.next / self.nx;
        self.next += 1;

        let offset = match self.jitter {
            Some(ref mut rng) => rng.next_sample(),
            None => Vec2::new(0.5, 0.5),
        };

        Some(Vec2::new(
            ((x as f32 + offset.x) / self.nx as f32).min(ONE_MINUS_EPSILON),
            ((y as f32 + offset.y) / self.ny as f32).min(ONE_MINUS_EPSILON),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sample_count() - self.next as usize;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Stratified<'a> {}

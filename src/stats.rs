//! Checks for the distributions produced by the sampling kernels.

/// Counts scalar values in equally wide bins over `[min, max]`.
///
/// Binning the height of points on the unit sphere over `[-1,1]` divides the sphere into zones
/// of equal area, so a uniform sphere sampler fills all bins evenly. The same holds for the
/// squared distance to the center of points on the unit disk over `[0,1]`.
#[derive(Debug, Clone)]
pub struct ZoneHistogram {
    min: f32,
    max: f32,
    bins: Vec<u64>,
    /// Values outside of `[min, max]`
    outliers: u64,
}

impl ZoneHistogram {
    /// Creates an empty histogram with `bin_count` bins over `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty, i.e. `max <= min`, or if `bin_count` is zero.
    pub fn new(min: f32, max: f32, bin_count: usize) -> Self {
        assert!(max > min, "Empty histogram range [{}, {}]", min, max);
        assert!(bin_count > 0, "Histogram needs at least one bin");

        ZoneHistogram {
            min,
            max,
            bins: vec![0; bin_count],
            outliers: 0,
        }
    }

    /// Zones of equal area on the unit sphere, binned by height.
    pub fn sphere(bin_count: usize) -> Self {
        Self::new(-1.0, 1.0, bin_count)
    }

    /// Zones of equal area on a unit hemisphere, binned by the cosine to its normal.
    pub fn hemisphere(bin_count: usize) -> Self {
        Self::new(0.0, 1.0, bin_count)
    }

    pub fn push(&mut self, value: f32) {
        if !(value >= self.min && value <= self.max) {
            self.outliers += 1;
            return;
        }

        let relative = (value - self.min) / (self.max - self.min);
        let bin_count = self.bins.len();
        let idx = ((relative * bin_count as f32) as usize).min(bin_count - 1);
        self.bins[idx] += 1;
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    pub fn outliers(&self) -> u64 {
        self.outliers
    }

    /// Amount of pushed values, including outliers.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum::<u64>() + self.outliers
    }

    /// Largest deviation of any bin from a flat histogram, relative to the expected count.
    ///
    /// Outliers count as deviation, so values outside of the range never go unnoticed.
    pub fn max_relative_deviation(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        let expected = total as f64 / self.bins.len() as f64;
        let worst_bin = self
            .bins
            .iter()
            .map(|&count| (count as f64 - expected).abs() / expected)
            .fold(0.0, f64::max);

        worst_bin.max(self.outliers as f64 / expected) as f32
    }
}

/// Monte Carlo average of the given values, accumulated in double precision.
///
/// Returns zero for no values.
pub fn mean<I>(values: I) -> f32
where
    I: IntoIterator<Item = f32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0f64, 0u64), |(sum, count), v| (sum + v as f64, count + 1));

    if count == 0 {
        0.0
    } else {
        (sum / count as f64) as f32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flat_histogram() {
        let mut histogram = ZoneHistogram::new(0.0, 1.0, 4);
        for &v in &[0.1, 0.3, 0.6, 0.9] {
            histogram.push(v);
        }
        assert_eq!(&[1, 1, 1, 1], histogram.bins());
        assert_eq!(0.0, histogram.max_relative_deviation());
    }

    #[test]
    fn test_upper_bound_lands_in_last_bin() {
        let mut histogram = ZoneHistogram::sphere(2);
        histogram.push(1.0);
        histogram.push(-1.0);
        assert_eq!(&[1, 1], histogram.bins());
    }

    #[test]
    fn test_outliers_and_nan_are_deviation() {
        let mut histogram = ZoneHistogram::hemisphere(2);
        histogram.push(0.25);
        histogram.push(0.75);
        histogram.push(-0.5);
        histogram.push(::std::f32::NAN);
        assert_eq!(2, histogram.outliers());
        assert_eq!(4, histogram.total());
        assert_relative_eq!(1.0, histogram.max_relative_deviation());
    }

    #[test]
    fn test_skewed_histogram() {
        let mut histogram = ZoneHistogram::new(0.0, 1.0, 2);
        for _ in 0..3 {
            histogram.push(0.2);
        }
        histogram.push(0.8);
        assert_relative_eq!(0.5, histogram.max_relative_deviation());
    }

    #[test]
    #[should_panic(expected = "Empty histogram range")]
    fn test_empty_range_panics() {
        ZoneHistogram::new(1.0, 1.0, 4);
    }

    #[test]
    #[should_panic(expected = "at least one bin")]
    fn test_zero_bins_panics() {
        ZoneHistogram::sphere(0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(0.0, mean(Vec::<f32>::new()));
        assert_relative_eq!(2.0, mean(vec![1.0, 2.0, 3.0]));
    }
}

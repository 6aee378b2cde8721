/// Escaped-pixel counts per floored iteration value.
///
/// Holds one bucket per iteration in `[0, max_iterations)`. Bounded pixels
/// never enter the histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: Vec<u64>,
}

impl Histogram {
    #[must_use]
    pub fn empty(max_iterations: u32) -> Self {
        Self {
            buckets: vec![0; max_iterations as usize],
        }
    }

    #[must_use]
    pub fn from_counts(buckets: Vec<u64>) -> Self {
        Self { buckets }
    }

    /// Floors `value` into a bucket, clamped to the valid range. Smoothed
    /// values can land on `max_iterations` through rounding, and far-outside
    /// points can go slightly negative before clamping upstream.
    #[must_use]
    pub fn bucket_index(value: f64, max_iterations: u32) -> usize {
        let last = (max_iterations as usize).saturating_sub(1);
        let floored = value.max(0.0).floor();

        (floored as usize).min(last)
    }

    /// Counts `value` in its bucket. A histogram without buckets ignores it.
    pub(crate) fn record(&mut self, value: f64) {
        let index = Self::bucket_index(value, self.buckets.len() as u32);

        if let Some(bucket) = self.buckets.get_mut(index) {
            *bucket += 1;
        }
    }

    /// Element-wise sum; both histograms must share a bucket count.
    #[must_use]
    pub(crate) fn merge(mut self, other: Self) -> Self {
        for (bucket, count) in self.buckets.iter_mut().zip(other.buckets) {
            *bucket += count;
        }
        self
    }

    #[must_use]
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_index_floors() {
        assert_eq!(Histogram::bucket_index(3.0, 10), 3);
        assert_eq!(Histogram::bucket_index(3.99, 10), 3);
        assert_eq!(Histogram::bucket_index(0.2, 10), 0);
    }

    #[test]
    fn bucket_index_clamps_to_range() {
        assert_eq!(Histogram::bucket_index(10.0, 10), 9);
        assert_eq!(Histogram::bucket_index(9.9999, 10), 9);
        assert_eq!(Histogram::bucket_index(-0.5, 10), 0);
        assert_eq!(Histogram::bucket_index(f64::NAN, 10), 0);
    }

    #[test]
    fn record_ignores_values_without_buckets() {
        let mut histogram = Histogram::empty(0);

        histogram.record(0.0);

        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn record_and_total() {
        let mut histogram = Histogram::empty(4);
        histogram.record(0.5);
        histogram.record(2.1);
        histogram.record(2.9);
        histogram.record(4.0);

        assert_eq!(histogram.buckets(), &[1, 0, 2, 1]);
        assert_eq!(histogram.total(), 4);
    }

    #[test]
    fn merge_sums_buckets() {
        let a = Histogram::from_counts(vec![1, 2, 3]);
        let b = Histogram::from_counts(vec![4, 0, 1]);

        assert_eq!(a.merge(b).buckets(), &[5, 2, 4]);
    }
}

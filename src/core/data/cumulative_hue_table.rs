use crate::core::data::histogram::Histogram;

/// Running distribution of escaped pixels over iteration buckets.
///
/// Entry `i` is the fraction of escaped pixels whose bucket is `<= i`; one
/// extra trailing entry repeats the final sum so that `ceil(n)` lookups at
/// the top of the range stay in bounds. The table is non-decreasing, ends at
/// exactly 1 when any pixel escaped, and is all zeros otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeHueTable {
    entries: Vec<f64>,
}

impl CumulativeHueTable {
    #[must_use]
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let buckets = histogram.buckets();
        let total = histogram.total();

        if total == 0 {
            return Self {
                entries: vec![0.0; buckets.len() + 1],
            };
        }

        // Dividing integer running sums keeps the table exact at the top end
        // and independent of the absolute scale of the counts.
        let total = total as f64;
        let mut entries = Vec::with_capacity(buckets.len() + 1);
        let mut running: u64 = 0;

        for &count in buckets {
            running += count;
            entries.push(running as f64 / total);
        }
        entries.push(running as f64 / total);

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear interpolation between the entries either side of `value`.
    /// Lookups are clamped to the table.
    #[must_use]
    pub fn interpolate(&self, value: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let last = self.len() - 1;

        let value = value.max(0.0);
        let lower = (value.floor() as usize).min(last);
        let upper = (value.ceil() as usize).min(last);
        let t = value.fract();

        self.entries[lower] * (1.0 - t) + self.entries[upper] * t
    }
}

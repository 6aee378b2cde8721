use log::warn;
use rayon::prelude::*;

use crate::core::data::cumulative_hue_table::CumulativeHueTable;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::escape_time::IterationCount;
use crate::core::data::histogram::Histogram;

/// Counts escaped pixels per floored iteration value.
///
/// Each rayon worker folds into its own partial histogram; partials are then
/// merged by summation, so the result does not depend on scheduling.
pub fn build_histogram<N: IterationCount>(field: &EscapeField<N>) -> Histogram {
    let max_iterations = field.max_iterations();

    field
        .values()
        .par_iter()
        .filter(|value| value.has_escaped())
        .fold(
            || Histogram::empty(max_iterations),
            |mut histogram, value| {
                histogram.record(value.iterations().to_f64());
                histogram
            },
        )
        .reduce(|| Histogram::empty(max_iterations), Histogram::merge)
}

pub fn build_cumulative_hue_table<N: IterationCount>(
    field: &EscapeField<N>,
) -> CumulativeHueTable {
    let histogram = build_histogram(field);

    if histogram.total() == 0 {
        warn!("no pixel escaped; histogram equalisation falls back to a zero hue table");
    }

    CumulativeHueTable::from_histogram(&histogram)
}

use crate::{Axis, AxisPair, ScrollMetrics};

/// Whether the visible edge is closer to the end of the content than `threshold`.
pub fn is_past_threshold(distance_from_end: i64, threshold: u32) -> bool {
    distance_from_end < threshold as i64
}

/// Per-axis threshold check over a metrics snapshot.
///
/// An unmeasured axis (not scrollable) never triggers.
pub fn axis_past_threshold(metrics: &ScrollMetrics, threshold: &AxisPair<u32>, axis: Axis) -> bool {
    metrics
        .distance_from_end(axis)
        .is_some_and(|distance| is_past_threshold(distance, threshold.at(axis)))
}

//! Fill quantity planning.
//!
//! Two strategies coexist:
//! - proactive pre-fill: request enough items to cover the viewport plus the threshold;
//! - reactive cross-axis crossing: `1 + max(1, distance / extent)`.
//!
//! A threshold crossing on the primary axis does not have its own formula; the controller runs
//! the proactive pre-fill for it instead.
use core::num::NonZeroUsize;

use crate::{AxisMeasurements, SkipReason};

/// Space between the loaded content and `threshold` beyond the visible edge.
///
/// `threshold + (scroll_offset + viewport_extent) - content_extent`. Positive means the
/// content falls short.
pub fn empty_space(threshold: u32, measurements: AxisMeasurements) -> i64 {
    (threshold as i64)
        .saturating_add(measurements.viewport_far_edge())
        .saturating_sub(crate::types::to_i64(measurements.content_extent))
}

/// Proactive pre-fill quantity: `floor(empty_space / effective_extent)`.
///
/// `effective_extent` is only queried when there is empty space to fill.
pub fn prefill_quantity(
    threshold: u32,
    measurements: AxisMeasurements,
    effective_extent: impl FnOnce() -> u32,
) -> Result<NonZeroUsize, SkipReason> {
    let empty = empty_space(threshold, measurements);
    if empty <= 0 {
        return Err(SkipReason::NoEmptySpace);
    }
    let extent = effective_extent();
    if extent == 0 {
        return Err(SkipReason::ZeroExtent);
    }
    positive(empty / extent as i64)
}

/// Reactive cross-axis quantity: `1 + max(1, distance_from_end / effective_extent)`.
pub fn cross_crossing_quantity(
    distance_from_end: i64,
    effective_extent: u32,
) -> Result<NonZeroUsize, SkipReason> {
    if effective_extent == 0 {
        return Err(SkipReason::ZeroExtent);
    }
    let per_item = distance_from_end / effective_extent as i64;
    positive(per_item.max(1).saturating_add(1))
}

fn positive(quantity: i64) -> Result<NonZeroUsize, SkipReason> {
    usize::try_from(quantity)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(SkipReason::ZeroQuantity)
}

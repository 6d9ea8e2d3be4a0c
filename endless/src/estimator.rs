use crate::{Axis, AxisPair, ScrollHost};

/// Tracks how large one item is along each axis.
///
/// The estimate prefers real measurements (the average extent of the rendered items), then
/// the configured fallback, then the viewport itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSizeEstimator {
    /// Cached average; `0` means unset.
    last_observed: AxisPair<u32>,
    fallback: AxisPair<u32>,
    consistent_size: bool,
}

impl ItemSizeEstimator {
    pub fn new(fallback: AxisPair<u32>, consistent_size: bool) -> Self {
        Self {
            last_observed: AxisPair::splat(0),
            fallback,
            consistent_size,
        }
    }

    pub fn last_observed(&self, axis: Axis) -> u32 {
        self.last_observed.at(axis)
    }

    pub fn fallback(&self, axis: Axis) -> u32 {
        self.fallback.at(axis)
    }

    pub fn set_fallback(&mut self, axis: Axis, extent: u32) {
        self.fallback.set(axis, extent);
    }

    pub fn consistent_size(&self) -> bool {
        self.consistent_size
    }

    /// Turning the assumption off drops the cached averages.
    pub fn set_consistent_size(&mut self, consistent_size: bool) {
        if !consistent_size {
            self.reset();
        }
        self.consistent_size = consistent_size;
    }

    /// Forgets the cached averages so the next query measures again.
    pub fn reset(&mut self) {
        self.last_observed = AxisPair::splat(0);
    }

    /// Average extent of the rendered items along `axis`, `0` if nothing is rendered.
    ///
    /// With the consistent-size assumption, a nonzero cached value is returned without
    /// walking the rendered items.
    pub fn average_extent<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> u32 {
        let cached = self.last_observed.at(axis);
        if self.consistent_size && cached != 0 {
            return cached;
        }

        let mut total = 0u64;
        let mut count = 0u64;
        host.for_each_item_extent(axis, &mut |extent| {
            total = total.saturating_add(extent as u64);
            count += 1;
        });
        let average = match total.checked_div(count) {
            Some(avg) => u32::try_from(avg).unwrap_or(u32::MAX),
            None => 0,
        };
        etrace!(?axis, count, average, "measured average item extent");

        self.last_observed.set(axis, average);
        average
    }

    /// The fallback estimate, or the viewport extent when no fallback is configured.
    pub fn estimated_extent(&self, axis: Axis, viewport_extent: u32) -> u32 {
        match self.fallback.at(axis) {
            0 => viewport_extent,
            fallback => fallback,
        }
    }

    /// The per-item extent used for quantity math: measured, else fallback, else viewport.
    ///
    /// Only `0` when nothing is rendered, no fallback is set and the viewport is empty.
    pub fn effective_extent<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> u32 {
        match self.average_extent(axis, host) {
            0 => self.estimated_extent(axis, host.viewport_extent(axis)),
            average => average,
        }
    }
}

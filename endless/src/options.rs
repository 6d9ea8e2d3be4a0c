use crate::{Axis, AxisPair};

/// Configuration for [`crate::EndlessController`].
///
/// All extents and thresholds are in the host's pixel (or cell) units.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EndlessOptions {
    /// Distance from the end of the loaded content below which more content is requested.
    pub threshold: AxisPair<u32>,

    /// Per-item extent used when nothing is rendered yet.
    ///
    /// `0` means "use the current viewport extent".
    pub fallback_extent: AxisPair<u32>,

    /// Items are known to be uniformly sized.
    ///
    /// When set, the measured average item extent is cached after the first nonzero measurement
    /// instead of walking the rendered items on every evaluation.
    pub consistent_size: bool,

    /// Whether the controller is subscribed to scroll notifications.
    pub enabled: bool,

    /// Suppresses further fill requests until a previous request shows up in the content extent
    /// (or [`crate::EndlessController::fill_completed`] is called).
    pub dedupe_in_flight: bool,
}

impl Default for EndlessOptions {
    fn default() -> Self {
        Self {
            threshold: AxisPair::splat(0),
            fallback_extent: AxisPair::splat(0),
            consistent_size: false,
            enabled: true,
            dedupe_in_flight: false,
        }
    }
}

impl EndlessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, axis: Axis, threshold: u32) -> Self {
        self.threshold.set(axis, threshold);
        self
    }

    pub fn with_primary_threshold(self, threshold: u32) -> Self {
        self.with_threshold(Axis::Primary, threshold)
    }

    pub fn with_cross_threshold(self, threshold: u32) -> Self {
        self.with_threshold(Axis::Cross, threshold)
    }

    pub fn with_fallback_extent(mut self, axis: Axis, extent: u32) -> Self {
        self.fallback_extent.set(axis, extent);
        self
    }

    pub fn with_consistent_size(mut self, consistent_size: bool) -> Self {
        self.consistent_size = consistent_size;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_dedupe_in_flight(mut self, dedupe_in_flight: bool) -> Self {
        self.dedupe_in_flight = dedupe_in_flight;
        self
    }
}

use crate::{Axis, AxisPair, EndlessOptions, ItemSizeEstimator, ScrollMetrics};

/// Whether the controller is subscribed to scroll notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifecycle {
    Disabled,
    #[default]
    Enabled,
}

impl Lifecycle {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Everything the controller knows between events.
///
/// This is a plain value: tests and embeddings can build arbitrary states and hand them to
/// [`crate::EndlessController::from_state`] without a live host.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndlessState {
    pub threshold: AxisPair<u32>,
    pub estimator: ItemSizeEstimator,
    /// Distances measured by the most recent evaluation.
    pub metrics: ScrollMetrics,
    pub lifecycle: Lifecycle,
    pub dedupe_in_flight: bool,
}

impl EndlessState {
    pub fn new(options: EndlessOptions) -> Self {
        Self {
            threshold: options.threshold,
            estimator: ItemSizeEstimator::new(options.fallback_extent, options.consistent_size),
            metrics: ScrollMetrics::default(),
            lifecycle: Lifecycle::from_enabled(options.enabled),
            dedupe_in_flight: options.dedupe_in_flight,
        }
    }

    pub fn options(&self) -> EndlessOptions {
        EndlessOptions {
            threshold: self.threshold,
            fallback_extent: AxisPair::new(
                self.estimator.fallback(Axis::Primary),
                self.estimator.fallback(Axis::Cross),
            ),
            consistent_size: self.estimator.consistent_size(),
            enabled: self.lifecycle.is_enabled(),
            dedupe_in_flight: self.dedupe_in_flight,
        }
    }
}

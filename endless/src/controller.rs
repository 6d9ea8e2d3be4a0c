use alloc::boxed::Box;
use core::fmt;
use core::num::NonZeroUsize;

use crate::error::Result;
use crate::planner;
use crate::threshold::is_past_threshold;
use crate::{
    Axis, AxisPair, ConfigurationError, ContentAdapter, EndlessOptions, EndlessState, FillOutcome,
    Lifecycle, ListAdapter, ScrollHost, SkipReason,
};

/// Per-axis outcomes of one event. `None` means the axis was not evaluated.
pub type AxisOutcomes = AxisPair<Option<FillOutcome>>;

/// Decides, on every scroll or layout event, whether and how many items to request.
///
/// The controller holds no UI objects. The embedding owns the [`ScrollHost`] and passes it to
/// every call; the controller reads live measurements from it and forwards fill requests to
/// the attached [`ContentAdapter`]. All calls are synchronous: a request issued for one event is
/// sent (or suppressed) before the call returns.
///
/// Scroll notifications are gated by the host subscription, not by the controller:
/// [`EndlessController::on_scroll_notification`] evaluates regardless of the lifecycle.
pub struct EndlessController {
    state: EndlessState,
    adapter: Option<Box<dyn ContentAdapter>>,
    /// Per axis, the content extent recorded when that axis last issued a guarded request.
    in_flight: AxisPair<Option<u64>>,
}

impl EndlessController {
    /// Creates a controller. The lifecycle starts as `options.enabled` (enabled by default);
    /// call [`EndlessController::bind`] to sync the host subscription with it.
    pub fn new(options: EndlessOptions) -> Self {
        Self::from_state(EndlessState::new(options))
    }

    pub fn from_state(state: EndlessState) -> Self {
        edebug!(
            threshold = ?state.threshold,
            lifecycle = ?state.lifecycle,
            "EndlessController::new"
        );
        Self {
            state,
            adapter: None,
            in_flight: AxisPair::splat(None),
        }
    }

    pub fn state(&self) -> &EndlessState {
        &self.state
    }

    pub fn options(&self) -> EndlessOptions {
        self.state.options()
    }

    /// Applies new options.
    ///
    /// A changed lifecycle updates the host subscription, and every axis whose threshold
    /// changed is re-evaluated immediately.
    pub fn set_options<H: ScrollHost + ?Sized>(
        &mut self,
        options: EndlessOptions,
        host: &mut H,
    ) -> AxisOutcomes {
        let prev = self.options();
        etrace!(?options, "EndlessController::set_options");

        for axis in Axis::ALL {
            self.state
                .estimator
                .set_fallback(axis, options.fallback_extent.at(axis));
        }
        if options.consistent_size != prev.consistent_size {
            self.state
                .estimator
                .set_consistent_size(options.consistent_size);
        }
        self.state.dedupe_in_flight = options.dedupe_in_flight;
        if !options.dedupe_in_flight {
            self.fill_completed();
        }
        self.set_enabled(options.enabled, host);

        let mut outcomes = AxisOutcomes::default();
        for axis in Axis::ALL {
            if options.threshold.at(axis) != prev.threshold.at(axis) {
                outcomes.set(
                    axis,
                    Some(self.set_threshold(axis, options.threshold.at(axis), &*host)),
                );
            }
        }
        outcomes
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        f: impl FnOnce(&mut EndlessOptions),
    ) -> AxisOutcomes {
        let mut next = self.options();
        f(&mut next);
        self.set_options(next, host)
    }

    /// Makes the host subscription match the current lifecycle.
    pub fn bind<H: ScrollHost + ?Sized>(&self, host: &mut H) {
        host.set_scroll_subscription(self.is_enabled());
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn is_enabled(&self) -> bool {
        self.state.lifecycle.is_enabled()
    }

    /// Subscribes to (or unsubscribes from) scroll notifications.
    ///
    /// Returns `false` when the lifecycle was already in the requested state.
    pub fn set_enabled<H: ScrollHost + ?Sized>(&mut self, enabled: bool, host: &mut H) -> bool {
        if self.is_enabled() == enabled {
            return false;
        }
        self.state.lifecycle = Lifecycle::from_enabled(enabled);
        host.set_scroll_subscription(enabled);
        edebug!(enabled, "EndlessController::set_enabled");
        true
    }

    /// Attaches the content adapter, replacing any previous one.
    pub fn set_adapter(&mut self, adapter: impl ContentAdapter + 'static) {
        self.adapter = Some(Box::new(adapter));
        self.fill_completed();
    }

    /// Attaches a list adapter if it exposes the fill capability.
    ///
    /// On failure the previously attached adapter stays in place.
    pub fn try_set_adapter(&mut self, adapter: Box<dyn ListAdapter>) -> Result<()> {
        match adapter.into_content_adapter() {
            Ok(adapter) => {
                self.adapter = Some(adapter);
                self.fill_completed();
                Ok(())
            }
            Err(_) => {
                ewarn!("EndlessController::try_set_adapter: adapter cannot fill");
                Err(ConfigurationError::MissingFillCapability)
            }
        }
    }

    pub fn take_adapter(&mut self) -> Option<Box<dyn ContentAdapter>> {
        self.fill_completed();
        self.adapter.take()
    }

    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    /// Requests `quantity` items unconditionally.
    ///
    /// Used for the very first population, before any layout exists. Ignores the in-flight
    /// guard and does not arm it.
    pub fn seed(&mut self, quantity: usize) -> Result<()> {
        let Some(adapter) = self.adapter.as_mut() else {
            ewarn!(quantity, "EndlessController::seed: no adapter attached");
            return Err(ConfigurationError::NoAdapter);
        };
        let quantity = NonZeroUsize::new(quantity).ok_or(ConfigurationError::ZeroQuantity)?;
        edebug!(quantity = quantity.get(), "seeding");
        adapter.fill(quantity);
        Ok(())
    }

    pub fn threshold(&self, axis: Axis) -> u32 {
        self.state.threshold.at(axis)
    }

    /// Updates the threshold for `axis` and immediately runs the pre-fill for it.
    pub fn set_threshold<H: ScrollHost + ?Sized>(
        &mut self,
        axis: Axis,
        threshold: u32,
        host: &H,
    ) -> FillOutcome {
        self.state.threshold.set(axis, threshold);
        self.state.metrics.refresh(axis, host);
        self.populate_axis(axis, host)
    }

    /// The configured fallback extent; `0` when unset.
    pub fn fallback_extent(&self, axis: Axis) -> u32 {
        self.state.estimator.fallback(axis)
    }

    pub fn set_fallback_extent(&mut self, axis: Axis, extent: u32) {
        self.state.estimator.set_fallback(axis, extent);
    }

    /// The fallback extent, or the viewport extent when no fallback is configured.
    pub fn estimated_extent<H: ScrollHost + ?Sized>(&self, axis: Axis, host: &H) -> u32 {
        self.state
            .estimator
            .estimated_extent(axis, host.viewport_extent(axis))
    }

    pub fn consistent_size(&self) -> bool {
        self.state.estimator.consistent_size()
    }

    pub fn set_consistent_size(&mut self, consistent_size: bool) {
        self.state.estimator.set_consistent_size(consistent_size);
    }

    /// Drops cached average item extents.
    pub fn reset_size_cache(&mut self) {
        self.state.estimator.reset();
    }

    pub fn average_extent<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> u32 {
        self.state.estimator.average_extent(axis, host)
    }

    pub fn effective_extent<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> u32 {
        self.state.estimator.effective_extent(axis, host)
    }

    /// `scroll_offset + viewport_extent` along `axis`.
    pub fn viewport_far_edge<H: ScrollHost + ?Sized>(&self, axis: Axis, host: &H) -> i64 {
        host.measurements(axis).viewport_far_edge()
    }

    /// Distance from the end measured by the most recent evaluation of `axis`.
    pub fn last_distance(&self, axis: Axis) -> Option<i64> {
        self.state.metrics.distance_from_end(axis)
    }

    /// Whether either axis has a guarded request outstanding.
    pub fn is_fill_in_flight(&self) -> bool {
        Axis::ALL.into_iter().any(|axis| self.is_axis_in_flight(axis))
    }

    pub fn is_axis_in_flight(&self, axis: Axis) -> bool {
        self.in_flight.at(axis).is_some()
    }

    /// Releases the in-flight guard on both axes, e.g. once the requested items were bound.
    pub fn fill_completed(&mut self) {
        self.in_flight = AxisPair::splat(None);
    }

    /// Handles a scroll notification.
    ///
    /// Each axis with a nonzero delta that can scroll is measured and checked against its
    /// threshold; a crossing runs the reactive strategy for that axis.
    pub fn on_scroll_notification<H: ScrollHost + ?Sized>(
        &mut self,
        delta_primary: i64,
        delta_cross: i64,
        host: &H,
    ) -> AxisOutcomes {
        let deltas = AxisPair::new(delta_primary, delta_cross);
        let mut outcomes = AxisOutcomes::default();
        for axis in Axis::ALL {
            if deltas.at(axis) == 0 {
                continue;
            }
            outcomes.set(axis, Some(self.evaluate_scroll(axis, host)));
        }
        outcomes
    }

    /// Forces a reactive evaluation of both axes.
    pub fn trigger<H: ScrollHost + ?Sized>(&mut self, host: &H) -> AxisOutcomes {
        self.on_scroll_notification(1, 1, host)
    }

    /// Layout callback: rebuilds only when the layout actually changed.
    pub fn on_layout<H: ScrollHost + ?Sized>(&mut self, changed: bool, host: &H) -> AxisOutcomes {
        if !changed {
            return AxisOutcomes::default();
        }
        self.on_layout_changed(host)
    }

    /// Recomputes every scrollable axis and pre-fills, whether or not a threshold was crossed.
    pub fn on_layout_changed<H: ScrollHost + ?Sized>(&mut self, host: &H) -> AxisOutcomes {
        etrace!(
            viewport_primary = host.viewport_extent(Axis::Primary),
            viewport_cross = host.viewport_extent(Axis::Cross),
            "EndlessController::on_layout_changed"
        );
        self.state.metrics.refresh_all(host);
        self.populate(host)
    }

    /// Runs the proactive pre-fill on every axis.
    pub fn populate<H: ScrollHost + ?Sized>(&mut self, host: &H) -> AxisOutcomes {
        let mut outcomes = AxisOutcomes::default();
        for axis in Axis::ALL {
            outcomes.set(axis, Some(self.populate_axis(axis, host)));
        }
        outcomes
    }

    /// Proactive pre-fill: requests enough items to cover the viewport plus the threshold.
    pub fn populate_axis<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> FillOutcome {
        if !host.can_scroll(axis) {
            return FillOutcome::Skipped(SkipReason::NotScrollable);
        }
        if self.adapter.is_none() {
            return FillOutcome::Skipped(SkipReason::NoAdapter);
        }

        let measurements = host.measurements(axis);
        self.state.metrics.record(axis, measurements);
        let threshold = self.state.threshold.at(axis);
        let estimator = &mut self.state.estimator;
        let planned = planner::prefill_quantity(threshold, measurements, || {
            estimator.effective_extent(axis, host)
        });
        match planned {
            Ok(quantity) => {
                edebug!(?axis, quantity = quantity.get(), "populating");
                self.request(axis, quantity, host)
            }
            Err(reason) => {
                etrace!(?axis, ?reason, "populate skipped");
                FillOutcome::Skipped(reason)
            }
        }
    }

    fn evaluate_scroll<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> FillOutcome {
        let Some(distance) = self.state.metrics.refresh(axis, host) else {
            return FillOutcome::Skipped(SkipReason::NotScrollable);
        };
        if !is_past_threshold(distance, self.state.threshold.at(axis)) {
            return FillOutcome::Skipped(SkipReason::NotPastThreshold);
        }
        etrace!(?axis, distance, "threshold crossed");
        self.on_threshold_crossed(axis, distance, host)
    }

    fn on_threshold_crossed<H: ScrollHost + ?Sized>(
        &mut self,
        axis: Axis,
        distance: i64,
        host: &H,
    ) -> FillOutcome {
        if self.adapter.is_none() {
            return FillOutcome::Skipped(SkipReason::NoAdapter);
        }
        match axis {
            Axis::Primary => self.populate_axis(Axis::Primary, host),
            Axis::Cross => {
                let extent = self.state.estimator.effective_extent(Axis::Cross, host);
                match planner::cross_crossing_quantity(distance, extent) {
                    Ok(quantity) => {
                        edebug!(quantity = quantity.get(), extent, "filling cross axis");
                        self.request(Axis::Cross, quantity, host)
                    }
                    Err(reason) => FillOutcome::Skipped(reason),
                }
            }
        }
    }

    /// Issues a fill for `axis`, unless a guarded request for the same content end of that
    /// axis is still outstanding.
    fn request<H: ScrollHost + ?Sized>(
        &mut self,
        axis: Axis,
        quantity: NonZeroUsize,
        host: &H,
    ) -> FillOutcome {
        let content = host.content_extent(axis);
        if self.state.dedupe_in_flight {
            match self.in_flight.at(axis) {
                Some(pending) if pending == content => {
                    etrace!(
                        ?axis,
                        quantity = quantity.get(),
                        "fill suppressed: request in flight"
                    );
                    return FillOutcome::Skipped(SkipReason::InFlight);
                }
                _ => self.in_flight.set(axis, None),
            }
        }

        let Some(adapter) = self.adapter.as_mut() else {
            return FillOutcome::Skipped(SkipReason::NoAdapter);
        };
        adapter.fill(quantity);
        if self.state.dedupe_in_flight {
            self.in_flight.set(axis, Some(content));
        }
        FillOutcome::Requested(quantity)
    }
}

impl fmt::Debug for EndlessController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndlessController")
            .field("state", &self.state)
            .field("has_adapter", &self.adapter.is_some())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

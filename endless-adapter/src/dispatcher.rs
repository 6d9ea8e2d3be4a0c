use alloc::collections::VecDeque;

use endless::{Axis, AxisOutcomes, EndlessController, EndlessOptions, FillOutcome, ScrollHost};

use crate::HostEvent;

/// A single-threaded event loop that owns a scroll host and its endless controller.
///
/// Events are processed strictly in the order they were pushed; the fill request (if any) for
/// one event is issued before the next event is looked at. Scroll events only reach the
/// controller while the host is subscribed, mirroring a listener that was added or removed.
///
/// This type does not hold any UI objects beyond the host you give it. Adapters drive it by
/// calling:
/// - `push`/`pump` (or `dispatch` directly) when the host reports scroll or layout changes
/// - `set_enabled`/`set_threshold`/`seed` from application code
#[derive(Debug)]
pub struct Dispatcher<H> {
    host: H,
    controller: EndlessController,
    queue: VecDeque<HostEvent>,
}

impl<H: ScrollHost> Dispatcher<H> {
    pub fn new(host: H, options: EndlessOptions) -> Self {
        Self::from_controller(host, EndlessController::new(options))
    }

    /// Wraps an existing controller and syncs the host subscription with its lifecycle.
    pub fn from_controller(mut host: H, controller: EndlessController) -> Self {
        controller.bind(&mut host);
        adebug!(
            subscribed = host.is_scroll_subscribed(),
            "Dispatcher::from_controller"
        );
        Self {
            host,
            controller,
            queue: VecDeque::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn controller(&self) -> &EndlessController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EndlessController {
        &mut self.controller
    }

    pub fn into_parts(self) -> (H, EndlessController) {
        (self.host, self.controller)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn push(&mut self, event: HostEvent) {
        self.queue.push_back(event);
    }

    /// Processes every queued event in order. Returns how many reached the controller.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.queue.pop_front() {
            atrace!(?event, "Dispatcher::pump");
            if self.dispatch(event).is_some() {
                delivered += 1;
            }
        }
        delivered
    }

    /// Delivers one event immediately.
    ///
    /// Returns `None` when a scroll event was dropped because the host is not subscribed.
    pub fn dispatch(&mut self, event: HostEvent) -> Option<AxisOutcomes> {
        match event {
            HostEvent::Scroll {
                delta_primary,
                delta_cross,
            } => {
                if !self.host.is_scroll_subscribed() {
                    atrace!(delta_primary, delta_cross, "scroll dropped: not subscribed");
                    return None;
                }
                Some(
                    self.controller
                        .on_scroll_notification(delta_primary, delta_cross, &self.host),
                )
            }
            HostEvent::Layout { changed } => Some(self.controller.on_layout(changed, &self.host)),
            HostEvent::Trigger => Some(self.controller.trigger(&self.host)),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.controller.set_enabled(enabled, &mut self.host)
    }

    pub fn set_threshold(&mut self, axis: Axis, threshold: u32) -> FillOutcome {
        self.controller.set_threshold(axis, threshold, &self.host)
    }

    pub fn set_options(&mut self, options: EndlessOptions) -> AxisOutcomes {
        self.controller.set_options(options, &mut self.host)
    }

    pub fn seed(&mut self, quantity: usize) -> endless::Result<()> {
        self.controller.seed(quantity)
    }
}

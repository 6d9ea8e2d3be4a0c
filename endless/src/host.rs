use alloc::boxed::Box;
use core::num::NonZeroUsize;

use crate::{Axis, AxisMeasurements};

/// The scrolling surface the controller reads measurements from.
///
/// Implementations wrap whatever the embedding uses to lay out items (a TUI list, a GUI scroll
/// view, a test double). Every query must reflect the live layout: the controller never caches
/// distances between events.
pub trait ScrollHost {
    /// Whether the layout can scroll along `axis` at all.
    fn can_scroll(&self, axis: Axis) -> bool;

    fn content_extent(&self, axis: Axis) -> u64;

    fn scroll_offset(&self, axis: Axis) -> u64;

    fn viewport_extent(&self, axis: Axis) -> u32;

    /// Calls `f` with the extent along `axis` of every currently rendered item.
    fn for_each_item_extent(&self, axis: Axis, f: &mut dyn FnMut(u32));

    /// Starts or stops delivering scroll notifications to the controller.
    fn set_scroll_subscription(&mut self, subscribed: bool);

    fn is_scroll_subscribed(&self) -> bool;

    fn measurements(&self, axis: Axis) -> AxisMeasurements {
        AxisMeasurements {
            content_extent: self.content_extent(axis),
            scroll_offset: self.scroll_offset(axis),
            viewport_extent: self.viewport_extent(axis),
        }
    }
}

/// The fill capability: appends `quantity` more items to the list.
///
/// The controller treats the call as fire-and-forget. Implementations may bind items
/// synchronously or schedule the work elsewhere.
pub trait ContentAdapter {
    fn fill(&mut self, quantity: NonZeroUsize);
}

impl<F: FnMut(NonZeroUsize)> ContentAdapter for F {
    fn fill(&mut self, quantity: NonZeroUsize) {
        self(quantity)
    }
}

/// A list adapter as seen by a list surface that does not know about endless scrolling.
///
/// Adapters that can fill return `Ok(self)` from [`ListAdapter::into_content_adapter`]; the
/// others hand themselves back in `Err`.
pub trait ListAdapter {
    fn into_content_adapter(
        self: Box<Self>,
    ) -> Result<Box<dyn ContentAdapter>, Box<dyn ListAdapter>>;
}

use alloc::vec::Vec;

use endless::{Axis, AxisPair, ScrollHost};

use crate::HostEvent;

/// A headless list surface that lays items out one after another along `flow`.
///
/// Only the flow axis can scroll, like a linear layout. Content extent along the flow axis is
/// the sum of the item extents; along the other axis it is the widest item. An item counts as
/// rendered while it overlaps the viewport.
///
/// Mutating methods return the [`HostEvent`] a real surface would emit, so the result can be
/// fed straight into a [`crate::Dispatcher`].
#[derive(Clone, Debug)]
pub struct SimulatedList {
    flow: Axis,
    items: Vec<AxisPair<u32>>,
    viewport: AxisPair<u32>,
    scroll_offset: u64,
    subscribed: bool,
}

impl SimulatedList {
    pub fn new(flow: Axis, viewport: AxisPair<u32>) -> Self {
        Self {
            flow,
            items: Vec::new(),
            viewport,
            scroll_offset: 0,
            subscribed: false,
        }
    }

    pub fn vertical(viewport_width: u32, viewport_height: u32) -> Self {
        Self::new(Axis::Primary, AxisPair::new(viewport_height, viewport_width))
    }

    pub fn horizontal(viewport_width: u32, viewport_height: u32) -> Self {
        Self::new(Axis::Cross, AxisPair::new(viewport_height, viewport_width))
    }

    pub fn flow(&self) -> Axis {
        self.flow
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `count` items of the same size.
    pub fn push_items(&mut self, count: usize, extent: AxisPair<u32>) -> HostEvent {
        self.items.extend(core::iter::repeat_n(extent, count));
        HostEvent::Layout { changed: count > 0 }
    }

    pub fn resize(&mut self, viewport: AxisPair<u32>) -> HostEvent {
        let changed = self.viewport != viewport;
        self.viewport = viewport;
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
        HostEvent::Layout { changed }
    }

    /// Scrolls along the flow axis, clamped to the content.
    ///
    /// The returned event carries the delta actually applied.
    pub fn scroll_by(&mut self, delta: i64) -> HostEvent {
        let prev = self.scroll_offset;
        let target = if delta >= 0 {
            prev.saturating_add(delta.unsigned_abs())
        } else {
            prev.saturating_sub(delta.unsigned_abs())
        };
        self.scroll_offset = self.clamp_offset(target);

        let applied = self.scroll_offset as i64 - prev as i64;
        match self.flow {
            Axis::Primary => HostEvent::Scroll {
                delta_primary: applied,
                delta_cross: 0,
            },
            Axis::Cross => HostEvent::Scroll {
                delta_primary: 0,
                delta_cross: applied,
            },
        }
    }

    /// Scrolls so the viewport's far edge sits at the end of the content.
    pub fn scroll_to_end(&mut self) -> HostEvent {
        let max = self.max_offset();
        self.scroll_by(max as i64 - self.scroll_offset as i64)
    }

    pub fn max_offset(&self) -> u64 {
        self.content_extent(self.flow)
            .saturating_sub(self.viewport.at(self.flow) as u64)
    }

    fn clamp_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_offset())
    }

    fn rendered(&self) -> impl Iterator<Item = &AxisPair<u32>> {
        let view_start = self.scroll_offset;
        let view_end = view_start.saturating_add(self.viewport.at(self.flow) as u64);
        let flow = self.flow;
        let mut start = 0u64;
        self.items.iter().filter(move |item| {
            let end = start.saturating_add(item.at(flow) as u64);
            let visible = start < view_end && end > view_start;
            start = end;
            visible
        })
    }
}

impl ScrollHost for SimulatedList {
    fn can_scroll(&self, axis: Axis) -> bool {
        axis == self.flow
    }

    fn content_extent(&self, axis: Axis) -> u64 {
        if axis == self.flow {
            self.items.iter().map(|item| item.at(axis) as u64).sum()
        } else {
            self.items
                .iter()
                .map(|item| item.at(axis) as u64)
                .max()
                .unwrap_or(0)
        }
    }

    fn scroll_offset(&self, axis: Axis) -> u64 {
        if axis == self.flow {
            self.scroll_offset
        } else {
            0
        }
    }

    fn viewport_extent(&self, axis: Axis) -> u32 {
        self.viewport.at(axis)
    }

    fn for_each_item_extent(&self, axis: Axis, f: &mut dyn FnMut(u32)) {
        for item in self.rendered() {
            f(item.at(axis));
        }
    }

    fn set_scroll_subscription(&mut self, subscribed: bool) {
        self.subscribed = subscribed;
    }

    fn is_scroll_subscribed(&self) -> bool {
        self.subscribed
    }
}

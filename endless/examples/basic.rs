// Example: a fixed-size host, one layout pass and a threshold change.
use std::num::NonZeroUsize;

use endless::{Axis, AxisMeasurements, EndlessController, EndlessOptions, ScrollHost};

struct Feed {
    rows: usize,
    row_height: u32,
    viewport: u32,
    offset: u64,
}

impl ScrollHost for Feed {
    fn can_scroll(&self, axis: Axis) -> bool {
        axis == Axis::Primary
    }

    fn content_extent(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Primary => self.rows as u64 * self.row_height as u64,
            Axis::Cross => 0,
        }
    }

    fn scroll_offset(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Primary => self.offset,
            Axis::Cross => 0,
        }
    }

    fn viewport_extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Primary => self.viewport,
            Axis::Cross => 0,
        }
    }

    fn for_each_item_extent(&self, axis: Axis, f: &mut dyn FnMut(u32)) {
        if axis == Axis::Primary {
            for _ in 0..self.rows.min(8) {
                f(self.row_height);
            }
        }
    }

    fn set_scroll_subscription(&mut self, _subscribed: bool) {}

    fn is_scroll_subscribed(&self) -> bool {
        true
    }
}

fn main() {
    let host = Feed {
        rows: 20,
        row_height: 50,
        viewport: 200,
        offset: 700,
    };

    let mut c = EndlessController::new(EndlessOptions::new().with_primary_threshold(10));
    c.set_adapter(|n: NonZeroUsize| println!("fill({n})"));

    let m: AxisMeasurements = host.measurements(Axis::Primary);
    println!("distance_from_end={}", m.distance_from_end());
    println!("layout: {:?}", c.on_layout_changed(&host).primary);
    println!(
        "threshold 150: {:?}",
        c.set_threshold(Axis::Primary, 150, &host)
    );
}

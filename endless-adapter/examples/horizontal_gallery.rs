// Example: a horizontal strip, where threshold crossings use the cross-axis formula.
use endless::{Axis, AxisPair, EndlessOptions};
use endless_adapter::{Dispatcher, FillQueue, SimulatedList};

fn main() {
    let queue = FillQueue::new();
    let mut d = Dispatcher::new(
        SimulatedList::horizontal(600, 200),
        EndlessOptions::new()
            .with_cross_threshold(300)
            .with_fallback_extent(Axis::Cross, 150),
    );
    d.controller_mut().set_adapter(queue.clone());

    let ev = d.host_mut().push_items(6, AxisPair::new(200, 150));
    d.dispatch(ev);
    println!("after first layout: {}", queue.take_total());

    for _ in 0..4 {
        let ev = d.host_mut().scroll_to_end();
        let out = d.dispatch(ev);
        let n = queue.take_total();
        println!("scrolled to end: outcome={out:?} fill={n}");
        d.host_mut().push_items(n, AxisPair::new(200, 150));
    }
}

// Example: a vertical feed that keeps loading rows while the user scrolls.
use endless::{AxisPair, EndlessOptions};
use endless_adapter::{Dispatcher, FillQueue, HostEvent, SimulatedList};

const ROW: AxisPair<u32> = AxisPair::new(48, 320);

fn main() {
    let queue = FillQueue::new();
    let mut d = Dispatcher::new(
        SimulatedList::vertical(320, 480),
        EndlessOptions::new()
            .with_primary_threshold(240)
            .with_consistent_size(true)
            .with_dedupe_in_flight(true),
    );
    d.controller_mut().set_adapter(queue.clone());

    d.seed(5).expect("adapter attached");
    d.push(HostEvent::Layout { changed: false });

    for step in 0..12 {
        // Bind whatever the controller asked for, then let the surface lay it out.
        let requested = queue.take_total();
        if requested > 0 {
            let ev = d.host_mut().push_items(requested, ROW);
            d.push(ev);
            d.controller_mut().fill_completed();
        }
        let ev = d.host_mut().scroll_by(120);
        d.push(ev);
        d.pump();

        println!(
            "step={step:2} rows={:3} requested={requested:2} distance={:?}",
            d.host().len(),
            d.controller().last_distance(endless::Axis::Primary),
        );
    }
}

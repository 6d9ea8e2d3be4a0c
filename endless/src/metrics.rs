use crate::{Axis, AxisMeasurements, AxisPair, ScrollHost};

/// Signed distance from the visible edge to the end of the loaded content, per axis.
///
/// `None` means the axis was not measured (it cannot scroll, or the event did not concern it).
/// Both axes share one formula: see [`AxisMeasurements::distance_from_end`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    distance_from_end: AxisPair<Option<i64>>,
}

impl ScrollMetrics {
    pub fn from_distances(primary: Option<i64>, cross: Option<i64>) -> Self {
        Self {
            distance_from_end: AxisPair::new(primary, cross),
        }
    }

    pub fn distance_from_end(&self, axis: Axis) -> Option<i64> {
        self.distance_from_end.at(axis)
    }

    /// Recomputes `axis` from live host measurements.
    ///
    /// A non-scrollable axis is cleared and never measured. Returns the new distance.
    pub fn refresh<H: ScrollHost + ?Sized>(&mut self, axis: Axis, host: &H) -> Option<i64> {
        let distance = if host.can_scroll(axis) {
            Some(host.measurements(axis).distance_from_end())
        } else {
            None
        };
        self.distance_from_end.set(axis, distance);
        distance
    }

    /// Recomputes every scrollable axis.
    pub fn refresh_all<H: ScrollHost + ?Sized>(&mut self, host: &H) {
        for axis in Axis::ALL {
            self.refresh(axis, host);
        }
    }

    pub fn record(&mut self, axis: Axis, measurements: AxisMeasurements) {
        self.distance_from_end
            .set(axis, Some(measurements.distance_from_end()));
    }
}

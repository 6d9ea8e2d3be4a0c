/// A notification delivered by a scroll host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// The viewport moved. Only delivered while the controller is subscribed.
    Scroll { delta_primary: i64, delta_cross: i64 },
    /// A layout pass finished; `changed` is `false` when nothing moved or resized.
    Layout { changed: bool },
    /// The embedding asked for a full re-evaluation.
    Trigger,
}

use core::num::NonZeroUsize;

/// A scrolling axis.
///
/// `Primary` is the list's main direction (vertical for a classic feed), `Cross` is the other
/// one (horizontal). Both axes are tracked and evaluated independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Primary,
    Cross,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Primary, Axis::Cross];

    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Cross,
            Self::Cross => Self::Primary,
        }
    }
}

/// A value duplicated per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisPair<T> {
    pub primary: T,
    pub cross: T,
}

impl<T> AxisPair<T> {
    pub const fn new(primary: T, cross: T) -> Self {
        Self { primary, cross }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::Primary => &self.primary,
            Axis::Cross => &self.cross,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Primary => &mut self.primary,
            Axis::Cross => &mut self.cross,
        }
    }

    pub fn set(&mut self, axis: Axis, value: T) {
        *self.get_mut(axis) = value;
    }

    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> AxisPair<U> {
        AxisPair {
            primary: f(Axis::Primary, self.primary),
            cross: f(Axis::Cross, self.cross),
        }
    }
}

impl<T: Copy> AxisPair<T> {
    pub const fn splat(value: T) -> Self {
        Self {
            primary: value,
            cross: value,
        }
    }

    pub fn at(&self, axis: Axis) -> T {
        *self.get(axis)
    }
}

/// Raw scroll-host measurements along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMeasurements {
    /// Total scrollable size of the loaded content.
    pub content_extent: u64,
    /// Current displacement of the viewport within the content.
    pub scroll_offset: u64,
    /// Visible size of the scrolling surface.
    pub viewport_extent: u32,
}

impl AxisMeasurements {
    pub const fn new(content_extent: u64, scroll_offset: u64, viewport_extent: u32) -> Self {
        Self {
            content_extent,
            scroll_offset,
            viewport_extent,
        }
    }

    /// `scroll_offset + viewport_extent`: how far into the content the visible edge reaches.
    pub fn viewport_far_edge(&self) -> i64 {
        to_i64(self.scroll_offset).saturating_add(self.viewport_extent as i64)
    }

    /// `content_extent - (scroll_offset + viewport_extent)`.
    ///
    /// Negative when the viewport already reaches past the loaded content.
    pub fn distance_from_end(&self) -> i64 {
        to_i64(self.content_extent).saturating_sub(self.viewport_far_edge())
    }
}

pub(crate) fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Why an evaluation did not produce a fill request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// The layout cannot scroll along this axis.
    NotScrollable,
    /// No content adapter is attached yet.
    NoAdapter,
    /// The distance from the end is still at or above the threshold.
    NotPastThreshold,
    /// The viewport is already covered up to the threshold.
    NoEmptySpace,
    /// Neither a measured average, a fallback, nor the viewport gives a usable item extent.
    ZeroExtent,
    /// The computed quantity was not positive.
    ZeroQuantity,
    /// A previous request has not been reflected in the content extent yet.
    InFlight,
}

/// The result of evaluating one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillOutcome {
    /// The content adapter was asked for this many items.
    Requested(NonZeroUsize),
    Skipped(SkipReason),
}

impl FillOutcome {
    pub fn quantity(&self) -> Option<NonZeroUsize> {
        match self {
            Self::Requested(n) => Some(*n),
            Self::Skipped(_) => None,
        }
    }

    pub fn is_requested(&self) -> bool {
        matches!(self, Self::Requested(_))
    }
}

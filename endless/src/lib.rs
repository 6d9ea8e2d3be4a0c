//! A headless endless-scroll engine.
//!
//! For adapter-level utilities (event dispatch, a simulated list surface), see the
//! `endless-adapter` crate.
//!
//! This crate decides *when* a scrollable list needs more content and *how much* to ask for:
//! it tracks the signed distance from the visible edge to the end of the loaded content on both
//! axes, estimates how large an item is from the rendered items (or a configured fallback, or
//! the viewport), and turns threshold crossings and layout changes into fill requests.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - content extent, scroll offset and viewport extent per axis ([`ScrollHost`])
//! - the extents of the currently rendered items
//! - a [`ContentAdapter`] that appends items when asked
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod estimator;
mod host;
mod metrics;
mod options;
pub mod planner;
mod state;
mod threshold;
mod types;


pub use controller::{AxisOutcomes, EndlessController};
pub use error::{ConfigurationError, Result};
pub use estimator::ItemSizeEstimator;
pub use host::{ContentAdapter, ListAdapter, ScrollHost};
pub use metrics::ScrollMetrics;
pub use options::EndlessOptions;
pub use state::{EndlessState, Lifecycle};
pub use threshold::{axis_past_threshold, is_past_threshold};
pub use types::{Axis, AxisMeasurements, AxisPair, FillOutcome, SkipReason};

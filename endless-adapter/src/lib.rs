//! Adapter utilities for the `endless` crate.
//!
//! The `endless` crate is UI-agnostic and focuses on the threshold and fill-quantity math. This
//! crate provides small, framework-neutral helpers commonly needed by embeddings:
//!
//! - An ordered, single-threaded event dispatcher with subscription-gated scroll delivery
//! - A queueing content adapter
//! - A headless simulated list surface (useful for tests and demos)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dispatcher;
mod event;
mod fill;
mod sim;


pub use dispatcher::Dispatcher;
pub use event::HostEvent;
pub use fill::FillQueue;
pub use sim::SimulatedList;

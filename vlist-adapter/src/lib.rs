//! Host glue for the `vlist` crate.
//!
//! The `vlist` crate is headless: it draws through a [`vlist::Surface`], polls a
//! [`vlist::Input`] and reads items from a [`vlist::DataSource`]. This crate provides small,
//! framework-neutral implementations of those seams:
//!
//! - [`VecSource`]: a vector-backed source that can grow (logs, chat) or shrink
//! - [`RecordingSurface`]: records draw commands for tests, snapshots or replay
//! - [`FrameInput`] / [`InputTracker`]: per-frame input snapshots with press/release edges
//! - [`TextRow`]: a wrapped text item with fixed-advance glyph metrics
//! - [`ListView`]: owns scroll state, scroller and source for one view
//!
//! This crate is intentionally framework-agnostic (no windowing or GPU bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod input;
mod row;
mod source;
mod surface;
mod view;

#[cfg(test)]
mod tests;

pub use input::{FrameInput, InputTracker};
pub use row::TextRow;
pub use source::VecSource;
pub use surface::{DrawCommand, RecordingSurface};
pub use view::ListView;

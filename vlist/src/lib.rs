//! A headless virtualized-list engine.
//!
//! Renders very large (or unbounded, still-growing) collections of variably-sized items inside
//! a fixed viewport without measuring the whole collection up front:
//!
//! - [`WindowCache`]: a bounded, contiguous window of fetched items with jump-aware refills.
//! - [`ScrollState`]: the caller-owned scroll position (first item + sub-item offset), backed by
//!   a ledger of measured heights.
//! - Scroll algorithms ([`ScrollState::scroll_by`], [`ScrollState::scroll_to_index`]) shared by
//!   wheel input and scrollbar drags.
//! - [`Scroller`] / [`virtualized_list`]: the per-frame paint, input and scrollbar pass.
//!
//! Drawing, input polling and item layout are host services, reached through the [`Surface`],
//! [`Input`] and [`ItemView`] traits. For ready-made sources and a recording surface, see the
//! `vlist-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod fenwick;
mod input;
mod item;
mod ledger;
mod options;
mod scroll;
mod scrollbar;
mod scroller;
mod source;
mod state;
mod types;
mod window;


pub use input::{Input, NoInput};
pub use item::{ItemView, LayoutPass, Surface};
pub use options::{ListOptions, ScrollContext, ScrollbarStyle};
pub use scroll::Measurer;
pub use scrollbar::{scrollbar, scrollbar_with, thumb_geometry};
pub use scroller::{FrameCx, ListResponse, Scroller, virtualized_list};
pub use source::{DataSource, FnSource};
pub use state::{ScrollSnapshot, ScrollState};
pub use types::{Align, Color, ItemHandle, Point, Rect, ThumbGeometry};
pub use window::{CacheStats, WindowCache};

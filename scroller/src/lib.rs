//! A headless positioning and navigation engine for variable-height virtual lists.
//!
//! For a controller that wires everything to one list, see the `scroller-adapter` crate.
//!
//! This crate covers the geometry a virtual list needs once items have been measured: prefix sums
//! over item heights, the visible pixel range in container or page scroll mode, scroll target
//! resolution, listener bookkeeping, programmatic scrolling that outlasts late layout changes, and
//! a guard against scroll containers that do not scroll.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - an [`Environment`] (element tree, geometry, listener registration)
//! - a [`Scheduler`] (next tick, animation frames, timers)
//! - measured item heights, fed into a [`HeightCache`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod env;
mod error;
mod guard;
mod height_index;
mod key;
mod listeners;
mod navigator;
mod options;
mod scheduler;
mod scroll_state;
mod target;
mod types;


pub use cache::HeightCache;
pub use env::Environment;
pub use error::{Error, Result};
pub use guard::OverrenderGuard;
pub use height_index::{
    HeightEntry, HeightIndex, HeightInputs, OffsetTable, Slot, resolve_height,
};
pub use listeners::ListenerLifecycle;
pub use navigator::{BOTTOM_SENTINEL, SETTLE_DELAY_MS, ScrollNavigator};
pub use options::{
    DEFAULT_BUFFER, DEFAULT_ITEMS_LIMIT, HeightSelector, ItemFields, KeySelector, ScrollerConfig,
    TypeSelector,
};
pub use scheduler::{ManualScheduler, Scheduler, Task};
pub use scroll_state::{container_scroll_state, page_scroll_state, read_scroll_state};
pub use target::{resolve_scroll_target, scroll_parent};
pub use types::{
    BoundingRect, ListenerKind, ListenerOptions, NodeRole, Overflow, OverflowStyle, ScrollMode,
    ScrollState, ScrollTarget,
};

#[doc(hidden)]
pub use key::KeyCacheKey;

//! Adapter utilities for the `scroller` crate.
//!
//! The `scroller` crate provides the individual pieces (height index, scroll state, target
//! resolution, listeners, navigation, overrender guard). This crate composes them into a single
//! framework-neutral [`Scroller`] controller that a UI binding can own per list:
//!
//! - geometry memoized over the item list, measured heights and config
//! - mount/teardown lifecycle with page-mode listener management
//! - programmatic scrolling with settle retries
//!
//! This crate is intentionally framework-agnostic (no DOM or widget toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;


pub use controller::Scroller;

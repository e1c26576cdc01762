//! Hardware-independent core library for tristack
//!
//! This crate contains the platform-agnostic logic for a vertical stack of
//! alternating left/right-pointing triangular buttons: the layout geometry
//! and hit-testing, the touch-driven widget, its styling and its
//! configuration.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod geometry;
pub mod ui;

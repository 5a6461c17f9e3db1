//! Haptic pattern primitives for Pulsekit
//!
//! This crate provides the event and pattern value types shared by the
//! engine and presentation layers, plus the authored effect catalog
//! ("pulse", "hug", "heartbeat", ...). Everything here is pure data:
//! no device access, no I/O.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod effects;
pub mod event;

pub use effects::*;
pub use event::*;

//! Haptic pattern engine for Pulsekit
//!
//! This crate owns the handle to the platform haptic actuator and turns
//! catalog patterns into playback. The actuator itself is an injected
//! capability ([`ports::HapticActuator`]); this crate contributes the
//! lifecycle state machine around it (restart-on-play, the platform
//! stop/reset notifications) and the error taxonomy playback failures
//! are reported through.
//!
//! Playback is fire-and-forget: a [`engine::PatternEngine::play`] call
//! returns as soon as the device has accepted the pattern, and nothing
//! here queues, serializes, or cancels overlapping submissions. Failures
//! are surfaced to the caller and logged, never escalated.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod engine;
pub mod error;
pub mod ports;

pub use engine::{EngineState, PatternEngine};
pub use error::{DeviceError, DeviceResult, PlaybackError, PlaybackResult};
pub use ports::{
    ActuatorError, ActuatorResult, CompiledPatternId, HapticActuator, PlayerId, ResetHandler,
    StopReason, StoppedHandler,
};

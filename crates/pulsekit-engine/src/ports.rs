//! Capability port for the platform haptic actuator.
//!
//! The actuator is a host-provided collaborator with a callback-based
//! notification model. The engine talks to it exclusively through
//! [`HapticActuator`]; what drives the physical motor (or a console
//! stand-in) is the implementor's business.

use std::fmt;

use pulsekit_pattern::HapticPattern;
use serde::{Deserialize, Serialize};

/// Opaque token for a pattern the device has compiled into its native
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompiledPatternId(pub u64);

/// Opaque token for a playback player bound to one compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Why the platform stopped the engine.
///
/// Informational only; no transition depends on the specific reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The application moved to the background.
    ApplicationSuspended,
    /// The platform reclaimed an idle engine.
    IdleTimeout,
    /// A system interruption (call, alarm) preempted the actuator.
    SystemInterrupt,
    /// The engine handle was torn down by the platform.
    EngineDestroyed,
    /// The platform gave no usable reason.
    Unknown,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StopReason::ApplicationSuspended => "application suspended",
            StopReason::IdleTimeout => "idle timeout",
            StopReason::SystemInterrupt => "system interrupt",
            StopReason::EngineDestroyed => "engine destroyed",
            StopReason::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Driver-level failure reported by the actuator.
///
/// The engine maps these into its own taxonomy at each call site, so a
/// message is all the port needs to carry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ActuatorError(pub String);

impl ActuatorError {
    /// Create a driver error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        ActuatorError(message.into())
    }
}

/// A specialized `Result` for actuator driver calls.
pub type ActuatorResult<T> = Result<T, ActuatorError>;

/// Callback invoked when the platform stops the engine.
///
/// May be invoked from any thread.
pub type StoppedHandler = Box<dyn Fn(StopReason) + Send + Sync>;

/// Callback invoked when the platform asks clients to restart the
/// engine and rebuild their players.
///
/// May be invoked from any thread.
pub type ResetHandler = Box<dyn Fn() + Send + Sync>;

/// The platform haptic capability.
///
/// Mirrors the shape of a native haptic engine API: capability probe,
/// engine start, pattern compilation, player creation and start, plus
/// the two notification subscription points. Implementations do not need
/// to be internally synchronized; the engine serializes access behind a
/// mutex.
pub trait HapticActuator: Send {
    /// Whether the hardware reports a haptic capability at all.
    fn supports_haptics(&self) -> bool;

    /// Start (or restart) the underlying actuator driver.
    fn start(&mut self) -> ActuatorResult<()>;

    /// Compile an event list into the device-native representation.
    ///
    /// An implementation must accept any pattern whose values respect
    /// the documented event invariants; a rejection here is treated as a
    /// programming-error signal by the engine.
    fn compile(&mut self, pattern: &HapticPattern) -> ActuatorResult<CompiledPatternId>;

    /// Create a player for a previously compiled pattern.
    fn make_player(&mut self, pattern: CompiledPatternId) -> ActuatorResult<PlayerId>;

    /// Begin playback `at_time` seconds from now (0.0 = immediately).
    fn start_player(&mut self, player: PlayerId, at_time: f32) -> ActuatorResult<()>;

    /// Register the stop notification callback, replacing any previous
    /// one.
    fn set_stopped_handler(&mut self, handler: StoppedHandler);

    /// Register the reset notification callback, replacing any previous
    /// one.
    fn set_reset_handler(&mut self, handler: ResetHandler);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::IdleTimeout.to_string(), "idle timeout");
        assert_eq!(StopReason::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_actuator_error_message() {
        let err = ActuatorError::new("driver busy");
        assert_eq!(err.to_string(), "driver busy");
    }

    #[test]
    fn test_token_equality() {
        assert_eq!(CompiledPatternId(7), CompiledPatternId(7));
        assert_ne!(PlayerId(1), PlayerId(2));
    }
}

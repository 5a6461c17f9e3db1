//! Engine and playback error types.
//!
//! Two small taxonomies: [`DeviceError`] for opening the engine and
//! [`PlaybackError`] for individual play requests. Everything here is
//! reported to the caller and logged; none of it ever terminates the
//! process.

/// Errors opening the haptic engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The hardware reports no haptic capability. Terminal for the
    /// process: every subsequent play request becomes
    /// [`PlaybackError::DeviceUnavailable`].
    #[error("haptics not supported on this device")]
    UnsupportedHardware,

    /// The actuator driver refused to start. Transient; a later open may
    /// succeed.
    #[error("haptic engine failed to start: {0}")]
    EngineStartFailure(String),
}

impl DeviceError {
    /// Create a start failure from a driver message.
    pub fn start_failure(message: impl Into<String>) -> Self {
        DeviceError::EngineStartFailure(message.into())
    }

    /// Whether this failure permanently rules out haptics for the
    /// process.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeviceError::UnsupportedHardware)
    }
}

/// Errors from a single play request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// No live engine handle exists (never opened, closed, or the
    /// hardware is unsupported).
    #[error("haptic engine is unavailable")]
    DeviceUnavailable,

    /// The device rejected the event list. Values are authored, so this
    /// signals a programming error rather than bad input.
    #[error("haptic pattern failed to compile: {0}")]
    PatternCompile(String),

    /// The device refused to start playback, or refused to restart
    /// after a platform stop. Transient; invoking the effect again
    /// retries.
    #[error("haptic playback failed to start: {0}")]
    PlaybackStart(String),
}

impl PlaybackError {
    /// Create a compile error from a driver message.
    pub fn compile(message: impl Into<String>) -> Self {
        PlaybackError::PatternCompile(message.into())
    }

    /// Create a playback start error from a driver message.
    pub fn start(message: impl Into<String>) -> Self {
        PlaybackError::PlaybackStart(message.into())
    }

    /// Whether invoking the effect again might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PlaybackError::PlaybackStart(_))
    }
}

/// A specialized `Result` for engine lifecycle operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// A specialized `Result` for play requests.
pub type PlaybackResult<T> = Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_hardware_is_terminal() {
        assert!(DeviceError::UnsupportedHardware.is_terminal());
        assert!(!DeviceError::start_failure("busy").is_terminal());
    }

    #[test]
    fn test_playback_start_is_retryable() {
        assert!(PlaybackError::start("resource exhausted").is_retryable());
        assert!(!PlaybackError::compile("bad parameter id").is_retryable());
        assert!(!PlaybackError::DeviceUnavailable.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = PlaybackError::compile("malformed parameter");
        assert!(err.to_string().contains("malformed parameter"));

        let err = DeviceError::start_failure("driver timeout");
        assert!(err.to_string().contains("driver timeout"));
    }

    #[test]
    fn test_errors_are_std_error() {
        let device: &dyn std::error::Error = &DeviceError::UnsupportedHardware;
        let playback: &dyn std::error::Error = &PlaybackError::DeviceUnavailable;
        assert!(!device.to_string().is_empty());
        assert!(!playback.to_string().is_empty());
    }
}

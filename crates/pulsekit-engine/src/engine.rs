//! The pattern engine and its lifecycle state machine.
//!
//! [`PatternEngine`] owns the actuator handle for the whole process.
//! The interesting part is the small state machine around platform stop
//! and reset notifications: a stopped engine restarts opportunistically
//! on the next play call, and a failed restart is reported without ever
//! becoming terminal.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use pulsekit_pattern::{HapticPattern, NamedEffect, effects};

use crate::error::{DeviceError, DeviceResult, PlaybackError, PlaybackResult};
use crate::ports::{HapticActuator, StopReason};

/// Lifecycle state of the actuator handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EngineState {
    /// No live handle; [`PatternEngine::open`] has not succeeded yet, or
    /// [`PatternEngine::close`] dropped the handle.
    #[default]
    Uninitialized,
    /// The actuator driver is started and accepting patterns.
    Running,
    /// The platform stopped the engine; the next play restarts it.
    Stopped,
    /// The hardware reports no haptic capability. Terminal.
    Failed,
}

struct EngineInner {
    /// Exclusive access to the platform handle. Notification handlers
    /// and foreground play calls serialize through this lock.
    actuator: Mutex<Box<dyn HapticActuator>>,
    state: Mutex<EngineState>,
}

impl EngineInner {
    fn on_platform_stop(&self, reason: StopReason) {
        warn!(%reason, "haptic engine stopped by platform");
        let mut state = self.state.lock();
        if *state == EngineState::Running {
            *state = EngineState::Stopped;
        }
    }

    fn on_platform_reset(&self) {
        // Lock order matches play: actuator, then state.
        let mut actuator = self.actuator.lock();
        let state = *self.state.lock();
        if state != EngineState::Running && state != EngineState::Stopped {
            // A closed or failed engine stays down until the next open.
            debug!(?state, "ignoring platform reset notification");
            return;
        }
        info!("haptic engine reset requested, restarting");
        match actuator.start() {
            Ok(()) => {
                *self.state.lock() = EngineState::Running;
                info!("haptic engine restarted after reset");
            }
            // Reported only; the next play call retries.
            Err(e) => warn!(error = %e, "failed to restart haptic engine after reset"),
        }
    }
}

/// Owner of the platform haptic actuator.
///
/// Construct with [`PatternEngine::new`], bring the hardware up with
/// [`PatternEngine::open`], then fire effects. Every playback operation
/// is fire-and-forget: the result only says whether the device accepted
/// the pattern.
///
/// # Examples
///
/// ```no_run
/// use pulsekit_engine::PatternEngine;
/// # fn actuator() -> Box<dyn pulsekit_engine::HapticActuator> { unreachable!() }
///
/// let engine = PatternEngine::new(actuator());
/// engine.open()?;
/// engine.hug()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PatternEngine {
    inner: Arc<EngineInner>,
}

impl PatternEngine {
    /// Wraps an actuator. The engine starts `Uninitialized`; call
    /// [`open`](Self::open) before playing.
    pub fn new(actuator: Box<dyn HapticActuator>) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                actuator: Mutex::new(actuator),
                state: Mutex::new(EngineState::Uninitialized),
            }),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        *self.inner.state.lock()
    }

    /// Probes hardware capability, registers the stop/reset handlers,
    /// and starts the actuator driver.
    ///
    /// `UnsupportedHardware` is terminal: the engine moves to
    /// [`EngineState::Failed`] and every later play reports
    /// [`PlaybackError::DeviceUnavailable`]. A start failure is
    /// transient and leaves the engine `Uninitialized` so a later open
    /// can retry.
    pub fn open(&self) -> DeviceResult<()> {
        let mut actuator = self.inner.actuator.lock();

        if !actuator.supports_haptics() {
            error!("haptics not supported on this hardware");
            *self.inner.state.lock() = EngineState::Failed;
            return Err(DeviceError::UnsupportedHardware);
        }

        // The handlers hold a weak reference: the actuator owns the
        // callbacks and the engine owns the actuator.
        let weak = Arc::downgrade(&self.inner);
        actuator.set_stopped_handler(Box::new({
            let weak: Weak<EngineInner> = weak.clone();
            move |reason| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_platform_stop(reason);
                }
            }
        }));
        actuator.set_reset_handler(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_platform_reset();
            }
        }));

        if let Err(e) = actuator.start() {
            warn!(error = %e, "haptic engine failed to start");
            return Err(DeviceError::start_failure(e.to_string()));
        }

        *self.inner.state.lock() = EngineState::Running;
        info!("haptic engine running");
        Ok(())
    }

    /// Drops back to `Uninitialized`. Subsequent plays report
    /// [`PlaybackError::DeviceUnavailable`] until the engine is opened
    /// again.
    pub fn close(&self) {
        // Hold the actuator lock so an in-flight play finishes first.
        let _actuator = self.inner.actuator.lock();
        *self.inner.state.lock() = EngineState::Uninitialized;
        info!("haptic engine closed");
    }

    /// Submits a pattern for immediate playback.
    ///
    /// An empty pattern is a no-op and never reaches the device. If the
    /// platform stopped the engine, exactly one restart attempt is made
    /// before compiling; a failed restart reports
    /// [`PlaybackError::PlaybackStart`] and the pattern is not
    /// submitted.
    pub fn play(&self, pattern: &HapticPattern) -> PlaybackResult<()> {
        if pattern.is_empty() {
            debug!("empty pattern, nothing to play");
            return Ok(());
        }

        let mut actuator = self.inner.actuator.lock();

        let state = *self.inner.state.lock();
        match state {
            EngineState::Uninitialized | EngineState::Failed => {
                debug!(?state, "haptic engine is unavailable");
                return Err(PlaybackError::DeviceUnavailable);
            }
            EngineState::Stopped => {
                if let Err(e) = actuator.start() {
                    warn!(error = %e, "failed to restart haptic engine");
                    return Err(PlaybackError::start(e.to_string()));
                }
                *self.inner.state.lock() = EngineState::Running;
                info!("haptic engine restarted");
            }
            EngineState::Running => {}
        }

        let compiled = actuator
            .compile(pattern)
            .map_err(|e| PlaybackError::compile(e.to_string()))?;
        let player = actuator
            .make_player(compiled)
            .map_err(|e| PlaybackError::start(e.to_string()))?;
        actuator
            .start_player(player, 0.0)
            .map_err(|e| PlaybackError::start(e.to_string()))?;

        debug!(
            events = pattern.len(),
            duration_s = pattern.total_duration(),
            "pattern submitted"
        );
        Ok(())
    }

    /// Plays one catalog entry by identity.
    pub fn play_named(&self, effect: NamedEffect) -> PlaybackResult<()> {
        debug!(effect = %effect, "playing named effect");
        self.play(&effect.pattern())
    }

    /// A single sustained vibration with the given hold length and
    /// strength.
    pub fn continuous(&self, duration: f32, intensity: f32) -> PlaybackResult<()> {
        self.play(&effects::continuous(duration, intensity))
    }

    /// Ten taps of steadily growing strength.
    pub fn ramp_up(&self) -> PlaybackResult<()> {
        self.play(&effects::ramp_up())
    }

    /// Hard, crisp taps for just under a second.
    pub fn pulse(&self) -> PlaybackResult<()> {
        self.play(&effects::pulse())
    }

    /// One sharp impact that decays over two echoes.
    pub fn explosion(&self) -> PlaybackResult<()> {
        self.play(&effects::explosion())
    }

    /// The regular heartbeat (identical to [`soft_heartbeat`](Self::soft_heartbeat)).
    pub fn heartbeat(&self) -> PlaybackResult<()> {
        self.play(&effects::heartbeat())
    }

    /// A gentle lub-dub.
    pub fn soft_heartbeat(&self) -> PlaybackResult<()> {
        self.play(&effects::soft_heartbeat())
    }

    /// A long, low squeeze with a light release tap.
    pub fn hug(&self) -> PlaybackResult<()> {
        self.play(&effects::hug())
    }

    /// A faint two-second glow.
    pub fn warmth(&self) -> PlaybackResult<()> {
        self.play(&effects::warmth())
    }

    /// Quick giggly taps for just under a second.
    pub fn laughter(&self) -> PlaybackResult<()> {
        self.play(&effects::laughter())
    }

    /// Two slow, wistful taps a second apart.
    pub fn missing_you(&self) -> PlaybackResult<()> {
        self.play(&effects::missing_you())
    }
}

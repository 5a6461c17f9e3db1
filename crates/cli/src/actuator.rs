//! Console stand-in for the platform haptic actuator.
//!
//! Desktop hosts have no haptic hardware, so the demo binary injects
//! this implementation: patterns compile into a stored table, and
//! "playback" walks the timeline in real time, emitting one log line
//! per actuation. The two notification handlers are accepted and kept,
//! but there is no platform here that would ever fire them.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use pulsekit_engine::{
    ActuatorError, ActuatorResult, CompiledPatternId, HapticActuator, PlayerId, ResetHandler,
    StoppedHandler,
};
use pulsekit_pattern::{EventKind, HapticPattern};
use tracing::info;

pub struct ConsoleActuator {
    compiled: HashMap<u64, HapticPattern>,
    next_id: u64,
    _stopped_handler: Option<StoppedHandler>,
    _reset_handler: Option<ResetHandler>,
}

impl ConsoleActuator {
    pub fn new() -> Self {
        Self {
            compiled: HashMap::new(),
            next_id: 0,
            _stopped_handler: None,
            _reset_handler: None,
        }
    }
}

impl Default for ConsoleActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticActuator for ConsoleActuator {
    fn supports_haptics(&self) -> bool {
        true
    }

    fn start(&mut self) -> ActuatorResult<()> {
        Ok(())
    }

    fn compile(&mut self, pattern: &HapticPattern) -> ActuatorResult<CompiledPatternId> {
        let id = self.next_id;
        self.next_id += 1;
        self.compiled.insert(id, pattern.clone());
        Ok(CompiledPatternId(id))
    }

    fn make_player(&mut self, pattern: CompiledPatternId) -> ActuatorResult<PlayerId> {
        if self.compiled.contains_key(&pattern.0) {
            Ok(PlayerId(pattern.0))
        } else {
            Err(ActuatorError::new("unknown compiled pattern"))
        }
    }

    fn start_player(&mut self, player: PlayerId, at_time: f32) -> ActuatorResult<()> {
        let pattern = self
            .compiled
            .get(&player.0)
            .cloned()
            .ok_or_else(|| ActuatorError::new("unknown player"))?;

        if at_time > 0.0 {
            thread::sleep(Duration::from_secs_f32(at_time));
        }

        let mut clock = 0.0f32;
        for event in pattern.events() {
            if event.relative_time > clock {
                thread::sleep(Duration::from_secs_f32(event.relative_time - clock));
                clock = event.relative_time;
            }
            match event.kind {
                EventKind::Transient => info!(
                    t = event.relative_time,
                    intensity = event.intensity,
                    sharpness = event.sharpness,
                    "tap"
                ),
                EventKind::Continuous => info!(
                    t = event.relative_time,
                    duration_s = event.duration,
                    intensity = event.intensity,
                    sharpness = event.sharpness,
                    "hold"
                ),
            }
        }

        // Let a trailing hold play out before reporting completion.
        let tail = pattern.total_duration() - clock;
        if tail > 0.0 {
            thread::sleep(Duration::from_secs_f32(tail));
        }
        Ok(())
    }

    fn set_stopped_handler(&mut self, handler: StoppedHandler) {
        self._stopped_handler = Some(handler);
    }

    fn set_reset_handler(&mut self, handler: ResetHandler) {
        self._reset_handler = Some(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsekit_pattern::HapticEvent;

    #[test]
    fn test_compile_then_play() {
        let mut actuator = ConsoleActuator::new();
        // Events at t=0 only, so the walk does not sleep.
        let pattern = HapticPattern::new(vec![HapticEvent::transient(0.0, 0.9, 1.0)]);

        let compiled = actuator.compile(&pattern);
        assert_eq!(compiled, Ok(CompiledPatternId(0)));

        let player = actuator.make_player(CompiledPatternId(0));
        assert_eq!(player, Ok(PlayerId(0)));

        assert_eq!(actuator.start_player(PlayerId(0), 0.0), Ok(()));
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        let mut actuator = ConsoleActuator::new();
        assert!(actuator.make_player(CompiledPatternId(42)).is_err());
        assert!(actuator.start_player(PlayerId(42), 0.0).is_err());
    }

    #[test]
    fn test_ids_are_distinct_per_compile() {
        let mut actuator = ConsoleActuator::new();
        let pattern = HapticPattern::new(vec![HapticEvent::transient(0.0, 0.5, 0.5)]);
        let first = actuator.compile(&pattern);
        let second = actuator.compile(&pattern);
        assert_ne!(first, second);
    }
}

//! Haptic event and pattern type definitions

use serde::{Deserialize, Serialize};

/// Actuation style of a single haptic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventKind {
    /// Instantaneous pulse with no duration.
    #[default]
    Transient,
    /// Sustained actuation held for the event's duration.
    Continuous,
}

/// One discrete or continuous actuation instruction.
///
/// Events are immutable once constructed. Times are seconds relative to
/// the start of the owning pattern. Intensity and sharpness are
/// normalized 0.0–1.0 and handed to the device exactly as authored; the
/// engine does not re-validate them.
///
/// # Examples
///
/// ```
/// use pulsekit_pattern::{EventKind, HapticEvent};
///
/// let tap = HapticEvent::transient(0.0, 0.9, 1.0);
/// assert_eq!(tap.kind, EventKind::Transient);
/// assert_eq!(tap.duration, 0.0);
///
/// let hold = HapticEvent::continuous(0.0, 1.5, 0.3, 0.2);
/// assert_eq!(hold.kind, EventKind::Continuous);
/// assert_eq!(hold.end_time(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HapticEvent {
    /// Transient pulse or continuous hold.
    pub kind: EventKind,
    /// Start offset in seconds from pattern start.
    pub relative_time: f32,
    /// Hold duration in seconds. Always `0.0` for transient events.
    pub duration: f32,
    /// Perceived strength of the actuation.
    pub intensity: f32,
    /// Perceived crispness/frequency character of the actuation.
    pub sharpness: f32,
}

impl HapticEvent {
    /// Creates an instantaneous pulse at `relative_time`.
    pub fn transient(relative_time: f32, intensity: f32, sharpness: f32) -> Self {
        Self {
            kind: EventKind::Transient,
            relative_time,
            duration: 0.0,
            intensity,
            sharpness,
        }
    }

    /// Creates a sustained actuation held for `duration` seconds.
    pub fn continuous(relative_time: f32, duration: f32, intensity: f32, sharpness: f32) -> Self {
        Self {
            kind: EventKind::Continuous,
            relative_time,
            duration,
            intensity,
            sharpness,
        }
    }

    /// Whether this event is an instantaneous pulse.
    pub fn is_transient(&self) -> bool {
        self.kind == EventKind::Transient
    }

    /// The time at which this event is over, relative to pattern start.
    pub fn end_time(&self) -> f32 {
        self.relative_time + self.duration
    }
}

/// An ordered sequence of haptic events defining one effect.
///
/// A pattern has no identity beyond its contents and is constructed
/// fresh per playback request. Events are conventionally increasing in
/// `relative_time` but the device does not require it.
///
/// # Examples
///
/// ```
/// use pulsekit_pattern::{HapticEvent, HapticPattern};
///
/// let pattern = HapticPattern::new(vec![
///     HapticEvent::transient(0.0, 0.5, 0.3),
///     HapticEvent::transient(0.25, 0.4, 0.2),
/// ]);
/// assert_eq!(pattern.len(), 2);
/// assert!(!pattern.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HapticPattern {
    events: Vec<HapticEvent>,
}

impl HapticPattern {
    /// Creates a pattern from an ordered event list.
    pub fn new(events: Vec<HapticEvent>) -> Self {
        Self { events }
    }

    /// Creates a pattern with no events. Playing it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The events in playback order.
    pub fn events(&self) -> &[HapticEvent] {
        &self.events
    }

    /// Number of events in the pattern.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the pattern contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Wall-clock length of the pattern: the latest event end time, or
    /// `0.0` for an empty pattern.
    pub fn total_duration(&self) -> f32 {
        self.events
            .iter()
            .map(HapticEvent::end_time)
            .fold(0.0, f32::max)
    }
}

impl From<Vec<HapticEvent>> for HapticPattern {
    fn from(events: Vec<HapticEvent>) -> Self {
        Self::new(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_has_zero_duration() {
        let event = HapticEvent::transient(0.5, 0.9, 1.0);
        assert_eq!(event.kind, EventKind::Transient);
        assert_eq!(event.duration, 0.0);
        assert_eq!(event.end_time(), 0.5);
        assert!(event.is_transient());
    }

    #[test]
    fn test_continuous_carries_duration() {
        let event = HapticEvent::continuous(0.0, 2.0, 0.2, 0.1);
        assert_eq!(event.kind, EventKind::Continuous);
        assert_eq!(event.duration, 2.0);
        assert_eq!(event.end_time(), 2.0);
        assert!(!event.is_transient());
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = HapticPattern::empty();
        assert!(pattern.is_empty());
        assert_eq!(pattern.len(), 0);
        assert_eq!(pattern.total_duration(), 0.0);
    }

    #[test]
    fn test_total_duration_spans_latest_event() {
        let pattern = HapticPattern::new(vec![
            HapticEvent::continuous(0.0, 1.5, 0.3, 0.2),
            HapticEvent::transient(1.6, 0.2, 0.1),
        ]);
        assert_eq!(pattern.total_duration(), 1.6);
    }

    #[test]
    fn test_total_duration_includes_hold_tail() {
        let pattern = HapticPattern::new(vec![
            HapticEvent::transient(0.0, 0.5, 0.5),
            HapticEvent::continuous(0.5, 2.0, 0.2, 0.1),
        ]);
        assert_eq!(pattern.total_duration(), 2.5);
    }

    #[test]
    fn test_pattern_from_vec() {
        let events = vec![HapticEvent::transient(0.0, 0.65, 0.5)];
        let pattern = HapticPattern::from(events.clone());
        assert_eq!(pattern.events(), events.as_slice());
    }

    #[test]
    fn test_event_kind_default_is_transient() {
        assert_eq!(EventKind::default(), EventKind::Transient);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = HapticEvent::continuous(0.0, 1.5, 0.3, 0.2);
        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => panic!("serialize failed: {e}"),
        };
        let back: Result<HapticEvent, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(event));
    }
}

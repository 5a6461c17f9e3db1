//! The authored effect catalog
//!
//! Each function reproduces a hand-tuned event table. The tables are the
//! product, not a starting point for composition: there is deliberately
//! no builder or authoring format here, and callers get a fresh
//! [`HapticPattern`] per invocation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::event::{HapticEvent, HapticPattern};

/// Default hold length for [`continuous`] when played from the catalog.
pub const DEFAULT_CONTINUOUS_DURATION: f32 = 1.0;
/// Default intensity for [`continuous`] when played from the catalog.
pub const DEFAULT_CONTINUOUS_INTENSITY: f32 = 0.5;

/// A single sustained vibration.
///
/// Sharpness is fixed at 0.5 regardless of the parameters.
///
/// # Examples
///
/// ```
/// use pulsekit_pattern::effects;
///
/// let pattern = effects::continuous(2.0, 0.8);
/// assert_eq!(pattern.len(), 1);
/// assert_eq!(pattern.events()[0].duration, 2.0);
/// assert_eq!(pattern.events()[0].intensity, 0.8);
/// assert_eq!(pattern.events()[0].sharpness, 0.5);
/// ```
pub fn continuous(duration: f32, intensity: f32) -> HapticPattern {
    HapticPattern::new(vec![HapticEvent::continuous(0.0, duration, intensity, 0.5)])
}

/// Ten taps of steadily growing strength, 0.1 s apart.
pub fn ramp_up() -> HapticPattern {
    let events = (0..10)
        .map(|i| HapticEvent::transient(i as f32 * 0.1, i as f32 * 0.2, i as f32 * 0.1))
        .collect();
    HapticPattern::new(events)
}

/// Hard, crisp taps every 0.2 s for just under a second.
pub fn pulse() -> HapticPattern {
    transient_train(0.2, 0.9, 1.0)
}

/// One sharp impact that decays over two echoes.
pub fn explosion() -> HapticPattern {
    HapticPattern::new(vec![
        HapticEvent::transient(0.0, 1.0, 1.0),
        HapticEvent::transient(0.1, 0.8, 0.6),
        HapticEvent::transient(0.2, 0.6, 0.3),
    ])
}

/// The regular heartbeat.
///
/// An explicit alias of [`soft_heartbeat`]: the two were authored
/// identical and must stay identical.
pub fn heartbeat() -> HapticPattern {
    soft_heartbeat()
}

/// A gentle lub-dub: two soft taps 0.25 s apart.
pub fn soft_heartbeat() -> HapticPattern {
    HapticPattern::new(vec![
        HapticEvent::transient(0.0, 0.5, 0.3),
        HapticEvent::transient(0.25, 0.4, 0.2),
    ])
}

/// A long, low squeeze with a light release tap at the end.
pub fn hug() -> HapticPattern {
    HapticPattern::new(vec![
        HapticEvent::continuous(0.0, 1.5, 0.3, 0.2),
        HapticEvent::transient(1.6, 0.2, 0.1),
    ])
}

/// A faint two-second glow.
pub fn warmth() -> HapticPattern {
    HapticPattern::new(vec![HapticEvent::continuous(0.0, 2.0, 0.2, 0.1)])
}

/// Quick giggly taps every 0.15 s for just under a second.
pub fn laughter() -> HapticPattern {
    transient_train(0.15, 0.5, 0.6)
}

/// Two slow, wistful taps a full second apart.
pub fn missing_you() -> HapticPattern {
    HapticPattern::new(vec![
        HapticEvent::transient(0.0, 0.65, 0.5),
        HapticEvent::transient(1.0, 0.5, 0.3),
    ])
}

/// Transient events at `t = i * step` while `t < 1.0`.
///
/// Times are computed from the index rather than accumulated, so the
/// event count is exact for every step size.
fn transient_train(step: f32, intensity: f32, sharpness: f32) -> HapticPattern {
    let events = (0..)
        .map(|i| i as f32 * step)
        .take_while(|t| *t < 1.0)
        .map(|t| HapticEvent::transient(t, intensity, sharpness))
        .collect();
    HapticPattern::new(events)
}

/// Catalog identity for the presentation layer.
///
/// One variant per named effect. [`NamedEffect::Continuous`] plays
/// [`continuous`] with its default parameters; callers wanting other
/// parameters use the free function directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedEffect {
    Continuous,
    RampUp,
    Pulse,
    Explosion,
    Heartbeat,
    SoftHeartbeat,
    Hug,
    Warmth,
    Laughter,
    MissingYou,
}

impl NamedEffect {
    /// Every catalog entry, in presentation order.
    pub const ALL: [NamedEffect; 10] = [
        NamedEffect::Continuous,
        NamedEffect::RampUp,
        NamedEffect::Pulse,
        NamedEffect::Explosion,
        NamedEffect::Heartbeat,
        NamedEffect::Hug,
        NamedEffect::SoftHeartbeat,
        NamedEffect::Warmth,
        NamedEffect::Laughter,
        NamedEffect::MissingYou,
    ];

    /// Stable lowercase identifier, also accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            NamedEffect::Continuous => "continuous",
            NamedEffect::RampUp => "ramp-up",
            NamedEffect::Pulse => "pulse",
            NamedEffect::Explosion => "explosion",
            NamedEffect::Heartbeat => "heartbeat",
            NamedEffect::SoftHeartbeat => "soft-heartbeat",
            NamedEffect::Hug => "hug",
            NamedEffect::Warmth => "warmth",
            NamedEffect::Laughter => "laughter",
            NamedEffect::MissingYou => "missing-you",
        }
    }

    /// Human label, as shown in the catalog listing.
    pub fn description(&self) -> &'static str {
        match self {
            NamedEffect::Continuous => "Continuous Vibration",
            NamedEffect::RampUp => "Ramp-Up Feedback",
            NamedEffect::Pulse => "Pulse Sequence",
            NamedEffect::Explosion => "Explosion / Impact",
            NamedEffect::Heartbeat => "Regular Heartbeat",
            NamedEffect::SoftHeartbeat => "Soft Heartbeat",
            NamedEffect::Hug => "Hug",
            NamedEffect::Warmth => "Warmth",
            NamedEffect::Laughter => "Laughter",
            NamedEffect::MissingYou => "Missing You",
        }
    }

    /// Builds this effect's pattern.
    pub fn pattern(&self) -> HapticPattern {
        match self {
            NamedEffect::Continuous => {
                continuous(DEFAULT_CONTINUOUS_DURATION, DEFAULT_CONTINUOUS_INTENSITY)
            }
            NamedEffect::RampUp => ramp_up(),
            NamedEffect::Pulse => pulse(),
            NamedEffect::Explosion => explosion(),
            NamedEffect::Heartbeat => heartbeat(),
            NamedEffect::SoftHeartbeat => soft_heartbeat(),
            NamedEffect::Hug => hug(),
            NamedEffect::Warmth => warmth(),
            NamedEffect::Laughter => laughter(),
            NamedEffect::MissingYou => missing_you(),
        }
    }
}

impl fmt::Display for NamedEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a catalog lookup by name that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown effect '{0}'")]
pub struct UnknownEffect(pub String);

impl FromStr for NamedEffect {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedEffect::ALL
            .into_iter()
            .find(|effect| effect.name() == s)
            .ok_or_else(|| UnknownEffect(s.to_string()))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::event::EventKind;
    use proptest::prelude::*;

    fn catalog() -> Vec<HapticPattern> {
        NamedEffect::ALL.iter().map(NamedEffect::pattern).collect()
    }

    proptest! {
        #[test]
        fn prop_continuous_preserves_parameters(
            duration in 0.01f32..=30.0,
            intensity in 0.0f32..=1.0,
        ) {
            let pattern = continuous(duration, intensity);
            prop_assert_eq!(pattern.len(), 1);
            let event = pattern.events()[0];
            prop_assert_eq!(event.kind, EventKind::Continuous);
            prop_assert_eq!(event.duration, duration);
            prop_assert_eq!(event.intensity, intensity);
            prop_assert_eq!(event.sharpness, 0.5);
            prop_assert_eq!(event.relative_time, 0.0);
        }

        #[test]
        fn prop_continuous_total_duration_is_hold_length(duration in 0.01f32..=30.0) {
            let pattern = continuous(duration, 0.5);
            prop_assert_eq!(pattern.total_duration(), duration);
        }
    }

    #[test]
    fn prop_catalog_times_non_negative_and_non_decreasing() {
        for pattern in catalog() {
            let mut last = 0.0f32;
            for event in pattern.events() {
                assert!(event.relative_time >= 0.0);
                assert!(event.relative_time >= last);
                last = event.relative_time;
            }
        }
    }

    #[test]
    fn prop_catalog_kinds_match_durations() {
        for pattern in catalog() {
            for event in pattern.events() {
                match event.kind {
                    EventKind::Transient => assert_eq!(event.duration, 0.0),
                    EventKind::Continuous => assert!(event.duration > 0.0),
                }
            }
        }
    }

    #[test]
    fn prop_catalog_never_empty() {
        for pattern in catalog() {
            assert!(!pattern.is_empty());
        }
    }
}

//! Animation driver seam
//!
//! Drawer progress is rendered by an external animation system. The
//! controller only tells it where to go and how: jump instantly, spring, or
//! run a fixed-duration timing curve.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Nominal settle time used when stepping a spring in [`SharedProgress`]
pub const SPRING_SETTLE: Duration = Duration::from_millis(500);

/// Progress of the drawer: 0.0 is fully closed, 1.0 fully open
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32")]
pub struct AnimationProgress(f32);

impl AnimationProgress {
    /// Fully closed
    pub const CLOSED: Self = Self(0.0);
    /// Fully open
    pub const OPEN: Self = Self(1.0);

    /// Create a progress value, clamped into `[0, 1]`. Non-finite input maps to 0.
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Progress for a stable open/closed state
    pub fn from_open(open: bool) -> Self {
        if open {
            Self::OPEN
        } else {
            Self::CLOSED
        }
    }

    /// Raw value
    pub fn value(self) -> f32 {
        self.0
    }

    /// Inverted progress (`1 - p`)
    pub fn inverted(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl From<f32> for AnimationProgress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<AnimationProgress> for f32 {
    fn from(progress: AnimationProgress) -> Self {
        progress.0
    }
}

/// How a value moves to its new target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "duration_ms", rename_all = "lowercase")]
pub enum Transition {
    /// Jump to the target on the next frame
    Instant,
    /// Physics spring, settles on its own schedule
    Spring,
    /// Fixed-duration timing curve
    Timed(#[serde(with = "duration_ms")] Duration),
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Animation system that owns the rendered progress value
#[cfg_attr(test, mockall::automock)]
pub trait AnimationDriver: Send + Sync {
    /// Set the value immediately, cancelling any running animation
    fn set_value(&self, value: f32);

    /// Start animating toward `target`
    fn animate_to(&self, target: f32, transition: Transition);

    /// Current rendered value
    fn value(&self) -> f32;
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

#[derive(Debug, Default)]
struct SharedProgressState {
    value: f32,
    tween: Option<Tween>,
    target: Option<(f32, Transition)>,
}

/// Frame-stepped progress value
///
/// A small stand-in for a real animation runtime: values move linearly
/// between frames as [`advance`](SharedProgress::advance) is called. Springs
/// are stepped as a [`SPRING_SETTLE`] long linear run.
#[derive(Debug, Default)]
pub struct SharedProgress {
    state: Mutex<SharedProgressState>,
}

impl SharedProgress {
    /// Create a driver resting at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance running animations by `elapsed`
    pub fn advance(&self, elapsed: Duration) {
        let mut state = self.state.lock();
        let Some(mut tween) = state.tween else {
            return;
        };

        tween.elapsed += elapsed;
        if tween.elapsed >= tween.duration {
            state.value = tween.to;
            state.tween = None;
        } else {
            let t = tween.elapsed.as_secs_f32() / tween.duration.as_secs_f32();
            state.value = tween.from + (tween.to - tween.from) * t;
            state.tween = Some(tween);
        }
    }

    /// Jump any running animation to its end
    pub fn finish(&self) {
        let mut state = self.state.lock();
        if let Some(tween) = state.tween.take() {
            state.value = tween.to;
        }
    }

    /// Whether an animation is still running
    pub fn is_animating(&self) -> bool {
        self.state.lock().tween.is_some()
    }

    /// Last requested animation target, if any
    pub fn last_target(&self) -> Option<(f32, Transition)> {
        self.state.lock().target
    }
}

impl AnimationDriver for SharedProgress {
    fn set_value(&self, value: f32) {
        let mut state = self.state.lock();
        state.value = value;
        state.tween = None;
    }

    fn animate_to(&self, target: f32, transition: Transition) {
        let mut state = self.state.lock();
        state.target = Some((target, transition));

        let duration = match transition {
            Transition::Instant => Duration::ZERO,
            Transition::Spring => SPRING_SETTLE,
            Transition::Timed(duration) => duration,
        };

        if duration.is_zero() {
            state.value = target;
            state.tween = None;
        } else {
            state.tween = Some(Tween {
                from: state.value,
                to: target,
                duration,
                elapsed: Duration::ZERO,
            });
        }
    }

    fn value(&self) -> f32 {
        self.state.lock().value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(AnimationProgress::new(1.5).value(), 1.0);
        assert_eq!(AnimationProgress::new(-0.2).value(), 0.0);
        assert_eq!(AnimationProgress::new(f32::NAN).value(), 0.0);
        assert_eq!(AnimationProgress::new(0.25).inverted().value(), 0.75);
    }

    #[test]
    fn test_deserialized_progress_is_clamped() {
        let high: AnimationProgress = serde_json::from_str("5.0").unwrap();
        assert_eq!(high, AnimationProgress::OPEN);
        assert_eq!(high.inverted(), AnimationProgress::CLOSED);

        let low: AnimationProgress = serde_json::from_str("-2.5").unwrap();
        assert_eq!(low, AnimationProgress::CLOSED);

        assert_eq!(AnimationProgress::from(f32::NAN), AnimationProgress::CLOSED);
        assert_eq!(serde_json::to_string(&AnimationProgress::new(0.5)).unwrap(), "0.5");
    }

    #[test]
    fn test_timed_animation_steps_linearly() {
        let driver = SharedProgress::new();
        driver.animate_to(1.0, Transition::Timed(Duration::from_millis(200)));
        assert!(driver.is_animating());

        driver.advance(Duration::from_millis(50));
        assert!((driver.value() - 0.25).abs() < 1e-6);

        driver.advance(Duration::from_millis(200));
        assert_eq!(driver.value(), 1.0);
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_set_value_cancels_animation() {
        let driver = SharedProgress::new();
        driver.animate_to(1.0, Transition::Spring);
        driver.set_value(0.4);
        assert!(!driver.is_animating());
        driver.advance(SPRING_SETTLE);
        assert_eq!(driver.value(), 0.4);
    }

    #[test]
    fn test_instant_transition() {
        let driver = SharedProgress::new();
        driver.animate_to(1.0, Transition::Instant);
        assert_eq!(driver.value(), 1.0);
        assert_eq!(driver.last_target(), Some((1.0, Transition::Instant)));
    }

    #[test]
    fn test_transition_serialization() {
        let json = serde_json::to_string(&Transition::Timed(Duration::from_millis(250))).unwrap();
        assert_eq!(json, r#"{"mode":"timed","duration_ms":250}"#);
        let parsed: Transition = serde_json::from_str(r#"{"mode":"spring"}"#).unwrap();
        assert_eq!(parsed, Transition::Spring);
    }
}

//! Keyframe timelines for the ball offset
//!
//! A timeline starts at an origin value and walks through keyframes placed at
//! relative times in `[0, 1]` of the total duration. Keyframes must not
//! overlap; a gap between two keyframes holds the previous value.
//!
//! Timelines are sampled, never ticked: the presented value is a pure function
//! of the elapsed time, which is what lets an interrupted animation hand its
//! exact on-screen value to whatever takes over.

use std::time::Duration;

/// Interpolation curve applied inside each keyframe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A target value reached over a slice of the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Relative start time in `[0, 1]`
    pub start: f32,
    /// Relative duration in `[0, 1]`
    pub duration: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(start: f32, duration: f32, value: f32) -> Self {
        Self {
            start,
            duration,
            value,
        }
    }

    fn end(&self) -> f32 {
        self.start + self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    origin: f32,
    keyframes: Vec<Keyframe>,
    duration: Duration,
    easing: Easing,
}

impl Timeline {
    /// Build a keyframe timeline; keyframes are sorted by start time
    pub fn keyframes(
        origin: f32,
        duration: Duration,
        easing: Easing,
        mut keyframes: Vec<Keyframe>,
    ) -> Self {
        keyframes.sort_by(|a, b| a.start.total_cmp(&b.start));
        debug_assert!(
            keyframes.windows(2).all(|w| w[0].end() <= w[1].start + f32::EPSILON),
            "keyframes overlap"
        );
        Self {
            origin,
            keyframes,
            duration,
            easing,
        }
    }

    /// A single transition from `from` to `to`
    pub fn transition(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self::keyframes(from, duration, easing, vec![Keyframe::new(0.0, 1.0, to)])
    }

    pub fn origin(&self) -> f32 {
        self.origin
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Value the timeline rests at once finished
    pub fn final_value(&self) -> f32 {
        self.keyframes.last().map_or(self.origin, |k| k.value)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Presented value after `elapsed` time
    pub fn sample(&self, elapsed: Duration) -> f32 {
        if self.is_finished(elapsed) {
            return self.final_value();
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        let mut value = self.origin;
        for keyframe in &self.keyframes {
            if t < keyframe.start {
                break;
            }
            let local = if keyframe.duration <= 0.0 {
                1.0
            } else {
                (t - keyframe.start) / keyframe.duration
            };
            value += (keyframe.value - value) * self.easing.apply(local);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn nudge() -> Timeline {
        Timeline::keyframes(
            0.0,
            ms(1000),
            Easing::Linear,
            vec![
                Keyframe::new(0.5, 0.3, 10.0),
                Keyframe::new(0.0, 0.2, 10.0),
                Keyframe::new(0.2, 0.2, 0.0),
                Keyframe::new(0.8, 0.2, 0.0),
            ],
        )
    }

    #[test]
    fn test_keyframe_sampling() {
        let timeline = nudge();
        assert!((timeline.sample(ms(0)) - 0.0).abs() < EPS);
        assert!((timeline.sample(ms(100)) - 5.0).abs() < EPS);
        assert!((timeline.sample(ms(200)) - 10.0).abs() < EPS);
        assert!((timeline.sample(ms(300)) - 5.0).abs() < EPS);
        // Gap between 40% and 50% holds at the origin
        assert!((timeline.sample(ms(450)) - 0.0).abs() < EPS);
        assert!((timeline.sample(ms(650)) - 5.0).abs() < EPS);
        assert!((timeline.sample(ms(900)) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_finished_timeline_rests_at_final_value() {
        let timeline = nudge();
        assert!(timeline.is_finished(ms(1000)));
        assert_eq!(timeline.sample(ms(5000)), 0.0);
        assert_eq!(timeline.final_value(), 0.0);
    }

    #[test]
    fn test_ease_in_out_transition() {
        let timeline = Timeline::transition(0.0, 100.0, ms(300), Easing::EaseInOut);
        assert!((timeline.sample(ms(150)) - 50.0).abs() < 0.01);
        assert!(timeline.sample(ms(30)) < 10.0, "should start slowly");
        assert_eq!(timeline.sample(ms(300)), 100.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }
}

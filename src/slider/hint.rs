//! Idle hint timer and nudge animations
//!
//! The hint timer is the control's only repeating resource. It is a deadline
//! owned by the control, not a callback holding a reference to it, so
//! dropping the control is enough to tear it down.

use std::time::{Duration, Instant};

use super::geometry::TrackGeometry;
use super::timeline::{Easing, Keyframe, Timeline};

/// Shortest interval the timer accepts
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Repeating idle timer
#[derive(Debug, Clone, PartialEq)]
pub struct HintTimer {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl HintTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_fire: None,
        }
    }

    /// (Re)start the timer; the first firing is one interval from `now`
    ///
    /// An interval too long to represent leaves the timer disarmed.
    pub fn arm(&mut self, now: Instant) {
        self.next_fire = now.checked_add(self.interval);
        if self.next_fire.is_none() {
            tracing::warn!(
                "Hint interval {:?} overflows the clock, timer stays idle",
                self.interval
            );
        }
    }

    pub fn disarm(&mut self) {
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn next_fire(&self) -> Option<Instant> {
        self.next_fire
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_INTERVAL);
    }

    /// Whether the timer fired by `now`; firings missed while the host was not
    /// ticking collapse into one
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                let missed = (now - deadline).as_nanos() / self.interval.as_nanos();
                let periods = u32::try_from(missed + 1).unwrap_or(u32::MAX);
                self.next_fire = self
                    .interval
                    .checked_mul(periods)
                    .and_then(|skip| deadline.checked_add(skip));
                true
            }
            _ => false,
        }
    }
}

/// Forward, back, forward, back, starting and ending at `origin`
pub fn hint_timeline(
    origin: f32,
    geometry: &TrackGeometry,
    amount: f32,
    duration: Duration,
) -> Timeline {
    let forward = origin + geometry.range() * amount;
    Timeline::keyframes(
        origin,
        duration,
        Easing::Linear,
        vec![
            Keyframe::new(0.0, 0.2, forward),
            Keyframe::new(0.2, 0.2, origin),
            Keyframe::new(0.5, 0.3, forward),
            Keyframe::new(0.8, 0.2, origin),
        ],
    )
}

/// One larger nudge and back; reverses when the nudge would pass the end
pub fn tap_timeline(
    origin: f32,
    geometry: &TrackGeometry,
    amount: f32,
    duration: Duration,
) -> Timeline {
    let distance = geometry.range() * amount * 2.0;
    let mut target = origin + distance;
    if target > geometry.max_offset() {
        target = origin - distance;
    }
    let target = geometry.clamp_offset(target);
    Timeline::keyframes(
        origin,
        duration,
        Easing::Linear,
        vec![
            Keyframe::new(0.0, 0.4, target),
            Keyframe::new(0.4, 0.6, origin),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_lifecycle() {
        let start = Instant::now();
        let mut timer = HintTimer::new(Duration::from_secs(2));
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(10)));

        timer.arm(start);
        assert!(!timer.poll(start + Duration::from_millis(1999)));
        assert!(timer.poll(start + Duration::from_secs(2)));
        assert_eq!(timer.next_fire(), Some(start + Duration::from_secs(4)));

        // Missed firings collapse
        assert!(timer.poll(start + Duration::from_secs(9)));
        assert!(!timer.poll(start + Duration::from_secs(9)));
        assert_eq!(timer.next_fire(), Some(start + Duration::from_secs(10)));

        timer.disarm();
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_zero_interval_is_raised_to_minimum() {
        let start = Instant::now();
        let mut timer = HintTimer::new(Duration::ZERO);
        timer.arm(start);
        assert_eq!(timer.next_fire(), Some(start + MIN_INTERVAL));

        assert!(timer.poll(start + Duration::from_secs(60)));
        assert_eq!(
            timer.next_fire(),
            Some(start + Duration::from_secs(60) + MIN_INTERVAL)
        );

        timer.set_interval(Duration::ZERO);
        assert!(timer.poll(start + Duration::from_secs(120)));
    }

    #[test]
    fn test_huge_interval_does_not_overflow() {
        let start = Instant::now();
        let mut timer = HintTimer::new(Duration::MAX);
        timer.arm(start);
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(3600)));
    }

    #[test]
    fn test_hint_returns_to_origin() {
        let geometry = TrackGeometry::new(300.0, 60.0, 40.0);
        let origin = geometry.min_offset();
        let timeline = hint_timeline(origin, &geometry, 0.05, Duration::from_millis(1400));

        assert_eq!(timeline.final_value(), origin);
        let peak = timeline.sample(Duration::from_millis(280));
        assert!((peak - (origin + 13.0)).abs() < 1e-3, "peak was {}", peak);
    }

    #[test]
    fn test_tap_reverses_near_end() {
        let geometry = TrackGeometry::new(300.0, 60.0, 40.0);
        let duration = Duration::from_millis(1000);

        let forward = tap_timeline(geometry.min_offset(), &geometry, 0.05, duration);
        let peak = forward.sample(Duration::from_millis(400));
        assert!((peak - (geometry.min_offset() + 26.0)).abs() < 1e-3);

        let backward = tap_timeline(geometry.max_offset(), &geometry, 0.05, duration);
        let peak = backward.sample(Duration::from_millis(400));
        assert!((peak - (geometry.max_offset() - 26.0)).abs() < 1e-3);
        assert_eq!(backward.final_value(), geometry.max_offset());
    }
}

//! Observer pulse animation using iced_anim
//!
//! A dot that flashes to full intensity whenever the observer reports and
//! then fades back out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade-out duration after each pulse
const PULSE_DURATION: Duration = Duration::from_millis(450);

fn pulse_easing() -> Easing {
    Easing::EASE_OUT.with_duration(PULSE_DURATION)
}

#[derive(Debug)]
pub struct Pulse {
    animation: Animated<f32>,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new()
    }
}

impl Pulse {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, pulse_easing()),
        }
    }

    /// Jump to full intensity and start fading
    pub fn trigger(&mut self) {
        self.animation = Animated::transition(1.0, pulse_easing());
        self.animation.update(0.0.into());
    }

    /// Intensity (0.0 to 1.0)
    pub fn intensity(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame while animating
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_pulse() {
        let pulse = Pulse::new();
        assert_eq!(pulse.intensity(), 0.0);
    }

    #[test]
    fn test_trigger_starts_at_full() {
        let mut pulse = Pulse::new();
        pulse.trigger();
        // Fades from full intensity on the next ticks
        assert!(pulse.intensity() > 0.0);
    }
}

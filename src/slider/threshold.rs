//! Settle-point threshold notifications
//!
//! Thresholds sit inside `[0, 1]` so that animation overshoot and float
//! rounding still register as "at the end" or "at the start".

/// Settled progress at or above this reports [`ThresholdEvent::ReachedEnd`]
pub const REACHED_END: f32 = 0.97;

/// Settled progress at or below this reports [`ThresholdEvent::ReturnedToStart`]
pub const RETURNED_TO_START: f32 = 0.03;

/// `is_completed` band, distinct from the notification thresholds
pub const COMPLETED: f32 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdEvent {
    ReachedEnd,
    ReturnedToStart,
}

/// Band a settled progress value falls into
pub fn classify(progress: f32) -> Option<ThresholdEvent> {
    if progress >= REACHED_END {
        Some(ThresholdEvent::ReachedEnd)
    } else if progress <= RETURNED_TO_START {
        Some(ThresholdEvent::ReturnedToStart)
    } else {
        None
    }
}

/// Settled values closer than this count as the same settle point
const SAME_SETTLE: f32 = 1e-4;

/// Emits an event for every settle point that lands in a band
///
/// Settling again at exactly the previous value is silent, so repeating
/// `set_progress(1.0)` reports "reached end" once. Any other settle in the
/// band reports again.
#[derive(Debug, Default, Clone)]
pub struct ThresholdNotifier {
    last: Option<f32>,
}

impl ThresholdNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a settled progress value
    pub fn settle(&mut self, progress: f32) -> Option<ThresholdEvent> {
        let repeated = self
            .last
            .is_some_and(|last| (last - progress).abs() < SAME_SETTLE);
        self.last = Some(progress);
        if repeated { None } else { classify(progress) }
    }

    /// Forget the last settle so the next one reports afresh
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0.97), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(classify(0.969), None);
        assert_eq!(classify(0.03), Some(ThresholdEvent::ReturnedToStart));
        assert_eq!(classify(0.031), None);
        assert_eq!(classify(1.0), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(classify(0.0), Some(ThresholdEvent::ReturnedToStart));
    }

    #[test]
    fn test_repeat_settle_is_silent() {
        let mut notifier = ThresholdNotifier::new();
        assert_eq!(notifier.settle(1.0), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(notifier.settle(1.0), None);
        assert_eq!(notifier.settle(0.5), None);
        assert_eq!(notifier.settle(0.5), None);
        assert_eq!(notifier.settle(0.99), Some(ThresholdEvent::ReachedEnd));
    }

    #[test]
    fn test_every_settle_in_band_reports() {
        let mut notifier = ThresholdNotifier::new();
        assert_eq!(notifier.settle(1.0), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(notifier.settle(0.98), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(notifier.settle(0.975), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(notifier.settle(0.01), Some(ThresholdEvent::ReturnedToStart));
        assert_eq!(notifier.settle(0.0), Some(ThresholdEvent::ReturnedToStart));
    }

    #[test]
    fn test_direct_jump_between_bands() {
        let mut notifier = ThresholdNotifier::new();
        assert_eq!(notifier.settle(0.0), Some(ThresholdEvent::ReturnedToStart));
        assert_eq!(notifier.settle(1.0), Some(ThresholdEvent::ReachedEnd));
        assert_eq!(notifier.settle(0.02), Some(ThresholdEvent::ReturnedToStart));
    }

    #[test]
    fn test_reset() {
        let mut notifier = ThresholdNotifier::new();
        notifier.settle(1.0);
        notifier.reset();
        assert_eq!(notifier.settle(1.0), Some(ThresholdEvent::ReachedEnd));
    }
}

//! Observer interface for progress and threshold notifications

use std::sync::Weak;

use parking_lot::Mutex;

use super::threshold::ThresholdEvent;

/// Receives notifications from a [`DraggableBall`](super::DraggableBall)
///
/// Only `on_progress_update` is required; the threshold callbacks default to
/// doing nothing.
pub trait SliderObserver: Send + Sync {
    /// Progress changed, either continuously during a drag or at a settle point
    fn on_progress_update(&self, progress: f32);

    /// Settled at or beyond the end threshold
    fn on_reached_end(&self) {}

    /// Settled at or before the start threshold
    fn on_returned_to_start(&self) {}
}

/// Non-owning observer reference; a dropped or missing observer is a no-op
#[derive(Default)]
pub(crate) struct ObserverSlot {
    observer: Option<Weak<dyn SliderObserver>>,
}

impl ObserverSlot {
    pub fn set(&mut self, observer: Option<Weak<dyn SliderObserver>>) {
        self.observer = observer;
    }

    pub fn is_attached(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn progress(&self, progress: f32) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.on_progress_update(progress);
        }
    }

    pub fn threshold(&self, event: ThresholdEvent) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            match event {
                ThresholdEvent::ReachedEnd => observer.on_reached_end(),
                ThresholdEvent::ReturnedToStart => observer.on_returned_to_start(),
            }
        }
    }
}

/// A notification as recorded by [`EventLog`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    Progress(f32),
    ReachedEnd,
    ReturnedToStart,
}

/// Observer that queues every notification for later draining
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<SliderEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all events recorded so far, oldest first
    pub fn drain(&self) -> Vec<SliderEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl SliderObserver for EventLog {
    fn on_progress_update(&self, progress: f32) {
        self.events.lock().push(SliderEvent::Progress(progress));
    }

    fn on_reached_end(&self) {
        self.events.lock().push(SliderEvent::ReachedEnd);
    }

    fn on_returned_to_start(&self) {
        self.events.lock().push(SliderEvent::ReturnedToStart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_missing_observer_is_noop() {
        let slot = ObserverSlot::default();
        assert!(!slot.is_attached());
        slot.progress(0.5);
        slot.threshold(ThresholdEvent::ReachedEnd);
    }

    #[test]
    fn test_dropped_observer_is_noop() {
        let mut slot = ObserverSlot::default();
        let log = Arc::new(EventLog::new());
        let weak: Weak<dyn SliderObserver> = Arc::downgrade(&log) as Weak<dyn SliderObserver>;
        slot.set(Some(weak));
        assert!(slot.is_attached());

        slot.progress(0.25);
        assert_eq!(log.drain(), vec![SliderEvent::Progress(0.25)]);

        drop(log);
        assert!(!slot.is_attached());
        slot.progress(0.75);
    }

    #[test]
    fn test_threshold_dispatch() {
        let mut slot = ObserverSlot::default();
        let log = Arc::new(EventLog::new());
        slot.set(Some(Arc::downgrade(&log) as Weak<dyn SliderObserver>));

        slot.threshold(ThresholdEvent::ReturnedToStart);
        slot.threshold(ThresholdEvent::ReachedEnd);
        assert_eq!(
            log.drain(),
            vec![SliderEvent::ReturnedToStart, SliderEvent::ReachedEnd]
        );
        assert!(log.is_empty());
    }
}

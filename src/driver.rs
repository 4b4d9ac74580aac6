//! Headless frame driver
//!
//! Ticks a shared control from a tokio task for hosts without their own frame
//! loop. The handle owns the task; the task only holds the control, so
//! dropping the handle stops ticking without keeping anything else alive.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::slider::DraggableBall;

/// A control shared between the host and the driver
pub type SharedBall = Arc<Mutex<DraggableBall>>;

/// Owns a running ticker task
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stop ticking; further calls are no-ops
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a task that calls `tick` every `frame_interval`
///
/// Must be called from within a tokio runtime.
pub fn spawn_ticker(ball: SharedBall, frame_interval: Duration) -> TickerHandle {
    let frame_interval = frame_interval.max(Duration::from_millis(1));
    tracing::debug!("Starting ticker at {:?}", frame_interval);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            ball.lock().tick();
        }
    });

    TickerHandle { task: Some(task) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{AnimationKind, ManualClock, SliderConfig};

    fn shared_ball(clock: Arc<ManualClock>) -> SharedBall {
        let mut ball = DraggableBall::with_clock(SliderConfig::default(), clock);
        ball.set_track_length(300.0);
        Arc::new(Mutex::new(ball))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_drives_intro_hint() {
        let clock = Arc::new(ManualClock::new());
        let ball = shared_ball(clock.clone());
        let _ticker = spawn_ticker(ball.clone(), Duration::from_millis(16));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(ball.lock().animation_kind(), Some(AnimationKind::Hint));

        clock.advance(Duration::from_millis(1400));
        tokio::time::sleep(Duration::from_millis(20)).await;
        let ball = ball.lock();
        assert_eq!(ball.animation_kind(), None);
        assert!(ball.is_hint_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_ticking() {
        let clock = Arc::new(ManualClock::new());
        let ball = shared_ball(clock.clone());
        let mut ticker = spawn_ticker(ball.clone(), Duration::from_millis(16));
        assert!(ticker.is_running());

        ticker.stop();
        assert!(!ticker.is_running());

        ball.lock().set_progress(0.5, true);
        clock.advance(Duration::from_millis(500));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            ball.lock().animation_kind(),
            Some(AnimationKind::Programmatic),
            "nothing ticks a stopped driver"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_releases_control() {
        let clock = Arc::new(ManualClock::new());
        let ball = shared_ball(clock);
        let ticker = spawn_ticker(ball.clone(), Duration::from_millis(16));
        assert_eq!(Arc::strong_count(&ball), 2);

        drop(ticker);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(Arc::strong_count(&ball), 1);
    }
}

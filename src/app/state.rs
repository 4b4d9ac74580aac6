//! Application state definitions

use std::sync::{Arc, Weak};

use draggable_ball::slider::{
    DraggableBall, EventLog, SliderConfig, SliderEvent, SliderObserver, ThresholdEvent,
};

use super::message::Screen;
use super::presets::Preset;
use crate::ui::animation::Pulse;
use crate::ui::pages::playground::{PALETTE, TextColor};

/// Main application state
pub struct App {
    pub screen: Screen,
    pub single: BallPage,
    pub playground: PlaygroundState,
}

/// A control together with the observer that listens to it
pub struct BallPage {
    pub ball: DraggableBall,
    /// Owned here; the control only holds a weak reference
    events: Arc<EventLog>,
    /// Last progress reported by the observer
    pub progress: f32,
    pub last_threshold: Option<ThresholdEvent>,
}

impl BallPage {
    pub fn new(config: SliderConfig) -> Self {
        let mut ball = DraggableBall::new(config);
        let events = Arc::new(EventLog::new());
        ball.set_observer(Some(Arc::downgrade(&events) as Weak<dyn SliderObserver>));
        Self {
            ball,
            events,
            progress: 0.0,
            last_threshold: None,
        }
    }

    /// Fold in notifications recorded since the last call
    ///
    /// Returns whether any progress update arrived.
    pub fn sync(&mut self) -> bool {
        let mut updated = false;
        for event in self.events.drain() {
            match event {
                SliderEvent::Progress(progress) => {
                    self.progress = progress;
                    updated = true;
                }
                SliderEvent::ReachedEnd => {
                    tracing::info!("Observer: reached end");
                    self.last_threshold = Some(ThresholdEvent::ReachedEnd);
                }
                SliderEvent::ReturnedToStart => {
                    tracing::info!("Observer: returned to start");
                    self.last_threshold = Some(ThresholdEvent::ReturnedToStart);
                }
            }
        }
        updated
    }
}

/// Playground screen: one control plus the editor state that is not part of
/// the control's configuration
pub struct PlaygroundState {
    pub page: BallPage,
    pub pulse: Pulse,
    /// Let the capsule fill the available width
    pub fit_container: bool,
    /// Width used when not fitting the container
    pub capsule_width: f32,
    pub text_color: TextColor,
    /// Palette index of each gradient stop
    pub gradient: [usize; 4],
    pub preset: Option<Preset>,
}

impl PlaygroundState {
    pub const DEFAULT_CAPSULE_WIDTH: f32 = 320.0;

    pub fn new(config: SliderConfig) -> Self {
        let capsule_width = config
            .capsule_width
            .unwrap_or(Self::DEFAULT_CAPSULE_WIDTH);
        Self {
            fit_container: config.capsule_width.is_none(),
            capsule_width,
            text_color: TextColor::closest(config.font.color),
            gradient: [0, 1, 2, 3],
            pulse: Pulse::new(),
            preset: None,
            page: BallPage::new(config),
        }
    }

    pub fn gradient_colors(&self) -> Vec<draggable_ball::slider::Rgba> {
        self.gradient
            .iter()
            .map(|&index| PALETTE[index % PALETTE.len()])
            .collect()
    }
}

impl App {
    /// The control shown on the current screen
    pub fn active_page(&self) -> Option<&BallPage> {
        match self.screen {
            Screen::Contents => None,
            Screen::SingleBall => Some(&self.single),
            Screen::Playground => Some(&self.playground.page),
        }
    }

    pub fn active_page_mut(&mut self) -> Option<&mut BallPage> {
        match self.screen {
            Screen::Contents => None,
            Screen::SingleBall => Some(&mut self.single),
            Screen::Playground => Some(&mut self.playground.page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_folds_observer_events() {
        let mut page = BallPage::new(SliderConfig::default());
        page.ball.set_track_length(300.0);

        page.ball.set_progress(1.0, false);
        assert!(page.sync());
        assert_eq!(page.progress, 1.0);
        assert_eq!(page.last_threshold, Some(ThresholdEvent::ReachedEnd));

        assert!(!page.sync(), "events are drained");
    }

    #[test]
    fn test_playground_fit_follows_config() {
        let state = PlaygroundState::new(SliderConfig::default());
        assert!(state.fit_container);
        assert_eq!(state.capsule_width, PlaygroundState::DEFAULT_CAPSULE_WIDTH);
        assert_eq!(state.gradient_colors().len(), 4);

        let state = PlaygroundState::new(SliderConfig {
            capsule_width: Some(200.0),
            ..SliderConfig::default()
        });
        assert!(!state.fit_container);
        assert_eq!(state.capsule_width, 200.0);
    }
}

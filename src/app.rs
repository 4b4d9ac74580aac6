//! Main application module

mod message;
pub mod presets;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use draggable_ball::SliderConfig;

pub use message::{Message, Screen};
pub use state::{App, BallPage, PlaygroundState};

/// Poll interval for the hint timer while nothing is animating
const HINT_POLL: std::time::Duration = std::time::Duration::from_millis(100);

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let config = SliderConfig::default();
        if !crate::ui::theme::KNOWN_FONTS.contains(&config.font.name.as_str()) {
            tracing::warn!(
                "Font '{}' is unknown, fill text uses the system font",
                config.font.name
            );
        }

        let app = Self {
            screen: Screen::default(),
            single: BallPage::new(config.clone()),
            playground: PlaygroundState::new(config),
        };

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(720.0, 900.0),
            min_size: Some(iced::Size::new(420.0, 480.0)),
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        Theme::Dark
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("Draggable Ball - {}", self.screen.title())
    }

    /// Subscriptions for control ticks and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let page = self.active_page();
        let needs_frames = page.is_some_and(|p| p.ball.needs_frames())
            || (self.screen == Screen::Playground && self.playground.pulse.is_animating());
        let hint_armed = page.is_some_and(|p| p.ball.is_hint_armed());

        let tick_sub = match subscription_logic::tick_mode(needs_frames, hint_armed) {
            subscription_logic::TickMode::Frames => {
                iced::window::frames().map(|_| Message::AnimationTick)
            }
            subscription_logic::TickMode::Poll => {
                iced::time::every(HINT_POLL).map(|_| Message::HintTick)
            }
            subscription_logic::TickMode::Idle => iced::Subscription::none(),
        };

        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([tick_sub, close_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TickMode {
        /// Tick every frame
        Frames,
        /// Tick coarsely so the hint timer can fire
        Poll,
        Idle,
    }

    pub fn tick_mode(needs_frames: bool, hint_armed: bool) -> TickMode {
        if needs_frames {
            TickMode::Frames
        } else if hint_armed {
            TickMode::Poll
        } else {
            TickMode::Idle
        }
    }
}

//! Slider input and tick handlers

use std::time::Instant;

use iced::Task;
use rand::Rng;

use crate::app::message::{Message, Screen};
use crate::app::state::App;
use crate::ui::widgets::BallEvent;

impl App {
    pub fn handle_control(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Ball(event) => {
                if let Some(page) = self.active_page_mut() {
                    match *event {
                        BallEvent::Resized(width) => page.ball.set_track_length(width),
                        BallEvent::Drag(phase) => page.ball.handle_drag(phase),
                        BallEvent::Tap => page.ball.tap(),
                    }
                }
                self.sync_observers();
                Some(Task::none())
            }

            Message::AnimationTick | Message::HintTick => {
                if let Some(page) = self.active_page_mut() {
                    page.ball.tick();
                }
                if self.screen == Screen::Playground {
                    self.playground.pulse.tick(Instant::now());
                }
                self.sync_observers();
                Some(Task::none())
            }

            Message::RandomProgress => {
                let value: f32 = rand::rng().random_range(0.0..=1.0);
                tracing::debug!("Animating single ball to {:.2}", value);
                self.single.ball.set_progress(value, true);
                self.sync_observers();
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Pull observer notifications into page state
    pub(super) fn sync_observers(&mut self) {
        self.single.sync();
        if self.playground.page.sync() {
            self.playground.pulse.trigger();
        }
    }
}

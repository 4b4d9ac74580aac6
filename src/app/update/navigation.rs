//! Navigation message handlers

use iced::Task;

use crate::app::message::{Message, Screen};
use crate::app::state::App;

impl App {
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(screen) => {
                tracing::debug!("Navigating to {:?}", screen);
                self.screen = *screen;
                Some(Task::none())
            }
            Message::NavigateBack => {
                self.screen = Screen::Contents;
                Some(Task::none())
            }
            _ => None,
        }
    }
}

//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                self.single.ball.teardown();
                self.playground.page.ball.teardown();
                Some(iced::exit())
            }
            _ => None,
        }
    }
}

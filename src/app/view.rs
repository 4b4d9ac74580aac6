//! Application view rendering

use iced::widget::container;
use iced::{Element, Fill};

use super::App;
use super::message::{Message, Screen};
use crate::ui::{pages, theme};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let page = match self.screen {
            Screen::Contents => pages::contents::view(),
            Screen::SingleBall => pages::single::view(&self.single),
            Screen::Playground => pages::playground::view(&self.playground),
        };

        container(page)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}

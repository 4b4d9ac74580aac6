//! Pages module
//! Full-page views for the demo screens

pub mod contents;
pub mod playground;
pub mod single;

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Back button and title shared by the detail screens
fn page_header(title: &str) -> Element<'static, Message> {
    row![
        button(text("‹ Contents").size(14))
            .style(theme::secondary_button)
            .padding([6, 14])
            .on_press(Message::NavigateBack),
        Space::new().width(16),
        text(title.to_string()).size(28),
        Space::new().width(Fill),
    ]
    .align_y(Alignment::Center)
    .into()
}

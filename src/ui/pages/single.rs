//! Single ball screen
//!
//! One control with its observer output and a button that animates it to a
//! random position.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Fill};

use draggable_ball::slider::ThresholdEvent;

use super::page_header;
use crate::app::{BallPage, Message, Screen};
use crate::ui::{theme, widgets};

pub fn view(page: &BallPage) -> Element<'_, Message> {
    let status = match page.last_threshold {
        Some(ThresholdEvent::ReachedEnd) => "Reached end",
        Some(ThresholdEvent::ReturnedToStart) => "Returned to start",
        None => "Waiting for the first settle",
    };

    let content = column![
        page_header(Screen::SingleBall.title()),
        Space::new().height(32),
        container(widgets::ball_slider(&page.ball, Message::Ball))
            .padding(24)
            .width(Fill)
            .style(theme::card),
        Space::new().height(24),
        text(format!("Progress: {:.2}", page.progress)).size(18),
        text(status).size(14).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
        Space::new().height(24),
        button(text("Random").size(15))
            .style(theme::primary_button)
            .padding([10, 28])
            .on_press(Message::RandomProgress),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .max_width(640);

    container(content).padding(32).center_x(Fill).into()
}

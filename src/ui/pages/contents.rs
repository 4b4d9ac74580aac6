//! Table of contents

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, Screen};
use crate::ui::theme;

const ENTRIES: [(Screen, &str); 2] = [
    (
        Screen::SingleBall,
        "One control driven by random programmatic updates",
    ),
    (
        Screen::Playground,
        "Every size, text, color and shadow setting, live",
    ),
];

pub fn view() -> Element<'static, Message> {
    let entries = ENTRIES.iter().map(|&(screen, description)| {
        button(
            row![
                column![
                    text(screen.title()).size(17),
                    text(description).size(13).style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                ]
                .spacing(4),
                Space::new().width(Fill),
                text("›").size(20),
            ]
            .align_y(Alignment::Center),
        )
        .style(theme::nav_item)
        .padding([14, 16])
        .width(Fill)
        .on_press(Message::Navigate(screen))
        .into()
    });

    container(
        column![
            text(Screen::Contents.title()).size(32),
            Space::new().height(24),
            column(entries).spacing(4),
        ]
        .max_width(560),
    )
    .padding(32)
    .center_x(Fill)
    .into()
}

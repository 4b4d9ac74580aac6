//! Label + control rows used by the playground

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Background, Element, Fill, Font, font};

use crate::ui::theme;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn section_header<'a, Message: 'a>(title: &str) -> Element<'a, Message> {
    container(
        text(title.to_string())
            .size(13)
            .font(BOLD)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    )
    .padding([12, 0])
    .into()
}

/// Setting row with label on left and control on right
pub fn setting_row<'a, Message: 'a>(
    label: &str,
    value: Option<String>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label_section: Element<'a, Message> = if let Some(value) = value {
        column![
            text(label.to_string()).size(15),
            text(value).size(12).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ]
        .spacing(2)
        .into()
    } else {
        text(label.to_string()).size(15).into()
    };

    container(
        row![label_section, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .spacing(16)
            .width(Fill),
    )
    .padding([10, 0])
    .into()
}

pub fn divider<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| iced::widget::container::Style {
            background: Some(Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .width(Fill)
        .into()
}

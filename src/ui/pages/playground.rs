//! Playground screen
//!
//! Live readouts of the observer on top, the control in the middle and every
//! configurable property below it.

use std::fmt;

use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, slider, text, text_input,
    toggler,
};
use iced::{Alignment, Background, Border, Color, Element, Fill};

use draggable_ball::slider::{Rgba, ThresholdEvent};

use super::page_header;
use crate::app::presets::PRESETS;
use crate::app::{Message, PlaygroundState, Screen};
use crate::ui::theme;
use crate::ui::widgets::{self, divider, section_header, setting_row};

/// Colors the gradient stops cycle through
pub const PALETTE: [Rgba; 8] = [
    Rgba::TEAL,
    Rgba::BLUE,
    Rgba::PURPLE,
    Rgba::PINK,
    Rgba::rgb(1.0, 0.584, 0.0),
    Rgba::rgb(1.0, 0.8, 0.0),
    Rgba::rgb(0.204, 0.78, 0.349),
    Rgba::rgb(0.345, 0.337, 0.839),
];

/// Fill text colors offered by the playground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Black,
    Teal,
    Pink,
    Gold,
}

impl TextColor {
    pub const ALL: [TextColor; 5] = [
        TextColor::White,
        TextColor::Black,
        TextColor::Teal,
        TextColor::Pink,
        TextColor::Gold,
    ];

    pub fn rgba(self) -> Rgba {
        match self {
            TextColor::White => Rgba::WHITE,
            TextColor::Black => Rgba::rgb(0.0, 0.0, 0.0),
            TextColor::Teal => Rgba::TEAL,
            TextColor::Pink => Rgba::PINK,
            TextColor::Gold => Rgba::rgb(1.0, 0.8, 0.0),
        }
    }

    /// Choice nearest to an arbitrary configured color
    pub fn closest(color: Rgba) -> Self {
        let distance = |choice: &TextColor| {
            let c = choice.rgba();
            (c.r - color.r).powi(2) + (c.g - color.g).powi(2) + (c.b - color.b).powi(2)
        };
        Self::ALL
            .into_iter()
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))
            .unwrap_or(TextColor::White)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextColor::White => "White",
            TextColor::Black => "Black",
            TextColor::Teal => "Teal",
            TextColor::Pink => "Pink",
            TextColor::Gold => "Gold",
        };
        f.write_str(name)
    }
}

pub fn view(state: &PlaygroundState) -> Element<'_, Message> {
    let page = &state.page;
    let config = page.ball.config();
    let presentation = page.ball.presentation();

    // Observer readouts
    let emoji = match page.last_threshold {
        Some(ThresholdEvent::ReachedEnd) => "🎉",
        Some(ThresholdEvent::ReturnedToStart) => "🎬",
        None => "·",
    };
    let intensity = state.pulse.intensity();
    let pulse_dot = container(Space::new().width(14).height(14)).style(move |_theme| {
        container::Style {
            background: Some(Background::Color(Color {
                a: 0.15 + 0.85 * intensity,
                ..theme::PULSE_GREEN
            })),
            border: Border {
                radius: 7.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });
    let readouts = row![
        text(format!("Progress: {:.2}", page.progress)).size(18),
        pulse_dot,
        text(emoji).size(22),
        Space::new().width(Fill),
        text(format!(
            "Indicator {:.0}°",
            presentation.indicator_rotation.to_degrees()
        ))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let slider_card = container(widgets::ball_slider(&page.ball, Message::Ball))
        .padding(24)
        .width(Fill)
        .style(theme::card);

    let controls = column![
        section_header("PRESET"),
        setting_row(
            "Preset",
            None,
            styled_pick_list(
                PRESETS.clone(),
                state.preset.clone(),
                Message::PresetSelected
            ),
        ),
        section_header("GEOMETRY"),
        value_slider(
            "Ball size",
            config.ball_size,
            30.0..=100.0,
            Message::BallSizeChanged
        ),
        divider(),
        value_slider(
            "Capsule height",
            config.capsule_height,
            20.0..=80.0,
            Message::CapsuleHeightChanged
        ),
        divider(),
        setting_row(
            "Fit container",
            None,
            toggler(state.fit_container)
                .on_toggle(Message::FitContainerToggled)
                .size(24)
                .into(),
        ),
        value_slider(
            "Capsule width",
            state.capsule_width,
            150.0..=600.0,
            Message::CapsuleWidthChanged
        ),
        divider(),
        value_slider(
            "Indicator size",
            config.indicator_size,
            50.0..=250.0,
            Message::IndicatorSizeChanged
        ),
        divider(),
        value_slider(
            "Indicator top offset",
            config.indicator_top_offset,
            -40.0..=40.0,
            Message::IndicatorOffsetChanged
        ),
        section_header("TEXT"),
        setting_row(
            "Fill text",
            None,
            text_input("Fill text", config.fill_text.as_deref().unwrap_or(""))
                .on_input(Message::FillTextChanged)
                .padding([8, 12])
                .width(220)
                .into(),
        ),
        divider(),
        setting_row(
            "Font",
            None,
            styled_pick_list(
                theme::KNOWN_FONTS.to_vec(),
                theme::KNOWN_FONTS
                    .iter()
                    .copied()
                    .find(|name| *name == config.font.name),
                Message::FontSelected,
            ),
        ),
        divider(),
        value_slider(
            "Font size",
            config.font.size,
            10.0..=40.0,
            Message::FontSizeChanged
        ),
        divider(),
        setting_row(
            "Text color",
            None,
            styled_pick_list(
                TextColor::ALL.to_vec(),
                Some(state.text_color),
                Message::TextColorSelected,
            ),
        ),
        section_header("SHADOWS"),
        setting_row(
            "Corner inner shadow",
            None,
            toggler(config.corner_inner_shadow.show)
                .on_toggle(Message::CornerShadowToggled)
                .size(24)
                .into(),
        ),
        alpha_slider(
            "Corner shadow alpha",
            config.corner_inner_shadow.alpha,
            Message::CornerShadowAlphaChanged
        ),
        divider(),
        setting_row(
            "Top inner shadow",
            None,
            toggler(config.top_inner_shadow.show)
                .on_toggle(Message::TopShadowToggled)
                .size(24)
                .into(),
        ),
        alpha_slider(
            "Top shadow alpha",
            config.top_inner_shadow.alpha,
            Message::TopShadowAlphaChanged
        ),
        section_header("GRADIENT"),
        setting_row("Fill colors", None, gradient_swatches(state)),
    ]
    .padding([0, 8]);

    column![
        page_header(Screen::Playground.title()),
        Space::new().height(20),
        readouts,
        Space::new().height(12),
        slider_card,
        Space::new().height(16),
        scrollable(controls)
            .style(theme::dark_scrollable)
            .height(Fill),
    ]
    .padding(32)
    .into()
}

fn value_slider<'a>(
    label: &str,
    value: f32,
    range: std::ops::RangeInclusive<f32>,
    on_change: fn(f32) -> Message,
) -> Element<'a, Message> {
    setting_row(
        label,
        Some(format!("{:.0}", value)),
        slider(range, value, on_change).width(220).into(),
    )
}

fn alpha_slider<'a>(
    label: &str,
    value: f32,
    on_change: fn(f32) -> Message,
) -> Element<'a, Message> {
    setting_row(
        label,
        Some(format!("{:.2}", value)),
        slider(0.0..=1.0, value, on_change)
            .step(0.01)
            .width(220)
            .into(),
    )
}

fn gradient_swatches(state: &PlaygroundState) -> Element<'_, Message> {
    let swatches = state
        .page
        .ball
        .config()
        .fill_gradient
        .iter()
        .take(state.gradient.len())
        .enumerate()
        .map(|(index, color)| {
            button(Space::new().width(28).height(28))
                .style(theme::swatch(theme::to_color(*color)))
                .padding(0)
                .on_press(Message::GradientStopCycled(index))
                .into()
        });
    row(swatches).spacing(10).into()
}

/// Pick list with the demo's dropdown styling
fn styled_pick_list<'a, T, F>(
    options: Vec<T>,
    selected: Option<T>,
    on_selected: F,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
    F: Fn(T) -> Message + 'a,
{
    pick_list(options, selected, on_selected)
        .style(theme::pick_list_style)
        .menu_style(theme::pick_list_menu)
        .padding([8, 12])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_text_color() {
        assert_eq!(TextColor::closest(Rgba::WHITE), TextColor::White);
        assert_eq!(
            TextColor::closest(Rgba::rgb(0.1, 0.1, 0.12)),
            TextColor::Black
        );
        assert_eq!(TextColor::closest(Rgba::PINK), TextColor::Pink);
    }

    #[test]
    fn test_palette_starts_with_default_gradient() {
        let defaults = draggable_ball::SliderConfig::default().fill_gradient;
        assert_eq!(&PALETTE[..4], defaults.as_slice());
    }
}

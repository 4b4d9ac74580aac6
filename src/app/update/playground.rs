//! Playground settings handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, PlaygroundState};
use crate::ui::pages::playground::PALETTE;
use crate::ui::theme;

impl App {
    pub fn handle_playground(&mut self, message: &Message) -> Option<Task<Message>> {
        let state = &mut self.playground;
        let ball = &mut state.page.ball;

        match message {
            Message::BallSizeChanged(size) => ball.set_ball_size(*size),
            Message::CapsuleHeightChanged(height) => ball.set_capsule_height(*height),
            Message::IndicatorSizeChanged(size) => ball.set_indicator_size(*size),
            Message::IndicatorOffsetChanged(offset) => ball.set_indicator_top_offset(*offset),
            Message::CapsuleWidthChanged(width) => {
                state.capsule_width = *width;
                if !state.fit_container {
                    ball.set_capsule_width(Some(*width));
                }
            }
            Message::FitContainerToggled(fit) => {
                state.fit_container = *fit;
                ball.set_capsule_width((!fit).then_some(state.capsule_width));
            }
            Message::FillTextChanged(value) => ball.set_text(value.clone()),
            Message::FontSelected(name) => {
                if !theme::KNOWN_FONTS.contains(name) {
                    tracing::warn!("Font '{}' is unknown, using the system font", name);
                }
                let size = ball.config().font.size;
                ball.set_font(*name, size, None);
            }
            Message::FontSizeChanged(size) => ball.set_font_size(*size),
            Message::TextColorSelected(color) => {
                state.text_color = *color;
                ball.set_font_color(color.rgba());
            }
            Message::CornerShadowToggled(show) => {
                let alpha = ball.config().corner_inner_shadow.alpha;
                ball.set_corner_inner_shadow(*show, alpha);
            }
            Message::CornerShadowAlphaChanged(alpha) => {
                let show = ball.config().corner_inner_shadow.show;
                ball.set_corner_inner_shadow(show, *alpha);
            }
            Message::TopShadowToggled(show) => {
                let alpha = ball.config().top_inner_shadow.alpha;
                ball.set_top_inner_shadow(*show, alpha);
            }
            Message::TopShadowAlphaChanged(alpha) => {
                let show = ball.config().top_inner_shadow.show;
                ball.set_top_inner_shadow(show, *alpha);
            }
            Message::GradientStopCycled(index) => {
                if let Some(slot) = state.gradient.get_mut(*index) {
                    *slot = (*slot + 1) % PALETTE.len();
                }
                let colors = state.gradient_colors();
                state.page.ball.set_fill_gradient_colors(colors);
            }
            Message::PresetSelected(preset) => {
                tracing::info!("Applying preset '{}'", preset.name);
                let mut next = PlaygroundState::new(preset.config.clone());
                next.preset = Some(preset.clone());
                *state = next;
            }
            _ => return None,
        }

        Some(Task::none())
    }
}

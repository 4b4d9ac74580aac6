//! Draggable ball slider widget
//!
//! Draws one frame of a [`DraggableBall`] and classifies pointer input:
//! - press on the ball and release without moving past the drag slop: tap
//! - press on the ball and move past the slop: drag began/changed/ended
//!
//! The widget keeps no progress of its own. Every event is published to the
//! application, which feeds it into the control and redraws from the next
//! [`Presentation`].

use std::f32::consts::FRAC_PI_2;

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::touch;
use iced::widget::{container, stack, text};
use iced::window;
use iced::{
    Alignment, Background, Color, Element, Event, Length, Point, Rectangle, Shadow, Size, Theme,
    Vector,
};

use draggable_ball::slider::{DragPhase, DraggableBall, Presentation, Rgba, SliderConfig};

use crate::ui::theme;

/// What the widget reports to the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallEvent {
    /// The capsule was laid out at a new width
    Resized(f32),
    Drag(DragPhase),
    Tap,
}

pub struct BallSlider<'a, Message> {
    presentation: Presentation,
    /// Track length the control currently knows about
    track_length: f32,
    config: &'a SliderConfig,
    on_event: Box<dyn Fn(BallEvent) -> Message + 'a>,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
    status: Option<Status>,
}

impl<'a, Message> BallSlider<'a, Message>
where
    Message: Clone,
{
    pub fn new<F>(ball: &'a DraggableBall, on_event: F) -> Self
    where
        F: 'a + Fn(BallEvent) -> Message,
    {
        Self {
            presentation: ball.presentation(),
            track_length: ball.geometry().track_length,
            config: ball.config(),
            on_event: Box::new(on_event),
            style: Box::new(default_style),
            status: None,
        }
    }

    fn width(&self) -> Length {
        self.config
            .capsule_width
            .map_or(Length::Fill, Length::Fixed)
    }

    fn height(&self) -> f32 {
        self.config.capsule_height.max(self.config.ball_size)
    }

    fn capsule_bounds(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x,
            y: bounds.y + (bounds.height - self.config.capsule_height) / 2.0,
            width: bounds.width,
            height: self.config.capsule_height,
        }
    }

    fn ball_bounds(&self, bounds: Rectangle) -> Rectangle {
        let size = self.config.ball_size;
        Rectangle {
            x: bounds.x + self.presentation.ball_offset,
            y: bounds.y + (bounds.height - size) / 2.0,
            width: size,
            height: size,
        }
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for BallSlider<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width(),
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width(), self.height())
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position_over(self.ball_bounds(bounds)) {
                    *state = State {
                        press: Some(position),
                        ..State::default()
                    };
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if let (Some(origin), Some(position)) = (state.press, cursor.land().position()) {
                    if !state.is_dragging && position.distance(origin) > self.config.motion.drag_slop
                    {
                        state.is_dragging = true;
                        shell.publish((self.on_event)(BallEvent::Drag(DragPhase::Began)));
                    }
                    if state.is_dragging {
                        state.translation = position.x - origin.x;
                        shell.publish((self.on_event)(BallEvent::Drag(DragPhase::Changed {
                            translation: state.translation,
                        })));
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if state.press.take().is_some() {
                    let event = if state.is_dragging {
                        BallEvent::Drag(DragPhase::Ended {
                            translation: state.translation,
                        })
                    } else {
                        BallEvent::Tap
                    };
                    shell.publish((self.on_event)(event));
                    state.is_dragging = false;
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerLost { .. })
            | Event::Window(window::Event::Unfocused) => {
                if state.press.take().is_some() && state.is_dragging {
                    shell.publish((self.on_event)(BallEvent::Drag(DragPhase::Cancelled {
                        translation: state.translation,
                    })));
                }
                state.is_dragging = false;
            }
            Event::Window(window::Event::RedrawRequested(_now)) => {
                if bounds.width != self.track_length {
                    shell.publish((self.on_event)(BallEvent::Resized(bounds.width)));
                }
            }
            _ => {}
        }

        let current_status = if state.is_dragging {
            Status::Dragged
        } else if cursor.is_over(self.ball_bounds(bounds)) {
            Status::Hovered
        } else {
            Status::Active
        };

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.status = Some(current_status);
        } else if self.status.is_some_and(|status| status != current_status) {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let style = (self.style)(theme, self.status.unwrap_or(Status::Active));
        let config = self.config;

        let capsule = self.capsule_bounds(bounds);
        let radius = capsule.height / 2.0;

        // Empty capsule
        renderer.fill_quad(
            renderer::Quad {
                bounds: capsule,
                border: Border {
                    radius: radius.into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                ..renderer::Quad::default()
            },
            style.capsule,
        );

        // Gradient fill up to the presented progress
        let fill_width = self.presentation.fill_width.clamp(0.0, capsule.width);
        if fill_width > 0.0 {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        width: fill_width,
                        ..capsule
                    },
                    border: Border {
                        radius: radius.into(),
                        ..Default::default()
                    },
                    ..renderer::Quad::default()
                },
                gradient(&config.fill_gradient),
            );
        }

        // Inner shadows: a dark band along the top and a dark rim
        if config.top_inner_shadow.show {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        height: capsule.height * 0.4,
                        ..capsule
                    },
                    border: Border {
                        radius: radius.into(),
                        ..Default::default()
                    },
                    ..renderer::Quad::default()
                },
                Color::from_rgba(0.0, 0.0, 0.0, config.top_inner_shadow.alpha),
            );
        }
        if config.corner_inner_shadow.show {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: capsule,
                    border: Border {
                        radius: radius.into(),
                        width: 2.0,
                        color: Color::from_rgba(0.0, 0.0, 0.0, config.corner_inner_shadow.alpha),
                    },
                    ..renderer::Quad::default()
                },
                Color::TRANSPARENT,
            );
        }

        // Ball
        let ball = self.ball_bounds(bounds);
        renderer.fill_quad(
            renderer::Quad {
                bounds: ball,
                border: Border {
                    radius: (ball.width / 2.0).into(),
                    width: style.ball_border_width,
                    color: style.ball_border_color,
                },
                shadow: Shadow {
                    color: style.ball_shadow,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..renderer::Quad::default()
            },
            style.ball,
        );

        // Indicator: a marker swinging over the top of the ball, half a turn
        // across the track
        if let Some(marker) = indicator_marker(
            ball,
            self.presentation.indicator_rotation,
            config.indicator_size,
            config.indicator_top_offset,
        ) {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: marker,
                    border: Border {
                        radius: (marker.width / 2.0).into(),
                        ..Default::default()
                    },
                    ..renderer::Quad::default()
                },
                style.indicator,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(self.ball_bounds(layout.bounds())) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<BallSlider<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(slider: BallSlider<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}

/// Slider with its fill text laid over the capsule
pub fn ball_slider<'a, Message, F>(ball: &'a DraggableBall, on_event: F) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: 'a + Fn(BallEvent) -> Message,
{
    let slider = BallSlider::new(ball, on_event);
    let config = ball.config();
    let Some(label) = config.fill_text.as_deref().filter(|label| !label.is_empty()) else {
        return slider.into();
    };

    let width = slider.width();
    let height = slider.height();
    let label = text(label)
        .font(theme::slider_font(&config.font.name))
        .size(config.font.size)
        .color(theme::to_color(config.font.color));

    stack![
        slider,
        container(label)
            .width(width)
            .height(height)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    ]
    .into()
}

/// Indicator size at which the marker orbits at the ball's own radius
const INDICATOR_REFERENCE: f32 = 150.0;

/// Bounds of the indicator marker for a ball drawn at `ball`
///
/// Rotation 0 points left, `PI / 2` straight up and `PI` right. The orbit
/// scales with `size` and its center moves down by `top_offset`.
fn indicator_marker(
    ball: Rectangle,
    rotation: f32,
    size: f32,
    top_offset: f32,
) -> Option<Rectangle> {
    let scale = size / INDICATOR_REFERENCE;
    if !scale.is_finite() || scale <= 0.0 || !rotation.is_finite() {
        return None;
    }

    let orbit = ball.width / 2.0 * 0.6 * scale;
    let diameter = (ball.width * 0.16 * scale).max(3.0);
    let center = Point::new(
        ball.center_x() - rotation.cos() * orbit,
        ball.center_y() + top_offset - rotation.sin() * orbit,
    );

    Some(Rectangle {
        x: center.x - diameter / 2.0,
        y: center.y - diameter / 2.0,
        width: diameter,
        height: diameter,
    })
}

/// Left-to-right gradient with evenly spaced stops
fn gradient(colors: &[Rgba]) -> Background {
    let mut linear = iced::gradient::Linear::new(iced::Radians(FRAC_PI_2));
    let last = colors.len().saturating_sub(1).max(1) as f32;
    // iced keeps at most eight stops
    for (index, color) in colors.iter().take(8).enumerate() {
        linear = linear.add_stop(index as f32 / last, theme::to_color(*color));
    }
    Background::Gradient(iced::Gradient::Linear(linear))
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct State {
    /// Where the press on the ball started
    press: Option<Point>,
    is_dragging: bool,
    translation: f32,
}

/// Status of the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
}

/// Style for the ball slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub capsule: Background,
    pub ball: Background,
    pub ball_border_width: f32,
    pub ball_border_color: Color,
    pub ball_shadow: Color,
    pub indicator: Color,
}

fn default_style(theme: &Theme, status: Status) -> Style {
    let ball = match status {
        Status::Active => Color::WHITE,
        Status::Hovered | Status::Dragged => Color::from_rgb(0.94, 0.94, 0.96),
    };
    let shadow_alpha = if status == Status::Dragged { 0.45 } else { 0.3 };

    Style {
        capsule: Background::Color(theme::capsule(theme)),
        ball: Background::Color(ball),
        ball_border_width: 1.0,
        ball_border_color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        ball_shadow: Color::from_rgba(0.0, 0.0, 0.0, shadow_alpha),
        indicator: theme::ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    const BALL: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 60.0,
        height: 60.0,
    };

    fn center(rect: Rectangle) -> Point {
        rect.center()
    }

    #[test]
    fn test_indicator_swings_over_the_top() {
        let start = center(indicator_marker(BALL, 0.0, 150.0, 0.0).unwrap());
        let middle = center(indicator_marker(BALL, PI / 2.0, 150.0, 0.0).unwrap());
        let end = center(indicator_marker(BALL, PI, 150.0, 0.0).unwrap());

        assert!((start.x - 12.0).abs() < 1e-3 && (start.y - 30.0).abs() < 1e-3);
        assert!((middle.x - 30.0).abs() < 1e-3 && (middle.y - 12.0).abs() < 1e-3);
        assert!((end.x - 48.0).abs() < 1e-3 && (end.y - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_indicator_follows_size_and_offset() {
        let small = indicator_marker(BALL, 0.0, 75.0, 0.0).unwrap();
        assert!((center(small).x - 21.0).abs() < 1e-3);

        let lowered = indicator_marker(BALL, PI / 2.0, 150.0, 10.0).unwrap();
        assert!((center(lowered).y - 22.0).abs() < 1e-3);

        assert!(indicator_marker(BALL, 0.0, 0.0, 0.0).is_none());
        assert!(indicator_marker(BALL, f32::NAN, 150.0, 0.0).is_none());
    }
}

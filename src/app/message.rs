//! Application messages

use crate::app::presets::Preset;
use crate::ui::pages::playground::TextColor;
use crate::ui::widgets::BallEvent;

/// Demo screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Contents,
    SingleBall,
    Playground,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Contents => "Draggable Ball",
            Screen::SingleBall => "Single Ball",
            Screen::Playground => "Playground",
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    Navigate(Screen),
    /// Back to the table of contents
    NavigateBack,

    // ============ Control ============
    /// Input from the slider on the current screen
    Ball(BallEvent),
    /// Frame while something is animating
    AnimationTick,
    /// Coarse tick while only the hint timer is armed
    HintTick,
    /// Animate the single ball to a random position
    RandomProgress,

    // ============ Playground ============
    BallSizeChanged(f32),
    IndicatorSizeChanged(f32),
    IndicatorOffsetChanged(f32),
    CapsuleHeightChanged(f32),
    CapsuleWidthChanged(f32),
    FitContainerToggled(bool),
    FillTextChanged(String),
    FontSelected(&'static str),
    FontSizeChanged(f32),
    TextColorSelected(TextColor),
    CornerShadowToggled(bool),
    CornerShadowAlphaChanged(f32),
    TopShadowToggled(bool),
    TopShadowAlphaChanged(f32),
    /// Advance one gradient stop to the next palette color
    GradientStopCycled(usize),
    PresetSelected(Preset),

    // ============ Window ============
    WindowClosed,
}

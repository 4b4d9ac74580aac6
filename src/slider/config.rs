//! Control configuration
//!
//! Every default the control uses lives here, constructed once when the
//! control is created. Visual fields are carried for the renderer; only the
//! sizes and [`MotionConfig`] affect the state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const TEAL: Rgba = Rgba::rgb(0.188, 0.690, 0.780);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.478, 1.0);
    pub const PURPLE: Rgba = Rgba::rgb(0.686, 0.322, 0.871);
    pub const PINK: Rgba = Rgba::rgb(1.0, 0.176, 0.333);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#RRGGBB` representation, alpha ignored
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Show flag and opacity of one inner shadow layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InnerShadow {
    pub show: bool,
    pub alpha: f32,
}

impl Default for InnerShadow {
    fn default() -> Self {
        Self {
            show: true,
            alpha: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Preferred family; renderers fall back to the system font when missing
    pub name: String,
    pub size: f32,
    pub color: Rgba,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "Bhineka".to_string(),
            size: 20.0,
            color: Rgba::WHITE,
        }
    }
}

/// Timing and amplitude of the control's animations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Delay between idle hint animations
    pub hint_interval_ms: u64,
    /// Length of one hint animation (forward, back, forward, back)
    pub hint_duration_ms: u64,
    /// Hint nudge distance as a fraction of the usable range
    pub hint_amount: f32,
    /// Length of the tap nudge (forward then back, at twice the hint amount)
    pub tap_duration_ms: u64,
    /// Length of an animated `set_progress`
    pub transition_ms: u64,
    /// Tolerance for "progress is at 0"
    pub progress_tolerance: f32,
    /// Pointer travel before a press becomes a drag instead of a tap
    pub drag_slop: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hint_interval_ms: 2000,
            hint_duration_ms: 1400,
            hint_amount: 0.05,
            tap_duration_ms: 1000,
            transition_ms: 300,
            progress_tolerance: 0.001,
            drag_slop: 3.0,
        }
    }
}

impl MotionConfig {
    pub fn hint_interval(&self) -> Duration {
        Duration::from_millis(self.hint_interval_ms)
    }

    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }

    pub fn tap_duration(&self) -> Duration {
        Duration::from_millis(self.tap_duration_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Full configuration of a draggable ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub capsule_height: f32,
    pub ball_size: f32,
    /// Fixed capsule width; `None` fills the container
    pub capsule_width: Option<f32>,
    pub indicator_size: f32,
    pub indicator_top_offset: f32,
    pub fill_text: Option<String>,
    pub font: FontConfig,
    pub fill_gradient: Vec<Rgba>,
    pub corner_inner_shadow: InnerShadow,
    pub top_inner_shadow: InnerShadow,
    pub motion: MotionConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            capsule_height: 40.0,
            ball_size: 60.0,
            capsule_width: None,
            indicator_size: 150.0,
            indicator_top_offset: -5.0,
            fill_text: Some("DRAG".to_string()),
            font: FontConfig::default(),
            fill_gradient: vec![Rgba::TEAL, Rgba::BLUE, Rgba::PURPLE, Rgba::PINK],
            corner_inner_shadow: InnerShadow::default(),
            top_inner_shadow: InnerShadow::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )))
            }
        };

        positive("capsule_height", self.capsule_height)?;
        positive("ball_size", self.ball_size)?;
        positive("indicator_size", self.indicator_size)?;
        positive("font.size", self.font.size)?;
        if let Some(width) = self.capsule_width {
            positive("capsule_width", width)?;
        }

        for (name, shadow) in [
            ("corner_inner_shadow", &self.corner_inner_shadow),
            ("top_inner_shadow", &self.top_inner_shadow),
        ] {
            if !(0.0..=1.0).contains(&shadow.alpha) {
                return Err(ConfigError::Invalid(format!(
                    "{}.alpha must be within [0, 1], got {}",
                    name, shadow.alpha
                )));
            }
        }

        if self.fill_gradient.is_empty() {
            return Err(ConfigError::Invalid(
                "fill_gradient needs at least one color".to_string(),
            ));
        }
        if self.motion.hint_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "motion.hint_interval_ms must be non-zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.motion.hint_amount) {
            return Err(ConfigError::Invalid(format!(
                "motion.hint_amount must be within [0, 1], got {}",
                self.motion.hint_amount
            )));
        }
        Ok(())
    }
}

/// Errors that can occur with slider configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SliderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.motion.hint_interval(), Duration::from_secs(2));
        assert_eq!(config.motion.hint_duration(), Duration::from_millis(1400));
        assert_eq!(config.fill_gradient.len(), 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SliderConfig::from_json(r#"{ "ball_size": 65, "capsule_width": 320 }"#)
            .expect("valid config");
        assert_eq!(config.ball_size, 65.0);
        assert_eq!(config.capsule_width, Some(320.0));
        assert_eq!(config.capsule_height, 40.0);
        assert_eq!(config.motion, MotionConfig::default());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let err = SliderConfig::from_json(r#"{ "ball_size": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {:?}", err);

        let err = SliderConfig::from_json(r#"{ "fill_gradient": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SliderConfig::from_json(r#"{ "top_inner_shadow": { "show": true, "alpha": 2 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SliderConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_motion() {
        let mut config = SliderConfig::default();
        config.motion.hint_interval_ms = 3500;
        let json = config.to_json().expect("serializable");
        let parsed = SliderConfig::from_json(&json).expect("valid config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgba::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Rgba::rgb(1.0, 0.0, 0.5).to_hex(), "#FF0080");
    }
}

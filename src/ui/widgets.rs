//! Reusable UI widgets - composable components without business logic
//!
//! Widgets take generic Message types and callbacks; they must not depend on
//! `crate::app` directly.

pub mod ball_slider;
pub mod setting_row;

pub use ball_slider::{BallEvent, ball_slider};
pub use setting_row::{divider, section_header, setting_row};

//! UI module for the demo application
//!
//! - **Widgets** (`widgets`): the ball slider and layout helpers
//! - **Pages** (`pages`): one view per demo screen

pub mod animation;
pub mod pages;
pub mod theme;
pub mod widgets;

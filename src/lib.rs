//! Draggable ball slider
//!
//! A headless control engine for a ball dragged along a capsule track, with
//! idle hint animations and threshold notifications, plus a tokio driver for
//! hosts without a frame loop.

pub mod driver;
pub mod slider;

pub use slider::{
    DraggableBall, DragPhase, Presentation, SliderConfig, SliderEvent, SliderObserver,
};

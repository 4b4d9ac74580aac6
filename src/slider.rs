//! Headless draggable ball control
//!
//! A ball dragged along a capsule track expresses a progress value in
//! `[0, 1]`. The control owns gesture handling, the idle hint animation,
//! programmatic progress changes and threshold notifications; drawing is left
//! to the host through [`Presentation`].

mod ball;
pub mod clock;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod hint;
pub mod observer;
pub mod threshold;
pub mod timeline;

pub use ball::{AnimationKind, DraggableBall, Presentation};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, FontConfig, InnerShadow, MotionConfig, Rgba, SliderConfig};
pub use drag::DragPhase;
pub use geometry::TrackGeometry;
pub use observer::{EventLog, SliderEvent, SliderObserver};
pub use threshold::ThresholdEvent;

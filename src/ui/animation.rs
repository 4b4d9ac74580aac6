//! Demo animations built on `iced_anim`
//!
//! The slider's own motion is driven by the control; this module only covers
//! decorations around it.

mod pulse;

pub use pulse::Pulse;

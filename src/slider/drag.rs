//! Drag gesture session
//!
//! While a drag is active the ball is moved by a visual translation on top of
//! the committed offset. The committed offset only changes when the gesture
//! ends or is cancelled.

use super::geometry::TrackGeometry;

/// Phase of a pointer drag as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Began,
    /// Pointer moved; translation is relative to where the drag started
    Changed { translation: f32 },
    Ended { translation: f32 },
    Cancelled { translation: f32 },
}

/// An in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Committed offset when the drag began
    pub start_offset: f32,
    /// Clamped visual translation applied on top of `start_offset`
    pub translation: f32,
}

impl DragSession {
    pub fn new(start_offset: f32) -> Self {
        Self {
            start_offset,
            translation: 0.0,
        }
    }

    /// Apply a raw pointer translation, clamped so the ball stays on the track
    ///
    /// Returns the hypothetical offset the ball is presented at. A non-finite
    /// translation counts as no movement.
    pub fn track(&mut self, raw_translation: f32, geometry: &TrackGeometry) -> f32 {
        let raw_translation = if raw_translation.is_finite() {
            raw_translation
        } else {
            0.0
        };
        let offset = geometry.clamp_offset(self.start_offset + raw_translation);
        self.translation = offset - self.start_offset;
        offset
    }

    /// Offset the ball is presented at
    pub fn presented_offset(&self) -> f32 {
        self.start_offset + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_is_clamped() {
        let geometry = TrackGeometry::new(300.0, 60.0, 40.0);
        let mut session = DragSession::new(geometry.min_offset());

        let offset = session.track(-50.0, &geometry);
        assert_eq!(offset, geometry.min_offset());
        assert_eq!(session.translation, 0.0);

        let offset = session.track(1000.0, &geometry);
        assert_eq!(offset, geometry.max_offset());
        assert_eq!(session.presented_offset(), geometry.max_offset());

        let offset = session.track(130.0, &geometry);
        assert_eq!(offset, geometry.min_offset() + 130.0);
    }

    #[test]
    fn test_non_finite_translation_is_no_movement() {
        let geometry = TrackGeometry::new(300.0, 60.0, 40.0);
        let mut session = DragSession::new(geometry.min_offset() + 50.0);

        for raw in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let offset = session.track(raw, &geometry);
            assert_eq!(offset, geometry.min_offset() + 50.0, "translation {}", raw);
            assert_eq!(session.translation, 0.0);
        }
    }
}

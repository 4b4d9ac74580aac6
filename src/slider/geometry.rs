//! Track geometry and the offset <-> progress mapping
//!
//! The ball's leading edge moves between `min_offset` and `max_offset`.
//! When the capsule is thinner than the ball the padding is negative and the
//! ball overhangs both ends of the track.

/// Clamp a progress value into `[0, 1]`, mapping NaN to 0
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Dimensions of the capsule track and the ball riding on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Laid-out width of the capsule (0 until the host reports a layout)
    pub track_length: f32,
    /// Diameter of the ball
    pub element_size: f32,
    /// `(capsule_height - element_size) / 2`
    pub padding: f32,
}

impl TrackGeometry {
    pub fn new(track_length: f32, element_size: f32, capsule_height: f32) -> Self {
        Self {
            track_length,
            element_size,
            padding: (capsule_height - element_size) / 2.0,
        }
    }

    pub fn min_offset(&self) -> f32 {
        self.padding
    }

    pub fn max_offset(&self) -> f32 {
        self.track_length - self.element_size - self.padding
    }

    /// Usable travel distance of the ball
    pub fn range(&self) -> f32 {
        self.max_offset() - self.min_offset()
    }

    /// The host has reported a non-zero track width
    pub fn is_laid_out(&self) -> bool {
        self.track_length > 0.0
    }

    /// There is room for the ball to move
    pub fn is_valid(&self) -> bool {
        self.max_offset() > self.min_offset()
    }

    /// Offset of the ball for a normalized progress, `None` on a degenerate track
    pub fn offset_for(&self, progress: f32) -> Option<f32> {
        if !self.is_valid() {
            return None;
        }
        Some(self.min_offset() + self.range() * clamp_progress(progress))
    }

    /// Normalized progress for an offset, 0 on a degenerate track
    pub fn progress_for(&self, offset: f32) -> f32 {
        if !self.is_valid() {
            return 0.0;
        }
        clamp_progress((offset - self.min_offset()) / self.range())
    }

    /// Clamp an offset into the travel range
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if !self.is_valid() {
            return self.min_offset();
        }
        offset.clamp(self.min_offset(), self.max_offset())
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::new(0.0, 60.0, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_padding_from_capsule_height() {
        let geometry = TrackGeometry::new(300.0, 60.0, 40.0);
        assert_eq!(geometry.padding, -10.0);
        assert_eq!(geometry.min_offset(), -10.0);
        assert_eq!(geometry.max_offset(), 250.0);
    }

    #[test]
    fn test_round_trip() {
        let geometry = TrackGeometry::new(320.0, 60.0, 40.0);
        for i in 0..=20 {
            let p = i as f32 / 20.0;
            let offset = geometry.offset_for(p).expect("valid geometry");
            let back = geometry.progress_for(offset);
            assert!((back - p).abs() < EPS, "round trip of {} gave {}", p, back);
        }
    }

    #[test]
    fn test_offset_for_clamps_input() {
        let geometry = TrackGeometry::new(300.0, 60.0, 40.0);
        assert_eq!(geometry.offset_for(-3.0), Some(geometry.min_offset()));
        assert_eq!(geometry.offset_for(7.0), Some(geometry.max_offset()));
        assert_eq!(geometry.offset_for(f32::NAN), Some(geometry.min_offset()));
    }

    #[test]
    fn test_degenerate_geometry() {
        let geometry = TrackGeometry::new(50.0, 60.0, 60.0);
        assert!(!geometry.is_valid());
        assert_eq!(geometry.offset_for(0.5), None);
        assert_eq!(geometry.progress_for(25.0), 0.0);

        let unlaid = TrackGeometry::default();
        assert!(!unlaid.is_laid_out());
        assert_eq!(unlaid.progress_for(0.0), 0.0);
    }

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(f32::NAN), 0.0);
        assert_eq!(clamp_progress(-0.2), 0.0);
        assert_eq!(clamp_progress(1.5), 1.0);
        assert_eq!(clamp_progress(0.42), 0.42);
    }
}

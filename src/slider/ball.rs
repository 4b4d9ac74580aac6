//! The draggable ball control
//!
//! Owns the committed offset and arbitrates between the three actors that
//! want to move the ball: the user's drag, the idle hint/tap nudges, and
//! programmatic `set_progress` calls.
//!
//! ## State tiers
//!
//! - **Committed offset**: authoritative, read by `current_progress`.
//! - **Presented offset**: what the renderer shows. Differs from the committed
//!   offset only while a drag translation or an animation is active.
//!
//! Anything that takes over the ball first snaps the committed offset to the
//! presented one, so the ball never jumps and two animations never compete.
//!
//! ## Host contract
//!
//! All calls happen on one thread. The host reports layout through
//! `set_track_length`, forwards gestures, and calls `tick` every frame while
//! `needs_frames()` holds and by `next_deadline()` otherwise.

use std::f32::consts::PI;
use std::sync::{Arc, Weak};
use std::time::Instant;

use super::clock::{Clock, SystemClock};
use super::config::{Rgba, SliderConfig};
use super::drag::{DragPhase, DragSession};
use super::geometry::{TrackGeometry, clamp_progress};
use super::hint::{HintTimer, hint_timeline, tap_timeline};
use super::observer::{ObserverSlot, SliderObserver};
use super::threshold::{COMPLETED, ThresholdNotifier};
use super::timeline::{Easing, Timeline};

/// Which actor owns the running animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Hint,
    Tap,
    Programmatic,
}

#[derive(Debug, Clone)]
struct RunningAnimation {
    kind: AnimationKind,
    timeline: Timeline,
    started: Instant,
    /// Progress reported when a programmatic transition lands
    settle_progress: Option<f32>,
}

impl RunningAnimation {
    fn sample(&self, now: Instant) -> f32 {
        self.timeline
            .sample(now.saturating_duration_since(self.started))
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.timeline
            .is_finished(now.saturating_duration_since(self.started))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingProgress {
    value: f32,
    animated: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Presented leading-edge offset of the ball
    pub ball_offset: f32,
    /// Width of the gradient fill
    pub fill_width: f32,
    /// Rotation of the indicator in radians, half a turn across the track
    pub indicator_rotation: f32,
    /// Presented progress (differs from `current_progress` mid-gesture)
    pub progress: f32,
    pub is_dragging: bool,
}

pub struct DraggableBall {
    config: SliderConfig,
    geometry: TrackGeometry,
    offset: f32,
    drag: Option<DragSession>,
    animation: Option<RunningAnimation>,
    hint_timer: HintTimer,
    intro_hint_pending: bool,
    intro_hint_scheduled: bool,
    pending: Option<PendingProgress>,
    thresholds: ThresholdNotifier,
    observer: ObserverSlot,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for DraggableBall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableBall")
            .field("geometry", &self.geometry)
            .field("offset", &self.offset)
            .field("drag", &self.drag)
            .field("animation", &self.animation.as_ref().map(|a| a.kind))
            .field("hint_timer", &self.hint_timer)
            .field("pending", &self.pending)
            .field("observer", &self.observer.is_attached())
            .finish()
    }
}

impl DraggableBall {
    /// Create a control driven by the system clock
    pub fn new(config: SliderConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a control driven by `clock`
    ///
    /// An invalid configuration is logged and used as far as it goes; timer
    /// intervals are raised to a minimum so `tick` always makes progress.
    pub fn with_clock(config: SliderConfig, clock: Arc<dyn Clock>) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!("Slider config is invalid: {}", err);
        }
        let geometry = TrackGeometry::new(0.0, config.ball_size, config.capsule_height);
        let hint_timer = HintTimer::new(config.motion.hint_interval());
        Self {
            offset: geometry.min_offset(),
            geometry,
            drag: None,
            animation: None,
            hint_timer,
            intro_hint_pending: false,
            intro_hint_scheduled: false,
            pending: None,
            thresholds: ThresholdNotifier::new(),
            observer: ObserverSlot::default(),
            clock,
            config,
        }
    }

    /// Attach, replace or detach (`None`) the observer
    pub fn set_observer(&mut self, observer: Option<Weak<dyn SliderObserver>>) {
        self.observer.set(observer);
    }

    // ========== Queries ==========

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Committed progress in `[0, 1]`
    pub fn current_progress(&self) -> f32 {
        self.geometry.progress_for(self.offset)
    }

    pub fn is_completed(&self) -> bool {
        self.current_progress() >= COMPLETED
    }

    pub fn committed_offset(&self) -> f32 {
        self.offset
    }

    pub fn presented_offset(&self) -> f32 {
        if let Some(session) = &self.drag {
            session.presented_offset()
        } else if let Some(animation) = &self.animation {
            animation.sample(self.clock.now())
        } else {
            self.offset
        }
    }

    pub fn presentation(&self) -> Presentation {
        let ball_offset = self.presented_offset();
        let progress = self.geometry.progress_for(ball_offset);
        Presentation {
            ball_offset,
            fill_width: self.geometry.track_length * progress,
            indicator_rotation: progress * PI,
            progress,
            is_dragging: self.drag.is_some(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Committed offset the active drag started from
    pub fn drag_start_offset(&self) -> Option<f32> {
        self.drag.map(|session| session.start_offset)
    }

    pub fn animation_kind(&self) -> Option<AnimationKind> {
        self.animation.as_ref().map(|a| a.kind)
    }

    pub fn is_hint_armed(&self) -> bool {
        self.hint_timer.is_armed()
    }

    /// The host should tick every frame
    pub fn needs_frames(&self) -> bool {
        self.animation.is_some() || self.pending.is_some() || self.intro_hint_pending
    }

    /// When the hint timer next wants a tick
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hint_timer.next_fire()
    }

    // ========== Programmatic progress ==========

    /// Move the ball to `value` (clamped to `[0, 1]`, NaN as 0)
    ///
    /// Deferred until the next `tick` if the track has no width yet. Animated
    /// calls notify the observer when the transition lands.
    pub fn set_progress(&mut self, value: f32, animated: bool) {
        let value = clamp_progress(value);

        if !self.geometry.is_laid_out() {
            tracing::debug!("Track not laid out, deferring set_progress({})", value);
            self.pending = Some(PendingProgress { value, animated });
            return;
        }
        self.pending = None;
        self.disarm_hint("progress set programmatically");

        let Some(target) = self.geometry.offset_for(value) else {
            tracing::debug!("Degenerate track geometry, ignoring set_progress({})", value);
            return;
        };

        let from = self.interrupt_animation();
        let duration = self.config.motion.transition();
        self.offset = target;

        if animated && !duration.is_zero() {
            self.animation = Some(RunningAnimation {
                kind: AnimationKind::Programmatic,
                timeline: Timeline::transition(from, target, duration, Easing::EaseInOut),
                started: self.clock.now(),
                settle_progress: Some(value),
            });
        } else {
            self.settle(value);
        }
    }

    // ========== Gestures ==========

    pub fn handle_drag(&mut self, phase: DragPhase) {
        match phase {
            DragPhase::Began => self.begin_drag(),
            DragPhase::Changed { translation } => self.drag_changed(translation),
            DragPhase::Ended { translation } | DragPhase::Cancelled { translation } => {
                self.end_drag(translation)
            }
        }
    }

    pub fn begin_drag(&mut self) {
        if !self.geometry.is_valid() || self.drag.is_some() {
            return;
        }
        self.disarm_hint("drag began");
        self.intro_hint_pending = false;

        let start = self.interrupt_animation();
        self.drag = Some(DragSession::new(start));
    }

    /// Continuous feedback; the committed offset is untouched
    pub fn drag_changed(&mut self, translation: f32) {
        let geometry = self.geometry;
        if !geometry.is_valid() {
            return;
        }
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let offset = session.track(translation, &geometry);
        self.observer.progress(geometry.progress_for(offset));
    }

    /// Commit the drag; ended and cancelled gestures settle the same way
    pub fn end_drag(&mut self, translation: f32) {
        let Some(mut session) = self.drag.take() else {
            return;
        };
        let geometry = self.geometry;
        if !geometry.is_valid() {
            tracing::debug!("Track became degenerate mid-drag, dropping the gesture");
            return;
        }
        self.offset = session.track(translation, &geometry);
        self.settle(self.current_progress());
        self.manage_hint_timer();
    }

    /// A tap on the ball plays a single, larger nudge
    pub fn tap(&mut self) {
        if !self.geometry.is_valid() || self.drag.is_some() {
            return;
        }
        self.disarm_hint("tap");
        self.intro_hint_pending = false;

        let origin = self.interrupt_animation();
        let motion = &self.config.motion;
        let timeline = tap_timeline(
            origin,
            &self.geometry,
            motion.hint_amount,
            motion.tap_duration(),
        );
        self.animation = Some(RunningAnimation {
            kind: AnimationKind::Tap,
            timeline,
            started: self.clock.now(),
            settle_progress: None,
        });
    }

    // ========== Time ==========

    /// Advance animations, retry deferred work and fire the hint timer
    pub fn tick(&mut self) {
        let now = self.clock.now();

        if self.animation.as_ref().is_some_and(|a| a.is_finished(now)) {
            if let Some(animation) = self.animation.take() {
                self.complete_animation(animation);
            }
        }

        if let Some(pending) = self.pending.take() {
            self.set_progress(pending.value, pending.animated);
        }

        if self.intro_hint_pending && self.drag.is_none() && self.animation.is_none() {
            self.intro_hint_pending = false;
            if self.hint_allowed() {
                self.start_hint(now);
            } else {
                self.manage_hint_timer();
            }
        }

        if self.hint_timer.poll(now) {
            if self.hint_allowed() {
                self.start_hint(now);
            } else {
                tracing::trace!("Hint timer fired while busy, skipping");
            }
        }
    }

    /// Stop every timer and animation; the control stays usable afterwards
    pub fn teardown(&mut self) {
        self.hint_timer.disarm();
        self.animation = None;
        self.drag = None;
        self.pending = None;
        self.intro_hint_pending = false;
    }

    // ========== Layout and appearance ==========

    /// Laid-out width of the capsule as measured by the host
    pub fn set_track_length(&mut self, track_length: f32) {
        let track_length = if track_length.is_finite() {
            track_length.max(0.0)
        } else {
            0.0
        };
        if track_length == self.geometry.track_length {
            return;
        }
        self.relayout(|ball| ball.geometry.track_length = track_length);
    }

    pub fn set_ball_size(&mut self, size: f32) {
        if !(size.is_finite() && size > 0.0) {
            tracing::warn!("Ignoring invalid ball size {}", size);
            return;
        }
        self.relayout(|ball| ball.config.ball_size = size);
    }

    pub fn set_capsule_height(&mut self, height: f32) {
        if !(height.is_finite() && height > 0.0) {
            tracing::warn!("Ignoring invalid capsule height {}", height);
            return;
        }
        self.relayout(|ball| ball.config.capsule_height = height);
    }

    /// Fixed capsule width, or `None` to fill the container
    ///
    /// The host re-measures and reports the result through `set_track_length`.
    pub fn set_capsule_width(&mut self, width: Option<f32>) {
        self.config.capsule_width = width.filter(|w| w.is_finite() && *w > 0.0);
    }

    pub fn set_indicator_size(&mut self, size: f32) {
        self.config.indicator_size = size.max(0.0);
    }

    pub fn set_indicator_top_offset(&mut self, offset: f32) {
        self.config.indicator_top_offset = offset;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.fill_text = Some(text.into());
    }

    pub fn set_font(&mut self, name: impl Into<String>, size: f32, color: Option<Rgba>) {
        self.config.font.name = name.into();
        self.set_font_size(size);
        if let Some(color) = color {
            self.config.font.color = color;
        }
    }

    pub fn set_font_size(&mut self, size: f32) {
        if size.is_finite() && size > 0.0 {
            self.config.font.size = size;
        }
    }

    pub fn set_font_color(&mut self, color: Rgba) {
        self.config.font.color = color;
    }

    pub fn set_fill_gradient_colors(&mut self, colors: Vec<Rgba>) {
        if colors.is_empty() {
            tracing::warn!("Ignoring empty fill gradient");
            return;
        }
        self.config.fill_gradient = colors;
    }

    pub fn set_corner_inner_shadow(&mut self, show: bool, alpha: f32) {
        self.config.corner_inner_shadow.show = show;
        self.config.corner_inner_shadow.alpha = clamp_progress(alpha);
    }

    pub fn set_top_inner_shadow(&mut self, show: bool, alpha: f32) {
        self.config.top_inner_shadow.show = show;
        self.config.top_inner_shadow.alpha = clamp_progress(alpha);
    }

    // ========== Internals ==========

    /// Rebuild geometry after `change`, keeping the normalized progress
    fn relayout(&mut self, change: impl FnOnce(&mut Self)) {
        if let Some(animation) = self.animation.take() {
            self.complete_animation(animation);
        }
        let progress = self.current_progress();
        let drag_progress = self
            .drag
            .map(|session| self.geometry.progress_for(session.start_offset));
        let was_valid = self.geometry.is_valid();

        change(self);
        self.geometry = TrackGeometry::new(
            self.geometry.track_length,
            self.config.ball_size,
            self.config.capsule_height,
        );

        let geometry = self.geometry;
        if let Some(offset) = geometry.offset_for(progress) {
            self.offset = offset;
        }
        if let (Some(session), Some(start)) = (self.drag.as_mut(), drag_progress) {
            if let Some(offset) = geometry.offset_for(start) {
                *session = DragSession::new(offset);
            }
        }

        if !was_valid && geometry.is_valid() && !self.intro_hint_scheduled {
            tracing::info!(
                "Track laid out: length {}, travel {}",
                geometry.track_length,
                geometry.range()
            );
            self.intro_hint_scheduled = true;
            self.intro_hint_pending = true;
        } else if !geometry.is_valid() && geometry.is_laid_out() {
            tracing::debug!("Track too small for the ball, control is inert");
        }
    }

    /// Stop the running animation where it is and make that the committed offset
    fn interrupt_animation(&mut self) -> f32 {
        if let Some(animation) = self.animation.take() {
            let presented = animation.sample(self.clock.now());
            tracing::debug!(
                "Interrupting {:?} animation at offset {}",
                animation.kind,
                presented
            );
            self.offset = presented;
        }
        self.offset
    }

    fn complete_animation(&mut self, animation: RunningAnimation) {
        self.offset = animation.timeline.final_value();
        match animation.kind {
            AnimationKind::Programmatic => {
                let progress = animation
                    .settle_progress
                    .unwrap_or_else(|| self.current_progress());
                self.settle(progress);
            }
            AnimationKind::Hint | AnimationKind::Tap => self.manage_hint_timer(),
        }
    }

    /// Report a settled value: progress first, then any threshold crossing
    fn settle(&mut self, progress: f32) {
        self.observer.progress(progress);
        if let Some(event) = self.thresholds.settle(progress) {
            tracing::debug!("Threshold reached: {:?} at {}", event, progress);
            self.observer.threshold(event);
        }
    }

    fn is_at_start(&self) -> bool {
        self.current_progress().abs() < self.config.motion.progress_tolerance
    }

    fn hint_allowed(&self) -> bool {
        self.geometry.is_valid()
            && self.drag.is_none()
            && self.animation.is_none()
            && self.pending.is_none()
            && self.is_at_start()
    }

    fn start_hint(&mut self, now: Instant) {
        let motion = &self.config.motion;
        let timeline = hint_timeline(
            self.offset,
            &self.geometry,
            motion.hint_amount,
            motion.hint_duration(),
        );
        self.animation = Some(RunningAnimation {
            kind: AnimationKind::Hint,
            timeline,
            started: now,
            settle_progress: None,
        });
    }

    /// Keep the hint timer armed exactly while the ball rests at the start
    fn manage_hint_timer(&mut self) {
        if self.geometry.is_valid() && self.drag.is_none() && self.is_at_start() {
            self.hint_timer
                .set_interval(self.config.motion.hint_interval());
            self.hint_timer.arm(self.clock.now());
            tracing::trace!("Hint timer armed");
        } else {
            self.disarm_hint("ball away from start");
        }
    }

    fn disarm_hint(&mut self, reason: &str) {
        if self.hint_timer.is_armed() {
            tracing::trace!("Hint timer disarmed: {}", reason);
            self.hint_timer.disarm();
        }
    }
}

impl Drop for DraggableBall {
    fn drop(&mut self) {
        self.teardown();
    }
}

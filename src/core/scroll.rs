//! Inertial scroll controller.
//!
//! Wheel input moves a virtual *target* immediately; the rendered *current*
//! position chases it one frame at a time, covering `1 / smoothing` of the
//! remaining distance per frame.  This is an exponential-decay filter, not a
//! fixed-duration tween: how long it takes depends only on distance.
//!
//! The controller is a two-state machine:
//!
//! ```text
//!            input moves target away from current
//!   Idle ───────────────────────────────────────────▶ Converging
//!    ▲                                                  │    ▲
//!    │          |step| <= threshold                     │    │ |step| > threshold
//!    └──────────────────────────────────────────────────┘    └──┘
//! ```
//!
//! The host drives `tick` from its per-frame callback only while
//! [`ScrollController::is_animating`] is `true`.

use crate::error::ConfigError;

use super::wheel::{self, WheelSample};

// ───────────────────────────────────────── config ────────────

/// Tuning constants, fixed once the controller is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Scroll distance per wheel notch.
    pub speed: f64,
    /// Divisor of the remaining distance per frame.  Higher = softer.
    pub smoothing: f64,
    /// Per-frame step at or below which the loop settles.
    pub threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            speed: 30.0,
            smoothing: 12.0,
            threshold: 0.5,
        }
    }
}

impl ScrollConfig {
    /// Reject values that would make the follower diverge or never settle.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.smoothing.is_finite() || self.smoothing < 1.0 {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(self)
    }
}

// ───────────────────────────────────────── host seam ─────────

/// Live layout snapshot of the scrolling element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollExtent {
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ScrollExtent {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            content_height,
            viewport_height,
        }
    }

    /// Largest valid offset.  Content shorter than the viewport gives zero,
    /// never a negative bound.
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// The element whose scroll offset the controller owns.
pub trait ScrollSurface {
    /// Current content and viewport dimensions.
    fn extent(&self) -> ScrollExtent;
    /// Write the eased scroll offset.
    fn set_offset(&mut self, offset: f64);
}

// ───────────────────────────────────────── state ─────────────

/// Whether the follower loop is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Converging,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub current_position: f64,
    pub target_position: f64,
    pub phase: Phase,
}

/// Outcome of one follower-loop frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Position written to the surface.
    pub position: f64,
    /// Distance moved this frame.
    pub step: f64,
    /// Phase after this frame; `Converging` means "schedule another".
    pub phase: Phase,
}

// ───────────────────────────────────────── controller ────────

#[derive(Debug, Clone)]
pub struct ScrollController {
    config: ScrollConfig,
    state: ScrollState,
    /// Last normalised wheel delta, kept for the debug overlay.
    last_notches: f64,
    /// Step of the most recent frame.
    last_step: f64,
}

impl ScrollController {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
            last_notches: 0.0,
            last_step: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// `true` while the host should keep delivering frames.
    pub fn is_animating(&self) -> bool {
        self.state.phase == Phase::Converging
    }

    pub fn last_notches(&self) -> f64 {
        self.last_notches
    }

    pub fn last_step(&self) -> f64 {
        self.last_step
    }

    // ── integrator ──────────────────────────────────────────────

    /// Feed one wheel event.  Returns the normalised delta (notches).
    ///
    /// `extent` must be read from the host at event time so the clamp follows
    /// live layout changes.
    pub fn handle_wheel(&mut self, sample: WheelSample, extent: ScrollExtent) -> f64 {
        let notches = wheel::normalize(sample);
        self.last_notches = notches;
        self.scroll_by(-notches * self.config.speed, extent);
        notches
    }

    /// Move the target by `pixels` (positive = down).
    pub fn scroll_by(&mut self, pixels: f64, extent: ScrollExtent) {
        if !pixels.is_finite() {
            return;
        }
        self.scroll_to(self.state.target_position + pixels, extent);
    }

    /// Set the target outright, clamped to the content bounds.
    pub fn scroll_to(&mut self, position: f64, extent: ScrollExtent) {
        if !position.is_finite() {
            return;
        }
        let target = clamp_to(position, extent);
        if target == self.state.target_position {
            return;
        }
        self.state.target_position = target;
        self.wake();
    }

    /// Re-clamp after the host's layout changed (resize, content swap).
    ///
    /// Returns `true` when either position had to move.
    pub fn relayout(&mut self, extent: ScrollExtent) -> bool {
        let target = clamp_to(self.state.target_position, extent);
        let current = clamp_to(self.state.current_position, extent);
        let moved =
            target != self.state.target_position || current != self.state.current_position;
        self.state.target_position = target;
        self.state.current_position = current;
        if moved {
            tracing::debug!(to = target, at = current, "relayout clamped scroll position");
            self.wake();
        }
        moved
    }

    /// Idle → Converging when there is somewhere to go.  Only called after
    /// input actually moved a position; the settled residual alone never
    /// restarts the loop.
    fn wake(&mut self) {
        if self.state.phase == Phase::Idle
            && self.state.target_position != self.state.current_position
        {
            self.state.phase = Phase::Converging;
            tracing::debug!(
                from = self.state.current_position,
                to = self.state.target_position,
                "scroll loop started"
            );
        }
    }

    // ── follower loop ───────────────────────────────────────────

    /// Advance one animation frame.  A no-op while idle.
    pub fn tick<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) -> Frame {
        if self.state.phase == Phase::Idle {
            return Frame {
                position: self.state.current_position,
                step: 0.0,
                phase: Phase::Idle,
            };
        }

        let step = (self.state.target_position - self.state.current_position)
            / self.config.smoothing;
        self.state.current_position += step;
        self.last_step = step;
        surface.set_offset(self.state.current_position);

        if step.abs() <= self.config.threshold {
            self.state.phase = Phase::Idle;
            tracing::debug!(position = self.state.current_position, "scroll loop settled");
        }

        Frame {
            position: self.state.current_position,
            step,
            phase: self.state.phase,
        }
    }
}

fn clamp_to(position: f64, extent: ScrollExtent) -> f64 {
    position.clamp(0.0, extent.max_scroll())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal host that records every write.
    struct Recorder {
        extent: ScrollExtent,
        writes: Vec<f64>,
    }

    impl Recorder {
        fn new(content: f64, viewport: f64) -> Self {
            Self {
                extent: ScrollExtent::new(content, viewport),
                writes: Vec::new(),
            }
        }
    }

    impl ScrollSurface for Recorder {
        fn extent(&self) -> ScrollExtent {
            self.extent
        }
        fn set_offset(&mut self, offset: f64) {
            self.writes.push(offset);
        }
    }

    fn controller() -> ScrollController {
        ScrollController::new(ScrollConfig::default())
    }

    #[test]
    fn wheel_down_moves_target_by_speed() {
        let mut c = controller();
        let host = Recorder::new(1000.0, 200.0);
        c.handle_wheel(WheelSample::from_notches(-1.0), host.extent());
        assert_eq!(c.state().target_position, 30.0);
        assert!(c.is_animating());
    }

    #[test]
    fn target_stays_in_bounds_for_any_sequence() {
        let mut c = controller();
        let host = Recorder::new(500.0, 200.0);
        let notches = [-3.0, -10.0, -50.0, 2.0, 40.0, -1.5, 0.0, -7.0, 100.0, -0.25];
        for n in notches {
            c.handle_wheel(WheelSample::from_notches(n), host.extent());
            let t = c.state().target_position;
            assert!((0.0..=300.0).contains(&t), "target {t} escaped bounds");
        }
    }

    #[test]
    fn max_scroll_tracks_live_extent() {
        let mut c = controller();
        c.handle_wheel(WheelSample::from_notches(-100.0), ScrollExtent::new(400.0, 100.0));
        assert_eq!(c.state().target_position, 300.0);
        // Content grew; the next event sees the new bound.
        c.handle_wheel(WheelSample::from_notches(-100.0), ScrollExtent::new(2000.0, 100.0));
        assert_eq!(c.state().target_position, 1900.0);
    }

    #[test]
    fn short_content_clamps_to_zero() {
        let mut c = controller();
        c.handle_wheel(WheelSample::from_notches(-5.0), ScrollExtent::new(50.0, 200.0));
        assert_eq!(c.state().target_position, 0.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn zero_delta_is_idempotent() {
        let mut c = controller();
        let extent = ScrollExtent::new(1000.0, 100.0);
        c.handle_wheel(WheelSample::from_notches(-2.0), extent);
        let before = c.state().target_position;
        for _ in 0..5 {
            c.handle_wheel(WheelSample::default(), extent);
        }
        assert_eq!(c.state().target_position, before);
    }

    #[test]
    fn zero_delta_while_idle_does_not_start_loop() {
        let mut c = controller();
        c.handle_wheel(WheelSample::default(), ScrollExtent::new(1000.0, 100.0));
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn no_effect_input_after_settling_stays_idle() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(120.0, host.extent());
        while c.is_animating() {
            c.tick(&mut host);
        }
        // Settled short of the target; that gap alone must not wake the loop.
        assert_ne!(c.state().current_position, c.state().target_position);

        c.handle_wheel(WheelSample::default(), host.extent());
        assert_eq!(c.phase(), Phase::Idle);
        c.scroll_to(120.0, host.extent());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.relayout(host.extent()));
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn notch_past_the_end_stays_idle() {
        let mut c = controller();
        let mut host = Recorder::new(400.0, 100.0);
        c.scroll_to(300.0, host.extent());
        while c.is_animating() {
            c.tick(&mut host);
        }
        let writes = host.writes.len();
        c.handle_wheel(WheelSample::from_notches(-1.0), host.extent());
        assert_eq!(c.state().target_position, 300.0);
        assert!(!c.is_animating());
        c.tick(&mut host);
        assert_eq!(host.writes.len(), writes);
    }

    #[test]
    fn first_frame_covers_one_twelfth() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(120.0, host.extent());
        let frame = c.tick(&mut host);
        assert_eq!(frame.position, 10.0);
        assert_eq!(frame.step, 10.0);
        assert_eq!(frame.phase, Phase::Converging);
        assert_eq!(host.writes, vec![10.0]);
    }

    #[test]
    fn converges_monotonically_and_settles_within_six() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(120.0, host.extent());

        let mut prev = 0.0;
        let mut frames = 0;
        loop {
            let remaining_before = 120.0 - c.state().current_position;
            let frame = c.tick(&mut host);
            frames += 1;
            assert!(frame.position >= prev, "moved backwards");
            assert!(frame.position <= 120.0, "overshot target");
            prev = frame.position;

            match frame.phase {
                Phase::Converging => assert!(remaining_before > 6.0),
                Phase::Idle => {
                    assert!(remaining_before <= 6.0);
                    break;
                }
            }
            assert!(frames < 1000, "never settled");
        }
        assert!(!c.is_animating());
        assert_eq!(host.writes.len(), frames);
    }

    #[test]
    fn tick_while_idle_is_noop() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        let frame = c.tick(&mut host);
        assert_eq!(frame.phase, Phase::Idle);
        assert_eq!(frame.step, 0.0);
        assert!(host.writes.is_empty());
    }

    #[test]
    fn input_while_idle_restarts_loop() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(60.0, host.extent());
        while c.is_animating() {
            c.tick(&mut host);
        }
        c.handle_wheel(WheelSample::from_notches(-1.0), host.extent());
        assert!(c.is_animating());
        let frame = c.tick(&mut host);
        assert!(frame.step > 0.0);
    }

    #[test]
    fn reversing_mid_flight_heads_back() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(300.0, host.extent());
        for _ in 0..5 {
            c.tick(&mut host);
        }
        c.scroll_to(0.0, host.extent());
        let frame = c.tick(&mut host);
        assert!(frame.step < 0.0);
        assert_eq!(frame.phase, Phase::Converging);
    }

    #[test]
    fn sub_one_smoothing_never_settles() {
        let config = ScrollConfig {
            smoothing: 0.5,
            ..ScrollConfig::default()
        };
        let mut c = ScrollController::new(config);
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(120.0, host.extent());
        for _ in 0..1000 {
            c.tick(&mut host);
        }
        assert!(c.is_animating());
        assert!(config.validate().is_err());
    }

    #[test]
    fn relayout_reclamps_both_positions() {
        let mut c = controller();
        let mut host = Recorder::new(1000.0, 100.0);
        c.scroll_to(800.0, host.extent());
        while c.is_animating() {
            c.tick(&mut host);
        }
        assert!(c.relayout(ScrollExtent::new(500.0, 100.0)));
        assert_eq!(c.state().target_position, 400.0);
        assert_eq!(c.state().current_position, 400.0);
        assert!(!c.relayout(ScrollExtent::new(500.0, 100.0)));
    }

    #[test]
    fn non_finite_scroll_requests_are_ignored() {
        let mut c = controller();
        let extent = ScrollExtent::new(1000.0, 100.0);
        c.scroll_to(50.0, extent);
        c.scroll_by(f64::NAN, extent);
        c.scroll_to(f64::INFINITY, extent);
        assert_eq!(c.state().target_position, 50.0);
    }

    #[test]
    fn validate_accepts_defaults_and_rejects_nonsense() {
        assert!(ScrollConfig::default().validate().is_ok());
        let bad_speed = ScrollConfig {
            speed: -1.0,
            ..ScrollConfig::default()
        };
        assert_eq!(bad_speed.validate(), Err(ConfigError::InvalidSpeed(-1.0)));
        let bad_threshold = ScrollConfig {
            threshold: 0.0,
            ..ScrollConfig::default()
        };
        assert_eq!(
            bad_threshold.validate(),
            Err(ConfigError::InvalidThreshold(0.0))
        );
    }
}

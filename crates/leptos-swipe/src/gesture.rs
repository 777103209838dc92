//! Swipe Gesture State Machine
//!
//! Pure transition functions for a single-pointer horizontal swipe.
//! No DOM access here: the Leptos bindings in `lib.rs` feed coordinates in
//! and render whatever these functions return.

/// Minimum horizontal travel (px) before a release commits an action
pub const DEFAULT_COMMIT_THRESHOLD_PX: f64 = 80.0;

/// Maximum travel (px) on each axis for a release to count as a tap
pub const DEFAULT_TAP_TOLERANCE_PX: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub commit_threshold: f64,
    pub tap_tolerance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD_PX,
            tap_tolerance: DEFAULT_TAP_TOLERANCE_PX,
        }
    }
}

/// Direction of a horizontal swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// deltaX > 0
    Right,
    /// deltaX < 0
    Left,
}

impl SwipeDirection {
    pub fn from_delta(dx: f64) -> Self {
        if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left }
    }
}

/// Axis lock while tracking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Unknown,
    Horizontal,
}

/// Per-gesture phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Tracking(Axis),
    /// Vertical movement won; the browser scrolls and we stay out of it
    ScrollPassthrough,
}

/// Background affordance revealed under the row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub direction: SwipeDirection,
    /// 0.0 ..= 1.0
    pub opacity: f64,
}

/// What a touch-move should do to the row
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveEffect {
    /// Not tracking this gesture
    Ignored,
    /// Tracking, but still inside the tap tolerance
    Pending,
    /// Vertical scroll detected; release the row
    Scroll,
    /// Translate the row and reveal an affordance
    Drag { offset: f64, reveal: Option<Reveal> },
}

/// Outcome of a touch-end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    Tap,
    Commit(SwipeDirection),
    SnapBack,
    Scroll,
}

impl Release {
    /// Whether the browser's emulated click after this touch should be
    /// swallowed. Scrolls and snap-backs leave later clicks alone.
    pub fn suppresses_click(&self) -> bool {
        matches!(self, Release::Tap | Release::Commit(_))
    }
}

/// Affordance for a given horizontal delta
pub fn reveal_for(dx: f64, config: &SwipeConfig) -> Option<Reveal> {
    if dx == 0.0 {
        return None;
    }
    Some(Reveal {
        direction: SwipeDirection::from_delta(dx),
        opacity: (dx.abs() / config.commit_threshold).min(1.0),
    })
}

/// Classify a finished tracked gesture from its final deltas.
///
/// Once `axis` is locked horizontal, vertical drift no longer matters and
/// only `dx` decides between commit and snap-back.
pub fn classify_release(dx: f64, dy: f64, axis: Axis, config: &SwipeConfig) -> Release {
    let horizontal_wins = axis == Axis::Horizontal || dx.abs() >= dy.abs();
    if dx.abs() <= config.tap_tolerance && dy.abs() <= config.tap_tolerance {
        Release::Tap
    } else if dx.abs() > config.commit_threshold && horizontal_wins {
        Release::Commit(SwipeDirection::from_delta(dx))
    } else {
        Release::SnapBack
    }
}

/// Gesture session for one row at a time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    pub config: SwipeConfig,
    phase: Phase,
    start_x: f64,
    start_y: f64,
    dx: f64,
    dy: f64,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn delta(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Start tracking at (x, y)
    pub fn begin(&mut self, x: f64, y: f64) {
        self.phase = Phase::Tracking(Axis::Unknown);
        self.start_x = x;
        self.start_y = y;
        self.dx = 0.0;
        self.dy = 0.0;
    }

    /// Drop the session without an outcome (touchcancel)
    pub fn cancel(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn update(&mut self, x: f64, y: f64) -> MoveEffect {
        let axis = match self.phase {
            Phase::Idle => return MoveEffect::Ignored,
            Phase::ScrollPassthrough => return MoveEffect::Scroll,
            Phase::Tracking(axis) => axis,
        };
        self.dx = x - self.start_x;
        self.dy = y - self.start_y;

        if axis == Axis::Unknown {
            let tol = self.config.tap_tolerance;
            if self.dx.abs() <= tol && self.dy.abs() <= tol {
                return MoveEffect::Pending;
            }
            if self.dy.abs() > self.dx.abs() {
                self.phase = Phase::ScrollPassthrough;
                return MoveEffect::Scroll;
            }
            self.phase = Phase::Tracking(Axis::Horizontal);
        }

        MoveEffect::Drag {
            offset: self.dx,
            reveal: reveal_for(self.dx, &self.config),
        }
    }

    /// Finish the gesture. `end` is the final touch position when known.
    /// Returns `None` when nothing was being tracked.
    pub fn finish(&mut self, end: Option<(f64, f64)>) -> Option<Release> {
        let phase = self.phase;
        if let (Phase::Tracking(_), Some((x, y))) = (phase, end) {
            self.dx = x - self.start_x;
            self.dy = y - self.start_y;
        }
        let release = match phase {
            Phase::Idle => None,
            Phase::ScrollPassthrough => Some(Release::Scroll),
            Phase::Tracking(axis) => Some(classify_release(self.dx, self.dy, axis, &self.config)),
        };
        self.phase = Phase::Idle;
        release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(dx: f64, dy: f64) -> (SwipeTracker, Option<Release>) {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        t.begin(200.0, 300.0);
        // Intermediate move at half distance, then the final one
        t.update(200.0 + dx / 2.0, 300.0 + dy / 2.0);
        t.update(200.0 + dx, 300.0 + dy);
        let release = t.finish(None);
        (t, release)
    }

    #[test]
    fn small_moves_are_taps() {
        for d in [-5.0, -3.0, 0.0, 2.5, 5.0] {
            let (_, release) = drag(d, d);
            assert_eq!(release, Some(Release::Tap), "d = {d}");
        }
    }

    #[test]
    fn past_threshold_commits_by_sign() {
        for d in [81.0, 100.0, 240.0] {
            assert_eq!(drag(d, 0.0).1, Some(Release::Commit(SwipeDirection::Right)));
            assert_eq!(drag(-d, 0.0).1, Some(Release::Commit(SwipeDirection::Left)));
        }
    }

    #[test]
    fn between_tolerance_and_threshold_snaps_back() {
        for d in [6.0, 40.0, 79.9, 80.0] {
            assert_eq!(drag(d, 0.0).1, Some(Release::SnapBack), "d = {d}");
            assert_eq!(drag(-d, 0.0).1, Some(Release::SnapBack), "d = -{d}");
        }
    }

    #[test]
    fn drag_50_left_snaps_back_with_cleared_affordance() {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        t.begin(100.0, 100.0);
        let effect = t.update(50.0, 100.0);
        match effect {
            MoveEffect::Drag { offset, reveal: Some(reveal) } => {
                assert_eq!(offset, -50.0);
                assert_eq!(reveal.direction, SwipeDirection::Left);
                assert!((reveal.opacity - 0.625).abs() < f64::EPSILON);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(t.finish(None), Some(Release::SnapBack));
        assert_eq!(t.phase(), Phase::Idle);
        assert_eq!(reveal_for(0.0, &t.config), None);
    }

    #[test]
    fn drag_100_right_commits() {
        let (_, release) = drag(100.0, 3.0);
        assert_eq!(release, Some(Release::Commit(SwipeDirection::Right)));
    }

    #[test]
    fn opacity_saturates_at_threshold() {
        let config = SwipeConfig::default();
        assert_eq!(reveal_for(40.0, &config).unwrap().opacity, 0.5);
        assert_eq!(reveal_for(80.0, &config).unwrap().opacity, 1.0);
        assert_eq!(reveal_for(-300.0, &config).unwrap().opacity, 1.0);
    }

    #[test]
    fn vertical_motion_passes_through_to_scroll() {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        t.begin(0.0, 0.0);
        assert_eq!(t.update(2.0, 1.0), MoveEffect::Pending);
        assert_eq!(t.update(4.0, 30.0), MoveEffect::Scroll);
        assert_eq!(t.phase(), Phase::ScrollPassthrough);
        // Once scrolling, later horizontal travel is not intercepted
        assert_eq!(t.update(150.0, 30.0), MoveEffect::Scroll);
        assert_eq!(t.finish(Some((150.0, 30.0))), Some(Release::Scroll));
    }

    #[test]
    fn horizontal_lock_survives_later_vertical_drift() {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        t.begin(0.0, 0.0);
        assert!(matches!(t.update(20.0, 2.0), MoveEffect::Drag { .. }));
        assert!(matches!(t.update(30.0, 40.0), MoveEffect::Drag { offset, .. } if offset == 30.0));
        assert_eq!(t.phase(), Phase::Tracking(Axis::Horizontal));

        // Full affordance shown, thumb drifted further down than across
        match t.update(100.0, 120.0) {
            MoveEffect::Drag { offset, reveal: Some(reveal) } => {
                assert_eq!(offset, 100.0);
                assert_eq!(reveal.opacity, 1.0);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(t.finish(None), Some(Release::Commit(SwipeDirection::Right)));
    }

    #[test]
    fn unlocked_release_still_weighs_vertical_travel() {
        let config = SwipeConfig::default();
        assert_eq!(classify_release(100.0, 120.0, Axis::Unknown, &config), Release::SnapBack);
        assert_eq!(
            classify_release(100.0, 120.0, Axis::Horizontal, &config),
            Release::Commit(SwipeDirection::Right)
        );
        assert_eq!(classify_release(-3.0, 4.0, Axis::Horizontal, &config), Release::Tap);
    }

    #[test]
    fn only_taps_and_commits_swallow_the_next_click() {
        assert!(Release::Tap.suppresses_click());
        assert!(Release::Commit(SwipeDirection::Left).suppresses_click());
        assert!(!Release::Scroll.suppresses_click());
        assert!(!Release::SnapBack.suppresses_click());
    }

    #[test]
    fn untracked_gesture_yields_nothing() {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        assert_eq!(t.update(100.0, 0.0), MoveEffect::Ignored);
        assert_eq!(t.finish(Some((100.0, 0.0))), None);
    }

    #[test]
    fn end_position_is_folded_into_release() {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        t.begin(10.0, 10.0);
        assert_eq!(t.finish(Some((-100.0, 12.0))), Some(Release::Commit(SwipeDirection::Left)));
    }

    #[test]
    fn cancel_resets_session() {
        let mut t = SwipeTracker::new(SwipeConfig::default());
        t.begin(0.0, 0.0);
        t.update(60.0, 0.0);
        t.cancel();
        assert_eq!(t.phase(), Phase::Idle);
        assert_eq!(t.delta(), (0.0, 0.0));
    }
}

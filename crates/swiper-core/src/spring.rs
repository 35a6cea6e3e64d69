#![forbid(unsafe_code)]

//! Damped harmonic oscillator driving the continuous track position.
//!
//! The spring is the sole interpolator the swiper engine uses: every
//! settle animates the track toward `target_index * pane_extent` under
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! while drag frames bypass it entirely via [`Spring::set_immediate`].
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force strength. Higher = faster snap.
//! - **damping** (c): velocity drag. The default 200/30 pair is slightly
//!   overdamped for its scale, giving a quick settle with minimal bounce.
//! - **rest thresholds**: position delta and speed below which the spring
//!   is considered at rest and snapped exactly onto its target. Expressed
//!   in axis units (one unit = 1% of a pane in horizontal mode).
//!
//! # Integration
//!
//! Semi-implicit Euler with dt subdivision: `advance` splits any frame
//! delta into steps of at most 4ms so high stiffness stays numerically
//! stable even when a test feeds whole seconds at once.
//!
//! # Invariants
//!
//! 1. Positions and targets are unbounded reals; nothing is clamped.
//! 2. A spring at rest reports `position() == target()` exactly.
//! 3. `set_immediate` leaves the spring at rest with zero velocity, so a
//!    drag frame never fights a stale animation.
//! 4. A spring at rest stays at rest until `animate_to` moves the target
//!    beyond the rest threshold.

use std::time::Duration;

/// Maximum dt per integration step (4ms). Larger deltas are subdivided.
const MAX_STEP_SECS: f64 = 0.004;

/// Default stiffness/damping, matching a 200/30 spring.
const DEFAULT_STIFFNESS: f64 = 200.0;
const DEFAULT_DAMPING: f64 = 30.0;

/// Position delta (axis units) below which the spring counts as at rest.
const DEFAULT_REST_THRESHOLD: f64 = 0.01;

/// Speed (axis units/sec) below which, combined with the position
/// threshold, the spring counts as at rest.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.1;

/// Minimum stiffness to prevent degenerate springs.
const MIN_STIFFNESS: f64 = 0.1;

/// A damped spring over an unbounded track coordinate.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring resting at `position`.
    #[must_use]
    pub fn new(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: true,
        }
    }

    /// Set stiffness (builder). Clamped to a positive minimum.
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    /// Set damping (builder). Clamped to minimum 0.0.
    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(0.0);
        self
    }

    /// Set the rest position threshold (builder).
    #[must_use]
    pub fn with_rest_threshold(mut self, threshold: f64) -> Self {
        self.rest_threshold = threshold.abs();
        self
    }

    /// Current position (unbounded, axis units).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity (axis units/sec).
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current animation target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the spring has settled on its target.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Start animating toward `target`. Wakes the spring unless the move
    /// is within the rest threshold.
    pub fn animate_to(&mut self, target: f64) {
        if (self.target - target).abs() > self.rest_threshold {
            self.target = target;
            self.at_rest = false;
        } else {
            self.target = target;
        }
    }

    /// Place the spring at `position` immediately: no interpolation, zero
    /// velocity, at rest. Used for drag frames and the idle wrap fold.
    pub fn set_immediate(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// One integration step of `dt` seconds (semi-implicit Euler).
    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let total_secs = dt.as_secs_f64();
        if total_secs <= 0.0 {
            return;
        }

        let mut remaining = total_secs;
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        let pos_delta = (self.position - self.target).abs();
        if pos_delta < self.rest_threshold && self.velocity.abs() < self.velocity_threshold {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn simulate(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.advance(MS_16);
        }
    }

    #[test]
    fn starts_at_rest() {
        let spring = Spring::new(200.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 200.0);
        assert_eq!(spring.target(), 200.0);
    }

    #[test]
    fn reaches_target() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        simulate(&mut spring, 300);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 100.0);
    }

    #[test]
    fn rest_snaps_exactly_onto_target() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(300.0);
        simulate(&mut spring, 500);
        assert!(spring.is_at_rest());
        // Exact, not merely close: settle lands on i * D precisely.
        assert_eq!(spring.position(), 300.0);
    }

    #[test]
    fn negative_target() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(-100.0);
        simulate(&mut spring, 300);
        assert_eq!(spring.position(), -100.0);
    }

    #[test]
    fn set_immediate_kills_motion() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        simulate(&mut spring, 5);
        assert!(!spring.is_at_rest());

        spring.set_immediate(37.5);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 37.5);
        assert_eq!(spring.target(), 37.5);
        assert_eq!(spring.velocity(), 0.0);

        // No drift while at rest.
        spring.advance(Duration::from_secs(1));
        assert_eq!(spring.position(), 37.5);
    }

    #[test]
    fn animate_within_threshold_stays_at_rest() {
        let mut spring = Spring::new(100.0).with_rest_threshold(0.01);
        spring.animate_to(100.0 + 0.005);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn animate_beyond_threshold_wakes() {
        let mut spring = Spring::new(100.0);
        spring.animate_to(200.0);
        assert!(!spring.is_at_rest());
    }

    #[test]
    fn zero_dt_noop() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        spring.advance(Duration::ZERO);
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn large_dt_subdivided() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        spring.advance(Duration::from_secs(5));
        assert!(
            (spring.position() - 100.0).abs() < 0.01,
            "position: {}",
            spring.position()
        );
    }

    #[test]
    fn default_tuning_overshoot_is_small() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        let mut max_pos = 0.0_f64;
        for _ in 0..500 {
            spring.advance(MS_16);
            max_pos = max_pos.max(spring.position());
        }
        assert!(
            max_pos < 101.0,
            "200/30 should settle with minimal bounce, got {max_pos}"
        );
    }

    #[test]
    fn retarget_midflight() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        simulate(&mut spring, 20);
        spring.animate_to(-200.0);
        simulate(&mut spring, 500);
        assert_eq!(spring.position(), -200.0);
    }

    #[test]
    fn stiffness_clamped() {
        let spring = Spring::new(0.0).with_stiffness(0.0);
        assert!(spring.stiffness >= MIN_STIFFNESS);
        let spring = Spring::new(0.0).with_stiffness(-5.0);
        assert!(spring.stiffness >= MIN_STIFFNESS);
    }

    #[test]
    fn damping_clamped() {
        let spring = Spring::new(0.0).with_damping(-5.0);
        assert!(spring.damping >= 0.0);
    }

    #[test]
    fn deterministic_across_runs() {
        let run = || {
            let mut spring = Spring::new(0.0);
            spring.animate_to(100.0);
            let mut positions = Vec::new();
            for _ in 0..50 {
                spring.advance(MS_16);
                positions.push(spring.position());
            }
            positions
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn clone_independence() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0);
        simulate(&mut spring, 5);
        let frozen = spring.position();
        let mut clone = spring.clone();
        simulate(&mut clone, 5);
        assert!((clone.position() - frozen).abs() > 0.01);
        assert_eq!(spring.position(), frozen);
    }
}

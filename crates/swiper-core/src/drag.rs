#![forbid(unsafe_code)]

//! Drag-frame events and out-of-bounds resistance.
//!
//! A host's pointer pipeline reports each drag as a sequence of
//! [`DragFrame`]s: cumulative 2D offset since drag start, per-axis
//! velocity magnitude, per-axis direction sign, and a final-frame flag.
//! The engine projects these onto its axis; this module only defines the
//! event vocabulary and the rubberband curve applied when a non-looping
//! track is dragged past its first or last pane.
//!
//! # Invariants
//!
//! 1. `velocity` components are magnitudes (non-negative, px/ms);
//!    direction carries the sign separately as `-1`, `0`, or `1`.
//! 2. Exactly one frame per drag has `last == true`, and it terminates
//!    the sequence.
//! 3. `rubberband_clamp` is the identity inside `[min, max]`, continuous
//!    at the bounds, and strictly monotone beyond them.

/// Default resistance constant for out-of-bounds drags.
pub const RUBBERBAND_CONSTANT: f64 = 0.15;

/// One frame of an in-progress or ending drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    /// Cumulative screen offset since drag start, in pixels.
    pub offset: (f64, f64),
    /// Per-axis velocity magnitude, in px/ms.
    pub velocity: (f64, f64),
    /// Per-axis movement sign in track space: -1 backward, 0 still,
    /// 1 forward.
    pub direction: (i8, i8),
    /// Whether this is the drag's final frame (pointer released).
    pub last: bool,
}

impl DragFrame {
    /// A non-final movement frame with no measured velocity.
    #[must_use]
    pub const fn movement(offset: (f64, f64)) -> Self {
        Self {
            offset,
            velocity: (0.0, 0.0),
            direction: (0, 0),
            last: false,
        }
    }

    /// The final frame of a drag.
    #[must_use]
    pub const fn release(offset: (f64, f64), velocity: (f64, f64), direction: (i8, i8)) -> Self {
        Self {
            offset,
            velocity,
            direction,
            last: true,
        }
    }
}

/// Elastic resistance for a distance dragged past a bound.
///
/// Grows monotonically with `distance` but never exceeds `dimension`, so
/// the track can be pulled at most one pane extent past its edge.
#[must_use]
pub fn rubberband(distance: f64, dimension: f64, constant: f64) -> f64 {
    if dimension <= 0.0 {
        return distance;
    }
    (distance * dimension * constant) / (dimension + constant * distance)
}

/// Clamp `value` into `[min, max]` with elastic overshoot.
///
/// Inside the bounds the value passes through unchanged; beyond them the
/// excess is fed through [`rubberband`] with `dimension` as the scale
/// (one pane extent for the swiper).
#[must_use]
pub fn rubberband_clamp(value: f64, min: f64, max: f64, dimension: f64, constant: f64) -> f64 {
    if value < min {
        min - rubberband(min - value, dimension, constant)
    } else if value > max {
        max + rubberband(value - max, dimension, constant)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_frame_is_not_last() {
        let frame = DragFrame::movement((12.0, -3.0));
        assert!(!frame.last);
        assert_eq!(frame.velocity, (0.0, 0.0));
        assert_eq!(frame.direction, (0, 0));
    }

    #[test]
    fn release_frame_is_last() {
        let frame = DragFrame::release((12.0, 0.0), (5.0, 0.0), (-1, 0));
        assert!(frame.last);
        assert_eq!(frame.velocity.0, 5.0);
        assert_eq!(frame.direction.0, -1);
    }

    #[test]
    fn identity_inside_bounds() {
        for v in [0.0, 50.0, 200.0] {
            assert_eq!(rubberband_clamp(v, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT), v);
        }
    }

    #[test]
    fn continuous_at_bounds() {
        let just_out = rubberband_clamp(200.001, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT);
        assert!((just_out - 200.0).abs() < 0.001);
        let just_under = rubberband_clamp(-0.001, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT);
        assert!((just_under - 0.0).abs() < 0.001);
    }

    #[test]
    fn resisted_beyond_max() {
        let dragged = rubberband_clamp(300.0, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT);
        assert!(dragged > 200.0);
        assert!(dragged < 300.0, "overshoot must be resisted, got {dragged}");
    }

    #[test]
    fn resisted_below_min() {
        let dragged = rubberband_clamp(-100.0, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT);
        assert!(dragged < 0.0);
        assert!(dragged > -100.0);
    }

    #[test]
    fn overshoot_bounded_by_dimension() {
        // Even an absurd pull stays within one pane extent of the edge.
        let dragged = rubberband_clamp(1e9, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT);
        assert!(dragged < 200.0 + 100.0, "got {dragged}");
    }

    #[test]
    fn monotone_beyond_bounds() {
        let mut prev = f64::NEG_INFINITY;
        for i in 0..100 {
            let v = 200.0 + f64::from(i) * 10.0;
            let out = rubberband_clamp(v, 0.0, 200.0, 100.0, RUBBERBAND_CONSTANT);
            assert!(out > prev, "not monotone at {v}");
            prev = out;
        }
    }

    #[test]
    fn zero_dimension_passes_through() {
        assert_eq!(rubberband(42.0, 0.0, RUBBERBAND_CONSTANT), 42.0);
    }
}

#![forbid(unsafe_code)]

//! Wraparound arithmetic for cyclic (loop-mode) tracks.
//!
//! A looping swiper lets its continuous position drift arbitrarily far
//! from `[0, N·D)` across repeated swipes. These functions map such an
//! unbounded coordinate back to a visually equivalent representative
//! without ever producing a jump the user can see.
//!
//! # Invariants
//!
//! 1. `wrap(v, m)` is in `[0, m)` for every finite `v` and positive `m`.
//! 2. `wrap(v, m) ≡ v (mod m)`: the result differs from `v` by an integer
//!    multiple of `m`.
//! 3. Idempotence: `wrap(wrap(v, m), m) == wrap(v, m)`.
//! 4. `fold_centered` is continuous in `position` except at the seam a
//!    half-cycle away from the visible window, so an animating pane never
//!    crosses the discontinuity while on screen.

/// True mathematical modulus: the representative of `value` in
/// `[0, modulus)`.
///
/// Unlike `%`, negative inputs fold upward rather than truncating toward
/// zero: `wrap(-30.0, 100.0) == 70.0`.
#[must_use]
pub fn wrap(value: f64, modulus: f64) -> f64 {
    debug_assert!(modulus > 0.0, "wrap requires a positive modulus");
    let remainder = value % modulus;
    let folded = if remainder < 0.0 {
        remainder + modulus
    } else {
        remainder
    };
    // `remainder + modulus` can round to exactly `modulus` for tiny
    // negative remainders; keep the result in the half-open range.
    if folded >= modulus { 0.0 } else { folded }
}

/// Integer counterpart of [`wrap`] for pane indices.
///
/// `modulus` must be non-zero; callers gate on a non-empty pane set.
#[must_use]
pub fn wrap_index(value: i64, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "wrap_index requires a non-empty pane set");
    value.rem_euclid(modulus as i64) as usize
}

/// Fold `position` into the window `[-half, total - half)`.
///
/// Used to re-center a pane's screen offset so every pane is drawn within
/// one cycle of the viewport regardless of how far the track position has
/// drifted. The fold only changes which copy of the periodic pattern is
/// shown, never the value at the visible point.
#[must_use]
pub fn fold_centered(position: f64, total: f64, half: f64) -> f64 {
    wrap(position + half, total) - half
}

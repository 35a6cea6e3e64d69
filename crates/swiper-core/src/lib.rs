#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: motion primitives for the swiper engine.
//!
//! # Role
//! `swiper-core` is the pure-math layer. It owns the vocabulary the engine
//! crate (`swiper`) composes into an interactive carousel: the continuous
//! track coordinate, the spring that animates it, the modulus arithmetic
//! that keeps a looping track visually continuous, and the drag-frame event
//! type produced by a host's pointer pipeline.
//!
//! # Primary responsibilities
//! - **Axis/geometry**: which spatial dimension is active, the pane extent
//!   along it, and the projection from 2D pointer offsets to track offsets.
//! - **Spring**: damped harmonic oscillator over unbounded track positions,
//!   with an immediate (non-animated) set for drag-driven updates.
//! - **Wrap**: true mathematical modulus plus the centered fold used to
//!   draw a cyclic pane sequence from an unbounded position.
//! - **Drag**: the per-frame gesture event and the rubberband resistance
//!   curve for out-of-bounds drags.
//!
//! # How it fits in the system
//! Everything here is deterministic and side-effect free: time only enters
//! through explicit `Duration` arguments, so the engine above can be driven
//! by a simulated clock in tests.

pub mod axis;
pub mod drag;
pub mod spring;
pub mod wrap;

pub use axis::{Axis, LOGICAL_PAGE_EXTENT, Viewport};
pub use drag::{DragFrame, rubberband, rubberband_clamp};
pub use spring::Spring;
pub use wrap::{fold_centered, wrap, wrap_index};

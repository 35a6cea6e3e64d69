#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Headless swiper (carousel) engine.
//!
//! # Role
//! `swiper` maps raw drag input to a continuously animated track position,
//! snaps to the nearest pane on release, keeps a looping pane sequence
//! visually continuous on an unbounded coordinate, and auto-advances on a
//! timer that yields to manual interaction. It renders nothing: hosts read
//! the committed index and per-pane offsets every frame and draw panes
//! themselves.
//!
//! # Primary responsibilities
//! - **[`Swiper`]**: motion state, gesture interpretation, snap/settle,
//!   and the imperative `swipe_to`/`swipe_next`/`swipe_prev` surface.
//! - **[`AutoplayTimer`]**: interval scheduler, suspended during drags.
//! - **[`PageIndicator`]**: default dot indicator state, or a custom
//!   render function.
//! - **Pane validation**: non-pane children are excluded with a warning;
//!   a zero-pane swiper degrades to an inert widget instead of failing.
//!
//! # How it fits in the system
//! All time is injected: the host calls [`Swiper::tick`] with frame
//! deltas and feeds [`swiper_core::DragFrame`]s from its pointer
//! pipeline. Nothing here blocks, spawns, or reads a clock, so the whole
//! engine is deterministic under a simulated clock in tests.

pub mod autoplay;
pub mod config;
pub mod engine;
pub mod indicator;
pub mod panes;

pub use autoplay::AutoplayTimer;
pub use config::{Autoplay, SwiperConfig};
pub use engine::Swiper;
pub use indicator::{Indicator, PageIndicator};
pub use panes::{PaneElement, valid_pane_count};

pub use swiper_core::{Axis, DragFrame, Viewport};

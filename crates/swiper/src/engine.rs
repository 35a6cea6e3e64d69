#![forbid(unsafe_code)]

//! The swiper engine: motion state, gesture interpretation, snap/settle,
//! and the imperative control surface.
//!
//! # State machine
//!
//! One continuous track position is mutated by three producers, mutually
//! exclusive by construction:
//!
//! - **Drag frames** set it immediately (no easing) while Drag-Active.
//! - **The settle spring** animates it once Drag-Active clears.
//! - **The idle fold** rewrites it (loop mode only) when neither a drag
//!   nor an animation is live, bounding numeric drift mod `N·D`.
//!
//! # Invariants
//!
//! 1. `N = 0` never panics, never notifies, never animates.
//! 2. While dragging, the position follows the pointer exactly; the
//!    spring only takes over at the release settle.
//! 3. Every settle fires `on_change` exactly once, including settles to
//!    the already-current index.
//! 4. In loop mode the settle animates toward the *unnormalized* target,
//!    so repeated forward swipes keep increasing the raw position
//!    instead of jumping backward across the wrap seam.
//! 5. The idle fold never changes any pane's rendered position.
//! 6. Drag-Active clears on the tick after the final frame, so a click
//!    synthesized right after release can still be suppressed.
//!
//! # Failure modes
//!
//! - Unmeasured track (zero pixel extent): drag frames are dropped whole,
//!   no state is touched.
//! - Geometry or pane-count changes mid-flight: the motion state is
//!   rebuilt at the clamped current pane (a soft reset, not a
//!   position-preserving resize) and the autoplay countdown restarts.

use std::fmt;
use std::time::Duration;

use swiper_core::{
    Axis, DragFrame, Spring, Viewport, drag::RUBBERBAND_CONSTANT, fold_centered, rubberband_clamp,
    wrap, wrap_index,
};

use crate::autoplay::AutoplayTimer;
use crate::config::{Autoplay, SwiperConfig};
use crate::indicator::PageIndicator;
use crate::panes::{PaneElement, valid_pane_count};

/// Fling projection horizon: release velocity (px/ms) is extrapolated
/// 2000ms forward, capped at one pane's pixel extent, so a fast flick
/// never skips more than one extra pane.
const FLING_HORIZON_MS: f64 = 2000.0;

/// Margin subtracted from the half-cycle when folding pane positions, so
/// a pane sitting exactly half a cycle away folds to the leading side.
const FOLD_MARGIN: f64 = 10.0;

type ChangeCallback = Box<dyn FnMut(usize)>;

/// Headless carousel engine. See the crate docs for the driving model.
pub struct Swiper {
    config: SwiperConfig,
    axis: Axis,
    viewport: Option<Viewport>,
    count: usize,
    current: usize,
    spring: Spring,
    dragging: bool,
    release_pending: bool,
    drag_start: Option<f64>,
    autoplay: AutoplayTimer,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for Swiper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swiper")
            .field("count", &self.count)
            .field("current", &self.current)
            .field("position", &self.spring.position())
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl Swiper {
    #[must_use]
    pub fn new(config: SwiperConfig) -> Self {
        let axis = if config.vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let autoplay = match config.autoplay.interval() {
            Some(interval) => AutoplayTimer::new(interval),
            None => AutoplayTimer::disabled(),
        };
        Self {
            current: config.initial_swipe,
            config,
            axis,
            viewport: None,
            count: 0,
            spring: Spring::new(0.0),
            dragging: false,
            release_pending: false,
            drag_start: None,
            autoplay,
            on_change: None,
        }
    }

    /// Register the settle notification callback. Fired once per commit,
    /// including commits to the already-current index.
    pub fn on_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    // -- accessors ---------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of panes (`N`).
    #[inline]
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.count
    }

    /// The settled pane, canonical in `[0, N-1]`. Meaningless at `N = 0`.
    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The continuous track position, in axis units (pane `i` rests at
    /// `i * D`). Unbounded in loop mode.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.spring.position()
    }

    /// Whether a drag is live. Stays true through the tick following the
    /// final frame so hosts can suppress the synthesized click.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the settle animation (or a drag) still owns the position.
    #[inline]
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.dragging && self.spring.is_at_rest()
    }

    /// Dot-indicator state for the current commit.
    #[must_use]
    pub fn indicator(&self) -> PageIndicator {
        PageIndicator::new(self.count, self.current).vertical(self.config.vertical)
    }

    /// Pane extent `D` along the axis: the logical page unit (100) when
    /// horizontal, the measured pixel height when vertical (0 until
    /// measured).
    #[must_use]
    pub fn pane_extent(&self) -> f64 {
        match self.viewport {
            Some(viewport) => self.axis.pane_extent(viewport),
            None => match self.axis {
                Axis::Horizontal => swiper_core::LOGICAL_PAGE_EXTENT,
                Axis::Vertical => 0.0,
            },
        }
    }

    /// Animated screen offset for pane `index`, in axis units. In loop
    /// mode the offset is folded so every pane stays within one cycle of
    /// the viewport however far the track has drifted.
    #[must_use]
    pub fn pane_position(&self, index: usize) -> f64 {
        let extent = self.pane_extent();
        let position = -self.spring.position() + index as f64 * extent;
        let total = self.count as f64 * extent;
        if self.config.loop_enabled && total > 0.0 {
            let half = total / 2.0 - FOLD_MARGIN;
            fold_centered(position, total, half)
        } else {
            position
        }
    }

    /// Static layout offset for pane `index` (panes are stacked at the
    /// origin and shifted back by their ordinal).
    #[must_use]
    pub fn pane_base_offset(&self, index: usize) -> f64 {
        -(index as f64) * self.pane_extent()
    }

    // -- lifecycle ---------------------------------------------------------

    /// Supply measured container geometry. A change in pane extent soft-
    /// resets the motion state; in horizontal mode the extent is logical,
    /// so only the first measurement (or a height change in vertical
    /// mode) re-initializes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let previous = self.pane_extent();
        self.viewport = Some(viewport);
        if self.pane_extent() != previous {
            self.reinit();
        }
    }

    /// Set the pane count directly.
    pub fn set_pane_count(&mut self, count: usize) {
        if count == 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!("swiper needs at least one pane");
        }
        if count != self.count {
            self.count = count;
            self.reinit();
        }
    }

    /// Recount panes from a host child collection, excluding (and
    /// warning about) non-pane children.
    pub fn sync_panes<E: PaneElement>(&mut self, children: &[E]) {
        self.set_pane_count(valid_pane_count(children));
    }

    /// Replace the autoplay setting. The countdown is rebuilt from
    /// scratch, never resumed mid-interval.
    pub fn set_autoplay(&mut self, autoplay: Autoplay) {
        self.config.autoplay = autoplay;
        self.autoplay = match autoplay.interval() {
            Some(interval) => AutoplayTimer::new(interval),
            None => AutoplayTimer::disabled(),
        };
    }

    /// Soft reset after a pane-count or extent change: clamp the current
    /// index, rebuild the spring at rest on it, drop any drag in
    /// progress, and restart the autoplay countdown.
    fn reinit(&mut self) {
        if self.count > 0 {
            self.current = self.current.min(self.count - 1);
        }
        let start = if self.count == 0 {
            0.0
        } else {
            self.current as f64 * self.pane_extent()
        };
        self.spring = Spring::new(start);
        self.dragging = false;
        self.release_pending = false;
        self.drag_start = None;
        self.autoplay.suspend();
    }

    // -- driving -----------------------------------------------------------

    /// Advance the engine by one frame delta. Drives the settle spring,
    /// the idle wrap fold, the deferred drag-active clear, and autoplay.
    ///
    /// Large deltas are sliced at autoplay expiry boundaries so the
    /// spring advances between expiries, exactly as it would under
    /// frame-granularity ticks.
    pub fn tick(&mut self, dt: Duration) {
        if self.release_pending {
            self.release_pending = false;
            self.dragging = false;
        }

        let mut remaining = dt;
        loop {
            let autoplay_live = !self.dragging && self.count > 0;
            if autoplay_live {
                self.autoplay.resume();
            } else {
                self.autoplay.suspend();
            }

            let slice = if autoplay_live && self.autoplay.running() {
                remaining.min(self.autoplay.remaining())
            } else {
                remaining
            };

            self.spring.advance(slice);
            self.normalize_idle();

            if autoplay_live {
                let fired = self.autoplay.advance(slice);
                for _ in 0..fired {
                    self.swipe_next();
                }
            }

            remaining = remaining.saturating_sub(slice);
            if remaining.is_zero() {
                break;
            }
        }
    }

    /// Fold the track position back into `[0, N·D)` once everything is
    /// idle, bounding drift after many loop-mode swipes. The fold is a
    /// representative of the same cyclic position, so no pane moves.
    fn normalize_idle(&mut self) {
        if !self.config.loop_enabled || self.dragging || self.count == 0 {
            return;
        }
        if !self.spring.is_at_rest() {
            return;
        }
        let total = self.count as f64 * self.pane_extent();
        if total <= 0.0 {
            return;
        }
        let position = self.spring.position();
        let folded = wrap(position, total);
        if folded != position {
            self.spring.set_immediate(folded);
        }
    }

    // -- gesture interpretation --------------------------------------------

    /// Feed one drag frame from the host's pointer pipeline.
    ///
    /// Non-final frames drive the position directly; the final frame
    /// picks a settle target from displacement plus projected fling.
    /// Frames are dropped whole while the track is unmeasured or empty,
    /// or when the swiper is not touchable.
    pub fn handle_drag(&mut self, frame: DragFrame) {
        if !self.config.touchable {
            return;
        }
        let range = match self.viewport {
            Some(viewport) => self.axis.track_extent(viewport),
            None => 0.0,
        };
        if range <= 0.0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("drag frame dropped: track not measured");
            return;
        }
        if self.count == 0 {
            return;
        }

        let extent = self.pane_extent();
        let offset = self.axis.project(frame.offset);

        if !frame.last {
            if !self.dragging {
                self.dragging = true;
            }
            let start = *self.drag_start.get_or_insert(self.spring.position());
            let mut position = start + offset / range * extent;
            if !self.config.loop_enabled {
                let max = (self.count - 1) as f64 * extent;
                position = rubberband_clamp(position, 0.0, max, extent, RUBBERBAND_CONSTANT);
            }
            self.spring.set_immediate(position);
        } else {
            self.dragging = true;
            let start = self.drag_start.take().unwrap_or(self.spring.position());
            // Absolute track offset in pixels: the drag-start position
            // rescaled to pixel space plus the cumulative pointer offset.
            let position_px = start / extent * range + offset;
            let velocity = self.axis.pick(frame.velocity);
            let direction = f64::from(self.axis.pick_sign(frame.direction));
            let fling = (velocity * FLING_HORIZON_MS).min(range) * direction;
            // Round half away from zero: round(-0.5) commits one pane
            // backward.
            let target = ((position_px + fling) / range).round() as i64;
            self.settle(target);
            // Cleared on the next tick so click suppression still sees
            // the drag.
            self.release_pending = true;
        }
    }

    // -- snap/settle -------------------------------------------------------

    /// Commit `target` and animate toward it. In loop mode the committed
    /// index is the canonical representative but the animation target is
    /// left unnormalized, preserving drag direction continuity.
    fn settle(&mut self, target: i64) {
        if self.count == 0 {
            return;
        }
        let extent = self.pane_extent();
        let (index, committed) = if self.config.loop_enabled {
            (wrap_index(target, self.count), target)
        } else {
            let clamped = target.clamp(0, self.count as i64 - 1);
            (clamped as usize, clamped)
        };
        self.current = index;
        let animation_target = committed as f64 * extent;
        if let Some(callback) = self.on_change.as_mut() {
            callback(index);
        }
        self.spring.animate_to(animation_target);
    }

    /// Nearest pane to the live (possibly mid-animation) position.
    fn live_index(&self) -> i64 {
        let extent = self.pane_extent();
        if extent > 0.0 {
            (self.spring.position() / extent).round() as i64
        } else {
            self.current as i64
        }
    }

    // -- imperative control surface ----------------------------------------

    /// Settle on `index` (wrapped in loop mode, clamped otherwise).
    /// No-op before any panes exist.
    pub fn swipe_to(&mut self, index: i64) {
        self.settle(index);
    }

    /// Settle one pane forward of the live position, which may sit
    /// mid-animation.
    pub fn swipe_next(&mut self) {
        self.settle(self.live_index() + 1);
    }

    /// Settle one pane backward of the live position.
    pub fn swipe_prev(&mut self) {
        self.settle(self.live_index() - 1);
    }
}

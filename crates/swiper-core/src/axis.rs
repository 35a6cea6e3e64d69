#![forbid(unsafe_code)]

//! Axis selection and pane geometry.
//!
//! A swiper instance is fixed to one spatial dimension. The axis decides
//! which viewport dimension measures a pane, which component of a 2D
//! pointer offset drives the track, and the sign convention that maps
//! screen movement to track movement.
//!
//! Pane extent is deliberately asymmetric: horizontal layout uses a
//! logical percentage unit (one pane = 100, whatever the pixel width), so
//! hosts can lay panes out with relative sizing; vertical layout needs the
//! measured pixel height to size the track absolutely.

/// Logical pane extent for horizontal mode: one "page width" in percent.
pub const LOGICAL_PAGE_EXTENT: f64 = 100.0;

/// Measured container geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The single spatial dimension panes are arranged and dragged along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Size of one pane along this axis, in layout units.
    ///
    /// Horizontal: the logical unit [`LOGICAL_PAGE_EXTENT`].
    /// Vertical: the viewport's pixel height.
    #[must_use]
    pub const fn pane_extent(self, viewport: Viewport) -> f64 {
        match self {
            Self::Horizontal => LOGICAL_PAGE_EXTENT,
            Self::Vertical => viewport.height,
        }
    }

    /// Size of the rendered track along this axis, in pixels.
    ///
    /// Independent of the logical unit used for layout; gesture math works
    /// in this space.
    #[must_use]
    pub const fn track_extent(self, viewport: Viewport) -> f64 {
        match self {
            Self::Horizontal => viewport.width,
            Self::Vertical => viewport.height,
        }
    }

    /// Project a 2D screen offset onto the track.
    ///
    /// Selects the active component and negates it: dragging backward on
    /// screen (left, or up in vertical mode) moves the track forward.
    #[inline]
    #[must_use]
    pub fn project(self, offset: (f64, f64)) -> f64 {
        match self {
            Self::Horizontal => -offset.0,
            Self::Vertical => -offset.1,
        }
    }

    /// Select the active component of a per-axis pair, without the sign
    /// convention. Used for velocity magnitudes.
    #[inline]
    #[must_use]
    pub fn pick(self, pair: (f64, f64)) -> f64 {
        match self {
            Self::Horizontal => pair.0,
            Self::Vertical => pair.1,
        }
    }

    /// Select the active component of a per-axis sign pair.
    #[inline]
    #[must_use]
    pub fn pick_sign(self, pair: (i8, i8)) -> i8 {
        match self {
            Self::Horizontal => pair.0,
            Self::Vertical => pair.1,
        }
    }
}

#![forbid(unsafe_code)]

//! Page indicator: the dot row under (or beside) the panes.
//!
//! [`PageIndicator`] is the built-in dot model; [`Indicator`] selects
//! between it and a host-supplied render function by simple presence, no
//! inheritance needed.

use std::fmt;

pub const ACTIVE_DOT: &str = "●";
pub const INACTIVE_DOT: &str = "○";

/// Dot indicator state for `total` panes with `current` active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    total: usize,
    current: usize,
    vertical: bool,
}

impl PageIndicator {
    #[must_use]
    pub const fn new(total: usize, current: usize) -> Self {
        Self {
            total,
            current,
            vertical: false,
        }
    }

    /// Lay the dots out along the vertical axis (builder).
    #[must_use]
    pub const fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Active flag per dot, in pane order.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(|i| i == self.current)
    }

    /// Render the dot row as text.
    #[must_use]
    pub fn render(&self) -> String {
        let separator = if self.vertical { "\n" } else { " " };
        let dots: Vec<&str> = self
            .dots()
            .map(|active| if active { ACTIVE_DOT } else { INACTIVE_DOT })
            .collect();
        dots.join(separator)
    }
}

/// Indicator variant: the built-in dots, or a custom renderer receiving
/// `(count, current)`.
pub enum Indicator {
    Dots,
    Custom(Box<dyn Fn(usize, usize) -> String>),
}

impl Indicator {
    /// Render for `total` panes with `current` active.
    #[must_use]
    pub fn render(&self, total: usize, current: usize) -> String {
        match self {
            Self::Dots => PageIndicator::new(total, current).render(),
            Self::Custom(render) => render(total, current),
        }
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::Dots
    }
}

impl fmt::Debug for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dots => f.write_str("Indicator::Dots"),
            Self::Custom(_) => f.write_str("Indicator::Custom(..)"),
        }
    }
}

#![forbid(unsafe_code)]

//! Swiper configuration.

use std::time::Duration;

/// Interval used when autoplay is switched on without an explicit period.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Autoplay setting.
///
/// Mirrors a `boolean | milliseconds` option: `On` uses the default
/// 5-second interval, `Every` sets an explicit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    Off,
    On,
    Every(Duration),
}

impl Autoplay {
    /// The effective interval, or `None` when autoplay is disabled.
    ///
    /// `Every(0)` counts as disabled; a zero interval would fire on every
    /// tick.
    #[must_use]
    pub fn interval(self) -> Option<Duration> {
        match self {
            Self::Off => None,
            Self::On => Some(DEFAULT_AUTOPLAY_INTERVAL),
            Self::Every(interval) if interval.is_zero() => None,
            Self::Every(interval) => Some(interval),
        }
    }
}

impl Default for Autoplay {
    /// Autoplay is on by default, advancing every 2 seconds.
    fn default() -> Self {
        Self::Every(Duration::from_millis(2000))
    }
}

/// Swiper options, fixed at construction except where the engine exposes
/// an explicit setter.
#[derive(Debug, Clone)]
pub struct SwiperConfig {
    /// Whether the pane sequence wraps around (infinite loop).
    pub loop_enabled: bool,
    /// Autoplay interval, if any.
    pub autoplay: Autoplay,
    /// Vertical axis instead of horizontal.
    pub vertical: bool,
    /// Whether drag frames are honored at all.
    pub touchable: bool,
    /// Pane shown initially.
    pub initial_swipe: usize,
}

impl Default for SwiperConfig {
    fn default() -> Self {
        Self {
            loop_enabled: true,
            autoplay: Autoplay::default(),
            vertical: false,
            touchable: true,
            initial_swipe: 0,
        }
    }
}

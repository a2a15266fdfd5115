//! Carousel configuration.
//!
//! A [`CarouselConfig`] is fixed for the life of one carousel mount. All
//! geometry and interpolation in this crate derives from it, so it is
//! validated once up front instead of letting degenerate widths propagate
//! NaN through every frame.

use std::fmt;

/// Default item width as a fraction of the container width.
pub const DEFAULT_ITEM_WIDTH_FRACTION: f32 = 0.9;

/// Default visual gap between neighboring items, in logical pixels.
pub const DEFAULT_SEPARATOR_WIDTH: f32 = 10.0;

/// Default minimum drag distance (logical pixels) before a release advances
/// the index instead of snapping back. Small enough to feel responsive,
/// large enough to ignore finger jitter.
pub const DEFAULT_MIN_SCROLL_DISTANCE: f32 = 5.0;

/// Default scale applied to items at rest away from center.
pub const DEFAULT_INACTIVE_SCALE: f32 = 0.8;

/// Default opacity applied to items at rest away from center.
pub const DEFAULT_INACTIVE_OPACITY: f32 = 0.8;

/// Immutable configuration for one carousel instance.
///
/// Construct with [`CarouselConfig::new`] and adjust fields before calling
/// [`CarouselConfig::validate`]; the controller validates on creation.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Width of the visible strip (the host viewport), in logical pixels.
    pub container_width: f32,
    /// Width of a single item, in logical pixels.
    pub item_width: f32,
    /// Visual gap between neighboring items before scale compensation.
    pub separator_width: f32,
    /// Scale of an item at rest away from center, in (0, 1].
    pub inactive_scale: f32,
    /// Opacity of an item at rest away from center, in (0, 1].
    pub inactive_opacity: f32,
    /// Mirrors leading/trailing margins for right-to-left strips.
    pub inverted: bool,
    /// Minimum drag distance before a release changes the index.
    pub min_scroll_distance: f32,
    /// Number of items in the strip.
    pub data_length: usize,
    /// Index centered when the carousel first mounts.
    pub initial_index: usize,
    /// Whether the host strip bounces at its edges.
    pub bounces: bool,
    /// Whether the host strip shows a scroll indicator.
    pub shows_scroll_indicator: bool,
}

impl CarouselConfig {
    /// Creates a configuration with the documented defaults for the given
    /// container width and item count.
    pub fn new(container_width: f32, data_length: usize) -> Self {
        Self {
            container_width,
            item_width: container_width * DEFAULT_ITEM_WIDTH_FRACTION,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            inactive_scale: DEFAULT_INACTIVE_SCALE,
            inactive_opacity: DEFAULT_INACTIVE_OPACITY,
            inverted: false,
            min_scroll_distance: DEFAULT_MIN_SCROLL_DISTANCE,
            data_length,
            initial_index: 0,
            bounces: true,
            shows_scroll_indicator: false,
        }
    }

    /// Rejects configurations whose arithmetic would be degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.container_width > 0.0) {
            return Err(ConfigError::NonPositiveContainerWidth(
                self.container_width,
            ));
        }
        if !(self.item_width > 0.0) {
            return Err(ConfigError::NonPositiveItemWidth(self.item_width));
        }
        if !(self.inactive_scale > 0.0 && self.inactive_scale <= 1.0) {
            return Err(ConfigError::InactiveScaleOutOfRange(self.inactive_scale));
        }
        if !(self.inactive_opacity > 0.0 && self.inactive_opacity <= 1.0) {
            return Err(ConfigError::InactiveOpacityOutOfRange(
                self.inactive_opacity,
            ));
        }
        if !(self.min_scroll_distance >= 0.0) {
            return Err(ConfigError::NegativeMinScrollDistance(
                self.min_scroll_distance,
            ));
        }
        if self.data_length > 0 && self.initial_index >= self.data_length {
            return Err(ConfigError::InitialIndexOutOfRange {
                index: self.initial_index,
                data_length: self.data_length,
            });
        }
        if self.item_span() <= 0.0 {
            // Legal but visually collapsed: items overlap more than they
            // are wide, offsets stop increasing with index.
            log::warn!(
                "carousel: item span {} is non-positive (item_width {} + total_margin {}); \
                 offsets will not increase with index",
                self.item_span(),
                self.item_width,
                self.total_margin()
            );
        }
        Ok(())
    }

    /// Half the container width.
    #[inline]
    pub fn half_container_width(&self) -> f32 {
        self.container_width / 2.0
    }

    /// Half the item width.
    #[inline]
    pub fn half_item_width(&self) -> f32 {
        self.item_width / 2.0
    }

    /// Margin between items after compensating for the visual separator
    /// shrinkage caused by scaling neighbors down to `inactive_scale`.
    #[inline]
    pub fn total_margin(&self) -> f32 {
        self.separator_width - (1.0 - self.inactive_scale) * self.item_width / 2.0
    }

    /// Scroll-axis distance between consecutive item anchors.
    #[inline]
    pub fn item_span(&self) -> f32 {
        self.item_width + self.total_margin()
    }

    /// Returns whether `index` addresses an item in the strip.
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.data_length
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveContainerWidth(f32),
    NonPositiveItemWidth(f32),
    InactiveScaleOutOfRange(f32),
    InactiveOpacityOutOfRange(f32),
    NegativeMinScrollDistance(f32),
    InitialIndexOutOfRange { index: usize, data_length: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveContainerWidth(w) => {
                write!(f, "container width must be positive, got {w}")
            }
            ConfigError::NonPositiveItemWidth(w) => {
                write!(f, "item width must be positive, got {w}")
            }
            ConfigError::InactiveScaleOutOfRange(s) => {
                write!(f, "inactive scale must be in (0, 1], got {s}")
            }
            ConfigError::InactiveOpacityOutOfRange(o) => {
                write!(f, "inactive opacity must be in (0, 1], got {o}")
            }
            ConfigError::NegativeMinScrollDistance(d) => {
                write!(f, "min scroll distance must be non-negative, got {d}")
            }
            ConfigError::InitialIndexOutOfRange { index, data_length } => {
                write!(
                    f,
                    "initial index {index} out of range for {data_length} items"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//! Per-item carousel geometry.
//!
//! Computes, for each item index, the scroll-axis offset the strip settles on
//! when that item is centered, the margin adjustment that keeps separators
//! visually even while neighbors are scaled down, and the three interpolation
//! breakpoints (start, mid, end) along the scroll axis.
//!
//! Everything here is a pure function of ([`CarouselConfig`], index), so the
//! controller memoizes one [`ItemGeometry`] table per strip and shares it
//! freely across frames.

use crate::config::CarouselConfig;

/// Scroll-axis positions where an item is at rest-inactive, fully active,
/// and rest-inactive again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    pub start: f32,
    pub mid: f32,
    pub end: f32,
}

/// Leading/trailing margin adjustment for one item.
///
/// Interior items carry half the total margin on both sides; the first and
/// last items only on the side facing the strip. `inverted` strips mirror
/// the sides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemMargin {
    pub leading: f32,
    pub trailing: f32,
}

/// Layout hint for the host list so it can place items without measuring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    pub offset: f32,
    pub length: f32,
}

/// Full derived geometry for one item index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    /// Scroll offset at which this item sits centered (or as close to
    /// centered as the strip boundary allows for edge items).
    pub offset: f32,
    pub margin: ItemMargin,
    pub breakpoints: Breakpoints,
}

/// Pure per-index geometry over a borrowed configuration.
///
/// Strips of fewer than two items short-circuit to a trivial centered
/// layout: a single item is fully active at rest offset zero with no margin
/// adjustment, and an empty strip produces no geometry at all.
pub struct GeometryCalculator<'a> {
    config: &'a CarouselConfig,
}

impl<'a> GeometryCalculator<'a> {
    pub fn new(config: &'a CarouselConfig) -> Self {
        Self { config }
    }

    /// Scroll offset that centers `index`, monotonically increasing in index
    /// while the item span is positive.
    pub fn offset(&self, index: usize) -> f32 {
        let c = self.config;
        if c.data_length <= 1 {
            return 0.0;
        }
        index as f32 * c.item_span() - (c.half_container_width() - c.half_item_width())
    }

    /// Where the item's center lands inside the viewport when the strip is
    /// settled on it. Edge items cannot be centered because they sit against
    /// the strip boundary.
    pub fn animated_offset(&self, index: usize) -> f32 {
        let c = self.config;
        if index == 0 {
            c.half_item_width()
        } else if index + 1 == c.data_length {
            c.container_width - c.half_item_width()
        } else {
            c.half_container_width()
        }
    }

    /// Interpolation breakpoints for `index`.
    pub fn breakpoints(&self, index: usize) -> Breakpoints {
        let c = self.config;
        let span = c.item_span();
        if c.data_length <= 1 {
            return Breakpoints {
                start: -span,
                mid: 0.0,
                end: span,
            };
        }

        let mid = index as f32 * span + c.half_item_width() - self.animated_offset(index);
        let last = c.data_length - 1;

        // The index == 1 and last-item anchors keep the outer breakpoints
        // from extrapolating past the strip's physical bounds; both special
        // cases are checked before the last/second-to-last ones so they win
        // for two-item strips.
        let start = if index == 1 {
            0.0
        } else if index == last {
            (c.data_length - 2) as f32 * span + c.half_item_width() - c.half_container_width()
        } else {
            mid - span
        };

        let end = if index == 0 {
            span + c.half_item_width() - c.half_container_width()
        } else if index + 2 == c.data_length {
            last as f32 * span + c.item_width - c.container_width
        } else {
            mid + span
        };

        Breakpoints { start, mid, end }
    }

    /// Margin adjustment for `index`.
    pub fn margin(&self, index: usize) -> ItemMargin {
        let c = self.config;
        if c.data_length <= 1 {
            return ItemMargin::default();
        }

        let half = c.total_margin() / 2.0;
        let first = index == 0;
        let last = index + 1 == c.data_length;
        let margin = ItemMargin {
            leading: if first { 0.0 } else { half },
            trailing: if last { 0.0 } else { half },
        };
        if c.inverted {
            ItemMargin {
                leading: margin.trailing,
                trailing: margin.leading,
            }
        } else {
            margin
        }
    }

    /// Host layout hint: items are laid out on a fixed span grid.
    pub fn item_layout(&self, index: usize) -> ItemLayout {
        let span = self.config.item_span();
        ItemLayout {
            offset: index as f32 * span,
            length: span,
        }
    }

    /// Full geometry for one index.
    pub fn item_geometry(&self, index: usize) -> ItemGeometry {
        ItemGeometry {
            offset: self.offset(index),
            margin: self.margin(index),
            breakpoints: self.breakpoints(index),
        }
    }

    /// Memoizable geometry table for the whole strip.
    pub fn strip(&self) -> Vec<ItemGeometry> {
        (0..self.config.data_length)
            .map(|index| self.item_geometry(index))
            .collect()
    }
}

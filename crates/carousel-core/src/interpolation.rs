//! Scroll-offset interpolation.
//!
//! Maps a live scroll offset over an item's (start, mid, end) breakpoints to
//! a visual value: `inactive` at the outer breakpoints, exactly `1.0` at the
//! midpoint, clamped to `inactive` outside the range. The same mapping is
//! used for scale and, with a different endpoint, for opacity.
//!
//! This is a pure function with no shared state, so the host may evaluate it
//! for every visible item on every frame, on any thread.

use crate::geometry::Breakpoints;

/// Linear blend that is exact at both endpoints.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Clamped piecewise-linear interpolation over `breakpoints`.
///
/// Rising segment (start..mid) maps `inactive` to `1.0`, falling segment
/// (mid..end) maps `1.0` back to `inactive`. Degenerate segments (zero or
/// negative width) pin to `1.0` at the midpoint and `inactive` elsewhere.
pub fn interpolate(scroll_offset: f32, breakpoints: Breakpoints, inactive: f32) -> f32 {
    let Breakpoints { start, mid, end } = breakpoints;

    if scroll_offset == mid {
        return 1.0;
    }
    if scroll_offset <= start || scroll_offset >= end {
        return inactive;
    }
    if scroll_offset < mid {
        let width = mid - start;
        if width <= 0.0 {
            return inactive;
        }
        lerp(inactive, 1.0, (scroll_offset - start) / width)
    } else {
        let width = end - mid;
        if width <= 0.0 {
            return inactive;
        }
        lerp(1.0, inactive, (scroll_offset - mid) / width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: Breakpoints = Breakpoints {
        start: 0.0,
        mid: 238.0,
        end: 491.0,
    };

    #[test]
    fn midpoint_is_exactly_one() {
        assert_eq!(interpolate(238.0, BP, 0.8), 1.0);
    }

    #[test]
    fn endpoints_are_inactive() {
        assert_eq!(interpolate(0.0, BP, 0.8), 0.8);
        assert_eq!(interpolate(491.0, BP, 0.8), 0.8);
    }

    #[test]
    fn clamps_outside_the_range() {
        assert_eq!(interpolate(-500.0, BP, 0.8), 0.8);
        assert_eq!(interpolate(10_000.0, BP, 0.8), 0.8);
    }

    #[test]
    fn rising_segment_is_linear() {
        let halfway = interpolate(119.0, BP, 0.8);
        assert!((halfway - 0.9).abs() < 1e-6);
    }

    #[test]
    fn falling_segment_is_linear() {
        let halfway = interpolate(238.0 + 253.0 / 2.0, BP, 0.8);
        assert!((halfway - 0.9).abs() < 1e-6);
    }

    #[test]
    fn separate_endpoint_drives_opacity() {
        // Same breakpoints, different endpoint: scale and opacity interpolate
        // independently.
        assert_eq!(interpolate(0.0, BP, 0.5), 0.5);
        assert_eq!(interpolate(238.0, BP, 0.5), 1.0);
    }

    #[test]
    fn degenerate_span_pins_to_endpoints() {
        let collapsed = Breakpoints {
            start: 100.0,
            mid: 100.0,
            end: 100.0,
        };
        assert_eq!(interpolate(100.0, collapsed, 0.8), 1.0);
        assert_eq!(interpolate(99.0, collapsed, 0.8), 0.8);
        assert_eq!(interpolate(101.0, collapsed, 0.8), 0.8);
    }
}

//! Seam between the carousel engine and the host list widget.
//!
//! The engine never scrolls anything itself: virtualization, gesture capture,
//! and frame scheduling belong to the host. The host implements [`ScrollHost`]
//! and configures its list from [`RenderOptions`] and the per-item layout
//! hints exposed by the controller.

/// Imperative command surface the host list provides.
pub trait ScrollHost {
    /// Scroll the strip to an absolute offset, optionally animated.
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);
}

/// Options the host list should be rendered with.
///
/// The carousel is always a horizontal paging strip; the remaining flags are
/// forwarded from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub horizontal: bool,
    pub paging: bool,
    pub inverted: bool,
    pub initial_index: usize,
    pub bounces: bool,
    pub shows_scroll_indicator: bool,
}

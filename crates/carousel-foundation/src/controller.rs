//! Carousel controller.
//!
//! Thin composition layer over the pure math in `carousel-core`: owns the
//! configuration, the memoized geometry table, and the current
//! [`ScrollState`], routes host events into snap decisions, and queues the
//! physical scroll command for the host's next scheduling tick.
//!
//! Settling is an explicit two-phase protocol. `scroll_to_index` *commits*
//! synchronously: the settle callback fires and the current index updates
//! before the host sees any scroll command. The *apply* phase is deferred:
//! the queued [`ScrollCommand`] is handed to the host only when it calls
//! [`CarouselController::flush`] on its next tick, which keeps the command
//! from racing an in-flight layout pass. Re-committing while a command is
//! still queued simply replaces it.

use std::rc::Rc;

use carousel_core::{
    interpolate, CarouselConfig, ConfigError, GeometryCalculator, ItemGeometry, ItemLayout,
    ItemMargin,
};
use smallvec::SmallVec;

use crate::host::{RenderOptions, ScrollHost};
use crate::scroll_state::ScrollState;
use crate::snap::{decide, SnapDecision};

/// Physical scroll command queued for the host's next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f32,
    pub animated: bool,
}

/// Result of a scroll-to-index request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollToOutcome {
    /// Index committed and a scroll command queued for the target offset.
    Committed { offset: f32 },
    /// Index outside the strip; state unchanged, nothing queued.
    OutOfRange,
}

/// Per-item visual values for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    pub index: usize,
    pub scale: f32,
    pub opacity: f32,
    pub margin: ItemMargin,
}

/// Controller for one mounted carousel over items of type `T`.
///
/// The engine wraps the host's item renderer with the computed visuals and
/// never inspects item content, so `T` is opaque here.
pub struct CarouselController<T> {
    config: CarouselConfig,
    items: Vec<T>,
    geometry: Vec<ItemGeometry>,
    state: ScrollState,
    pending: Option<ScrollCommand>,
    on_scroll_end: Option<Rc<dyn Fn(&T, usize)>>,
    on_scroll_begin_drag: Option<Rc<dyn Fn()>>,
    on_scroll_end_drag: Option<Rc<dyn Fn()>>,
}

impl<T> CarouselController<T> {
    /// Creates a controller, rejecting degenerate configurations.
    ///
    /// `config.data_length` is derived from the item sequence.
    pub fn new(mut config: CarouselConfig, items: Vec<T>) -> Result<Self, ConfigError> {
        config.data_length = items.len();
        config.validate()?;
        let geometry = GeometryCalculator::new(&config).strip();
        let state = ScrollState::at_rest(config.initial_index);
        Ok(Self {
            config,
            items,
            geometry,
            state,
            pending: None,
            on_scroll_end: None,
            on_scroll_begin_drag: None,
            on_scroll_end_drag: None,
        })
    }

    /// Fired optimistically when a settle target is committed, before the
    /// physical scroll command is applied.
    pub fn set_on_scroll_end(&mut self, callback: impl Fn(&T, usize) + 'static) {
        self.on_scroll_end = Some(Rc::new(callback));
    }

    pub fn set_on_scroll_begin_drag(&mut self, callback: impl Fn() + 'static) {
        self.on_scroll_begin_drag = Some(Rc::new(callback));
    }

    pub fn set_on_scroll_end_drag(&mut self, callback: impl Fn() + 'static) {
        self.on_scroll_end_drag = Some(Rc::new(callback));
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the item sequence, recomputing geometry and clamping the
    /// current index to the new strip.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.config.data_length = self.items.len();
        self.geometry = GeometryCalculator::new(&self.config).strip();
        let clamped = self
            .state
            .current_index()
            .min(self.config.data_length.saturating_sub(1));
        if clamped != self.state.current_index() {
            self.state = self.state.commit(clamped).settle();
        }
    }

    /// Options the host list should be rendered with.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            horizontal: true,
            paging: true,
            inverted: self.config.inverted,
            initial_index: self.config.initial_index,
            bounces: self.config.bounces,
            shows_scroll_indicator: self.config.shows_scroll_indicator,
        }
    }

    /// Layout hint for the host, if `index` is in the strip.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.config
            .contains_index(index)
            .then(|| GeometryCalculator::new(&self.config).item_layout(index))
    }

    /// Live scroll-offset update from the host. Called every frame while the
    /// strip moves.
    pub fn on_scroll(&mut self, offset: f32) {
        self.state = self.state.with_offset(offset);
    }

    /// Drag-begin event: records the drag anchor.
    pub fn on_drag_begin(&mut self) {
        self.state = self.state.begin_drag();
        if let Some(callback) = &self.on_scroll_begin_drag {
            callback();
        }
    }

    /// Drag-end event: decides the snap target and commits it.
    pub fn on_drag_end(&mut self, offset: f32) {
        self.state = self.state.with_offset(offset);
        if let Some(callback) = &self.on_scroll_end_drag {
            callback();
        }
        match decide(
            &self.state,
            self.config.min_scroll_distance,
            self.config.data_length,
        ) {
            SnapDecision::Target(index) => {
                self.scroll_to_index(index);
            }
            SnapDecision::Ignore | SnapDecision::OutOfRange => {
                self.state = self.state.abort_drag();
            }
        }
    }

    /// Commits `index` as the settled item and queues the physical scroll.
    ///
    /// Out-of-range indices are a reported no-op: state stays unchanged and
    /// nothing is queued. In range, the settle callback observes the decided
    /// index immediately, independent of animation completion.
    pub fn scroll_to_index(&mut self, index: usize) -> ScrollToOutcome {
        if !self.config.contains_index(index) {
            log::debug!(
                "carousel: dropping scroll_to_index({index}) outside strip of {}",
                self.config.data_length
            );
            return ScrollToOutcome::OutOfRange;
        }
        if let Some(callback) = &self.on_scroll_end {
            callback(&self.items[index], index);
        }
        self.state = self.state.commit(index);
        let offset = self.geometry[index].offset;
        self.pending = Some(ScrollCommand {
            offset,
            animated: true,
        });
        ScrollToOutcome::Committed { offset }
    }

    /// Scroll command queued for the next tick, if any.
    pub fn pending_command(&self) -> Option<ScrollCommand> {
        self.pending
    }

    /// Applies the queued scroll command, once per host scheduling tick.
    ///
    /// Returns whether a command was handed to the host.
    pub fn flush(&mut self, host: &mut dyn ScrollHost) -> bool {
        match self.pending.take() {
            Some(command) => {
                host.scroll_to_offset(command.offset, command.animated);
                self.state = self.state.settle();
                true
            }
            None => false,
        }
    }

    /// Visual scale/opacity/margin for every item at the current offset.
    ///
    /// Pure per-item evaluation over the memoized geometry table; safe to
    /// call on every frame.
    pub fn visuals(&self) -> SmallVec<[ItemVisual; 8]> {
        let offset = self.state.current_offset();
        self.geometry
            .iter()
            .enumerate()
            .map(|(index, geometry)| ItemVisual {
                index,
                scale: interpolate(offset, geometry.breakpoints, self.config.inactive_scale),
                opacity: interpolate(offset, geometry.breakpoints, self.config.inactive_opacity),
                margin: geometry.margin,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

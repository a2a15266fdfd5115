//! Scroll state snapshot.
//!
//! The controller's mutable state is a single immutable value replaced on
//! each discrete event (scroll update, drag begin, drag end, settle). This
//! keeps the gesture state machine testable by feeding event sequences and
//! inspecting the resulting snapshots.

/// Gesture phase of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// Between drag-begin and drag-end.
    Dragging,
    /// Target index committed, physical scroll command queued or in flight.
    Settling,
}

/// One snapshot of the controller's scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    current_offset: f32,
    drag_begin_offset: f32,
    current_index: usize,
    phase: GesturePhase,
}

impl ScrollState {
    /// State at mount: settled on `initial_index` at offset zero.
    pub fn at_rest(initial_index: usize) -> Self {
        Self {
            current_offset: 0.0,
            drag_begin_offset: 0.0,
            current_index: initial_index,
            phase: GesturePhase::Idle,
        }
    }

    /// Live scroll offset as last reported by the host.
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// Offset recorded when the current drag began.
    pub fn drag_begin_offset(&self) -> f32 {
        self.drag_begin_offset
    }

    /// Currently settled (or committed) item index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Next state after a live scroll-offset update.
    #[must_use]
    pub fn with_offset(self, offset: f32) -> Self {
        Self {
            current_offset: offset,
            ..self
        }
    }

    /// Next state after drag-begin: records the drag anchor.
    #[must_use]
    pub fn begin_drag(self) -> Self {
        Self {
            drag_begin_offset: self.current_offset,
            phase: GesturePhase::Dragging,
            ..self
        }
    }

    /// Next state after a release that changes nothing (ignored or dropped).
    #[must_use]
    pub fn abort_drag(self) -> Self {
        Self {
            phase: GesturePhase::Idle,
            ..self
        }
    }

    /// Next state after committing a target index; the physical scroll is
    /// still pending.
    #[must_use]
    pub fn commit(self, index: usize) -> Self {
        Self {
            current_index: index,
            phase: GesturePhase::Settling,
            ..self
        }
    }

    /// Next state once the queued scroll command has been handed to the host.
    #[must_use]
    pub fn settle(self) -> Self {
        Self {
            phase: GesturePhase::Idle,
            ..self
        }
    }
}

//! Snap decision on drag release.
//!
//! Pure function of the scroll state at release time: decides whether the
//! strip snaps back to the current item, steps one index in the drag
//! direction, or ignores the release entirely.

use crate::scroll_state::ScrollState;

/// Outcome of a drag release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDecision {
    /// Release ignored: the live offset was negative (transient overscroll
    /// at the strip edge before bounce-back completes).
    Ignore,
    /// Settle on this index. Snap-backs decide the current index again.
    Target(usize),
    /// The step landed outside [0, data_length); the command is dropped and
    /// state stays unchanged.
    OutOfRange,
}

/// Decides the post-release target from the drag distance.
///
/// `distance = current_offset - drag_begin_offset`; releases shorter than
/// `min_scroll_distance` snap back, longer ones step exactly one index in
/// the drag direction. Paging moves in whole-item increments only.
pub fn decide(state: &ScrollState, min_scroll_distance: f32, data_length: usize) -> SnapDecision {
    if state.current_offset() < 0.0 {
        return SnapDecision::Ignore;
    }

    let distance = state.current_offset() - state.drag_begin_offset();
    let current = state.current_index();

    let target = if distance.abs() < min_scroll_distance {
        Some(current)
    } else if distance < 0.0 {
        current.checked_sub(1)
    } else {
        Some(current + 1)
    };

    match target {
        Some(index) if index < data_length => SnapDecision::Target(index),
        _ => SnapDecision::OutOfRange,
    }
}

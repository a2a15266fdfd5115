//! Foundation for the snap carousel: scroll state, snap decisions, the
//! controller that ties geometry and interpolation to host events, and the
//! seam the host list widget plugs into.

pub mod controller;
pub mod host;
pub mod scroll_state;
pub mod snap;

pub use controller::{CarouselController, ItemVisual, ScrollCommand, ScrollToOutcome};
pub use host::{RenderOptions, ScrollHost};
pub use scroll_state::{GesturePhase, ScrollState};
pub use snap::{decide, SnapDecision};

pub mod prelude {
    pub use crate::controller::{CarouselController, ItemVisual, ScrollToOutcome};
    pub use crate::host::{RenderOptions, ScrollHost};
    pub use crate::scroll_state::{GesturePhase, ScrollState};
    pub use carousel_core::{CarouselConfig, ConfigError};
}

//! Core math for the snap carousel: configuration, per-item geometry, and
//! scroll-offset interpolation.
//!
//! Everything in this crate is a pure function of an immutable
//! [`CarouselConfig`] and an item index. There is no mutable state and no
//! host dependency, so geometry tables can be memoized and interpolation can
//! be evaluated per item per frame on whatever timeline the host animation
//! system uses.

pub mod config;
pub mod geometry;
pub mod interpolation;

pub use config::{CarouselConfig, ConfigError};
pub use geometry::{Breakpoints, GeometryCalculator, ItemGeometry, ItemLayout, ItemMargin};
pub use interpolation::interpolate;

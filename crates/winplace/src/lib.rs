//! winplace: resolve a macOS window by its CoreGraphics id and place it on
//! the usable area of the display it lives on.
//!
//! The crate is split along the seams of the operation:
//! - [`anchor`]: pure origin computation for the five layout anchors.
//! - [`display`]: choose the display a window belongs to.
//! - [`resolve`]: find a window by id and correlate it with a mutable
//!   Accessibility element.
//! - [`mutate`]: the resize-then-reposition sequence and its fallback.
//! - [`ops`]: the platform collaborators, as traits, with a macOS
//!   implementation and a scriptable mock for tests.
//!
//! Coordinates are global, top-left origin, y growing downwards.

pub mod anchor;
pub mod display;
mod error;
pub mod geom;
pub mod mutate;
pub mod ops;
pub mod resolve;

#[cfg(target_os = "macos")]
mod mac;

#[cfg(test)]
mod property_tests;

pub use anchor::{LayoutAnchor, MARGIN, Percent};
pub use display::{DisplayDescriptor, DisplayLocator};
pub use error::{Error, Result};
pub use geom::{Point, Rect, Size};
pub use mutate::{
    MutationOrder, OptionsOverride, PartialSuccessPolicy, Placement, PlacementOptions,
    PlacementProfile, WindowMutator,
};
pub use resolve::{DEFAULT_TOLERANCE, WindowDescriptor, WindowResolver, bounds_match};

/// Alias for CoreGraphics CGWindowID (kCGWindowNumber).
pub type WindowId = u32;

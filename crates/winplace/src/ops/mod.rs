//! Platform collaborators consumed by the resolver and mutator.
//!
//! Production code uses [`RealPlatform`] (macOS only). Tests drive the same
//! logic through `MockPlatform` (enabled with the `test-utils` feature).

use crate::{
    Result,
    display::DisplayDescriptor,
    geom::{Point, Size},
    resolve::WindowDescriptor,
};

#[cfg(any(test, feature = "test-utils"))]
mod mock;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockHandle, MockPlatform};

#[cfg(target_os = "macos")]
pub use crate::mac::{AXElem, RealPlatform};

/// On-screen window enumeration (CoreGraphics window list).
pub trait WindowSource {
    /// Snapshot of the windows currently on screen, front to back.
    fn list_windows(&self) -> Vec<WindowDescriptor>;
}

/// Display enumeration.
pub trait DisplaySource {
    /// All displays, in platform order.
    fn displays(&self) -> Result<Vec<DisplayDescriptor>>;
    /// The designated primary display, if the platform names one.
    fn primary_display(&self) -> Option<DisplayDescriptor>;
}

/// Accessibility element access for one application's windows.
pub trait AxApi {
    /// Live, mutable window reference. Borrowed for one operation, never cached.
    type Handle;

    /// Windows of the application owning `pid`.
    fn app_windows(&self, pid: i32) -> Result<Vec<Self::Handle>>;
    /// Current position of the window.
    fn position(&self, win: &Self::Handle) -> Result<Point>;
    /// Current size of the window.
    fn size(&self, win: &Self::Handle) -> Result<Size>;
    /// Request a new position.
    fn set_position(&self, win: &Self::Handle, p: Point) -> Result<()>;
    /// Request a new size.
    fn set_size(&self, win: &Self::Handle, s: Size) -> Result<()>;
}

/// Every collaborator a placement needs.
pub trait Platform: WindowSource + DisplaySource + AxApi {}

impl<T: WindowSource + DisplaySource + AxApi> Platform for T {}

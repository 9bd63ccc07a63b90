//! macOS collaborators: CoreGraphics window list, AppKit screens and the
//! Accessibility API.

use std::ffi::c_void;

use core_foundation::base::{CFRelease, CFTypeRef};

use crate::{
    Result,
    display::DisplayDescriptor,
    geom::{Point, Size},
    ops::{AxApi, DisplaySource, WindowSource},
    resolve::WindowDescriptor,
};

mod ax;
mod cfutil;
mod screen;
mod window;

#[link(name = "CoreFoundation", kind = "framework")]
unsafe extern "C" {
    fn CFRetain(cf: CFTypeRef) -> CFTypeRef;
}

/// RAII guard that releases a retained AX element on drop.
pub struct AXElem(*mut c_void);

impl AXElem {
    /// Take ownership of a +1 reference returned by a `Create`/`Copy` call.
    ///
    /// # Safety
    /// `ptr` must be null or an owned `AXUIElementRef`.
    #[inline]
    pub(crate) unsafe fn from_create(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() { None } else { Some(Self(ptr)) }
    }
    /// Retain a borrowed element (e.g. from a CFArray) so it can outlive its
    /// container.
    #[inline]
    pub(crate) fn retain_from_borrowed(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        unsafe { CFRetain(ptr as CFTypeRef) };
        Some(Self(ptr))
    }
    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

impl Drop for AXElem {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

/// Production platform backed by CoreGraphics, AppKit and Accessibility.
///
/// Display enumeration must run on the main thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealPlatform;

impl WindowSource for RealPlatform {
    fn list_windows(&self) -> Vec<WindowDescriptor> {
        window::list_windows()
    }
}

impl DisplaySource for RealPlatform {
    fn displays(&self) -> Result<Vec<DisplayDescriptor>> {
        screen::displays()
    }
    fn primary_display(&self) -> Option<DisplayDescriptor> {
        screen::displays().ok()?.into_iter().next()
    }
}

impl AxApi for RealPlatform {
    type Handle = AXElem;

    fn app_windows(&self, pid: i32) -> Result<Vec<AXElem>> {
        ax::ax_app_windows(pid)
    }
    fn position(&self, win: &AXElem) -> Result<Point> {
        ax::ax_get_point(win.as_ptr(), ax::AX_POSITION)
    }
    fn size(&self, win: &AXElem) -> Result<Size> {
        ax::ax_get_size(win.as_ptr(), ax::AX_SIZE)
    }
    fn set_position(&self, win: &AXElem, p: Point) -> Result<()> {
        ax::ax_set_point(win.as_ptr(), ax::AX_POSITION, p)
    }
    fn set_size(&self, win: &AXElem, s: Size) -> Result<()> {
        ax::ax_set_size(win.as_ptr(), ax::AX_SIZE, s)
    }
}

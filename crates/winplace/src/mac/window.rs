use std::ffi::c_void;

use core_foundation::{
    array::CFArray,
    base::{CFGetTypeID, CFTypeRef, TCFType},
    dictionary::{CFDictionaryGetTypeID, CFDictionaryRef},
};
use core_graphics::window as cgw;
use tracing::{debug, trace};

use super::cfutil::{dict_get_i32, dict_get_rect, dict_get_string};
use crate::resolve::WindowDescriptor;

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGWindowListCopyWindowInfo(option: u32, relative_to: u32) -> CFTypeRef;
}

/// kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements
const ON_SCREEN_NO_DESKTOP: u32 = (1 << 0) | (1 << 4);

/// Build a descriptor from one window-info dictionary.
///
/// `None` for entries without an owner PID, a positive window number or
/// bounds.
fn descriptor(d: CFDictionaryRef) -> Option<WindowDescriptor> {
    let (pid, number, bounds, owner) = unsafe {
        (
            dict_get_i32(d, cgw::kCGWindowOwnerPID)?,
            dict_get_i32(d, cgw::kCGWindowNumber)?,
            dict_get_rect(d, cgw::kCGWindowBounds),
            dict_get_string(d, cgw::kCGWindowOwnerName),
        )
    };
    let id = u32::try_from(number).ok().filter(|n| *n > 0)?;
    let Some(bounds) = bounds else {
        trace!("list_windows: id={} has no bounds", id);
        return None;
    };
    Some(WindowDescriptor {
        id,
        pid,
        owner_name: owner.unwrap_or_default(),
        bounds,
    })
}

/// Snapshot of on-screen windows, front to back.
///
/// An empty list is returned if the window server gives us nothing.
pub(super) fn list_windows() -> Vec<WindowDescriptor> {
    let raw = unsafe { CGWindowListCopyWindowInfo(ON_SCREEN_NO_DESKTOP, 0) };
    if raw.is_null() {
        debug!("list_windows: window server returned no list");
        return Vec::new();
    }
    let entries: CFArray<*const c_void> = unsafe { CFArray::wrap_under_create_rule(raw as _) };
    let out: Vec<WindowDescriptor> = entries
        .get_all_values()
        .into_iter()
        .map(|item| item as CFTypeRef)
        .filter(|item| {
            !item.is_null() && unsafe { CFGetTypeID(*item) == CFDictionaryGetTypeID() }
        })
        .filter_map(|item| descriptor(item as CFDictionaryRef))
        .collect();
    trace!("list_windows: {} windows", out.len());
    out
}

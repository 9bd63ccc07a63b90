use std::{cell::RefCell, collections::HashMap, ffi::c_void, ptr, thread_local};

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetValueAtIndex},
    base::{CFRelease, CFTypeRef, TCFType},
    string::{CFString, CFStringRef},
};
use tracing::debug;

use super::AXElem;
use crate::{
    error::{Error, Result},
    geom::{Point, Size},
};

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXUIElementCreateApplication(pid: i32) -> *mut c_void;
    fn AXUIElementCopyAttributeValue(
        element: *mut c_void,
        attr: CFStringRef,
        value: *mut CFTypeRef,
    ) -> i32;
    fn AXUIElementSetAttributeValue(element: *mut c_void, attr: CFStringRef, value: CFTypeRef)
    -> i32;

    // AXValue helpers for CGPoint/CGSize
    fn AXValueCreate(theType: i32, valuePtr: *const c_void) -> CFTypeRef;
    fn AXValueGetValue(theValue: CFTypeRef, theType: i32, valuePtr: *mut c_void) -> bool;
}

// AXValue type constants (per Apple docs)
const K_AX_VALUE_CGPOINT_TYPE: i32 = 1;
const K_AX_VALUE_CGSIZE_TYPE: i32 = 2;
// AX error for invalid UI element (window closed / stale reference)
const K_AX_ERROR_INVALID_UI_ELEMENT: i32 = -25202;
// Accessibility is disabled for this process
const K_AX_ERROR_API_DISABLED: i32 = -25211;

pub(super) const AX_POSITION: &str = "AXPosition";
pub(super) const AX_SIZE: &str = "AXSize";
const AX_WINDOWS: &str = "AXWindows";

thread_local! {
    static ATTR_STRINGS: RefCell<HashMap<&'static str, CFString>> = RefCell::new(HashMap::new());
}

/// Stable CFStringRef for an attribute name, cached per thread.
///
/// Avoids toll-free bridging of static strings, which can trip pointer
/// authentication on recent macOS versions.
pub(super) fn cfstr(name: &'static str) -> CFStringRef {
    ATTR_STRINGS.with(|cell| {
        let mut m = cell.borrow_mut();
        let s = m.entry(name).or_insert_with(|| CFString::new(name));
        s.as_concrete_TypeRef()
    })
}

/// Map a non-zero AXError to our error type.
fn ax_err(err: i32) -> Error {
    match err {
        K_AX_ERROR_INVALID_UI_ELEMENT => Error::WindowGone,
        K_AX_ERROR_API_DISABLED => Error::Permission,
        _ => Error::AxCode(err),
    }
}

/// Copy an attribute holding an AXValue and unpack it into `T`.
fn ax_get_value<T>(element: *mut c_void, attr: &'static str, ty: i32, out: &mut T) -> Result<()> {
    let mut v: CFTypeRef = ptr::null_mut();
    let err = unsafe { AXUIElementCopyAttributeValue(element, cfstr(attr), &mut v) };
    if err != 0 {
        return Err(ax_err(err));
    }
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    let ok = unsafe { AXValueGetValue(v, ty, out as *mut T as *mut c_void) };
    unsafe { CFRelease(v) };
    if !ok {
        return Err(Error::Unsupported);
    }
    Ok(())
}

/// Wrap `value` in an AXValue and set it on `attr`.
fn ax_set_value<T>(element: *mut c_void, attr: &'static str, ty: i32, value: &T) -> Result<()> {
    let v = unsafe { AXValueCreate(ty, value as *const T as *const c_void) };
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    let err = unsafe { AXUIElementSetAttributeValue(element, cfstr(attr), v) };
    unsafe { CFRelease(v) };
    if err != 0 {
        return Err(ax_err(err));
    }
    Ok(())
}

pub(super) fn ax_get_point(element: *mut c_void, attr: &'static str) -> Result<Point> {
    let mut p = Point::default();
    ax_get_value(element, attr, K_AX_VALUE_CGPOINT_TYPE, &mut p)?;
    Ok(p)
}

pub(super) fn ax_get_size(element: *mut c_void, attr: &'static str) -> Result<Size> {
    let mut s = Size::default();
    ax_get_value(element, attr, K_AX_VALUE_CGSIZE_TYPE, &mut s)?;
    Ok(s)
}

pub(super) fn ax_set_point(element: *mut c_void, attr: &'static str, p: Point) -> Result<()> {
    ax_set_value(element, attr, K_AX_VALUE_CGPOINT_TYPE, &p)
}

pub(super) fn ax_set_size(element: *mut c_void, attr: &'static str, s: Size) -> Result<()> {
    ax_set_value(element, attr, K_AX_VALUE_CGSIZE_TYPE, &s)
}

/// All AX windows of the application owning `pid`, each retained.
pub(super) fn ax_app_windows(pid: i32) -> Result<Vec<AXElem>> {
    let Some(app) = (unsafe { AXElem::from_create(AXUIElementCreateApplication(pid)) }) else {
        return Err(Error::Unsupported);
    };
    let mut wins_ref: CFTypeRef = ptr::null_mut();
    let err =
        unsafe { AXUIElementCopyAttributeValue(app.as_ptr(), cfstr(AX_WINDOWS), &mut wins_ref) };
    if err != 0 {
        return Err(ax_err(err));
    }
    if wins_ref.is_null() {
        return Err(Error::Unsupported);
    }
    let arr = unsafe { CFArray::<*const c_void>::wrap_under_create_rule(wins_ref as _) };
    let n = unsafe { CFArrayGetCount(arr.as_concrete_TypeRef()) };
    let mut out = Vec::with_capacity(n.max(0) as usize);
    for i in 0..n {
        let wref =
            unsafe { CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) } as *mut c_void;
        // Retain so the element outlives `arr`.
        if let Some(elem) = AXElem::retain_from_borrowed(wref) {
            out.push(elem);
        }
    }
    debug!("ax_app_windows: pid={} windows={}", pid, out.len());
    Ok(out)
}

//! Typed reads from CoreFoundation dictionaries returned by the window server.

use std::ffi::c_void;

use core_foundation::{
    base::TCFType,
    dictionary::{CFDictionaryGetValue, CFDictionaryRef},
    number::{CFNumber, CFNumberRef},
    string::{CFString, CFStringRef},
};

use crate::geom::Rect;

/// Borrowed value for `key`, or `None` when absent.
fn lookup(dict: CFDictionaryRef, key: CFStringRef) -> Option<*const c_void> {
    let value = unsafe { CFDictionaryGetValue(dict, key as *const c_void) };
    (!value.is_null()).then_some(value)
}

/// Borrowed number for `key`.
fn number(dict: CFDictionaryRef, key: CFStringRef) -> Option<CFNumber> {
    lookup(dict, key).map(|v| unsafe { CFNumber::wrap_under_get_rule(v as CFNumberRef) })
}

pub(super) fn dict_get_string(dict: CFDictionaryRef, key: CFStringRef) -> Option<String> {
    let s = lookup(dict, key)?;
    Some(unsafe { CFString::wrap_under_get_rule(s as CFStringRef) }.to_string())
}

pub(super) fn dict_get_i32(dict: CFDictionaryRef, key: CFStringRef) -> Option<i32> {
    number(dict, key)?.to_i64().and_then(|v| i32::try_from(v).ok())
}

pub(super) fn dict_get_f64(dict: CFDictionaryRef, key: CFStringRef) -> Option<f64> {
    number(dict, key)?.to_f64()
}

/// Read a `kCGWindowBounds`-style nested dictionary (`X`, `Y`, `Width`,
/// `Height`) into a [`Rect`].
pub(super) fn dict_get_rect(dict: CFDictionaryRef, key: CFStringRef) -> Option<Rect> {
    let sub = lookup(dict, key)? as CFDictionaryRef;
    let field = |name: &'static str| {
        let k = CFString::from_static_string(name);
        dict_get_f64(sub, k.as_concrete_TypeRef())
    };
    Some(Rect::new(
        field("X")?,
        field("Y")?,
        field("Width")?,
        field("Height")?,
    ))
}

//! Accessibility permission checks for window placement.
//!
//! Moving and resizing another application's windows goes through the
//! Accessibility API, which silently fails for untrusted processes. This crate
//! exposes the raw query and a one-time gate the binary runs before touching
//! any window. There is no prompting logic here: the user is told where to
//! grant the permission and the process exits.
//!
//! Notes
//! - `accessibility_ok()` checks the global Accessibility permission. It is
//!   always `false` off macOS.
//! - `require_accessibility()` evaluates the check once per process and
//!   returns the cached verdict on every later call.

use std::{result, sync::OnceLock};

use tracing::{debug, warn};

/// Instruction shown when the permission is missing.
pub const GRANT_INSTRUCTIONS: &str = "Grant access in System Settings > Privacy & Security > \
     Accessibility for the terminal or binary running window-manager, then run it again.";

/// Permission failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The process is not trusted for Accessibility.
    #[error("Accessibility permission is not granted. {GRANT_INSTRUCTIONS}")]
    AccessibilityDenied,
}

/// Result alias for this crate.
pub type Result<T> = result::Result<T, Error>;

#[cfg(target_os = "macos")]
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
}

/// Check if the process holds the "Accessibility" permission.
#[cfg(target_os = "macos")]
pub fn accessibility_ok() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Check if the process holds the "Accessibility" permission.
///
/// There is no Accessibility API on this platform.
#[cfg(not(target_os = "macos"))]
pub fn accessibility_ok() -> bool {
    false
}

static ACCESSIBILITY: OnceLock<bool> = OnceLock::new();

/// Gate on the Accessibility permission, evaluated once per process.
pub fn require_accessibility() -> Result<()> {
    gate(&ACCESSIBILITY, accessibility_ok)
}

fn gate(cell: &OnceLock<bool>, check: impl FnOnce() -> bool) -> Result<()> {
    let granted = *cell.get_or_init(|| {
        let ok = check();
        debug!("permissions: accessibility_ok={}", ok);
        ok
    });
    if granted {
        Ok(())
    } else {
        warn!("permissions: accessibility not granted");
        Err(Error::AccessibilityDenied)
    }
}

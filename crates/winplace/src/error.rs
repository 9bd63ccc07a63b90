use std::result;

use thiserror::Error;

use crate::WindowId;

/// Errors that can occur while resolving or placing a window.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A size percentage outside `1..=100` was supplied.
    #[error("percentage must be between 1 and 100, got {0}")]
    PercentOutOfRange(u32),

    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    Permission,

    /// No on-screen window carries the requested identifier.
    #[error("window with id {id} not found")]
    WindowNotFound {
        /// The identifier that was looked up.
        id: WindowId,
    },

    /// No enumerated display overlaps the window bounds.
    #[error("no display contains or overlaps the window")]
    DisplayNotFound,

    /// No display could be selected, not even a primary fallback.
    #[error("could not determine a screen for the window")]
    NoScreenAvailable,

    /// The owning application's Accessibility window list could not be read.
    #[error("could not get windows for application (pid {pid}): {reason}")]
    ApplicationWindowsUnavailable {
        /// Owning process id.
        pid: i32,
        /// Underlying platform failure.
        reason: String,
    },

    /// No Accessibility window of the owning process matched the bounds.
    #[error("could not find window {id} among the windows of pid {pid}")]
    WindowHandleNotFound {
        /// The CoreGraphics window identifier being correlated.
        id: WindowId,
        /// Owning process id.
        pid: i32,
    },

    /// Neither the requested mutation nor the degraded fallback took effect.
    #[error("failed to place window {id}: size: {size}; position: {position}")]
    MutationFailed {
        /// The CoreGraphics window identifier.
        id: WindowId,
        /// Outcome of the size change.
        size: String,
        /// Outcome of the position change.
        position: String,
    },

    /// An Accessibility API operation failed with the given error code.
    #[error("AX operation failed: code {0}")]
    AxCode(i32),

    /// The AX element became invalid (e.g., window closed) during the operation.
    #[error("AX element invalid (window gone)")]
    WindowGone,

    /// The requested attribute or operation is not supported.
    #[error("Unsupported attribute")]
    Unsupported,

    /// Operation must be executed on the main thread.
    #[error("Operation requires main thread")]
    MainThread,

    /// The platform collaborators are only implemented for macOS.
    #[error("window placement is only supported on macOS")]
    UnsupportedPlatform,
}

/// Result alias for window placement operations.
pub type Result<T> = result::Result<T, Error>;

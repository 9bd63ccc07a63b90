//! Placement configuration for window-manager.
//!
//! A RON file sets the default placement tunables and per-application
//! quirks, keyed by the owner name the window list reports:
//!
//! ```ron
//! (
//!     margin: 16.0,
//!     apps: {
//!         "Terminal": (order: PositionFirst),
//!     },
//! )
//! ```
#![allow(missing_docs)]

use std::{
    env,
    path::{Path, PathBuf},
};

mod error;
mod loader;
mod raw;

#[cfg(test)]
mod test_parse;

pub use error::Error;
pub use loader::{load_from_path, load_from_str};
pub use raw::{RawConfig, RawOptions, RawOrder, RawPolicy};
use tracing::debug;
use winplace::PlacementProfile;

/// Determine the preferred user config path (`~/.config/window-manager/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".config");
    p.push("window-manager");
    p.push("config.ron");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided; it must exist.
/// 2) Else use `~/.config/window-manager/config.ron` when it exists.
/// 3) Else `None`: built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>, Error> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Read {
                path: Some(path.to_path_buf()),
                message: format!("Config file not found: {}", path.display()),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let preferred = default_config_path();
    if preferred.exists() {
        return Ok(Some(preferred));
    }
    debug!("config: no file at {}; using defaults", preferred.display());
    Ok(None)
}

/// Load the profile for `explicit` (or the default path), falling back to
/// built-in defaults when no file is present.
pub fn load(explicit: Option<&Path>) -> Result<PlacementProfile, Error> {
    match resolve_config_path(explicit)? {
        Some(path) => load_from_path(&path),
        None => Ok(PlacementProfile::default()),
    }
}

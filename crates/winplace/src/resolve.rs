//! Find a window by CoreGraphics id and correlate it with an AX element.
//!
//! The CoreGraphics window list and the Accessibility API do not share an
//! identifier space. The only bridge is geometry: the CG bounds captured by
//! [`WindowResolver::locate`] are compared against the live AX position and
//! size of every window of the owning process. Two windows of the same
//! process with near-identical bounds cannot be told apart this way; the first
//! one in AX order wins.

use tracing::debug;

use crate::{
    Error, Result, WindowId,
    geom::Rect,
    ops::{AxApi, WindowSource},
};

/// Default per-component tolerance, in points, for bounds correlation.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Snapshot of one on-screen window from the CoreGraphics window list.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDescriptor {
    /// CoreGraphics window id (`kCGWindowNumber`).
    pub id: WindowId,
    /// Owning process id.
    pub pid: i32,
    /// Owning application name.
    pub owner_name: String,
    /// Window bounds in global coordinates.
    pub bounds: Rect,
}

/// True when every component of `a` and `b` differs by strictly less than
/// `tolerance`.
#[inline]
pub fn bounds_match(a: &Rect, b: &Rect, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance
        && (a.y - b.y).abs() < tolerance
        && (a.w - b.w).abs() < tolerance
        && (a.h - b.h).abs() < tolerance
}

/// Resolves window ids to descriptors and descriptors to mutable handles.
pub struct WindowResolver<'a, P: ?Sized> {
    /// Window-list and Accessibility collaborators.
    platform: &'a P,
    /// Bounds tolerance used by [`WindowResolver::correlate`].
    tolerance: f64,
}

impl<'a, P: ?Sized> WindowResolver<'a, P> {
    /// Resolver using [`DEFAULT_TOLERANCE`].
    pub fn new(platform: &'a P) -> Self {
        Self::with_tolerance(platform, DEFAULT_TOLERANCE)
    }

    /// Resolver with an explicit correlation tolerance.
    pub fn with_tolerance(platform: &'a P, tolerance: f64) -> Self {
        Self {
            platform,
            tolerance,
        }
    }
}

impl<P: WindowSource + ?Sized> WindowResolver<'_, P> {
    /// Look up the on-screen window carrying `id`.
    pub fn locate(&self, id: WindowId) -> Result<WindowDescriptor> {
        let found = self
            .platform
            .list_windows()
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(Error::WindowNotFound { id })?;
        debug!(
            "locate: id={} pid={} app='{}' bounds={}",
            found.id, found.pid, found.owner_name, found.bounds
        );
        Ok(found)
    }
}

impl<P: AxApi + ?Sized> WindowResolver<'_, P> {
    /// Find the AX window of `desc.pid` whose live bounds match `desc.bounds`.
    ///
    /// `desc` should come from a [`WindowResolver::locate`] call made just
    /// before; a window that moved in between will not correlate.
    pub fn correlate(&self, desc: &WindowDescriptor) -> Result<P::Handle> {
        let windows = self.platform.app_windows(desc.pid).map_err(|e| {
            Error::ApplicationWindowsUnavailable {
                pid: desc.pid,
                reason: e.to_string(),
            }
        })?;
        debug!(
            "correlate: id={} pid={} candidates={} tolerance={:.2}",
            desc.id,
            desc.pid,
            windows.len(),
            self.tolerance
        );
        for (idx, win) in windows.into_iter().enumerate() {
            let live = match (self.platform.position(&win), self.platform.size(&win)) {
                (Ok(p), Ok(s)) => Rect::from((p, s)),
                (Err(e), _) | (_, Err(e)) => {
                    debug!("correlate: candidate {} unreadable: {}", idx, e);
                    continue;
                }
            };
            if bounds_match(&live, &desc.bounds, self.tolerance) {
                debug!("correlate: candidate {} matched live={}", idx, live);
                return Ok(win);
            }
            debug!("correlate: candidate {} live={} no match", idx, live);
        }
        Err(Error::WindowHandleNotFound {
            id: desc.id,
            pid: desc.pid,
        })
    }
}

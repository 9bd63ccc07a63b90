use objc2::rc::autoreleasepool;
use objc2_app_kit::NSScreen;
use objc2_foundation::{MainThreadMarker, NSRect};
use tracing::debug;

use crate::{
    display::DisplayDescriptor,
    error::{Error, Result},
    geom::Rect,
};

/// Convert an AppKit rect (bottom-left origin) into global top-left
/// coordinates, given the height of the primary screen.
fn flip(r: NSRect, primary_h: f64) -> Rect {
    Rect {
        x: r.origin.x,
        y: primary_h - (r.origin.y + r.size.height),
        w: r.size.width,
        h: r.size.height,
    }
}

/// Enumerate displays via `NSScreen`.
///
/// The first screen is the one carrying the menu bar; its frame defines the
/// flip between AppKit and CoreGraphics coordinates. Requires the main thread.
pub(super) fn displays() -> Result<Vec<DisplayDescriptor>> {
    let mtm = MainThreadMarker::new().ok_or(Error::MainThread)?;
    autoreleasepool(|_| {
        let screens = NSScreen::screens(mtm);
        let Some(primary) = screens.iter().next() else {
            debug!("displays: no screens available");
            return Ok(Vec::new());
        };
        let primary_h = primary.frame().size.height;
        let out: Vec<DisplayDescriptor> = screens
            .iter()
            .map(|s| {
                let d = DisplayDescriptor {
                    frame: flip(s.frame(), primary_h),
                    usable_frame: flip(s.visibleFrame(), primary_h),
                    name: unsafe { s.localizedName() }.to_string(),
                };
                debug!(
                    "displays: '{}' frame={} usable={}",
                    d.name, d.frame, d.usable_frame
                );
                d
            })
            .collect();
        Ok(out)
    })
}

#[cfg(test)]
mod tests {
    use objc2_foundation::{NSPoint, NSSize};

    use super::*;

    #[test]
    fn flip_menu_bar_and_secondary_above() {
        // Primary 1440x900: visible frame excludes a 25pt menu bar at the top.
        let vf = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(1440.0, 875.0));
        assert_eq!(flip(vf, 900.0), Rect::new(0.0, 25.0, 1440.0, 875.0));
        // Secondary stacked above the primary.
        let sec = NSRect::new(NSPoint::new(0.0, 900.0), NSSize::new(1920.0, 1080.0));
        assert_eq!(flip(sec, 900.0), Rect::new(0.0, -1080.0, 1920.0, 1080.0));
    }
}

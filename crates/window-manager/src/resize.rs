//! Implementation for the `resize` subcommand.

use tracing::{debug, info};
use winplace::{LayoutAnchor, Percent, Placement, PlacementProfile, WindowId};

use crate::{cli::ResizeArgs, error::Result};

/// Load configuration, pass the permission gate, then place the window.
///
/// Prints progress to stdout; the final line reports success or failure.
pub fn run(args: &ResizeArgs) -> Result<()> {
    let anchor = LayoutAnchor::parse_lenient(&args.anchor);
    let mut profile = config::load(args.config.as_deref())?;
    profile.forced = args.overrides();
    debug!("resize: profile={:?}", profile);

    permissions::require_accessibility()?;

    match place(args.window_id, args.width, args.height, anchor, profile) {
        Ok(placement) => {
            for line in report(&placement, anchor) {
                println!("{line}");
            }
            info!(
                "resize: id={} complete={} fallback={}",
                args.window_id,
                placement.is_complete(),
                placement.fallback_used
            );
            Ok(())
        }
        Err(e) => {
            println!("Failed to resize and position window {}", args.window_id);
            Err(e.into())
        }
    }
}

#[cfg(target_os = "macos")]
fn place(
    id: WindowId,
    width: Percent,
    height: Percent,
    anchor: LayoutAnchor,
    profile: PlacementProfile,
) -> winplace::Result<Placement> {
    use winplace::{WindowMutator, ops::RealPlatform};

    WindowMutator::with_profile(&RealPlatform, profile)
        .resize_and_position(id, width, height, anchor)
}

#[cfg(not(target_os = "macos"))]
fn place(
    id: WindowId,
    _width: Percent,
    _height: Percent,
    _anchor: LayoutAnchor,
    _profile: PlacementProfile,
) -> winplace::Result<Placement> {
    debug!("resize: id={} unsupported on this platform", id);
    Err(winplace::Error::UnsupportedPlatform)
}

/// Human-readable progress lines for a placement.
fn report(p: &Placement, anchor: LayoutAnchor) -> Vec<String> {
    let mut out = vec![
        format!("Display: {}", p.display.name),
        format!("Full screen frame: {}", p.display.frame),
        format!("Visible frame (usable area): {}", p.display.usable_frame),
        format!("Target size: {:.1} x {:.1}", p.requested.w, p.requested.h),
        format!(
            "Target position: {} - {} of usable area",
            p.requested.origin(),
            anchor
        ),
    ];
    if p.fallback_used {
        out.push(format!(
            "Positioned at current size: {} at {}",
            p.applied.size(),
            p.applied.origin()
        ));
    }
    out.extend(p.warnings.iter().map(|w| format!("Warning: {w}")));
    out.push(format!(
        "Successfully resized and positioned window {}",
        p.window.id
    ));
    out
}

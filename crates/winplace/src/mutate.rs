//! End-to-end resize and reposition of one window.
//!
//! The sequence is single-attempt: locate, pick a display, compute the
//! target, correlate, then mutate in the configured order. When the size
//! change is rejected the window is re-anchored at its current size instead;
//! there is no other retry.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::{
    Error, Result, WindowId,
    anchor::{self, LayoutAnchor, MARGIN, Percent},
    display::{DisplayDescriptor, DisplayLocator},
    geom::Rect,
    ops::Platform,
    resolve::{DEFAULT_TOLERANCE, WindowDescriptor, WindowResolver},
};

/// Order in which size and position are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationOrder {
    /// Resize, then move. Some applications refuse a move whose resulting
    /// frame does not fit at the old size; resizing first avoids that.
    #[default]
    SizeFirst,
    /// Move, then resize. For applications that reject the default order.
    PositionFirst,
}

/// What counts as success when only part of the mutation takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialSuccessPolicy {
    /// Success if either the size or the position change took effect; the
    /// failed half is reported as a warning.
    #[default]
    AnyOf,
    /// Success only if both the size and the position change took effect.
    AllOf,
}

/// Tunables for one placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Per-component bounds tolerance for window correlation.
    pub tolerance: f64,
    /// Edge margin for edge anchors.
    pub margin: f64,
    /// Size/position ordering.
    pub order: MutationOrder,
    /// Partial-success policy.
    pub policy: PartialSuccessPolicy,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            margin: MARGIN,
            order: MutationOrder::default(),
            policy: PartialSuccessPolicy::default(),
        }
    }
}

/// Partial set of [`PlacementOptions`]; `None` keeps the underlying value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptionsOverride {
    /// Override for [`PlacementOptions::tolerance`].
    pub tolerance: Option<f64>,
    /// Override for [`PlacementOptions::margin`].
    pub margin: Option<f64>,
    /// Override for [`PlacementOptions::order`].
    pub order: Option<MutationOrder>,
    /// Override for [`PlacementOptions::policy`].
    pub policy: Option<PartialSuccessPolicy>,
}

impl OptionsOverride {
    /// Layer this override on top of `base`.
    pub fn apply(&self, base: PlacementOptions) -> PlacementOptions {
        PlacementOptions {
            tolerance: self.tolerance.unwrap_or(base.tolerance),
            margin: self.margin.unwrap_or(base.margin),
            order: self.order.unwrap_or(base.order),
            policy: self.policy.unwrap_or(base.policy),
        }
    }
}

/// Options with per-application quirks.
///
/// Resolution order: `base`, then the override for the owning application
/// (matched on the CoreGraphics owner name), then `forced`.
#[derive(Debug, Clone, Default)]
pub struct PlacementProfile {
    /// Defaults for every application.
    pub base: PlacementOptions,
    /// Quirks keyed by owning application name.
    pub per_app: HashMap<String, OptionsOverride>,
    /// Final override, typically from command-line flags.
    pub forced: OptionsOverride,
}

impl PlacementProfile {
    /// Effective options for windows owned by `app`.
    pub fn resolve(&self, app: &str) -> PlacementOptions {
        let mut opts = self.base;
        if let Some(quirk) = self.per_app.get(app) {
            debug!("profile: applying quirk for '{}': {:?}", app, quirk);
            opts = quirk.apply(opts);
        }
        self.forced.apply(opts)
    }
}

/// Outcome of a successful placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The window that was placed.
    pub window: WindowDescriptor,
    /// The display the target was computed against.
    pub display: DisplayDescriptor,
    /// Options in effect after profile resolution.
    pub options: PlacementOptions,
    /// Target computed from the requested percentages.
    pub requested: Rect,
    /// Frame the window was last asked to occupy. Differs from `requested`
    /// when the size change was rejected and the window was re-anchored at
    /// its current size.
    pub applied: Rect,
    /// The size change took effect.
    pub size_applied: bool,
    /// A position change took effect.
    pub position_applied: bool,
    /// The window was re-anchored at its current size.
    pub fallback_used: bool,
    /// Failures tolerated under [`PartialSuccessPolicy::AnyOf`].
    pub warnings: Vec<String>,
}

impl Placement {
    /// Both halves of the requested mutation took effect.
    pub fn is_complete(&self) -> bool {
        self.size_applied && self.position_applied && !self.fallback_used
    }
}

/// Orchestrates resolution, geometry and mutation for one window.
pub struct WindowMutator<'a, P: Platform + ?Sized> {
    /// Platform collaborators.
    platform: &'a P,
    /// Placement options and quirks.
    profile: PlacementProfile,
}

impl<'a, P: Platform + ?Sized> WindowMutator<'a, P> {
    /// Mutator with default options.
    pub fn new(platform: &'a P) -> Self {
        Self::with_profile(platform, PlacementProfile::default())
    }

    /// Mutator with explicit options and per-application quirks.
    pub fn with_profile(platform: &'a P, profile: PlacementProfile) -> Self {
        Self { platform, profile }
    }

    /// Size window `id` to a fraction of its display's usable frame and
    /// anchor it.
    pub fn resize_and_position(
        &self,
        id: WindowId,
        width_pct: Percent,
        height_pct: Percent,
        anchor: LayoutAnchor,
    ) -> Result<Placement> {
        let desc = WindowResolver::new(self.platform).locate(id)?;
        let options = self.profile.resolve(&desc.owner_name);
        let screen = DisplayLocator::new(self.platform).locate(&desc.bounds)?;
        let size = anchor::target_size(&screen.usable_frame, width_pct, height_pct);
        let requested = anchor::target_rect(anchor, &screen.usable_frame, size, options.margin);
        info!(
            "place: id={} app='{}' display='{}' usable={} anchor={} target={}",
            id, desc.owner_name, screen.name, screen.usable_frame, anchor, requested
        );
        debug!("place: options={:?}", options);

        let handle =
            WindowResolver::with_tolerance(self.platform, options.tolerance).correlate(&desc)?;

        let mut placement = Placement {
            window: desc,
            display: screen,
            options,
            requested,
            applied: requested,
            size_applied: false,
            position_applied: false,
            fallback_used: false,
            warnings: Vec::new(),
        };
        match options.order {
            MutationOrder::SizeFirst => self.size_then_position(&handle, anchor, placement),
            MutationOrder::PositionFirst => {
                self.position_then_size(&handle, anchor, &mut placement)?;
                Ok(placement)
            }
        }
    }

    /// Default ordering: resize, then move; re-anchor at current size if the
    /// resize is rejected.
    fn size_then_position(
        &self,
        win: &P::Handle,
        anchor: LayoutAnchor,
        mut placement: Placement,
    ) -> Result<Placement> {
        let id = placement.window.id;
        let requested = placement.requested;
        match self.platform.set_size(win, requested.size()) {
            Ok(()) => {
                placement.size_applied = true;
                debug!("place: size {} applied", requested.size());
            }
            Err(size_err) => {
                warn!("place: id={} size change rejected: {}", id, size_err);
                if placement.options.policy == PartialSuccessPolicy::AllOf {
                    return Err(Error::MutationFailed {
                        id,
                        size: size_err.to_string(),
                        position: "not attempted".into(),
                    });
                }
                return match self.reanchor_at_current_size(win, anchor, &mut placement) {
                    Ok(()) => {
                        placement.warnings.push(format!(
                            "Failed to set window size ({}); positioned at current size {}",
                            size_err,
                            placement.applied.size()
                        ));
                        Ok(placement)
                    }
                    Err(pos_err) => Err(Error::MutationFailed {
                        id,
                        size: size_err.to_string(),
                        position: pos_err.to_string(),
                    }),
                };
            }
        }
        match self.platform.set_position(win, requested.origin()) {
            Ok(()) => {
                placement.position_applied = true;
                debug!("place: position {} applied", requested.origin());
                Ok(placement)
            }
            Err(pos_err) => {
                warn!("place: id={} position change rejected: {}", id, pos_err);
                match placement.options.policy {
                    PartialSuccessPolicy::AnyOf => {
                        placement
                            .warnings
                            .push(format!("Failed to set window position ({})", pos_err));
                        Ok(placement)
                    }
                    PartialSuccessPolicy::AllOf => Err(Error::MutationFailed {
                        id,
                        size: "applied".into(),
                        position: pos_err.to_string(),
                    }),
                }
            }
        }
    }

    /// Quirk ordering: move, then resize.
    fn position_then_size(
        &self,
        win: &P::Handle,
        anchor: LayoutAnchor,
        placement: &mut Placement,
    ) -> Result<()> {
        let id = placement.window.id;
        let requested = placement.requested;
        let all_of = placement.options.policy == PartialSuccessPolicy::AllOf;
        let pos_result = self.platform.set_position(win, requested.origin());
        if let Err(e) = &pos_result {
            warn!("place: id={} position change rejected: {}", id, e);
        } else {
            placement.position_applied = true;
        }
        let size_result = self.platform.set_size(win, requested.size());
        if let Err(e) = &size_result {
            warn!("place: id={} size change rejected: {}", id, e);
        } else {
            placement.size_applied = true;
        }
        match (pos_result, size_result) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(pos_err), Err(size_err)) if all_of => Err(Error::MutationFailed {
                id,
                size: size_err.to_string(),
                position: pos_err.to_string(),
            }),
            (Err(pos_err), Err(size_err)) => {
                // Last resort: the window keeps its size, so try placing it
                // at the origin anchored for that size.
                match self.reanchor_at_current_size(win, anchor, placement) {
                    Ok(()) => {
                        placement.warnings.push(format!(
                            "Failed to set window size ({}); positioned at current size {}",
                            size_err,
                            placement.applied.size()
                        ));
                        Ok(())
                    }
                    Err(retry_err) => Err(Error::MutationFailed {
                        id,
                        size: size_err.to_string(),
                        position: format!("{}; at current size: {}", pos_err, retry_err),
                    }),
                }
            }
            (Err(pos_err), Ok(())) if all_of => Err(Error::MutationFailed {
                id,
                size: "applied".into(),
                position: pos_err.to_string(),
            }),
            (Err(pos_err), Ok(())) => {
                placement
                    .warnings
                    .push(format!("Failed to set window position ({})", pos_err));
                Ok(())
            }
            (Ok(()), Err(size_err)) if all_of => Err(Error::MutationFailed {
                id,
                size: size_err.to_string(),
                position: "applied".into(),
            }),
            (Ok(()), Err(size_err)) => {
                // The window sits where the requested size would have been
                // anchored; move it so its current size is anchored instead.
                placement.warnings.push(format!(
                    "Failed to set window size ({}); re-anchoring at current size",
                    size_err
                ));
                if let Err(e) = self.reanchor_at_current_size(win, anchor, placement) {
                    placement
                        .warnings
                        .push(format!("Failed to re-anchor window ({})", e));
                }
                Ok(())
            }
        }
    }

    /// Degraded placement: read the window's current size, recompute the
    /// anchored origin for it and set only the position.
    fn reanchor_at_current_size(
        &self,
        win: &P::Handle,
        anchor: LayoutAnchor,
        placement: &mut Placement,
    ) -> Result<()> {
        let current = self.platform.size(win)?;
        let usable = placement.display.usable_frame;
        let origin = anchor::compute(
            anchor,
            &usable,
            current.width,
            current.height,
            placement.options.margin,
        );
        debug!(
            "fallback: current size {} -> origin {} (requested {})",
            current, origin, placement.requested
        );
        placement.fallback_used = true;
        placement.applied = Rect::from((origin, current));
        self.platform.set_position(win, origin)?;
        placement.position_applied = true;
        Ok(())
    }
}

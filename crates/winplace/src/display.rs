//! Pick the display a window belongs to.

use tracing::debug;

use crate::{Error, Result, geom::Rect, ops::DisplaySource};

/// A physical display as reported by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDescriptor {
    /// Entire display in global coordinates.
    pub frame: Rect,
    /// Frame minus menu bar, Dock and notch reservations.
    pub usable_frame: Rect,
    /// Human-readable display name.
    pub name: String,
}

impl DisplayDescriptor {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, frame: Rect, usable_frame: Rect) -> Self {
        Self {
            frame,
            usable_frame,
            name: name.into(),
        }
    }
}

/// Select the display for `bounds` from an enumerated list.
///
/// The display whose frame contains the window's center wins (first match in
/// enumeration order). Otherwise the display sharing the largest positive
/// overlap area with the window is chosen; ties keep the earlier display.
pub fn select_display<'a>(
    displays: &'a [DisplayDescriptor],
    bounds: &Rect,
) -> Result<&'a DisplayDescriptor> {
    let center = bounds.center();
    if let Some(d) = displays.iter().find(|d| d.frame.contains(center)) {
        debug!("display: '{}' contains window center {}", d.name, center);
        return Ok(d);
    }
    let mut best: Option<(&DisplayDescriptor, f64)> = None;
    for d in displays {
        let area = d.frame.intersection_area(bounds);
        debug!("display: '{}' overlap area={:.1}", d.name, area);
        if area > 0.0 && best.is_none_or(|(_, a)| area > a) {
            best = Some((d, area));
        }
    }
    best.map(|(d, _)| d).ok_or(Error::DisplayNotFound)
}

/// Display selection against a live [`DisplaySource`], with primary fallback.
pub struct DisplayLocator<'a, S: DisplaySource + ?Sized> {
    /// Display enumeration collaborator.
    source: &'a S,
}

impl<'a, S: DisplaySource + ?Sized> DisplayLocator<'a, S> {
    /// Locator over `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Display for a window at `bounds`.
    ///
    /// Falls back to the primary display when no display contains or overlaps
    /// the window (including when no display is enumerated); fails with
    /// [`Error::NoScreenAvailable`] when there is no primary either.
    pub fn locate(&self, bounds: &Rect) -> Result<DisplayDescriptor> {
        let displays = self.source.displays()?;
        match select_display(&displays, bounds) {
            Ok(d) => Ok(d.clone()),
            Err(Error::DisplayNotFound) => {
                debug!("display: none overlaps {}; trying primary", bounds);
                self.source.primary_display().ok_or(Error::NoScreenAvailable)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::MockPlatform;

    fn laptop() -> DisplayDescriptor {
        DisplayDescriptor::new(
            "Built-in Retina Display",
            Rect::new(0.0, 0.0, 1440.0, 900.0),
            Rect::new(0.0, 25.0, 1440.0, 875.0),
        )
    }

    fn external() -> DisplayDescriptor {
        DisplayDescriptor::new(
            "LG UltraFine",
            Rect::new(1440.0, -180.0, 1920.0, 1080.0),
            Rect::new(1440.0, -155.0, 1920.0, 1055.0),
        )
    }

    #[test]
    fn window_inside_one_display() {
        let displays = [laptop(), external()];
        let got = select_display(&displays, &Rect::new(1600.0, 100.0, 800.0, 600.0)).unwrap();
        assert_eq!(got.name, "LG UltraFine");
        let got = select_display(&displays, &Rect::new(100.0, 100.0, 400.0, 300.0)).unwrap();
        assert_eq!(got.name, "Built-in Retina Display");
    }

    #[test]
    fn center_on_shared_edge_goes_right() {
        let displays = [laptop(), external()];
        // Center x == 1440: belongs to the display whose left edge it is.
        let got = select_display(&displays, &Rect::new(1240.0, 100.0, 400.0, 300.0)).unwrap();
        assert_eq!(got.name, "LG UltraFine");
    }

    #[test]
    fn largest_overlap_wins_when_center_is_off_screen() {
        let a = DisplayDescriptor::new("A", Rect::new(0.0, 0.0, 100.0, 100.0), Rect::default());
        let b = DisplayDescriptor::new("B", Rect::new(0.0, 200.0, 100.0, 100.0), Rect::default());
        // Window spans y 70..270, center (50,170) in the gap between A and B.
        // Overlap with A: 100x30 = 3000; with B: 100x70 = 7000.
        let win = Rect::new(0.0, 70.0, 100.0, 200.0);
        let displays = [a, b];
        assert_eq!(select_display(&displays, &win).unwrap().name, "B");
    }

    #[test]
    fn overlap_300_vs_700() {
        let a = DisplayDescriptor::new("A", Rect::new(70.0, 0.0, 100.0, 100.0), Rect::default());
        let b = DisplayDescriptor::new("B", Rect::new(30.0, 110.0, 100.0, 100.0), Rect::default());
        // Center (50,105) sits in the gap between the two displays.
        let win = Rect::new(0.0, 90.0, 100.0, 30.0);
        assert_eq!(a.frame.intersection_area(&win), 300.0);
        assert_eq!(b.frame.intersection_area(&win), 700.0);
        let displays = [a, b];
        assert_eq!(select_display(&displays, &win).unwrap().name, "B");
    }

    #[test]
    fn no_overlap_is_display_not_found() {
        let displays = [laptop()];
        let err = select_display(&displays, &Rect::new(-5000.0, -5000.0, 10.0, 10.0)).unwrap_err();
        assert_eq!(err, Error::DisplayNotFound);
        assert_eq!(
            select_display(&[], &Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap_err(),
            Error::DisplayNotFound
        );
    }

    #[test]
    fn locator_falls_back_to_primary() {
        let mock = MockPlatform::new();
        mock.set_displays(vec![external()]);
        mock.set_primary(Some(laptop()));
        let d = DisplayLocator::new(&mock)
            .locate(&Rect::new(-5000.0, -5000.0, 10.0, 10.0))
            .unwrap();
        assert_eq!(d.name, "Built-in Retina Display");
        assert!(mock.calls_contains("primary_display"));
    }

    #[test]
    fn empty_display_list_uses_primary() {
        let mock = MockPlatform::new();
        mock.set_displays(Vec::new());
        mock.set_primary(Some(laptop()));
        let d = DisplayLocator::new(&mock)
            .locate(&Rect::new(100.0, 100.0, 400.0, 300.0))
            .unwrap();
        assert_eq!(d.name, "Built-in Retina Display");
        assert!(mock.calls_contains("primary_display"));
    }

    #[test]
    fn locator_without_primary_fails() {
        let mock = MockPlatform::new();
        let err = DisplayLocator::new(&mock)
            .locate(&Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap_err();
        assert_eq!(err, Error::NoScreenAvailable);
    }
}

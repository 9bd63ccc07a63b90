//! Target geometry for the five layout anchors.
//!
//! Everything here is pure. Results are never clamped to the usable frame:
//! a 100% window anchored to an edge deliberately overhangs by the margin.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    result,
    str::FromStr,
};

use tracing::debug;

use crate::{
    Error, Result,
    geom::{Point, Rect, Size},
};

/// Distance kept between an edge-anchored window and the usable frame edge.
pub const MARGIN: f64 = 20.0;

/// Named target position for a window within a display's usable frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutAnchor {
    /// Centered on both axes.
    #[default]
    Center,
    /// Against the top edge, horizontally centered.
    Top,
    /// Against the bottom edge, horizontally centered.
    Bottom,
    /// Against the left edge, vertically centered.
    Left,
    /// Against the right edge, vertically centered.
    Right,
}

impl LayoutAnchor {
    /// All anchors, in declaration order.
    pub const ALL: [Self; 5] = [Self::Center, Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Parse anchor text; anything unrecognized becomes [`LayoutAnchor::Center`].
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            other => {
                debug!("anchor '{}' not recognized; using center", other);
                Self::Center
            }
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for LayoutAnchor {
    type Err = Infallible;

    fn from_str(s: &str) -> result::Result<Self, Infallible> {
        Ok(Self::parse_lenient(s))
    }
}

impl Display for LayoutAnchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A size percentage in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u32);

impl Percent {
    /// Full extent of the usable frame.
    pub const FULL: Self = Self(100);

    /// Validate `value` lies in `(0, 100]`.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 || value > 100 {
            return Err(Error::PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The raw percentage.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Scale `extent` by this percentage.
    #[inline]
    pub fn of(self, extent: f64) -> f64 {
        extent * f64::from(self.0) / 100.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}%", self.0)
    }
}

/// Target size as a fraction of the usable frame.
pub fn target_size(usable: &Rect, width_pct: Percent, height_pct: Percent) -> Size {
    Size {
        width: width_pct.of(usable.w),
        height: height_pct.of(usable.h),
    }
}

/// Origin that places a `width`×`height` rectangle at `anchor` within `usable`.
pub fn compute(anchor: LayoutAnchor, usable: &Rect, width: f64, height: f64, margin: f64) -> Point {
    let centered_x = usable.left() + (usable.w - width) / 2.0;
    let centered_y = usable.top() + (usable.h - height) / 2.0;
    match anchor {
        LayoutAnchor::Center => Point {
            x: centered_x,
            y: centered_y,
        },
        LayoutAnchor::Top => Point {
            x: centered_x,
            y: usable.top() + margin,
        },
        LayoutAnchor::Bottom => Point {
            x: centered_x,
            y: usable.bottom() - height - margin,
        },
        LayoutAnchor::Left => Point {
            x: usable.left() + margin,
            y: centered_y,
        },
        LayoutAnchor::Right => Point {
            x: usable.right() - width - margin,
            y: centered_y,
        },
    }
}

/// Full target rectangle: the anchored origin plus the unchanged size.
pub fn target_rect(anchor: LayoutAnchor, usable: &Rect, size: Size, margin: f64) -> Rect {
    let origin = compute(anchor, usable, size.width, size.height, margin);
    Rect::from((origin, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USABLE: Rect = Rect::new(0.0, 0.0, 1440.0, 900.0);

    fn pct(v: u32) -> Percent {
        Percent::new(v).unwrap()
    }

    #[test]
    fn percent_bounds() {
        assert_eq!(Percent::new(0), Err(Error::PercentOutOfRange(0)));
        assert_eq!(Percent::new(101), Err(Error::PercentOutOfRange(101)));
        assert_eq!(Percent::new(1).map(Percent::get), Ok(1));
        assert_eq!(Percent::new(100), Ok(Percent::FULL));
    }

    #[test]
    fn half_of_laptop_screen_centered() {
        let size = target_size(&USABLE, pct(50), pct(50));
        assert_eq!(size, Size { width: 720.0, height: 450.0 });
        let p = compute(LayoutAnchor::Center, &USABLE, size.width, size.height, MARGIN);
        assert_eq!(p, Point { x: 360.0, y: 225.0 });
    }

    #[test]
    fn edge_anchors_keep_margin() {
        let p = compute(LayoutAnchor::Top, &USABLE, 720.0, 450.0, MARGIN);
        assert_eq!(p, Point { x: 360.0, y: 20.0 });
        let p = compute(LayoutAnchor::Bottom, &USABLE, 720.0, 450.0, MARGIN);
        assert_eq!(p, Point { x: 360.0, y: 430.0 });
        let p = compute(LayoutAnchor::Left, &USABLE, 720.0, 450.0, MARGIN);
        assert_eq!(p, Point { x: 20.0, y: 225.0 });
        let p = compute(LayoutAnchor::Right, &USABLE, 720.0, 450.0, MARGIN);
        assert_eq!(p, Point { x: 700.0, y: 225.0 });
    }

    #[test]
    fn usable_frame_offset_by_menu_bar() {
        // Secondary display to the right, 25pt menu bar.
        let usable = Rect::new(1440.0, 25.0, 1920.0, 1055.0);
        let p = compute(LayoutAnchor::Top, &usable, 960.0, 500.0, MARGIN);
        assert_eq!(p, Point { x: 1920.0, y: 45.0 });
    }

    #[test]
    fn full_size_edge_anchor_is_not_clamped() {
        let p = compute(LayoutAnchor::Right, &USABLE, 1440.0, 900.0, MARGIN);
        assert_eq!(p.x, -20.0);
    }

    #[test]
    fn lenient_parse() {
        assert_eq!(LayoutAnchor::parse_lenient("top"), LayoutAnchor::Top);
        assert_eq!(LayoutAnchor::parse_lenient("RIGHT"), LayoutAnchor::Right);
        assert_eq!(LayoutAnchor::parse_lenient(" left "), LayoutAnchor::Left);
        assert_eq!(LayoutAnchor::parse_lenient("diagonal"), LayoutAnchor::Center);
        assert_eq!(LayoutAnchor::parse_lenient(""), LayoutAnchor::Center);
        assert_eq!("bottom".parse::<LayoutAnchor>(), Ok(LayoutAnchor::Bottom));
    }

    #[test]
    fn unknown_anchor_matches_center() {
        let unknown = LayoutAnchor::parse_lenient("diagonal");
        assert_eq!(
            compute(unknown, &USABLE, 300.0, 200.0, MARGIN),
            compute(LayoutAnchor::Center, &USABLE, 300.0, 200.0, MARGIN)
        );
    }
}

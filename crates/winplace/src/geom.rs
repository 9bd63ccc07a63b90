//! Geometry primitives in global top-left coordinates.
//!
//! `Point`/`Size` are `#[repr(C)]` so they can be handed to AXValue as
//! CGPoint/CGSize directly.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A point in global screen coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

/// A width/height pair.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// An axis-aligned rectangle; `y` is the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from origin and extent.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    #[inline]
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.0
    }
    #[inline]
    pub fn cy(&self) -> f64 {
        self.y + self.h / 2.0
    }
    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.cx(),
            y: self.cy(),
        }
    }
    /// Origin (top-left corner).
    #[inline]
    pub fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
    /// Extent of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    ///
    /// Adjacent displays share an edge; this keeps a point on that edge from
    /// belonging to both.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Area of the intersection with `other`; zero when disjoint.
    #[inline]
    pub fn intersection_area(&self, other: &Self) -> f64 {
        overlap_1d(self.left(), self.right(), other.left(), other.right())
            * overlap_1d(self.top(), self.bottom(), other.top(), other.bottom())
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "({:.1},{:.1},{:.1},{:.1})",
            self.x, self.y, self.w, self.h
        )
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({:.1},{:.1})", self.x, self.y)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

impl From<(Point, Size)> for Rect {
    fn from(v: (Point, Size)) -> Self {
        let (p, s) = v;
        Self {
            x: p.x,
            y: p.y,
            w: s.width,
            h: s.height,
        }
    }
}

/// True when `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Length of the overlap between `[a1, a2]` and `[b1, b2]`; zero when disjoint.
#[inline]
pub fn overlap_1d(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0.0)
}

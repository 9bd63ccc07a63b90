use proptest::prelude::*;

use crate::{
    anchor::{self, LayoutAnchor, MARGIN},
    display::{DisplayDescriptor, select_display},
    geom::{Rect, Size, approx_eq},
    resolve::bounds_match,
};

const EPS: f64 = 1e-6;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -4000.0f64..4000.0,
        -2000.0f64..2000.0,
        200.0f64..4000.0,
        200.0f64..2500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn anchor_strategy() -> impl Strategy<Value = LayoutAnchor> {
    prop::sample::select(LayoutAnchor::ALL.to_vec())
}

proptest! {
    #[test]
    fn target_keeps_requested_size(
        usable in rect_strategy(),
        anchor in anchor_strategy(),
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
    ) {
        let r = anchor::target_rect(anchor, &usable, Size { width: w, height: h }, MARGIN);
        prop_assert_eq!(r.w, w);
        prop_assert_eq!(r.h, h);
    }

    #[test]
    fn center_shares_midpoints(
        usable in rect_strategy(),
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
    ) {
        let r = anchor::target_rect(LayoutAnchor::Center, &usable, Size { width: w, height: h }, MARGIN);
        prop_assert!(approx_eq(r.cx(), usable.cx(), EPS));
        prop_assert!(approx_eq(r.cy(), usable.cy(), EPS));
    }

    #[test]
    fn edge_anchors_hold_margin_and_center_other_axis(
        usable in rect_strategy(),
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
    ) {
        let size = Size { width: w, height: h };
        let top = anchor::target_rect(LayoutAnchor::Top, &usable, size, MARGIN);
        prop_assert!(approx_eq(top.top(), usable.top() + MARGIN, EPS));
        prop_assert!(approx_eq(top.cx(), usable.cx(), EPS));

        let bottom = anchor::target_rect(LayoutAnchor::Bottom, &usable, size, MARGIN);
        prop_assert!(approx_eq(bottom.bottom(), usable.bottom() - MARGIN, EPS));
        prop_assert!(approx_eq(bottom.cx(), usable.cx(), EPS));

        let left = anchor::target_rect(LayoutAnchor::Left, &usable, size, MARGIN);
        prop_assert!(approx_eq(left.left(), usable.left() + MARGIN, EPS));
        prop_assert!(approx_eq(left.cy(), usable.cy(), EPS));

        let right = anchor::target_rect(LayoutAnchor::Right, &usable, size, MARGIN);
        prop_assert!(approx_eq(right.right(), usable.right() - MARGIN, EPS));
        prop_assert!(approx_eq(right.cy(), usable.cy(), EPS));
    }

    #[test]
    fn unknown_anchor_text_is_center(
        usable in rect_strategy(),
        text in "[a-z]{1,12}",
        w in 1.0f64..5000.0,
        h in 1.0f64..5000.0,
    ) {
        prop_assume!(!["center", "top", "bottom", "left", "right"].contains(&text.as_str()));
        let parsed = LayoutAnchor::parse_lenient(&text);
        prop_assert_eq!(
            anchor::compute(parsed, &usable, w, h, MARGIN),
            anchor::compute(LayoutAnchor::Center, &usable, w, h, MARGIN)
        );
    }

    #[test]
    fn window_inside_display_resolves_to_it(
        fx in 0.1f64..0.5,
        fy in 0.1f64..0.5,
        fw in 0.05f64..0.45,
        fh in 0.05f64..0.45,
    ) {
        let left = DisplayDescriptor::new("left", Rect::new(0.0, 0.0, 1440.0, 900.0), Rect::default());
        let right = DisplayDescriptor::new("right", Rect::new(1440.0, 0.0, 2560.0, 1440.0), Rect::default());
        let f = right.frame;
        let win = Rect::new(f.x + fx * f.w, f.y + fy * f.h, fw * f.w, fh * f.h);
        let displays = [left, right];
        prop_assert_eq!(&select_display(&displays, &win).unwrap().name, "right");
    }

    #[test]
    fn bounds_match_below_tolerance(
        r in rect_strategy(),
        d in -0.99f64..0.99,
    ) {
        let moved = Rect::new(r.x + d, r.y + d, r.w + d, r.h + d);
        prop_assert!(bounds_match(&r, &moved, 1.0));
        let off = Rect::new(r.x, r.y, r.w + 1.5, r.h);
        prop_assert!(!bounds_match(&r, &off, 1.0));
    }
}

use super::*;

#[test]
fn inset_rect_shrinks_and_grows() {
    let r = Rect::new(0.0, 0.0, 320.0, 600.0);
    assert_eq!(
        inset_rect(r, Insets::uniform(6.0)),
        Rect::new(6.0, 6.0, 314.0, 594.0)
    );
    let anchor = Rect::new(140.0, 50.0, 180.0, 90.0);
    assert_eq!(
        inset_rect(anchor, Insets::uniform(-6.0)),
        Rect::new(134.0, 44.0, 186.0, 96.0)
    );
}

#[test]
fn inset_rect_collapses_instead_of_going_negative() {
    let r = inset_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Insets::uniform(6.0));
    assert_eq!(r.width(), 0.0);
    assert_eq!(r.height(), 0.0);
    assert_eq!(r.origin(), Point::new(6.0, 6.0));
}

#[test]
fn divide_rect_clamps_distance() {
    let r = Rect::new(6.0, 6.0, 314.0, 594.0);
    let (slice, rem) = divide_rect(r, 38.0, DivideEdge::MinY);
    assert_eq!(slice, Rect::new(6.0, 6.0, 314.0, 44.0));
    assert_eq!(rem, Rect::new(6.0, 44.0, 314.0, 594.0));

    let (slice, rem) = divide_rect(r, -20.0, DivideEdge::MinX);
    assert_eq!(slice.width(), 0.0);
    assert_eq!(rem, r);

    let (slice, rem) = divide_rect(r, 10_000.0, DivideEdge::MinX);
    assert_eq!(slice, r);
    assert_eq!(rem.width(), 0.0);
}

#[test]
fn fit_inside_moves_minimal_distance() {
    let container = Rect::new(0.0, 0.0, 100.0, 100.0);
    let r = Rect::new(80.0, -10.0, 120.0, 20.0);
    assert_eq!(fit_inside(r, container), Rect::new(60.0, 0.0, 100.0, 30.0));

    let inside = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert_eq!(fit_inside(inside, container), inside);
}

#[test]
fn fit_inside_never_resizes_oversized_rects() {
    let container = Rect::new(0.0, 0.0, 100.0, 100.0);
    let r = Rect::new(-50.0, 0.0, 250.0, 10.0);
    let fitted = fit_inside(r, container);
    assert_eq!(fitted.width(), 300.0);
    assert_eq!(fitted.height(), 10.0);
}

#[test]
fn holds_and_area_ignore_negative_extents() {
    let inverted = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(clamped_area(inverted), 0.0);
    assert!(!holds(inverted, Size::new(1.0, 1.0)));
    assert!(holds(inverted, Size::ZERO));
    assert_eq!(sanitize_size(Size::new(-4.0, 3.0)), Size::new(0.0, 3.0));
}

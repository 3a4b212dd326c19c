use super::*;
use crate::foundation::core::Point;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size(Point::new(x, y), Size::new(w, h))
}

fn resolve(container: Rect, anchor: Rect, content: Size, order: &[PreferredPlacement]) -> CalloutPosition {
    let m = CalloutMetrics::default();
    resolve_position(
        container,
        anchor,
        content,
        order,
        m.layout_margins(),
        m.arrow_inset(),
    )
}

const ORDER: [PreferredPlacement; 3] = DEFAULT_PREFERRED_ORDER;

#[test]
fn top_slice_too_short_falls_through_to_bottom() {
    let container = rect(0.0, 0.0, 320.0, 600.0);
    let anchor = rect(140.0, 50.0, 40.0, 40.0);

    let slices = PlacementResolver::default().candidates(container, anchor);
    assert_eq!(slices[0].placement, Placement::Top);
    assert_eq!(slices[0].slice.height(), 38.0);

    let pos = resolve(container, anchor, Size::new(200.0, 150.0), &ORDER);
    assert_eq!(pos.placement, Placement::Bottom);
    assert_eq!(pos.frame, Rect::new(60.0, 96.0, 260.0, 246.0));
    assert_eq!(pos.arrow_offset, 0.0);
}

#[test]
fn frame_is_nudged_into_container_and_arrow_follows_anchor() {
    let container = rect(0.0, 0.0, 320.0, 600.0);
    let anchor = rect(280.0, 50.0, 30.0, 30.0);
    let pos = resolve(container, anchor, Size::new(200.0, 150.0), &ORDER);
    assert_eq!(pos.placement, Placement::Bottom);
    assert_eq!(pos.frame, Rect::new(114.0, 86.0, 314.0, 236.0));
    // Anchor center is right of the callout center.
    assert_eq!(pos.arrow_offset, 81.0);
}

#[test]
fn first_fitting_preference_wins() {
    let container = rect(0.0, 0.0, 320.0, 600.0);
    let anchor = rect(140.0, 280.0, 40.0, 40.0);
    let content = Size::new(100.0, 60.0);

    let pos = resolve(container, anchor, content, &ORDER);
    assert_eq!(pos.placement, Placement::Top);
    assert_eq!(pos.frame.y1, 274.0);

    let pos = resolve(
        container,
        anchor,
        content,
        &[PreferredPlacement::Bottom, PreferredPlacement::Top],
    );
    assert_eq!(pos.placement, Placement::Bottom);
    assert_eq!(pos.frame.y0, 326.0);
}

#[test]
fn horizontal_prefers_right_on_equal_width() {
    let container = rect(0.0, 0.0, 400.0, 100.0);
    let anchor = rect(180.0, 30.0, 40.0, 40.0);
    let slices = PlacementResolver::default()
        .with_preferred_order([PreferredPlacement::Horizontal])
        .candidates(container, anchor);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].placement, Placement::Right);
    assert_eq!(slices[0].slice, Rect::new(226.0, 6.0, 394.0, 94.0));

    let pos = resolve(
        container,
        anchor,
        Size::new(100.0, 50.0),
        &[PreferredPlacement::Horizontal],
    );
    assert_eq!(pos.placement, Placement::Right);
    assert_eq!(pos.frame, Rect::new(226.0, 25.0, 326.0, 75.0));
    assert_eq!(pos.arrow_offset, 0.0);
}

#[test]
fn horizontal_picks_left_when_strictly_wider() {
    let container = rect(0.0, 0.0, 400.0, 100.0);
    let anchor = rect(300.0, 10.0, 40.0, 20.0);
    let pos = resolve(
        container,
        anchor,
        Size::new(100.0, 50.0),
        &[PreferredPlacement::Horizontal],
    );
    assert_eq!(pos.placement, Placement::Left);
    assert_eq!(pos.frame, Rect::new(194.0, 6.0, 294.0, 56.0));
    // Vertical offset for side placements; anchor center is above the callout center.
    assert_eq!(pos.arrow_offset, -11.0);
}

#[test]
fn oversized_content_clips_to_largest_overlap() {
    let container = rect(0.0, 0.0, 320.0, 200.0);
    let anchor = rect(140.0, 80.0, 40.0, 40.0);
    let pos = resolve(container, anchor, Size::new(300.0, 300.0), &ORDER);
    assert_eq!(pos.placement, Placement::Right);
    assert_eq!(pos.frame, Rect::new(186.0, 6.0, 314.0, 194.0));
    assert_eq!(pos.arrow_offset, 0.0);
}

#[test]
fn overlap_ties_go_to_the_later_candidate() {
    let container = rect(0.0, 0.0, 320.0, 200.0);
    let anchor = rect(140.0, 80.0, 40.0, 40.0);
    let pos = resolve(
        container,
        anchor,
        Size::new(300.0, 300.0),
        &[PreferredPlacement::Top, PreferredPlacement::Bottom],
    );
    assert_eq!(pos.placement, Placement::Bottom);
    assert_eq!(pos.frame, Rect::new(10.0, 126.0, 310.0, 194.0));
}

#[test]
fn degenerate_inputs_return_the_sentinel() {
    let anchor = rect(10.0, 10.0, 20.0, 20.0);
    let content = Size::new(50.0, 50.0);
    assert_eq!(
        resolve(Rect::ZERO, anchor, content, &ORDER),
        CalloutPosition::UNKNOWN
    );
    assert_eq!(
        resolve(rect(0.0, 0.0, 0.0, 400.0), anchor, content, &ORDER),
        CalloutPosition::UNKNOWN
    );
    assert_eq!(
        resolve(rect(0.0, 0.0, 320.0, 600.0), anchor, content, &[]),
        CalloutPosition::UNKNOWN
    );
}

#[test]
fn anchor_outside_layout_area_yields_empty_slice_not_negative() {
    let container = rect(0.0, 0.0, 320.0, 600.0);
    let anchor = rect(100.0, 1000.0, 20.0, 20.0);
    let slices = PlacementResolver::default()
        .with_preferred_order([PreferredPlacement::Bottom])
        .candidates(container, anchor);
    assert_eq!(slices[0].slice.height(), 0.0);

    let pos = resolve(
        container,
        anchor,
        Size::new(10.0, 10.0),
        &[PreferredPlacement::Bottom],
    );
    assert_eq!(pos.placement, Placement::Bottom);
    assert_eq!(pos.frame.height(), 0.0);
    assert!(pos.frame.width() >= 0.0);
}

#[test]
fn tiny_container_still_resolves_without_panicking() {
    let container = rect(0.0, 0.0, 8.0, 8.0);
    let anchor = rect(2.0, 2.0, 4.0, 4.0);
    let pos = resolve(container, anchor, Size::new(100.0, 100.0), &ORDER);
    assert_ne!(pos.placement, Placement::Unknown);
    assert_eq!(clamped_area(pos.frame), 0.0);
}

#[test]
fn negative_content_is_treated_as_empty() {
    let container = rect(0.0, 0.0, 320.0, 600.0);
    let anchor = rect(140.0, 280.0, 40.0, 40.0);
    let pos = resolve(container, anchor, Size::new(-10.0, -10.0), &ORDER);
    assert_eq!(pos.placement, Placement::Top);
    assert_eq!(pos.frame.width(), 0.0);
    assert_eq!(pos.frame.height(), 0.0);
}

#[test]
fn resolver_uses_its_metrics() {
    let metrics = CalloutMetrics {
        layout_margin: 20.0,
        ..CalloutMetrics::default()
    };
    let container = rect(0.0, 0.0, 320.0, 600.0);
    let anchor = rect(140.0, 50.0, 40.0, 40.0);
    let resolver = PlacementResolver::new(metrics);
    let slices = resolver.candidates(container, anchor);
    // Grown anchor top is 50 + (20 - 12) = 58; layout starts at 20.
    assert_eq!(slices[0].slice, Rect::new(20.0, 20.0, 300.0, 58.0));
    assert_eq!(resolver.preferred_order(), &ORDER);
    assert_eq!(resolver.metrics().layout_margin, 20.0);
}

use crate::{
    config::metrics::{ARROW_HEIGHT, CalloutMetrics},
    foundation::{
        core::{Affine, Point, Rect, Size},
        math::safe_ratio,
    },
    placement::position::{CalloutPosition, Placement},
    transform::affine::project_unit_point,
};

/// Pivot at the center of a view's bounds.
pub const DEFAULT_ANCHOR_POINT: Point = Point::new(0.5, 0.5);

/// Fractional pivot placing a callout's transform origin on its arrow tip.
///
/// Uses the fixed [`ARROW_HEIGHT`]. A zero frame dimension contributes a zero
/// ratio rather than dividing by zero.
pub fn anchor_point_for_placement(placement: Placement, arrow_offset: f64, frame_size: Size) -> Point {
    anchor_point_with_arrow_height(placement, arrow_offset, frame_size, ARROW_HEIGHT)
}

/// [`anchor_point_for_placement`] with an explicit arrow height.
pub fn anchor_point_with_arrow_height(
    placement: Placement,
    arrow_offset: f64,
    frame_size: Size,
    arrow_height: f64,
) -> Point {
    let w = frame_size.width;
    let h = frame_size.height;
    match placement {
        Placement::Top => Point::new(
            0.5 + safe_ratio(arrow_offset, w),
            1.0 + safe_ratio(arrow_height, h),
        ),
        Placement::Bottom => Point::new(
            0.5 + safe_ratio(arrow_offset, w),
            -safe_ratio(arrow_height, h),
        ),
        Placement::Left => Point::new(
            1.0 + safe_ratio(arrow_height, w),
            0.5 + safe_ratio(arrow_offset, h),
        ),
        Placement::Right => Point::new(
            -safe_ratio(arrow_height, w),
            0.5 + safe_ratio(arrow_offset, h),
        ),
        Placement::Unknown => DEFAULT_ANCHOR_POINT,
    }
}

/// Position that keeps a view visually in place when its pivot moves from
/// `old_anchor` to `new_anchor` under `transform`.
pub fn compensated_position(
    old_anchor: Point,
    new_anchor: Point,
    bounds_size: Size,
    transform: Affine,
    position: Point,
) -> Point {
    let old = project_unit_point(old_anchor, bounds_size, transform);
    let new = project_unit_point(new_anchor, bounds_size, transform);
    position + (new - old)
}

/// Host view whose pivot can be moved.
///
/// `position` is the pivot's location in the parent's coordinate space, as in
/// a retained layer model; `transform` is applied about the pivot.
pub trait AnchoredLayer {
    /// Size of the view's own bounds.
    fn bounds_size(&self) -> Size;
    /// Current transform applied about the anchor point.
    fn transform(&self) -> Affine;
    /// Location of the anchor point in the parent's space.
    fn position(&self) -> Point;
    /// Current fractional anchor point.
    fn anchor_point(&self) -> Point;
    /// Move the view's anchor point location in the parent's space.
    fn set_position(&mut self, position: Point);
    /// Store a new fractional anchor point.
    fn set_anchor_point(&mut self, anchor: Point);
}

/// Move `layer`'s pivot to `new_anchor` without moving it on screen.
pub fn set_anchor_point<L: AnchoredLayer + ?Sized>(layer: &mut L, new_anchor: Point) {
    let position = compensated_position(
        layer.anchor_point(),
        new_anchor,
        layer.bounds_size(),
        layer.transform(),
        layer.position(),
    );
    layer.set_position(position);
    layer.set_anchor_point(new_anchor);
}

/// Pin `layer`'s pivot to the arrow tip of `position` and return the pivot used.
pub fn set_anchor_point_for_position<L: AnchoredLayer + ?Sized>(
    layer: &mut L,
    position: &CalloutPosition,
    metrics: &CalloutMetrics,
) -> Point {
    let anchor = anchor_point_with_arrow_height(
        position.placement,
        position.arrow_offset,
        position.frame.size(),
        metrics.arrow_height,
    );
    set_anchor_point(layer, anchor);
    anchor
}

/// Plain layer geometry for hosts without their own scene graph, and for tests.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerGeometry {
    /// Size of the layer's bounds.
    pub bounds_size: Size,
    /// Anchor point location in the parent's space.
    pub position: Point,
    /// Fractional anchor point.
    pub anchor_point: Point,
    /// Transform applied about the anchor point.
    pub transform: Affine,
}

impl LayerGeometry {
    /// Untransformed layer occupying `frame`, pivoting on its center.
    pub fn from_frame(frame: Rect) -> Self {
        let frame = frame.abs();
        Self {
            bounds_size: frame.size(),
            position: frame.center(),
            anchor_point: DEFAULT_ANCHOR_POINT,
            transform: Affine::IDENTITY,
        }
    }

    /// Map a point in the layer's bounds into the parent's space.
    pub fn point_to_parent(&self, p: Point) -> Point {
        let pivot = Point::new(
            self.bounds_size.width * self.anchor_point.x,
            self.bounds_size.height * self.anchor_point.y,
        );
        let local = p - pivot.to_vec2();
        self.position + (self.transform * local).to_vec2()
    }

    /// Axis-aligned bounding box of the transformed layer in the parent's space.
    pub fn frame(&self) -> Rect {
        let w = self.bounds_size.width;
        let h = self.bounds_size.height;
        let corners = [
            self.point_to_parent(Point::new(0.0, 0.0)),
            self.point_to_parent(Point::new(w, 0.0)),
            self.point_to_parent(Point::new(0.0, h)),
            self.point_to_parent(Point::new(w, h)),
        ];
        let first = Rect::from_points(corners[0], corners[0]);
        corners[1..]
            .iter()
            .fold(first, |acc, &c| acc.union_pt(c))
    }
}

impl AnchoredLayer for LayerGeometry {
    fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn position(&self) -> Point {
        self.position
    }

    fn anchor_point(&self) -> Point {
        self.anchor_point
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_anchor_point(&mut self, anchor: Point) {
        self.anchor_point = anchor;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anchor/mapper.rs"]
mod tests;

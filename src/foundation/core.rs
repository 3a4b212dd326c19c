use crate::foundation::math::non_negative;

pub use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};

/// Edge a rect is divided from, mirroring the two origins a slice can grow from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DivideEdge {
    MinX,
    MinY,
}

/// Shrink `rect` by `insets` (negative insets grow it).
///
/// A result that would have negative extent collapses to zero width/height at
/// the inset origin.
pub(crate) fn inset_rect(rect: Rect, insets: Insets) -> Rect {
    let x0 = rect.x0 + insets.x0;
    let y0 = rect.y0 + insets.y0;
    let x1 = rect.x1 - insets.x1;
    let y1 = rect.y1 - insets.y1;
    Rect::new(x0, y0, x1.max(x0), y1.max(y0))
}

/// Split `rect` at `distance` from `edge` into `(slice, remainder)`.
///
/// The distance is clamped to `[0, extent]` so neither part is ever negative.
pub(crate) fn divide_rect(rect: Rect, distance: f64, edge: DivideEdge) -> (Rect, Rect) {
    let rect = rect.abs();
    match edge {
        DivideEdge::MinX => {
            let d = non_negative(distance).min(rect.width());
            let cut = rect.x0 + d;
            (
                Rect::new(rect.x0, rect.y0, cut, rect.y1),
                Rect::new(cut, rect.y0, rect.x1, rect.y1),
            )
        }
        DivideEdge::MinY => {
            let d = non_negative(distance).min(rect.height());
            let cut = rect.y0 + d;
            (
                Rect::new(rect.x0, rect.y0, rect.x1, cut),
                Rect::new(rect.x0, cut, rect.x1, rect.y1),
            )
        }
    }
}

/// Translate `rect` by the minimal delta that keeps it inside `container`.
///
/// Never resizes; on an axis where `rect` is larger than `container` the two
/// overhangs are netted against each other.
pub(crate) fn fit_inside(rect: Rect, container: Rect) -> Rect {
    let dx = non_negative(container.x0 - rect.x0) - non_negative(rect.x1 - container.x1);
    let dy = non_negative(container.y0 - rect.y0) - non_negative(rect.y1 - container.y1);
    rect + Vec2::new(dx, dy)
}

/// Area of `rect`, treating negative extents as zero.
pub(crate) fn clamped_area(rect: Rect) -> f64 {
    non_negative(rect.width()) * non_negative(rect.height())
}

/// Whether `rect` holds `size` without clipping.
pub(crate) fn holds(rect: Rect, size: Size) -> bool {
    non_negative(rect.width()) >= size.width && non_negative(rect.height()) >= size.height
}

/// Clamp a content size to non-negative dimensions.
pub(crate) fn sanitize_size(size: Size) -> Size {
    Size::new(non_negative(size.width), non_negative(size.height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

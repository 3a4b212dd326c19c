use crate::{
    foundation::{
        core::{Affine, Point, Size},
        math::safe_ratio,
    },
    placement::position::{CalloutPosition, Placement},
    transform::affine::{flip_vertical, quarter_turn},
};

/// Edge of the callout background the arrow glyph is centered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowEdge {
    /// Top edge; arrow points up.
    Top,
    /// Bottom edge; arrow points down.
    Bottom,
    /// Left edge; arrow points left.
    Left,
    /// Right edge; arrow points right.
    Right,
}

/// Inner shadow artwork variant drawn inside the arrow glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InnerShadow {
    /// Shadow along the bottom of the arrow.
    Bottom,
    /// Shadow along the right of the arrow.
    Right,
    /// The right-hand artwork mirrored horizontally.
    RightMirrored,
}

/// Arrow glyph layout for a resolved placement.
///
/// The glyph artwork points down; `transform` orients it toward the anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowGlyph {
    /// Whether the glyph is hidden (no placement).
    pub hidden: bool,
    /// Orientation applied to the down-pointing artwork.
    pub transform: Affine,
    /// Edge the glyph's center is attached to.
    pub edge: Option<ArrowEdge>,
    /// Offset of the glyph's center from the edge midpoint, along the edge.
    pub offset: f64,
    /// Inner shadow variant, if any.
    pub inner_shadow: Option<InnerShadow>,
}

impl ArrowGlyph {
    /// Glyph state for [`Placement::Unknown`].
    pub const HIDDEN: Self = Self {
        hidden: true,
        transform: Affine::IDENTITY,
        edge: None,
        offset: 0.0,
        inner_shadow: None,
    };

    /// Center of the glyph in the callout's bounds, or `None` when hidden.
    pub fn center_in(&self, bounds_size: Size) -> Option<Point> {
        let w = bounds_size.width;
        let h = bounds_size.height;
        let center = match self.edge? {
            ArrowEdge::Top => Point::new(w * 0.5 + self.offset, 0.0),
            ArrowEdge::Bottom => Point::new(w * 0.5 + self.offset, h),
            ArrowEdge::Left => Point::new(0.0, h * 0.5 + self.offset),
            ArrowEdge::Right => Point::new(w, h * 0.5 + self.offset),
        };
        Some(center)
    }
}

/// Glyph orientation, attachment and shadow for `placement`.
pub fn arrow_glyph_for(placement: Placement, arrow_offset: f64) -> ArrowGlyph {
    let (transform, edge, inner_shadow) = match placement {
        Placement::Top => (Affine::IDENTITY, ArrowEdge::Bottom, Some(InnerShadow::Bottom)),
        Placement::Bottom => (flip_vertical(), ArrowEdge::Top, None),
        Placement::Left => (quarter_turn(false), ArrowEdge::Right, Some(InnerShadow::Right)),
        Placement::Right => (
            quarter_turn(true),
            ArrowEdge::Left,
            Some(InnerShadow::RightMirrored),
        ),
        Placement::Unknown => return ArrowGlyph::HIDDEN,
    };
    ArrowGlyph {
        hidden: false,
        transform,
        edge: Some(edge),
        offset: arrow_offset,
        inner_shadow,
    }
}

/// Pivot of the arrow artwork itself: horizontally centered, `arrow_height`
/// above the bottom of an image `image_height` tall.
pub fn arrow_glyph_pivot(image_height: f64, arrow_height: f64) -> Point {
    Point::new(0.5, 1.0 - safe_ratio(arrow_height, image_height))
}

/// Host view that draws the arrow glyph.
pub trait ArrowHost {
    /// Replace the glyph's orientation, constraints and shadow with `glyph`.
    fn apply_arrow_glyph(&mut self, glyph: &ArrowGlyph);
}

/// Update `host`'s arrow for `placement` and `arrow_offset`.
///
/// Each call fully replaces the previous glyph state, so repeated calls with
/// the same arguments are no-ops in effect.
pub fn set_arrow_offset<H: ArrowHost + ?Sized>(
    host: &mut H,
    placement: Placement,
    arrow_offset: f64,
) -> ArrowGlyph {
    let glyph = arrow_glyph_for(placement, arrow_offset);
    host.apply_arrow_glyph(&glyph);
    glyph
}

/// [`set_arrow_offset`] for a resolved position.
pub fn set_arrow_offset_for_position<H: ArrowHost + ?Sized>(
    host: &mut H,
    position: &CalloutPosition,
) -> ArrowGlyph {
    set_arrow_offset(host, position.placement, position.arrow_offset)
}

#[cfg(test)]
#[path = "../../tests/unit/anchor/arrow.rs"]
mod tests;

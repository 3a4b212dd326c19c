use crate::foundation::core::Rect;

/// Side preference supplied by the host, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredPlacement {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left or right of the anchor, whichever side is wider (right on ties).
    Horizontal,
}

/// Priority order used when the host does not supply one.
pub const DEFAULT_PREFERRED_ORDER: [PreferredPlacement; 3] = [
    PreferredPlacement::Top,
    PreferredPlacement::Bottom,
    PreferredPlacement::Horizontal,
];

/// Side of the anchor the callout was resolved onto.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Callout sits above the anchor; arrow on its bottom edge.
    Top,
    /// Callout sits below the anchor; arrow on its top edge.
    Bottom,
    /// Callout sits left of the anchor; arrow on its right edge.
    Left,
    /// Callout sits right of the anchor; arrow on its left edge.
    Right,
    /// No placement could be resolved.
    #[default]
    Unknown,
}

impl Placement {
    /// `true` for placements whose arrow offset runs along the x axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// `true` for placements whose arrow offset runs along the y axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Resolved frame, side and arrow offset of a callout.
///
/// Always derived fresh from the current geometry and replaced wholesale on
/// every recompute.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalloutPosition {
    /// Callout frame in container coordinates.
    pub frame: Rect,
    /// Side of the anchor the frame sits on.
    pub placement: Placement,
    /// Signed distance from the frame's center to the anchor's center along the
    /// arrow's edge (x for top/bottom, y for left/right).
    pub arrow_offset: f64,
}

impl CalloutPosition {
    /// Sentinel returned when no placement can be resolved.
    pub const UNKNOWN: Self = Self {
        frame: Rect::ZERO,
        placement: Placement::Unknown,
        arrow_offset: 0.0,
    };

    /// Whether this is a best-effort position with no arrow.
    pub fn is_unknown(&self) -> bool {
        self.placement == Placement::Unknown
    }
}

impl Default for CalloutPosition {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

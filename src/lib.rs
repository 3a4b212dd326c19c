//! Placement and anchor-point geometry for arrow-anchored callouts.
//!
//! A callout is a popover-like surface attached to a source view (the anchor),
//! drawn on one side of it with an arrow pointing back at the anchor's center.
//! This crate computes where that surface goes and how to pivot its
//! present/dismiss animations on the arrow tip. It does no rendering.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `container + anchor + content size -> CalloutPosition`
//!    (frame, side, arrow offset) via [`resolve_position`] / [`PlacementResolver`].
//! 2. **Pivot**: `CalloutPosition -> anchor point` via
//!    [`anchor_point_for_placement`], applied to a live view with
//!    [`set_anchor_point`] so the view does not jump.
//! 3. **Arrow**: `CalloutPosition -> ArrowGlyph` via [`arrow_glyph_for`] /
//!    [`set_arrow_offset`].
//! 4. **Present**: [`CalloutPresentation`] re-runs the above on presentation
//!    start, content-size changes and container resizes, and hands the host
//!    [`TransitionKeyframes`] for its own animation loop.
//!
//! Everything is synchronous and pure apart from the host adapters
//! ([`AnchoredLayer`], [`ArrowHost`]). Degenerate geometry resolves to
//! [`CalloutPosition::UNKNOWN`] or a clipped frame rather than an error.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anchor;
mod config;
mod foundation;
mod placement;
mod presentation;

/// Shared transform helpers (affine projection, interpolation).
pub mod transform;

pub use anchor::arrow::{
    ArrowEdge, ArrowGlyph, ArrowHost, InnerShadow, arrow_glyph_for, arrow_glyph_pivot,
    set_arrow_offset, set_arrow_offset_for_position,
};
pub use anchor::mapper::{
    AnchoredLayer, DEFAULT_ANCHOR_POINT, LayerGeometry, anchor_point_for_placement,
    anchor_point_with_arrow_height, compensated_position, set_anchor_point,
    set_anchor_point_for_position,
};
pub use config::metrics::{
    ARROW_BASE_WIDTH, ARROW_HEIGHT, CONTENT_INSETS, CalloutMetrics, LAYOUT_MARGIN, PRESENT_SCALE,
    TRANSITION_DURATION_SECS,
};
pub use foundation::core::{Affine, Insets, Point, Rect, Size, Vec2};
pub use foundation::error::{CalloutError, CalloutResult};
pub use placement::position::{
    CalloutPosition, DEFAULT_PREFERRED_ORDER, Placement, PreferredPlacement,
};
pub use placement::resolver::{Candidate, PlacementResolver, resolve_position};
pub use presentation::controller::{CalloutPresentation, Phase, PresentationUpdate, TapResponse};
pub use presentation::transition::{CalloutVisualState, TransitionDirection, TransitionKeyframes};

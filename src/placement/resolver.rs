use crate::{
    config::metrics::CalloutMetrics,
    foundation::core::{
        DivideEdge, Insets, Rect, Size, clamped_area, divide_rect, fit_inside, holds, inset_rect,
        sanitize_size,
    },
    placement::position::{
        CalloutPosition, DEFAULT_PREFERRED_ORDER, Placement, PreferredPlacement,
    },
};

/// One evaluated side: the free region of the layout area on that side of the
/// anchor, and the placement it resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Region the callout frame must fit in.
    pub slice: Rect,
    /// Placement reported when this candidate wins.
    pub placement: Placement,
}

/// Resolve where a callout of `content_size` goes relative to `anchor_frame`.
///
/// Two passes over the candidates built from `preferred_order`:
///
/// 1. exact fit: the first candidate whose slice holds the content wins, with
///    the content centered on the anchor and nudged into the slice;
/// 2. best overlap: otherwise each candidate's nudged frame is clipped to its
///    slice and the largest clipped area wins, later candidates winning ties.
///
/// An empty `preferred_order` or a zero-area container yields
/// [`CalloutPosition::UNKNOWN`]. This never fails.
#[tracing::instrument(level = "debug", skip(preferred_order))]
pub fn resolve_position(
    container_bounds: Rect,
    anchor_frame: Rect,
    content_size: Size,
    preferred_order: &[PreferredPlacement],
    margins: Insets,
    arrow_inset: f64,
) -> CalloutPosition {
    if preferred_order.is_empty() || clamped_area(container_bounds) == 0.0 {
        tracing::debug!("no room or no preferences; returning unknown position");
        return CalloutPosition::UNKNOWN;
    }

    let anchor = anchor_frame.abs();
    let content = sanitize_size(content_size);
    let candidates = candidate_slices(
        container_bounds,
        anchor,
        preferred_order,
        margins,
        arrow_inset,
    );

    if let Some(pos) = exact_fit(&candidates, anchor, content) {
        tracing::debug!(placement = ?pos.placement, frame = ?pos.frame, "exact fit");
        return pos;
    }

    let pos = best_overlap(&candidates, anchor, content);
    tracing::warn!(
        placement = ?pos.placement,
        frame = ?pos.frame,
        ?content,
        "no slice holds the callout; clipping to the largest overlap"
    );
    pos
}

/// Build one candidate per preference, in order.
pub(crate) fn candidate_slices(
    container_bounds: Rect,
    anchor: Rect,
    preferred_order: &[PreferredPlacement],
    margins: Insets,
    arrow_inset: f64,
) -> Vec<Candidate> {
    let layout = inset_rect(container_bounds.abs(), margins);
    let grown = grow_anchor(anchor, arrow_inset);

    // Distances are measured from the layout area's origin.
    let top = grown.y0 - layout.y0;
    let bottom = grown.y1 - layout.y0;
    let left = grown.x0 - layout.x0;
    let right = grown.x1 - layout.x0;

    preferred_order
        .iter()
        .map(|pref| {
            let c = match pref {
                PreferredPlacement::Top => Candidate {
                    slice: divide_rect(layout, top, DivideEdge::MinY).0,
                    placement: Placement::Top,
                },
                PreferredPlacement::Bottom => Candidate {
                    slice: divide_rect(layout, bottom, DivideEdge::MinY).1,
                    placement: Placement::Bottom,
                },
                PreferredPlacement::Horizontal => {
                    let l = divide_rect(layout, left, DivideEdge::MinX).0;
                    let r = divide_rect(layout, right, DivideEdge::MinX).1;
                    if l.width() > r.width() {
                        Candidate {
                            slice: l,
                            placement: Placement::Left,
                        }
                    } else {
                        Candidate {
                            slice: r,
                            placement: Placement::Right,
                        }
                    }
                }
            };
            tracing::trace!(?pref, placement = ?c.placement, slice = ?c.slice, "candidate");
            c
        })
        .collect()
}

// Inset by `arrow_inset` without collapsing: a negative inset grows the rect,
// and a positive one larger than the anchor leaves a point at its center.
fn grow_anchor(anchor: Rect, arrow_inset: f64) -> Rect {
    let grown = Rect::new(
        anchor.x0 + arrow_inset,
        anchor.y0 + arrow_inset,
        anchor.x1 - arrow_inset,
        anchor.y1 - arrow_inset,
    );
    if grown.x1 < grown.x0 || grown.y1 < grown.y0 {
        let c = anchor.center();
        return Rect::new(c.x, c.y, c.x, c.y);
    }
    grown
}

fn exact_fit(candidates: &[Candidate], anchor: Rect, content: Size) -> Option<CalloutPosition> {
    candidates
        .iter()
        .find(|c| holds(c.slice, content))
        .map(|c| {
            let frame = fit_inside(Rect::from_center_size(anchor.center(), content), c.slice);
            position_for(anchor, frame, c.placement)
        })
}

fn best_overlap(candidates: &[Candidate], anchor: Rect, content: Size) -> CalloutPosition {
    candidates
        .iter()
        .map(|c| {
            let frame = fit_inside(Rect::from_center_size(anchor.center(), content), c.slice)
                .intersect(c.slice);
            position_for(anchor, frame, c.placement)
        })
        // `max_by` keeps the last of equal elements.
        .max_by(|a, b| clamped_area(a.frame).total_cmp(&clamped_area(b.frame)))
        .unwrap_or(CalloutPosition::UNKNOWN)
}

fn position_for(anchor: Rect, frame: Rect, placement: Placement) -> CalloutPosition {
    CalloutPosition {
        frame,
        placement,
        arrow_offset: arrow_offset(anchor, frame, placement),
    }
}

fn arrow_offset(anchor: Rect, frame: Rect, placement: Placement) -> f64 {
    match placement {
        Placement::Top | Placement::Bottom => anchor.center().x - frame.center().x,
        Placement::Left | Placement::Right => anchor.center().y - frame.center().y,
        Placement::Unknown => 0.0,
    }
}

/// Resolver bound to a metrics set and a preferred placement order.
///
/// This is the shape hosts usually hold on to: the margins and arrow inset
/// come from [`CalloutMetrics`], so each call only passes the live geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementResolver {
    metrics: CalloutMetrics,
    preferred_order: Vec<PreferredPlacement>,
}

impl Default for PlacementResolver {
    fn default() -> Self {
        Self::new(CalloutMetrics::default())
    }
}

impl PlacementResolver {
    /// Resolver using `metrics` and [`DEFAULT_PREFERRED_ORDER`].
    pub fn new(metrics: CalloutMetrics) -> Self {
        Self {
            metrics,
            preferred_order: DEFAULT_PREFERRED_ORDER.to_vec(),
        }
    }

    /// Replace the preferred placement order.
    pub fn with_preferred_order(mut self, order: impl Into<Vec<PreferredPlacement>>) -> Self {
        self.preferred_order = order.into();
        self
    }

    /// Current preferred placement order.
    pub fn preferred_order(&self) -> &[PreferredPlacement] {
        &self.preferred_order
    }

    /// Metrics used for margins and arrow clearance.
    pub fn metrics(&self) -> &CalloutMetrics {
        &self.metrics
    }

    /// Candidate slices in preferred order, for inspection.
    pub fn candidates(&self, container_bounds: Rect, anchor_frame: Rect) -> Vec<Candidate> {
        candidate_slices(
            container_bounds,
            anchor_frame.abs(),
            &self.preferred_order,
            self.metrics.layout_margins(),
            self.metrics.arrow_inset(),
        )
    }

    /// Resolve a position for `content_size` anchored on `anchor_frame`.
    pub fn resolve(
        &self,
        container_bounds: Rect,
        anchor_frame: Rect,
        content_size: Size,
    ) -> CalloutPosition {
        resolve_position(
            container_bounds,
            anchor_frame,
            content_size,
            &self.preferred_order,
            self.metrics.layout_margins(),
            self.metrics.arrow_inset(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/resolver.rs"]
mod tests;

use crate::{
    anchor::{
        arrow::{ArrowGlyph, arrow_glyph_for},
        mapper::anchor_point_with_arrow_height,
    },
    foundation::core::{Point, Rect, Size},
    placement::{position::CalloutPosition, resolver::PlacementResolver},
    presentation::transition::TransitionKeyframes,
};

/// Lifecycle phase of a presented callout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not yet presented.
    #[default]
    Idle,
    /// Present transition in flight.
    Presenting,
    /// On screen.
    Presented,
    /// Dismiss transition in flight.
    Dismissing,
    /// Removed, either dismissed or cancelled mid-presentation.
    Dismissed,
}

impl Phase {
    /// Whether the callout currently occupies layout.
    pub fn is_on_screen(self) -> bool {
        matches!(self, Self::Presenting | Self::Presented | Self::Dismissing)
    }
}

/// What the host should do after a tap on the dimming chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapResponse {
    /// Cancel the in-flight present transition.
    CancelPresentation,
    /// Run the returned dismiss transition.
    Dismiss(TransitionKeyframes),
    /// Nothing to do.
    Ignore,
}

/// Everything the host needs to lay out the callout after a recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationUpdate {
    /// Freshly resolved position.
    pub position: CalloutPosition,
    /// Pivot to set (with compensation) before animating.
    pub anchor_point: Point,
    /// Arrow glyph state for the new placement.
    pub arrow: ArrowGlyph,
    /// Transition to run, or `None` for an in-place relayout.
    pub transition: Option<TransitionKeyframes>,
}

/// Owns the position of one callout and its presentation lifecycle.
///
/// The position is recomputed on presentation start, content-size changes,
/// container resizes and anchor moves, and replaced in a single assignment.
#[derive(Clone, Debug)]
pub struct CalloutPresentation {
    resolver: PlacementResolver,
    anchor_frame: Rect,
    container_bounds: Rect,
    content_size: Size,
    position: CalloutPosition,
    phase: Phase,
    cancelled: bool,
}

impl CalloutPresentation {
    /// Controller for a callout anchored on `anchor_frame`, with default metrics.
    pub fn new(anchor_frame: Rect) -> Self {
        Self::with_resolver(anchor_frame, PlacementResolver::default())
    }

    /// Controller using a custom resolver (metrics and preferred order).
    pub fn with_resolver(anchor_frame: Rect, resolver: PlacementResolver) -> Self {
        Self {
            resolver,
            anchor_frame,
            container_bounds: Rect::ZERO,
            content_size: Size::ZERO,
            position: CalloutPosition::UNKNOWN,
            phase: Phase::Idle,
            cancelled: false,
        }
    }

    /// Current position; the frame of the presented callout.
    pub fn position(&self) -> CalloutPosition {
        self.position
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the last presentation was cancelled by a chrome tap.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Frame of the source view.
    pub fn anchor_frame(&self) -> Rect {
        self.anchor_frame
    }

    /// Resolver in use.
    pub fn resolver(&self) -> &PlacementResolver {
        &self.resolver
    }

    /// Start presenting into `container_bounds` with the content's preferred size.
    ///
    /// Returns `None` if the callout is already on screen.
    pub fn begin_presentation(
        &mut self,
        container_bounds: Rect,
        content_size: Size,
    ) -> Option<PresentationUpdate> {
        if self.phase.is_on_screen() {
            tracing::debug!(phase = ?self.phase, "begin_presentation ignored");
            return None;
        }
        self.container_bounds = container_bounds;
        self.content_size = content_size;
        self.cancelled = false;
        self.set_phase(Phase::Presenting);

        let mut update = self.recompute();
        update.transition = Some(TransitionKeyframes::present(self.resolver.metrics()));
        Some(update)
    }

    /// The present transition finished; `completed` is false when it was cancelled.
    pub fn presentation_did_end(&mut self, completed: bool) {
        if self.phase != Phase::Presenting {
            tracing::debug!(phase = ?self.phase, "presentation_did_end ignored");
            return;
        }
        self.set_phase(if completed {
            Phase::Presented
        } else {
            Phase::Dismissed
        });
    }

    /// The presented content asked for a new size.
    ///
    /// Ignored while the present transition is running; the final size is
    /// picked up by the next change.
    pub fn content_size_did_change(&mut self, content_size: Size) -> Option<PresentationUpdate> {
        self.content_size = content_size;
        if self.phase != Phase::Presented {
            tracing::debug!(phase = ?self.phase, "content size change deferred");
            return None;
        }
        Some(self.recompute())
    }

    /// The container changed size (e.g. rotation).
    pub fn container_did_resize(&mut self, container_bounds: Rect) -> Option<PresentationUpdate> {
        self.container_bounds = container_bounds;
        if !matches!(self.phase, Phase::Presenting | Phase::Presented) {
            return None;
        }
        Some(self.recompute())
    }

    /// The source view moved within the container.
    pub fn anchor_did_move(&mut self, anchor_frame: Rect) -> Option<PresentationUpdate> {
        self.anchor_frame = anchor_frame;
        if !matches!(self.phase, Phase::Presenting | Phase::Presented) {
            return None;
        }
        Some(self.recompute())
    }

    /// Start dismissing. Returns `None` unless the callout is fully presented.
    pub fn begin_dismissal(&mut self) -> Option<TransitionKeyframes> {
        if self.phase != Phase::Presented {
            tracing::debug!(phase = ?self.phase, "begin_dismissal ignored");
            return None;
        }
        self.set_phase(Phase::Dismissing);
        Some(TransitionKeyframes::dismiss(self.resolver.metrics()))
    }

    /// The dismiss transition finished; `completed` is false when it was cancelled.
    pub fn dismissal_did_end(&mut self, completed: bool) {
        if self.phase != Phase::Dismissing {
            tracing::debug!(phase = ?self.phase, "dismissal_did_end ignored");
            return;
        }
        self.set_phase(if completed {
            Phase::Dismissed
        } else {
            Phase::Presented
        });
    }

    /// The dimming chrome behind the callout was tapped.
    pub fn chrome_tapped(&mut self) -> TapResponse {
        match self.phase {
            Phase::Presenting => {
                self.cancelled = true;
                tracing::debug!("presentation cancelled by chrome tap");
                TapResponse::CancelPresentation
            }
            Phase::Presented => match self.begin_dismissal() {
                Some(kf) => TapResponse::Dismiss(kf),
                None => TapResponse::Ignore,
            },
            _ => TapResponse::Ignore,
        }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(phase = ?self.phase))]
    fn recompute(&mut self) -> PresentationUpdate {
        let position = self.resolver.resolve(
            self.container_bounds,
            self.anchor_frame,
            self.content_size,
        );
        self.position = position;

        let metrics = self.resolver.metrics();
        PresentationUpdate {
            position,
            anchor_point: anchor_point_with_arrow_height(
                position.placement,
                position.arrow_offset,
                position.frame.size(),
                metrics.arrow_height,
            ),
            arrow: arrow_glyph_for(position.placement, position.arrow_offset),
            transition: None,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "callout phase");
        self.phase = phase;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/controller.rs"]
mod tests;

use std::io::Read;

use crate::foundation::{
    core::Insets,
    error::{CalloutError, CalloutResult},
};

/// Width of the arrow glyph's base, in points.
pub const ARROW_BASE_WIDTH: f64 = 24.0;
/// Distance from the arrow's base to its tip, in points.
pub const ARROW_HEIGHT: f64 = 12.0;
/// Insets between the callout background and its content.
pub const CONTENT_INSETS: Insets = Insets {
    x0: 0.0,
    y0: 0.0,
    x1: 0.0,
    y1: 0.0,
};
/// Padding kept between the callout and every edge of the container.
pub const LAYOUT_MARGIN: f64 = 6.0;
/// Uniform scale the callout starts from when presented (and shrinks to when dismissed).
pub const PRESENT_SCALE: f64 = 0.8;
/// Duration of the present and dismiss transitions.
pub const TRANSITION_DURATION_SECS: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Geometry constants shared by placement, arrow layout and transitions.
///
/// The defaults are the fixed values above. Hosts that need a different
/// visual (a taller arrow, a wider margin) can load overrides from JSON; every
/// override goes through [`CalloutMetrics::validate`].
pub struct CalloutMetrics {
    /// Width of the arrow's base.
    pub arrow_base_width: f64,
    /// Height of the arrow from base to tip.
    pub arrow_height: f64,
    /// Content insets inside the callout background.
    pub content_insets: Insets,
    /// Uniform margin between callout and container edges.
    pub layout_margin: f64,
    /// Starting scale for the present transition.
    pub present_scale: f64,
    /// Transition duration in seconds.
    pub transition_duration_secs: f64,
}

impl Default for CalloutMetrics {
    fn default() -> Self {
        Self {
            arrow_base_width: ARROW_BASE_WIDTH,
            arrow_height: ARROW_HEIGHT,
            content_insets: CONTENT_INSETS,
            layout_margin: LAYOUT_MARGIN,
            present_scale: PRESENT_SCALE,
            transition_duration_secs: TRANSITION_DURATION_SECS,
        }
    }
}

impl CalloutMetrics {
    /// Container margins as insets.
    pub fn layout_margins(&self) -> Insets {
        Insets::uniform(self.layout_margin)
    }

    /// Amount the anchor rect is inset by before slicing: `margin - arrow_height`.
    ///
    /// Negative for the default metrics, so the anchor grows and the arrow tip
    /// keeps a gap from the anchor.
    pub fn arrow_inset(&self) -> f64 {
        self.layout_margin - self.arrow_height
    }

    /// Parse metrics overrides from a JSON document and validate them.
    pub fn from_json_str(s: &str) -> CalloutResult<Self> {
        let metrics: Self = serde_json::from_str(s)
            .map_err(|e| CalloutError::serde(format!("invalid metrics json: {e}")))?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Parse metrics overrides from a JSON reader and validate them.
    pub fn from_reader(reader: impl Read) -> CalloutResult<Self> {
        let metrics: Self = serde_json::from_reader(reader)
            .map_err(|e| CalloutError::serde(format!("invalid metrics json: {e}")))?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check every field is finite and within its usable range.
    pub fn validate(&self) -> CalloutResult<()> {
        if !self.arrow_base_width.is_finite() || self.arrow_base_width < 0.0 {
            return Err(CalloutError::validation(
                "arrow_base_width must be finite and >= 0",
            ));
        }
        if !self.arrow_height.is_finite() || self.arrow_height < 0.0 {
            return Err(CalloutError::validation(
                "arrow_height must be finite and >= 0",
            ));
        }
        if !self.layout_margin.is_finite() || self.layout_margin < 0.0 {
            return Err(CalloutError::validation(
                "layout_margin must be finite and >= 0",
            ));
        }
        let i = self.content_insets;
        for (v, side) in [(i.x0, "left"), (i.y0, "top"), (i.x1, "right"), (i.y1, "bottom")] {
            if !v.is_finite() || v < 0.0 {
                return Err(CalloutError::validation(format!(
                    "content_insets.{side} must be finite and >= 0"
                )));
            }
        }
        if !self.present_scale.is_finite() || self.present_scale <= 0.0 || self.present_scale > 1.0
        {
            return Err(CalloutError::validation(
                "present_scale must be in (0, 1]",
            ));
        }
        if !self.transition_duration_secs.is_finite() || self.transition_duration_secs <= 0.0 {
            return Err(CalloutError::validation(
                "transition_duration_secs must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/metrics.rs"]
mod tests;

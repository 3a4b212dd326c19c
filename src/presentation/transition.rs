use crate::{
    config::metrics::CalloutMetrics,
    foundation::core::Affine,
    transform::linear::lerp,
};

/// Direction of a callout transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDirection {
    /// Callout appearing.
    Present,
    /// Callout going away.
    Dismiss,
}

/// Animatable values of the callout and its dimming chrome.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalloutVisualState {
    /// Callout opacity.
    pub alpha: f64,
    /// Uniform scale about the callout's anchor point.
    pub scale: f64,
    /// Opacity of the dimming chrome behind the callout.
    pub chrome_alpha: f64,
}

impl CalloutVisualState {
    /// Fully presented.
    pub const PRESENTED: Self = Self {
        alpha: 1.0,
        scale: 1.0,
        chrome_alpha: 1.0,
    };

    /// Off-screen state: transparent and shrunk to `metrics.present_scale`.
    pub fn hidden(metrics: &CalloutMetrics) -> Self {
        Self {
            alpha: 0.0,
            scale: metrics.present_scale,
            chrome_alpha: 0.0,
        }
    }

    /// Transform to apply to the callout view; pivots on its anchor point.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
    }
}

/// Start and end values for one transition.
///
/// The host drives the timing; these are only the endpoints plus a linear
/// sampler for percent-driven interactive transitions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionKeyframes {
    /// Whether the callout is appearing or leaving.
    pub direction: TransitionDirection,
    /// Values at progress `0`.
    pub from: CalloutVisualState,
    /// Values at progress `1`.
    pub to: CalloutVisualState,
    /// Nominal duration in seconds.
    pub duration_secs: f64,
}

impl TransitionKeyframes {
    /// Fade and grow in from the hidden state.
    pub fn present(metrics: &CalloutMetrics) -> Self {
        Self {
            direction: TransitionDirection::Present,
            from: CalloutVisualState::hidden(metrics),
            to: CalloutVisualState::PRESENTED,
            duration_secs: metrics.transition_duration_secs,
        }
    }

    /// Fade and shrink out to the hidden state.
    pub fn dismiss(metrics: &CalloutMetrics) -> Self {
        Self {
            direction: TransitionDirection::Dismiss,
            from: CalloutVisualState::PRESENTED,
            to: CalloutVisualState::hidden(metrics),
            duration_secs: metrics.transition_duration_secs,
        }
    }

    /// Values at `progress`, clamped to `[0, 1]`.
    pub fn sample(&self, progress: f64) -> CalloutVisualState {
        CalloutVisualState {
            alpha: lerp(self.from.alpha, self.to.alpha, progress),
            scale: lerp(self.from.scale, self.to.scale, progress),
            chrome_alpha: lerp(self.from.chrome_alpha, self.to.chrome_alpha, progress),
        }
    }

    /// Same transition run backwards, for cancelling an interactive one.
    pub fn reversed(&self) -> Self {
        let direction = match self.direction {
            TransitionDirection::Present => TransitionDirection::Dismiss,
            TransitionDirection::Dismiss => TransitionDirection::Present,
        };
        Self {
            direction,
            from: self.to,
            to: self.from,
            duration_secs: self.duration_secs,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/transition.rs"]
mod tests;

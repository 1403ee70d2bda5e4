use crate::{
    foundation::error::{ReelError, ReelResult},
    scene::{
        dsl::NodeBuilder,
        model::{Node, Position},
    },
};

/// Blur radius reached by each side at the far end of a blur dissolve.
pub const DEFAULT_MAX_BLUR_PX: f64 = 12.0;

/// How two adjacent scenes are blended while a transition owns the frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Cross-dissolve where each side is blurred while it is the weaker one.
    BlurDissolve {
        /// Blur radius of a fully faded-out side.
        max_blur_px: f64,
    },
    /// Plain opacity cross-dissolve.
    Crossfade,
}

/// Per-side parameters of a transition at a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionWeights {
    /// Opacity of the outgoing scene.
    pub outgoing_opacity: f64,
    /// Opacity of the incoming scene.
    pub incoming_opacity: f64,
    /// Blur of the outgoing scene.
    pub outgoing_blur_px: f64,
    /// Blur of the incoming scene.
    pub incoming_blur_px: f64,
}

impl TransitionKind {
    /// Weights at `progress` in `[0, 1]`; values outside are clamped.
    pub fn weights(&self, progress: f64) -> TransitionWeights {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let (outgoing_blur_px, incoming_blur_px) = match *self {
            Self::BlurDissolve { max_blur_px } => (max_blur_px * p, max_blur_px * (1.0 - p)),
            Self::Crossfade => (0.0, 0.0),
        };
        TransitionWeights {
            outgoing_opacity: 1.0 - p,
            incoming_opacity: p,
            outgoing_blur_px,
            incoming_blur_px,
        }
    }

    /// Stack the two scene trees under one node, outgoing first.
    pub fn compose(&self, progress: f64, outgoing: Node, incoming: Node) -> Node {
        let w = self.weights(progress);
        let side = |id: &str, opacity: f64, blur: f64, scene: Node| {
            NodeBuilder::group(id)
                .position(Position::Fill)
                .opacity(opacity)
                .blur(blur)
                .child(scene)
                .build()
        };
        NodeBuilder::group("transition")
            .position(Position::Fill)
            .child(side(
                "transition.outgoing",
                w.outgoing_opacity,
                w.outgoing_blur_px,
                outgoing,
            ))
            .child(side(
                "transition.incoming",
                w.incoming_opacity,
                w.incoming_blur_px,
                incoming,
            ))
            .build()
    }
}

/// Parse a transition from its `kind` name and free-form `params` object.
pub fn parse_transition_kind_params(
    kind: &str,
    params: &serde_json::Value,
) -> ReelResult<TransitionKind> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(ReelError::validation("transition kind must be non-empty"));
    }

    match kind.as_str() {
        "crossfade" => Ok(TransitionKind::Crossfade),
        "blur_dissolve" | "blurdissolve" => {
            let params = if params.is_null() {
                None
            } else {
                Some(params.as_object().ok_or_else(|| {
                    ReelError::validation("blur_dissolve params must be an object")
                })?)
            };

            let max_blur_px = match params
                .and_then(|p| p.get("max_blur_px"))
                .and_then(|v| v.as_f64())
            {
                None => DEFAULT_MAX_BLUR_PX,
                Some(v) => {
                    if !v.is_finite() || v < 0.0 {
                        return Err(ReelError::validation(
                            "blur_dissolve.max_blur_px must be finite and >= 0",
                        ));
                    }
                    v
                }
            };

            Ok(TransitionKind::BlurDissolve { max_blur_px })
        }
        _ => Err(ReelError::validation(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;

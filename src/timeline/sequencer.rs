//! Global frame to scene/transition ownership.
//!
//! Scenes are laid end to end. A transition of `T` frames covers the first `T` frames of every
//! scene after the first; during it the previous scene is held on its last frame and the two
//! trees are blended. The total length is therefore the sum of the scene durations.

use crate::{
    config::ReelConfig,
    effects::transitions::TransitionKind,
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    scene::model::{Artifact, ArtifactKind, FrameOutput},
    scenes::{Scene, SceneKind, build_scenes},
};

/// Filename of the thumbnail declared at frame 0.
pub const THUMBNAIL_FILENAME: &str = "thumbnail.jpeg";

/// Owner of a global frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// A single scene is on screen.
    Scene {
        /// Index into the scene list.
        index: usize,
        /// Scene-local frame.
        local: u64,
    },
    /// Blend between scene `from` and scene `to = from + 1`.
    Transition {
        /// Outgoing scene index.
        from: usize,
        /// Incoming scene index.
        to: usize,
        /// Outgoing scene-local frame, held on its last frame.
        from_local: u64,
        /// Incoming scene-local frame.
        to_local: u64,
        /// Progress in `[0, 1)`.
        progress: f64,
    },
}

/// One row of the segment table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentSpan {
    /// Global frames covered.
    pub range: FrameRange,
    /// Scene on screen, or the incoming scene of a transition.
    pub scene: SceneKind,
    /// Outgoing scene when this span is a transition.
    pub from: Option<SceneKind>,
}

/// The built reel: scenes, their placement, and the transition between them.
#[derive(Clone, Debug)]
pub struct Timeline {
    fps: Fps,
    canvas: Canvas,
    transition: TransitionKind,
    transition_frames: u64,
    scenes: Vec<Scene>,
    starts: Vec<u64>,
    total: u64,
}

impl Timeline {
    /// Validate `cfg` and build every scene. All configuration errors surface here.
    #[tracing::instrument(skip(cfg))]
    pub fn build(cfg: &ReelConfig) -> ReelResult<Self> {
        cfg.validate()?;
        let transition = cfg.transition.kind()?;
        let scenes = build_scenes(cfg)?;

        let mut starts = Vec::with_capacity(scenes.len());
        let mut total = 0u64;
        for scene in &scenes {
            starts.push(total);
            total = total
                .checked_add(scene.duration())
                .ok_or_else(|| ReelError::validation("total duration overflows"))?;
        }

        tracing::debug!(
            scenes = scenes.len(),
            total_frames = total,
            transition_frames = cfg.transition.duration_frames,
            "timeline built"
        );

        Ok(Self {
            fps: cfg.fps,
            canvas: cfg.canvas,
            transition,
            transition_frames: cfg.transition.duration_frames,
            scenes,
            starts,
            total,
        })
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Number of frames; valid frames are `[0, total_frames)`.
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    /// Every valid frame.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total),
        }
    }

    /// Scenes in play order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Transition blend between adjacent scenes.
    pub fn transition(&self) -> TransitionKind {
        self.transition
    }

    /// Find the owner of `frame` with a binary search over scene starts.
    pub fn locate(&self, frame: FrameIndex) -> ReelResult<Segment> {
        if frame.0 >= self.total {
            return Err(ReelError::evaluation("frame is out of bounds"));
        }
        let index = self.starts.partition_point(|&s| s <= frame.0) - 1;
        let local = frame.0 - self.starts[index];

        let segment = if index > 0 && local < self.transition_frames {
            let from = index - 1;
            Segment::Transition {
                from,
                to: index,
                from_local: self.scenes[from].duration() - 1,
                to_local: local,
                progress: local as f64 / self.transition_frames as f64,
            }
        } else {
            Segment::Scene { index, local }
        };
        tracing::debug!(frame = frame.0, ?segment, "segment located");
        Ok(segment)
    }

    /// Visual tree and side outputs for `frame`.
    #[tracing::instrument(skip(self), fields(frame = frame.0))]
    pub fn render(&self, frame: FrameIndex) -> ReelResult<FrameOutput> {
        let root = match self.locate(frame)? {
            Segment::Scene { index, local } => self.scenes[index].render(local),
            Segment::Transition {
                from,
                to,
                from_local,
                to_local,
                progress,
            } => self.transition.compose(
                progress,
                self.scenes[from].render(from_local),
                self.scenes[to].render(to_local),
            ),
        };

        let artifacts = if frame.0 == 0 {
            vec![Artifact {
                kind: ArtifactKind::Thumbnail,
                filename: THUMBNAIL_FILENAME.to_owned(),
            }]
        } else {
            Vec::new()
        };

        Ok(FrameOutput {
            frame,
            root,
            artifacts,
        })
    }

    /// Scene and transition spans in frame order; they tile `[0, total_frames)`.
    pub fn segments(&self) -> Vec<SegmentSpan> {
        let mut out = Vec::with_capacity(self.scenes.len() * 2);
        for (i, scene) in self.scenes.iter().enumerate() {
            let start = self.starts[i];
            let end = start + scene.duration();
            let mut body_start = start;
            if i > 0 && self.transition_frames > 0 {
                body_start = start + self.transition_frames;
                out.push(SegmentSpan {
                    range: FrameRange {
                        start: FrameIndex(start),
                        end: FrameIndex(body_start),
                    },
                    scene: scene.kind(),
                    from: Some(self.scenes[i - 1].kind()),
                });
            }
            if body_start < end {
                out.push(SegmentSpan {
                    range: FrameRange {
                        start: FrameIndex(body_start),
                        end: FrameIndex(end),
                    },
                    scene: scene.kind(),
                    from: None,
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;

//! Reel is a frame-driven promotional video composition.
//!
//! Every frame is a pure function of its index: the [`Timeline`] maps a global frame to the
//! owning scene (or the transition between two scenes), and that scene builds a fresh visual
//! tree from springs, easings and staggered text reveals. Rasterisation and encoding are left to
//! an external engine that consumes the serialized trees.
//!
//! - Build a [`Timeline`] from a validated [`ReelConfig`]
//! - Render single frames with [`Timeline::render`]
//! - Stream a range into a [`FrameSink`] with [`render_to_sink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compile;
/// Static configuration: durations, transition, assets and palette.
pub mod config;
pub(crate) mod effects;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod scenes;
pub(crate) mod text;
pub(crate) mod timeline;

pub use crate::foundation::core::{
    Canvas, Color, Fps, FrameIndex, FrameRange, Transform2D, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ambient::{Oscillator, Wave, ambient, pulse};
pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, Interpolator, clamp_interpolate, interpolate,
    interpolate_piecewise,
};
pub use crate::animation::lerp::Lerp;
pub use crate::animation::spring::{SpringConfig, measure_spring, spring, spring_between};
pub use crate::compile::fingerprint::{FrameFingerprint, fingerprint_frame, fingerprint_node};
pub use crate::config::{AssetCatalog, Palette, ReelConfig, SceneDurations, TransitionConfig};
pub use crate::effects::counter::{Counter, format_count};
pub use crate::effects::glow::{AnimatedGlow, Glow};
pub use crate::effects::grid::{GridBackground, ScrollDirection};
pub use crate::effects::shimmer::Shimmer;
pub use crate::effects::transitions::{
    DEFAULT_MAX_BLUR_PX, TransitionKind, TransitionWeights, parse_transition_kind_params,
};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frame, render_frames, render_frames_with_stats,
    render_to_sink,
};
pub use crate::render::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use crate::scene::dsl::{NodeBuilder, font, label, plain_run, text_node};
pub use crate::scene::model::{
    Align, Artifact, ArtifactKind, Direction, Fill, Flex, FontRef, FrameOutput, GlowStyle,
    GlyphRun, GridNode, GroupNode, Highlight, ImageFit, ImageNode, Node, NodeKind, Position,
    Shape, ShapeNode, Stroke, TextAlign, TextNode,
};
pub use crate::scenes::closing::ClosingScene;
pub use crate::scenes::features::{FeatureCard, FeaturesScene};
pub use crate::scenes::hero::HeroScene;
pub use crate::scenes::phone::{PhoneScene, Stat};
pub use crate::scenes::social::{Metric, SocialScene};
pub use crate::scenes::{Scene, SceneKind, build_scenes};
pub use crate::text::reveal::{RevealKind, SlideFrom, TextReveal, UnitState};
pub use crate::text::units::{RichText, Span, SplitBy, Unit, split_units};
pub use crate::timeline::sequencer::{Segment, SegmentSpan, THUMBNAIL_FILENAME, Timeline};

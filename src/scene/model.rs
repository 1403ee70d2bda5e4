//! Visual tree handed to the external rendering engine.
//!
//! Everything here is plain data: a scene builds a fresh tree per frame and never mutates a
//! previous one. Field order is fixed, so serializing the same tree twice yields identical bytes.

use crate::foundation::core::{Color, FrameIndex, Transform2D, Vec2};

/// One element of the visual tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Stable element identifier (`"hero.cta"`, `"features.card.1"`).
    pub id: String,
    /// What this node draws.
    pub kind: NodeKind,
    /// Placement relative to the parent box.
    pub position: Position,
    /// Explicit box size in pixels; `None` sizes to content.
    pub size: Option<Vec2>,
    /// Transform applied around the node's anchor.
    pub transform: Transform2D,
    /// Opacity in `[0, 1]`, multiplied down the tree.
    pub opacity: f64,
    /// Gaussian blur radius applied to the node's output.
    pub blur_px: f64,
    /// Optional outer glow.
    pub glow: Option<GlowStyle>,
    /// Children in painter's order.
    pub children: Vec<Node>,
}

impl Node {
    /// Depth-first search by id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Text content of this node if it is a text node, with all runs concatenated.
    pub fn text(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Text(t) => Some(t.runs.iter().map(|r| r.text.as_str()).collect()),
            _ => None,
        }
    }
}

/// Node payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Container; optionally lays its in-flow children out as a flex box.
    Group(GroupNode),
    /// Styled text made of independently animated runs.
    Text(TextNode),
    /// Remote raster or vector image.
    Image(ImageNode),
    /// Filled primitive.
    Shape(ShapeNode),
    /// Repeating line grid.
    Grid(GridNode),
}

/// Where a node sits inside its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Participates in the parent's flex flow.
    #[default]
    Flow,
    /// Covers the parent box entirely.
    Fill,
    /// Top-left corner at a fraction of the parent box; negative fractions are measured from the
    /// opposite edge (`x = -0.15` is `right: 15%`).
    Absolute {
        /// Horizontal fraction.
        x: f64,
        /// Vertical fraction.
        y: f64,
    },
    /// Offset in pixels from the parent's top-left corner.
    Pixels {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        y: f64,
    },
}

/// Container payload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupNode {
    /// Flex layout for in-flow children; `None` stacks them at the origin.
    pub flex: Option<Flex>,
    /// Background fill painted behind the children.
    pub background: Option<Fill>,
    /// Corner radius of the background and clip box.
    pub corner_radius: f64,
    /// Optional hairline border.
    pub border: Option<Stroke>,
    /// Clip children to the box.
    pub clip: bool,
}

/// Flexbox subset used by the scenes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Flex {
    /// Main axis.
    pub direction: Direction,
    /// Gap between children along the main axis.
    pub gap: f64,
    /// Cross-axis alignment.
    pub align: Align,
    /// Main-axis alignment.
    pub justify: Align,
    /// Inner padding (horizontal, vertical).
    pub padding: Vec2,
}

impl Flex {
    /// Centered column.
    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            gap: 0.0,
            align: Align::Center,
            justify: Align::Center,
            padding: Vec2::ZERO,
        }
    }

    /// Centered row.
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Self::column()
        }
    }

    /// Same layout with a different gap.
    pub fn gap(self, gap: f64) -> Self {
        Self { gap, ..self }
    }

    /// Same layout with a different cross-axis alignment.
    pub fn align(self, align: Align) -> Self {
        Self { align, ..self }
    }

    /// Same layout with different padding.
    pub fn padding(self, x: f64, y: f64) -> Self {
        Self {
            padding: Vec2::new(x, y),
            ..self
        }
    }
}

/// Flex main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
}

/// Flex alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Pack at the start.
    Start,
    /// Center.
    Center,
    /// Pack at the end.
    End,
    /// Stretch to fill the cross axis.
    Stretch,
}

/// Paint used for shapes and backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Flat color.
    Solid(Color),
    /// Linear gradient between two colors.
    Linear {
        /// Gradient angle in degrees (CSS convention: 90 = left to right).
        angle_deg: f64,
        /// Start color.
        from: Color,
        /// End color.
        to: Color,
    },
    /// Radial falloff from the center; `stops` are fractions of the radius.
    Radial {
        /// Center color.
        inner: Color,
        /// Optional mid color and its stop.
        mid: Option<(Color, f64)>,
        /// Radius fraction at which the fill becomes transparent.
        fade_at: f64,
    },
}

/// Outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: f64,
}

/// Outer glow / drop shadow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowStyle {
    /// Glow color.
    pub color: Color,
    /// Blur radius in pixels.
    pub radius_px: f64,
    /// Number of stacked layers; each doubles the radius of the previous.
    pub layers: u32,
    /// Offset of the glow (for drop shadows).
    pub offset: Vec2,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    /// Font face.
    pub font: FontRef,
    /// Default color for runs.
    pub color: Color,
    /// Extra tracking in em.
    pub letter_spacing_em: f64,
    /// Line height multiplier.
    pub line_height: f64,
    /// Horizontal alignment of wrapped lines.
    pub align: TextAlign,
    /// Wrap width; `None` keeps one line unless the parent constrains it.
    pub max_width: Option<f64>,
    /// Uppercase the runs at paint time.
    pub uppercase: bool,
    /// Runs in reading order.
    pub runs: Vec<GlyphRun>,
}

/// Font face reference; resolution is the rendering engine's job.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontRef {
    /// Family name.
    pub family: String,
    /// Size in pixels.
    pub size_px: f64,
    /// CSS weight (400 regular, 800 extra bold).
    pub weight: u16,
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left aligned.
    #[default]
    Start,
    /// Centered.
    Center,
}

/// One animated unit of text (a character or a word).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphRun {
    /// Characters drawn for this run (scrambled runs show substitute glyphs).
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Run opacity, multiplied with the node opacity.
    pub opacity: f64,
    /// Offset from the run's laid-out position.
    pub offset: Vec2,
    /// Uniform scale around the run's center.
    pub scale: f64,
    /// Rotation in radians around the run's center.
    pub rotation_rad: f64,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Moving highlight band (shimmer), if any.
    pub highlight: Option<Highlight>,
}

/// Highlight band sweeping across a run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    /// Band color.
    pub color: Color,
    /// Band center as a fraction of the span width; outside `[0, 1]` the band is off-text.
    pub position: f64,
    /// Band width as a fraction of the span width.
    pub width: f64,
}

/// Image payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageNode {
    /// Asset URL from the catalogue.
    pub src: String,
    /// How the image fills its box.
    pub fit: ImageFit,
    /// Corner radius of the clip box.
    pub corner_radius: f64,
}

/// Image scaling mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Scale to cover the box, cropping overflow.
    Cover,
    /// Scale to fit inside the box.
    Contain,
}

/// Shape payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeNode {
    /// Geometry.
    pub shape: Shape,
    /// Paint.
    pub fill: Fill,
    /// Optional outline.
    pub stroke: Option<Stroke>,
}

/// Primitive geometry, sized by the node box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Rectangle with rounded corners.
    Rect {
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Ellipse inscribed in the box.
    Ellipse,
}

/// Grid payload.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridNode {
    /// Cell edge length in pixels.
    pub cell_size: f64,
    /// Line color.
    pub line_color: Color,
    /// Current scroll offset, each component in `(-cell_size, cell_size)`.
    pub scroll: Vec2,
    /// Fade the grid out towards the edges.
    pub fade_edges: bool,
}

/// Side output attached to a frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Artifact {
    /// Artifact kind.
    pub kind: ArtifactKind,
    /// Suggested output filename.
    pub filename: String,
}

/// Kinds of side output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Still image representing the whole video.
    Thumbnail,
}

/// Everything produced for one timeline frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameOutput {
    /// Global frame index.
    pub frame: FrameIndex,
    /// Visual tree.
    pub root: Node,
    /// Side outputs declared on this frame.
    pub artifacts: Vec<Artifact>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;

use crate::{
    foundation::core::{Color, Transform2D, Vec2},
    scene::model::{
        Fill, Flex, FontRef, GlowStyle, GlyphRun, GridNode, GroupNode, ImageFit, ImageNode, Node,
        NodeKind, Position, Shape, ShapeNode, Stroke, TextAlign, TextNode,
    },
};

/// Chained builder for [`Node`].
pub struct NodeBuilder {
    id: String,
    kind: NodeKind,
    position: Position,
    size: Option<Vec2>,
    transform: Transform2D,
    opacity: f64,
    blur_px: f64,
    glow: Option<GlowStyle>,
    children: Vec<Node>,
}

impl NodeBuilder {
    /// Visible, untransformed, in-flow node.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::Flow,
            size: None,
            transform: Transform2D::default(),
            opacity: 1.0,
            blur_px: 0.0,
            glow: None,
            children: Vec::new(),
        }
    }

    /// Empty container.
    pub fn group(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Group(GroupNode::default()))
    }

    /// Full-canvas group, the root of every scene.
    pub fn stage(id: impl Into<String>, background: Color) -> Self {
        Self::group(id).position(Position::Fill).background(Fill::Solid(background))
    }

    /// Text node.
    pub fn text(id: impl Into<String>, text: TextNode) -> Self {
        Self::new(id, NodeKind::Text(text))
    }

    /// Image node, contained in its box.
    pub fn image(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Image(ImageNode {
                src: src.into(),
                fit: ImageFit::Contain,
                corner_radius: 0.0,
            }),
        )
    }

    /// Filled primitive.
    pub fn shape(id: impl Into<String>, shape: Shape, fill: Fill) -> Self {
        Self::new(
            id,
            NodeKind::Shape(ShapeNode {
                shape,
                fill,
                stroke: None,
            }),
        )
    }

    /// Grid covering the parent box.
    pub fn grid(id: impl Into<String>, grid: GridNode) -> Self {
        Self::new(id, NodeKind::Grid(grid)).position(Position::Fill)
    }

    /// Placement inside the parent.
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Place at fractions of the parent box.
    pub fn at(self, x: f64, y: f64) -> Self {
        self.position(Position::Absolute { x, y })
    }

    /// Explicit box size.
    pub fn size(mut self, w: f64, h: f64) -> Self {
        self.size = Some(Vec2::new(w, h));
        self
    }

    /// Replace the whole transform.
    pub fn transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// Set the translation in pixels.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform = self.transform.with_translate(x, y);
        self
    }

    /// Set a uniform scale.
    pub fn scale(mut self, s: f64) -> Self {
        self.transform = self.transform.with_scale(s);
        self
    }

    /// Set the rotation in degrees.
    pub fn rotate_deg(mut self, deg: f64) -> Self {
        self.transform = self.transform.with_rotation_deg(deg);
        self
    }

    /// Node opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Blur radius in pixels.
    pub fn blur(mut self, px: f64) -> Self {
        self.blur_px = px;
        self
    }

    /// Outer glow.
    pub fn glow(mut self, glow: Option<GlowStyle>) -> Self {
        self.glow = glow;
        self
    }

    /// Flex layout; no-op on non-group nodes.
    pub fn flex(mut self, flex: Flex) -> Self {
        if let NodeKind::Group(g) = &mut self.kind {
            g.flex = Some(flex);
        }
        self
    }

    /// Background fill; no-op on non-group nodes.
    pub fn background(mut self, fill: Fill) -> Self {
        if let NodeKind::Group(g) = &mut self.kind {
            g.background = Some(fill);
        }
        self
    }

    /// Corner radius for groups, images and rectangles.
    pub fn rounded(mut self, radius: f64) -> Self {
        match &mut self.kind {
            NodeKind::Group(g) => g.corner_radius = radius,
            NodeKind::Image(i) => i.corner_radius = radius,
            NodeKind::Shape(ShapeNode {
                shape: Shape::Rect { corner_radius },
                ..
            }) => *corner_radius = radius,
            _ => {}
        }
        self
    }

    /// Hairline border for groups and shapes.
    pub fn border(mut self, color: Color, width: f64) -> Self {
        let stroke = Some(Stroke { color, width });
        match &mut self.kind {
            NodeKind::Group(g) => g.border = stroke,
            NodeKind::Shape(s) => s.stroke = stroke,
            _ => {}
        }
        self
    }

    /// Clip children to the group box.
    pub fn clip(mut self) -> Self {
        if let NodeKind::Group(g) = &mut self.kind {
            g.clip = true;
        }
        self
    }

    /// Image fit mode; no-op on non-image nodes.
    pub fn cover(mut self) -> Self {
        if let NodeKind::Image(i) = &mut self.kind {
            i.fit = ImageFit::Cover;
        }
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Finish the node. Opacity is clamped to `[0, 1]` and negative blur to 0; non-finite values
    /// collapse to the not-visible/no-blur defaults.
    pub fn build(self) -> Node {
        let opacity = if self.opacity.is_finite() {
            self.opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let blur_px = if self.blur_px.is_finite() {
            self.blur_px.max(0.0)
        } else {
            0.0
        };
        Node {
            id: self.id,
            kind: self.kind,
            position: self.position,
            size: self.size,
            transform: self.transform,
            opacity,
            blur_px,
            glow: self.glow,
            children: self.children,
        }
    }
}

/// Font reference.
pub fn font(family: impl Into<String>, size_px: f64, weight: u16) -> FontRef {
    FontRef {
        family: family.into(),
        size_px,
        weight,
    }
}

/// Untransformed, fully visible run.
pub fn plain_run(text: impl Into<String>, color: Color) -> GlyphRun {
    GlyphRun {
        text: text.into(),
        color,
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
        rotation_rad: 0.0,
        blur_px: 0.0,
        highlight: None,
    }
}

/// Centered text with the given runs.
pub fn text_node(font: FontRef, color: Color, runs: Vec<GlyphRun>) -> TextNode {
    TextNode {
        font,
        color,
        letter_spacing_em: 0.0,
        line_height: 1.2,
        align: TextAlign::Center,
        max_width: None,
        uppercase: false,
        runs,
    }
}

/// Single-run text node.
pub fn label(font: FontRef, color: Color, text: impl Into<String>) -> TextNode {
    text_node(font, color, vec![plain_run(text, color)])
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;

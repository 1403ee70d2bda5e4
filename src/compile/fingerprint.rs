use crate::{
    foundation::core::{Color, Transform2D, Vec2},
    scene::model::{
        Align, Direction, Fill, Flex, FrameOutput, GlowStyle, GlyphRun, GroupNode, ImageFit, Node,
        NodeKind, Position, Shape, Stroke, TextAlign, TextNode,
    },
};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of a frame's visual tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint a rendered frame.
///
/// The frame index and artifacts are not hashed, so two frames that look the same hash equal.
pub fn fingerprint_frame(out: &FrameOutput) -> FrameFingerprint {
    fingerprint_node(&out.root)
}

/// Fingerprint a visual tree.
pub fn fingerprint_node(root: &Node) -> FrameFingerprint {
    let mut h = StableHasher::new();
    write_node(&mut h, root);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, n: &Node) {
    h.write_str(&n.id);
    match &n.kind {
        NodeKind::Group(g) => {
            h.write_u8(0);
            write_group(h, g);
        }
        NodeKind::Text(t) => {
            h.write_u8(1);
            write_text(h, t);
        }
        NodeKind::Image(img) => {
            h.write_u8(2);
            h.write_str(&img.src);
            h.write_u8(match img.fit {
                ImageFit::Cover => 0,
                ImageFit::Contain => 1,
            });
            h.write_f64(img.corner_radius);
        }
        NodeKind::Shape(s) => {
            h.write_u8(3);
            match s.shape {
                Shape::Rect { corner_radius } => {
                    h.write_u8(0);
                    h.write_f64(corner_radius);
                }
                Shape::Ellipse => h.write_u8(1),
            }
            write_fill(h, &s.fill);
            write_opt_stroke(h, s.stroke.as_ref());
        }
        NodeKind::Grid(g) => {
            h.write_u8(4);
            h.write_f64(g.cell_size);
            write_color(h, g.line_color);
            write_vec2(h, g.scroll);
            h.write_bool(g.fade_edges);
        }
    }

    write_position(h, n.position);
    match n.size {
        Some(s) => {
            h.write_u8(1);
            write_vec2(h, s);
        }
        None => h.write_u8(0),
    }
    write_transform(h, &n.transform);
    h.write_f64(n.opacity);
    h.write_f64(n.blur_px);
    write_opt_glow(h, n.glow.as_ref());

    h.write_u32(n.children.len() as u32);
    for c in &n.children {
        write_node(h, c);
    }
}

fn write_group(h: &mut StableHasher, g: &GroupNode) {
    match &g.flex {
        Some(flex) => {
            h.write_u8(1);
            write_flex(h, flex);
        }
        None => h.write_u8(0),
    }
    match &g.background {
        Some(fill) => {
            h.write_u8(1);
            write_fill(h, fill);
        }
        None => h.write_u8(0),
    }
    h.write_f64(g.corner_radius);
    write_opt_stroke(h, g.border.as_ref());
    h.write_bool(g.clip);
}

fn write_flex(h: &mut StableHasher, f: &Flex) {
    h.write_u8(match f.direction {
        Direction::Row => 0,
        Direction::Column => 1,
    });
    h.write_f64(f.gap);
    write_align(h, f.align);
    write_align(h, f.justify);
    write_vec2(h, f.padding);
}

fn write_align(h: &mut StableHasher, a: Align) {
    h.write_u8(match a {
        Align::Start => 0,
        Align::Center => 1,
        Align::End => 2,
        Align::Stretch => 3,
    });
}

fn write_text(h: &mut StableHasher, t: &TextNode) {
    h.write_str(&t.font.family);
    h.write_f64(t.font.size_px);
    h.write_u32(u32::from(t.font.weight));
    write_color(h, t.color);
    h.write_f64(t.letter_spacing_em);
    h.write_f64(t.line_height);
    h.write_u8(match t.align {
        TextAlign::Start => 0,
        TextAlign::Center => 1,
    });
    match t.max_width {
        Some(w) => {
            h.write_u8(1);
            h.write_f64(w);
        }
        None => h.write_u8(0),
    }
    h.write_bool(t.uppercase);
    h.write_u32(t.runs.len() as u32);
    for r in &t.runs {
        write_run(h, r);
    }
}

fn write_run(h: &mut StableHasher, r: &GlyphRun) {
    h.write_str(&r.text);
    write_color(h, r.color);
    h.write_f64(r.opacity);
    write_vec2(h, r.offset);
    h.write_f64(r.scale);
    h.write_f64(r.rotation_rad);
    h.write_f64(r.blur_px);
    match &r.highlight {
        Some(hl) => {
            h.write_u8(1);
            write_color(h, hl.color);
            h.write_f64(hl.position);
            h.write_f64(hl.width);
        }
        None => h.write_u8(0),
    }
}

fn write_fill(h: &mut StableHasher, f: &Fill) {
    match *f {
        Fill::Solid(c) => {
            h.write_u8(0);
            write_color(h, c);
        }
        Fill::Linear {
            angle_deg,
            from,
            to,
        } => {
            h.write_u8(1);
            h.write_f64(angle_deg);
            write_color(h, from);
            write_color(h, to);
        }
        Fill::Radial {
            inner,
            mid,
            fade_at,
        } => {
            h.write_u8(2);
            write_color(h, inner);
            match mid {
                Some((c, stop)) => {
                    h.write_u8(1);
                    write_color(h, c);
                    h.write_f64(stop);
                }
                None => h.write_u8(0),
            }
            h.write_f64(fade_at);
        }
    }
}

fn write_opt_stroke(h: &mut StableHasher, s: Option<&Stroke>) {
    if let Some(s) = s {
        h.write_u8(1);
        write_color(h, s.color);
        h.write_f64(s.width);
    } else {
        h.write_u8(0);
    }
}

fn write_opt_glow(h: &mut StableHasher, g: Option<&GlowStyle>) {
    if let Some(g) = g {
        h.write_u8(1);
        write_color(h, g.color);
        h.write_f64(g.radius_px);
        h.write_u32(g.layers);
        write_vec2(h, g.offset);
    } else {
        h.write_u8(0);
    }
}

fn write_position(h: &mut StableHasher, p: Position) {
    match p {
        Position::Flow => h.write_u8(0),
        Position::Fill => h.write_u8(1),
        Position::Absolute { x, y } => {
            h.write_u8(2);
            h.write_f64(x);
            h.write_f64(y);
        }
        Position::Pixels { x, y } => {
            h.write_u8(3);
            h.write_f64(x);
            h.write_f64(y);
        }
    }
}

fn write_transform(h: &mut StableHasher, t: &Transform2D) {
    write_vec2(h, t.translate);
    h.write_f64(t.rotation_rad);
    write_vec2(h, t.scale);
    write_vec2(h, t.anchor);
}

fn write_vec2(h: &mut StableHasher, v: Vec2) {
    h.write_f64(v.x);
    h.write_f64(v.y);
}

fn write_color(h: &mut StableHasher, c: Color) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;

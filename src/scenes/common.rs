//! Building blocks shared by the scenes.

use crate::{
    animation::{
        interpolate::clamp_interpolate,
        lerp::Lerp,
        spring::{SpringConfig, spring},
    },
    config::Palette,
    foundation::{
        core::{Color, Fps, Vec2},
        error::{ReelError, ReelResult},
    },
    scene::{
        dsl::{NodeBuilder, font, label, plain_run, text_node},
        model::{Fill, Flex, FontRef, GlowStyle, Node, Position, Shape},
    },
};

/// Spring-driven entrance: progress of a spring that starts `delay` frames into the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Entrance {
    pub(crate) delay: f64,
    pub(crate) spring: SpringConfig,
    /// Frames the opacity takes to reach 1.
    pub(crate) fade_frames: f64,
}

impl Entrance {
    pub(crate) const fn new(delay: f64, damping: f64, stiffness: f64, fade_frames: f64) -> Self {
        Self {
            delay,
            spring: SpringConfig::new(damping, stiffness),
            fade_frames,
        }
    }

    pub(crate) fn progress(&self, frame: f64, fps: Fps) -> f64 {
        spring(frame, self.delay, fps, self.spring)
    }

    pub(crate) fn opacity(&self, frame: f64) -> f64 {
        fade_in(frame, self.delay, self.fade_frames)
    }

    /// Spring progress mapped onto `[from, to]`; overshoot carries through.
    pub(crate) fn map<T: Lerp>(&self, frame: f64, fps: Fps, from: T, to: T) -> T {
        T::lerp(&from, &to, self.progress(frame, fps))
    }

    /// Reject an entrance that would never start inside a scene of `scene_frames`.
    pub(crate) fn validate(&self, id: &str, scene_frames: u64) -> ReelResult<()> {
        self.spring
            .validate()
            .map_err(|e| ReelError::validation(format!("entrance '{id}': {e}")))?;
        check_start(id, self.delay, scene_frames)
    }
}

/// An element starting at `delay` must start inside `[0, scene_frames)`.
pub(crate) fn check_start(id: &str, delay: f64, scene_frames: u64) -> ReelResult<()> {
    if !delay.is_finite() || delay < 0.0 || delay >= scene_frames as f64 {
        return Err(ReelError::validation(format!(
            "entrance '{id}': starts at frame {delay} outside scene of {scene_frames} frames"
        )));
    }
    Ok(())
}

/// Linear 0→1 over `frames`, starting at `delay`; clamped on both sides.
pub(crate) fn fade_in(frame: f64, delay: f64, frames: f64) -> f64 {
    clamp_interpolate(frame - delay, [0.0, frames], [0.0, 1.0], true, true)
}

/// Scene-local seconds.
pub(crate) fn secs(frame: f64, fps: Fps) -> f64 {
    fps.frames_to_secs(frame)
}

/// Font factory bound to the configured family.
pub(crate) struct Fonts<'a> {
    pub(crate) family: &'a str,
}

impl<'a> Fonts<'a> {
    pub(crate) fn new(family: &'a str) -> Self {
        Self { family }
    }

    pub(crate) fn font(&self, size_px: f64, weight: u16) -> FontRef {
        font(self.family, size_px, weight)
    }
}

/// Blurred radial glow floating over the background.
pub(crate) struct Orb {
    pub(crate) id: &'static str,
    pub(crate) at: Vec2,
    pub(crate) size: Vec2,
    pub(crate) inner: Color,
    pub(crate) mid: Option<(Color, f64)>,
    pub(crate) fade_at: f64,
    pub(crate) blur_px: f64,
}

impl Orb {
    pub(crate) fn circle(id: &'static str, x: f64, y: f64, diameter: f64, inner: Color) -> Self {
        Self {
            id,
            at: Vec2::new(x, y),
            size: Vec2::new(diameter, diameter),
            inner,
            mid: None,
            fade_at: 0.7,
            blur_px: 40.0,
        }
    }

    pub(crate) fn blur(self, blur_px: f64) -> Self {
        Self { blur_px, ..self }
    }

    pub(crate) fn mid(self, color: Color, stop: f64) -> Self {
        Self {
            mid: Some((color, stop)),
            ..self
        }
    }

    pub(crate) fn fade_at(self, fade_at: f64) -> Self {
        Self { fade_at, ..self }
    }

    pub(crate) fn size(self, w: f64, h: f64) -> Self {
        Self {
            size: Vec2::new(w, h),
            ..self
        }
    }

    pub(crate) fn node(&self, offset: Vec2, scale: f64) -> Node {
        NodeBuilder::shape(
            self.id,
            Shape::Ellipse,
            Fill::Radial {
                inner: self.inner,
                mid: self.mid,
                fade_at: self.fade_at,
            },
        )
        .at(self.at.x, self.at.y)
        .size(self.size.x, self.size.y)
        .translate(offset.x, offset.y)
        .scale(scale)
        .blur(self.blur_px)
        .build()
    }
}

/// Full-bleed background image with a slow pulse.
pub(crate) fn background_image(id: &str, src: &str, opacity: f64, scale: f64) -> Node {
    NodeBuilder::image(id, src)
        .position(Position::Fill)
        .cover()
        .opacity(opacity)
        .scale(scale)
        .build()
}

/// Centered content column covering the canvas.
pub(crate) fn content(id: &str, flex: Flex) -> NodeBuilder {
    NodeBuilder::group(id).position(Position::Fill).flex(flex)
}

/// Play icon plus "revid.ai" with the `.ai` in the accent color.
pub(crate) fn logo(
    id: &str,
    fonts: &Fonts<'_>,
    palette: &Palette,
    icon_src: &str,
    icon_px: f64,
    font_px: f64,
    weight: u16,
) -> NodeBuilder {
    let mut word = text_node(
        fonts.font(font_px, weight),
        palette.text,
        vec![plain_run("revid", palette.text), plain_run(".ai", palette.accent)],
    );
    word.letter_spacing_em = -0.02;
    NodeBuilder::group(id)
        .flex(Flex::row().gap(icon_px * 0.3))
        .child(
            NodeBuilder::image(format!("{id}.icon"), icon_src)
                .size(icon_px, icon_px)
                .build(),
        )
        .child(NodeBuilder::text(format!("{id}.word"), word).build())
}

/// Gradient pill button with a trailing arrow.
pub(crate) struct Cta<'a> {
    pub(crate) label: &'a str,
    pub(crate) arrow_src: &'a str,
    pub(crate) font_px: f64,
    pub(crate) arrow_px: f64,
    pub(crate) padding: Vec2,
    pub(crate) radius: f64,
}

impl Cta<'_> {
    pub(crate) fn node(
        &self,
        id: &str,
        fonts: &Fonts<'_>,
        palette: &Palette,
        glow: GlowStyle,
    ) -> Node {
        NodeBuilder::group(id)
            .flex(
                Flex::row()
                    .gap(self.arrow_px * 0.5)
                    .padding(self.padding.x, self.padding.y),
            )
            .background(Fill::Linear {
                angle_deg: 135.0,
                from: palette.accent,
                to: palette.accent_dark,
            })
            .rounded(self.radius)
            .glow(Some(glow))
            .child(
                NodeBuilder::text(
                    format!("{id}.label"),
                    label(fonts.font(self.font_px, 700), palette.background, self.label),
                )
                .build(),
            )
            .child(
                NodeBuilder::image(format!("{id}.arrow"), self.arrow_src)
                    .size(self.arrow_px, self.arrow_px)
                    .build(),
            )
            .build()
    }
}

/// Translucent card surface.
pub(crate) fn card(id: &str, fill_alpha: f64, border_alpha: f64, radius: f64) -> NodeBuilder {
    NodeBuilder::group(id)
        .background(Fill::Solid(Color::rgb(255, 255, 255).with_alpha(fill_alpha)))
        .border(Color::rgb(255, 255, 255).with_alpha(border_alpha), 1.0)
        .rounded(radius)
        .clip()
}

/// Same color with a raw alpha byte (`#rrggbb` + `aa`).
pub(crate) const fn alpha_byte(c: Color, a: u8) -> Color {
    Color::rgba(c.r, c.g, c.b, a)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/common.rs"]
mod tests;

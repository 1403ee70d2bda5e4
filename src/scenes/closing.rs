use crate::{
    animation::{ambient::Oscillator, ease::Ease},
    config::{Palette, ReelConfig},
    effects::{
        glow::{AnimatedGlow, Glow},
        grid::{GridBackground, ScrollDirection},
        shimmer::Shimmer,
    },
    foundation::{
        core::{Color, Fps, Vec2},
        error::ReelResult,
    },
    scene::{dsl::NodeBuilder, model::Flex, model::Node},
    scenes::common::{
        Cta, Entrance, Fonts, Orb, background_image, check_start, content, fade_in, logo, secs,
    },
    text::{
        reveal::{RevealKind, TextReveal},
        units::{RichText, SplitBy, Span},
    },
};

const LOGO: Entrance = Entrance::new(5.0, 12.0, 90.0, 10.0);
const CTA: Entrance = Entrance::new(45.0, 14.0, 120.0, 10.0);
const URL_DELAY: f64 = 58.0;
const URL_FADE_FRAMES: f64 = 15.0;

const BG_PULSE: Oscillator = Oscillator::sin(0.025, 0.04).around(1.0);
const ORB1_Y: Oscillator = Oscillator::sin(0.04, 15.0);
const ORB2_X: Oscillator = Oscillator::sin(0.028, 12.0);
const ORB2_Y: Oscillator = Oscillator::cos(0.035, 18.0);
const ORB3_Y: Oscillator = Oscillator::sin(0.045, 8.0);

const URL_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz./";

/// Final beat: large logo, headline, call to action and the decoding URL.
#[derive(Clone, Debug)]
pub struct ClosingScene {
    fps: Fps,
    duration: u64,
    palette: Palette,
    font_family: String,
    background_src: String,
    logo_icon: String,
    cta_arrow: String,
    headline: TextReveal,
    subtitle: TextReveal,
    url: TextReveal,
    grid: GridBackground,
    logo_glow: AnimatedGlow,
    cta_glow: Glow,
}

impl ClosingScene {
    /// Build and validate against the configured duration.
    pub fn new(cfg: &ReelConfig) -> ReelResult<Self> {
        let p = cfg.palette;
        let headline = TextReveal::new(
            "closing.headline",
            RichText::default()
                .span(Span::plain("Start creating "))
                .span(Span::shimmering(
                    "viral content",
                    Shimmer::new(p.accent, Color::rgb(255, 255, 255), 2.5),
                ))
                .span(Span::plain(" today")),
            SplitBy::Chars,
            RevealKind::fade(0.6, Ease::OutBack(1.4)),
        )
        .start_from(15.0)
        .stagger(0.02);
        let subtitle = TextReveal::new(
            "closing.subtitle",
            "No editing skills required. Free to start.",
            SplitBy::Words,
            RevealKind::blur(0.6),
        )
        .start_from(32.0)
        .stagger(0.03);
        let url = TextReveal::new(
            "closing.url",
            "revid.ai",
            SplitBy::Chars,
            RevealKind::scramble(1.2, URL_CHARSET, p.accent),
        )
        .start_from(URL_DELAY)
        .stagger(0.03);
        let grid = GridBackground {
            cell_size: 55.0,
            line_color: p.accent.with_alpha(0.03),
            velocity: 15.0,
            direction: ScrollDirection::Up,
            fade_edges: true,
        };

        let duration = cfg.durations.closing;
        headline.validate(cfg.fps, duration)?;
        subtitle.validate(cfg.fps, duration)?;
        url.validate(cfg.fps, duration)?;
        LOGO.validate("closing.logo", duration)?;
        CTA.validate("closing.cta", duration)?;
        check_start("closing.url", URL_DELAY, duration)?;
        grid.validate()?;

        Ok(Self {
            fps: cfg.fps,
            duration,
            palette: p,
            font_family: cfg.font_family.clone(),
            background_src: cfg.assets.closing_bg.clone(),
            logo_icon: cfg.assets.logo_icon_large.clone(),
            cta_arrow: cfg.assets.cta_arrow_large.clone(),
            headline,
            subtitle,
            url,
            grid,
            logo_glow: AnimatedGlow::new(Glow::new(p.accent, 30.0).pulsing(2.5).layers(3), 0.8, true),
            cta_glow: Glow::new(p.accent, 25.0).pulsing(2.0).layers(3),
        })
    }

    /// Length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Visual tree at scene-local `frame`.
    pub fn render(&self, frame: u64) -> Node {
        let f = frame as f64;
        let t = secs(f, self.fps);
        let p = &self.palette;
        let fonts = Fonts::new(&self.font_family);
        let bg_pulse = BG_PULSE.sample(f);

        let orbs = [
            Orb::circle("closing.orb.green", 0.5, 0.3, 700.0, p.accent.with_alpha(0.12))
                .mid(p.sky.with_alpha(0.04), 0.4)
                .blur(80.0)
                .node(Vec2::new(-350.0, ORB1_Y.sample(f)), bg_pulse),
            Orb::circle("closing.orb.violet", 0.15, 0.1, 300.0, p.violet.with_alpha(0.08))
                .node(Vec2::new(ORB2_X.sample(f), ORB2_Y.sample(f)), 1.0),
            Orb::circle("closing.orb.sky", -0.2, -0.15, 250.0, p.sky.with_alpha(0.06))
                .blur(35.0)
                .node(Vec2::new(0.0, ORB3_Y.sample(f)), 1.0),
        ];

        let brand = logo("closing.logo", &fonts, p, &self.logo_icon, 56.0, 48.0, 800)
            .opacity(LOGO.opacity(f))
            .scale(LOGO.map(f, self.fps, 0.6, 1.0))
            .glow(Some(self.logo_glow.style_at(t)))
            .build();

        let mut headline = self
            .headline
            .text_node(f, self.fps, fonts.font(62.0, 800), p.text);
        headline.line_height = 1.15;
        headline.letter_spacing_em = -0.03;

        let mut subtitle = self
            .subtitle
            .text_node(f, self.fps, fonts.font(20.0, 400), p.muted(0.55));
        subtitle.line_height = 1.5;

        let cta = NodeBuilder::group("closing.cta")
            .opacity(CTA.opacity(f))
            .translate(0.0, CTA.map(f, self.fps, 30.0, 0.0))
            .child(
                Cta {
                    label: "Get Started Free",
                    arrow_src: &self.cta_arrow,
                    font_px: 22.0,
                    arrow_px: 24.0,
                    padding: Vec2::new(48.0, 18.0),
                    radius: 16.0,
                }
                .node("closing.cta.button", &fonts, p, self.cta_glow.style_at(t)),
            )
            .build();

        let mut url = self
            .url
            .text_node(f, self.fps, fonts.font(18.0, 500), p.muted(0.4));
        url.letter_spacing_em = 0.05;

        NodeBuilder::stage("closing", p.background)
            .clip()
            .child(background_image(
                "closing.bg",
                &self.background_src,
                0.35,
                bg_pulse + 0.05,
            ))
            .child(self.grid.node("closing.grid", t))
            .children(orbs)
            .child(
                content("closing.content", Flex::column().gap(28.0).padding(120.0, 0.0))
                    .child(brand)
                    .child(NodeBuilder::text("closing.headline", headline).build())
                    .child(NodeBuilder::text("closing.subtitle", subtitle).build())
                    .child(cta)
                    .child(
                        NodeBuilder::text("closing.url", url)
                            .opacity(fade_in(f, URL_DELAY, URL_FADE_FRAMES))
                            .build(),
                    )
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/closing.rs"]
mod tests;

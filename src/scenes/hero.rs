use crate::{
    animation::{ambient::Oscillator, ease::Ease},
    config::{Palette, ReelConfig},
    effects::{
        glow::Glow,
        grid::{GridBackground, ScrollDirection},
    },
    foundation::{
        core::{Fps, Vec2},
        error::ReelResult,
    },
    scene::{
        dsl::NodeBuilder,
        model::{Flex, Node},
    },
    scenes::common::{Cta, Entrance, Fonts, Orb, background_image, content, logo, secs},
    text::{
        reveal::{RevealKind, TextReveal},
        units::{RichText, SplitBy, Span},
    },
};

const LOGO: Entrance = Entrance::new(0.0, 12.0, 100.0, 12.0);
const CTA: Entrance = Entrance::new(55.0, 14.0, 120.0, 8.0);

const ORB1_X: Oscillator = Oscillator::cos(0.03, 10.0);
const ORB1_Y: Oscillator = Oscillator::sin(0.04, 15.0);
const ORB2_X: Oscillator = Oscillator::sin(0.025, 12.0);
const ORB2_Y: Oscillator = Oscillator::cos(0.035, 20.0);
const ORB3_Y: Oscillator = Oscillator::sin(0.05, 10.0);
const BG_PULSE: Oscillator = Oscillator::sin(0.02, 0.03).around(1.0);

/// Opening beat: logo, headline, tagline and the first call to action.
#[derive(Clone, Debug)]
pub struct HeroScene {
    fps: Fps,
    duration: u64,
    palette: Palette,
    font_family: String,
    background_src: String,
    logo_icon: String,
    cta_arrow: String,
    headline: TextReveal,
    tagline: TextReveal,
    grid: GridBackground,
    logo_glow: Glow,
    cta_glow: Glow,
}

impl HeroScene {
    /// Build and validate against the configured duration.
    pub fn new(cfg: &ReelConfig) -> ReelResult<Self> {
        let palette = cfg.palette;
        let headline = TextReveal::new(
            "hero.headline",
            RichText::default()
                .span(Span::plain("Create Viral Videos in "))
                .span(Span::colored("Minutes", palette.accent)),
            SplitBy::Chars,
            RevealKind::fade(0.6, Ease::OutBack(1.4)),
        )
        .start_from(18.0)
        .stagger(0.02);
        let tagline = TextReveal::new(
            "hero.tagline",
            "Turn ideas into attention-grabbing TikTok, Instagram & YouTube content with AI",
            SplitBy::Words,
            RevealKind::blur(0.7),
        )
        .start_from(38.0)
        .stagger(0.03);
        let grid = GridBackground {
            cell_size: 60.0,
            line_color: palette.accent.with_alpha(0.04),
            velocity: 20.0,
            direction: ScrollDirection::Up,
            fade_edges: true,
        };

        let duration = cfg.durations.hero;
        headline.validate(cfg.fps, duration)?;
        tagline.validate(cfg.fps, duration)?;
        LOGO.validate("hero.logo", duration)?;
        CTA.validate("hero.cta", duration)?;
        grid.validate()?;

        Ok(Self {
            fps: cfg.fps,
            duration,
            palette,
            font_family: cfg.font_family.clone(),
            background_src: cfg.assets.hero_bg.clone(),
            logo_icon: cfg.assets.logo_icon.clone(),
            cta_arrow: cfg.assets.cta_arrow.clone(),
            headline,
            tagline,
            grid,
            logo_glow: Glow::new(palette.accent, 15.0).pulsing(3.0).layers(2),
            cta_glow: Glow::new(palette.accent, 20.0).pulsing(2.5).layers(2),
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
            Orb::circle("hero.orb.green", 0.2, 0.15, 500.0, p.accent.with_alpha(0.12))
                .blur(40.0)
                .node(Vec2::new(ORB1_X.sample(f), ORB1_Y.sample(f)), bg_pulse),
            Orb::circle("hero.orb.sky", -0.15, -0.1, 400.0, p.sky.with_alpha(0.1))
                .blur(50.0)
                .node(Vec2::new(ORB2_X.sample(f), ORB2_Y.sample(f)), 1.0),
            Orb::circle("hero.orb.violet", 0.6, 0.5, 300.0, p.violet.with_alpha(0.08))
                .blur(35.0)
                .node(Vec2::new(0.0, ORB3_Y.sample(f)), 1.0),
        ];

        let brand = logo("hero.logo", &fonts, p, &self.logo_icon, 44.0, 36.0, 700)
            .opacity(LOGO.opacity(f))
            .scale(LOGO.progress(f, self.fps))
            .glow(Some(self.logo_glow.style_at(t)))
            .build();

        let mut headline = self
            .headline
            .text_node(f, self.fps, fonts.font(76.0, 800), p.text);
        headline.line_height = 1.1;
        headline.letter_spacing_em = -0.03;

        let mut tagline = self
            .tagline
            .text_node(f, self.fps, fonts.font(22.0, 400), p.muted(0.6));
        tagline.line_height = 1.5;
        tagline.max_width = Some(700.0);

        let cta = NodeBuilder::group("hero.cta")
            .opacity(CTA.opacity(f))
            .translate(0.0, CTA.map(f, self.fps, 30.0, 0.0))
            .child(
                Cta {
                    label: "Create videos now",
                    arrow_src: &self.cta_arrow,
                    font_px: 20.0,
                    arrow_px: 22.0,
                    padding: Vec2::new(40.0, 16.0),
                    radius: 14.0,
                }
                .node("hero.cta.button", &fonts, p, self.cta_glow.style_at(t)),
            )
            .build();

        NodeBuilder::stage("hero", p.background)
            .clip()
            .child(background_image(
                "hero.bg",
                &self.background_src,
                0.4,
                bg_pulse + 0.05,
            ))
            .child(self.grid.node("hero.grid", t))
            .children(orbs)
            .child(
                content("hero.content", Flex::column().gap(32.0).padding(120.0, 0.0))
                    .child(brand)
                    .child(NodeBuilder::text("hero.headline", headline).build())
                    .child(NodeBuilder::text("hero.tagline", tagline).build())
                    .child(cta)
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/hero.rs"]
mod tests;

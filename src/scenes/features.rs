use crate::{
    animation::{ambient::Oscillator, ease::Ease},
    config::{Palette, ReelConfig},
    effects::glow::Glow,
    foundation::{
        core::{Color, Fps, Vec2},
        error::ReelResult,
    },
    scene::{
        dsl::{NodeBuilder, label},
        model::{Align, Fill, Flex, Node, Position, Shape, TextAlign},
    },
    scenes::common::{Entrance, Fonts, Orb, alpha_byte, card, content, secs},
    text::{
        reveal::{RevealKind, SlideFrom, TextReveal},
        units::SplitBy,
    },
};

const ORB_X: Oscillator = Oscillator::cos(0.025, 8.0);
const ORB_Y: Oscillator = Oscillator::sin(0.03, 12.0);
const ICON_FLOAT: Oscillator = Oscillator::sin(0.06, 4.0);

/// Frames between consecutive card entrances.
const CARD_STEP: f64 = 8.0;
const FIRST_CARD: f64 = 22.0;

/// One feature card.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureCard {
    /// Illustration URL.
    pub illustration: String,
    /// Card title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Accent color of the card glow.
    pub color: Color,
}

/// Three feature cards under a two-line heading.
#[derive(Clone, Debug)]
pub struct FeaturesScene {
    fps: Fps,
    duration: u64,
    palette: Palette,
    font_family: String,
    eyebrow: TextReveal,
    headline: TextReveal,
    cards: Vec<FeatureCard>,
}

impl FeaturesScene {
    /// Build and validate against the configured duration.
    pub fn new(cfg: &ReelConfig) -> ReelResult<Self> {
        let p = cfg.palette;
        let eyebrow = TextReveal::new(
            "features.eyebrow",
            "Why Revid.ai",
            SplitBy::Chars,
            RevealKind::slide(SlideFrom::Bottom, 40.0),
        )
        .start_from(5.0)
        .stagger(0.04);
        let headline = TextReveal::new(
            "features.headline",
            "Everything you need to go viral",
            SplitBy::Words,
            RevealKind::fade(0.5, Ease::OutCubic),
        )
        .start_from(12.0)
        .stagger(0.08);

        let [ai, lightning, chart] = cfg.assets.feature_icons.clone();
        let cards = vec![
            FeatureCard {
                illustration: ai,
                title: "AI-Powered",
                description: "Generate scripts, scenes & edits with intelligent AI",
                color: p.accent,
            },
            FeatureCard {
                illustration: lightning,
                title: "Lightning Fast",
                description: "From idea to finished video in under 2 minutes",
                color: p.sky,
            },
            FeatureCard {
                illustration: chart,
                title: "Viral Optimized",
                description: "Built-in trends analysis for maximum engagement",
                color: p.violet,
            },
        ];

        let duration = cfg.durations.features;
        eyebrow.validate(cfg.fps, duration)?;
        headline.validate(cfg.fps, duration)?;
        for i in 0..cards.len() {
            Self::card_entrance(i).validate(&format!("features.card.{i}"), duration)?;
        }

        Ok(Self {
            fps: cfg.fps,
            duration,
            palette: p,
            font_family: cfg.font_family.clone(),
            eyebrow,
            headline,
            cards,
        })
    }

    /// Length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[FeatureCard] {
        &self.cards
    }

    /// Entrance delay of card `index`.
    pub fn card_delay(index: usize) -> f64 {
        FIRST_CARD + index as f64 * CARD_STEP
    }

    fn card_entrance(index: usize) -> Entrance {
        Entrance::new(Self::card_delay(index), 14.0, 100.0, 10.0)
    }

    /// Visual tree at scene-local `frame`.
    pub fn render(&self, frame: u64) -> Node {
        let f = frame as f64;
        let p = &self.palette;
        let fonts = Fonts::new(&self.font_family);
        let orb_y = ORB_Y.sample(f);

        let mut eyebrow = self
            .eyebrow
            .text_node(f, self.fps, fonts.font(16.0, 600), p.accent);
        eyebrow.letter_spacing_em = 0.15;
        eyebrow.uppercase = true;

        let mut headline = self
            .headline
            .text_node(f, self.fps, fonts.font(52.0, 800), p.text);
        headline.letter_spacing_em = -0.03;

        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, c)| self.card_node(i, c, f, &fonts));

        NodeBuilder::stage("features", p.background)
            .clip()
            .child(
                Orb::circle("features.orb.green", -0.1, 0.3, 400.0, p.accent.with_alpha(0.06))
                    .blur(50.0)
                    .node(Vec2::new(ORB_X.sample(f), orb_y), 1.0),
            )
            .child(
                Orb::circle("features.orb.violet", 0.05, -0.2, 350.0, p.violet.with_alpha(0.06))
                    .blur(40.0)
                    .node(Vec2::new(0.0, -orb_y), 1.0),
            )
            .child(
                content("features.content", Flex::column().gap(16.0).padding(80.0, 0.0))
                    .child(NodeBuilder::text("features.eyebrow", eyebrow).build())
                    .child(NodeBuilder::text("features.headline", headline).build())
                    .child(
                        NodeBuilder::group("features.cards")
                            .flex(Flex::row().gap(28.0).align(Align::Start))
                            .children(cards)
                            .build(),
                    )
                    .build(),
            )
            .build()
    }

    fn card_node(&self, index: usize, c: &FeatureCard, f: f64, fonts: &Fonts<'_>) -> Node {
        let p = &self.palette;
        let entrance = Self::card_entrance(index);
        let id = format!("features.card.{index}");
        let icon_float = ICON_FLOAT
            .shifted_by_frames(index as f64 * 20.0)
            .sample(f);
        let glow = Glow::new(c.color, 14.0).pulsing(3.0).layers(2);

        let mut description = label(fonts.font(15.0, 400), p.muted(0.5), c.description);
        description.line_height = 1.5;
        description.align = TextAlign::Start;

        card(&id, 0.04, 0.08, 20.0)
            .flex(Flex::column().gap(10.0).align(Align::Start).padding(32.0, 32.0))
            .opacity(entrance.opacity(f))
            .translate(0.0, entrance.map(f, self.fps, 60.0, 0.0))
            .scale(entrance.map(f, self.fps, 0.85, 1.0))
            .child(
                NodeBuilder::shape(
                    format!("{id}.accent"),
                    Shape::Ellipse,
                    Fill::Radial {
                        inner: alpha_byte(c.color, 0x20),
                        mid: None,
                        fade_at: 0.7,
                    },
                )
                .position(Position::Pixels { x: -20.0, y: -20.0 })
                .size(120.0, 120.0)
                .blur(20.0)
                .build(),
            )
            .child(
                NodeBuilder::group(format!("{id}.icon"))
                    .size(100.0, 100.0)
                    .rounded(20.0)
                    .clip()
                    .translate(0.0, icon_float)
                    .glow(Some(glow.style_at(secs(f, self.fps))))
                    .child(
                        NodeBuilder::image(format!("{id}.icon.img"), &c.illustration)
                            .position(Position::Fill)
                            .cover()
                            .build(),
                    )
                    .build(),
            )
            .child(
                NodeBuilder::text(
                    format!("{id}.title"),
                    label(fonts.font(22.0, 700), p.text, c.title),
                )
                .build(),
            )
            .child(NodeBuilder::text(format!("{id}.description"), description).build())
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/features.rs"]
mod tests;

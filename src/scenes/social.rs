use crate::{
    animation::{ambient::Oscillator, ease::Ease},
    config::{Palette, ReelConfig},
    effects::{counter::Counter, glow::Glow},
    foundation::{
        core::{Color, Fps, Vec2},
        error::ReelResult,
    },
    scene::{
        dsl::{NodeBuilder, label},
        model::{Fill, Flex, Node, Shape},
    },
    scenes::common::{Entrance, Fonts, Orb, alpha_byte, card, content, secs},
    text::{
        reveal::{RevealKind, TextReveal},
        units::SplitBy,
    },
};

const ORB_X: Oscillator = Oscillator::cos(0.025, 8.0);
const ORB_Y: Oscillator = Oscillator::sin(0.03, 10.0);
const METRIC_FLOAT: Oscillator = Oscillator::sin(0.05, 3.0);
const AVATARS: Entrance = Entrance::new(55.0, 15.0, 100.0, 12.0);

const FIRST_METRIC: f64 = 20.0;
const METRIC_STEP: f64 = 10.0;
const COUNT_UP_S: f64 = 1.8;
/// Seconds between a card starting its entrance and its counter starting.
const COUNT_LAG_S: f64 = 0.2;
const AVATAR_PX: f64 = 36.0;

/// One animated metric card.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    /// Caption under the number.
    pub label: &'static str,
    /// Color of the top bar and the glow.
    pub color: Color,
    /// Count-up animation.
    pub counter: Counter,
}

/// Social proof: headline, three counting metrics and a row of avatars.
#[derive(Clone, Debug)]
pub struct SocialScene {
    fps: Fps,
    duration: u64,
    palette: Palette,
    font_family: String,
    eyebrow: TextReveal,
    headline: TextReveal,
    metrics: Vec<Metric>,
}

impl SocialScene {
    /// Build and validate against the configured duration.
    pub fn new(cfg: &ReelConfig) -> ReelResult<Self> {
        let p = cfg.palette;
        let eyebrow = TextReveal::new(
            "social.eyebrow",
            "Trusted Worldwide",
            SplitBy::Chars,
            RevealKind::bounce(),
        )
        .start_from(5.0)
        .stagger(0.03);
        let headline = TextReveal::new(
            "social.headline",
            "Creators love what we build",
            SplitBy::Words,
            RevealKind::fade(0.5, Ease::OutCubic),
        )
        .start_from(12.0)
        .stagger(0.08);

        let metrics: Vec<Metric> = [
            (10_000_000.0, "Videos Created", p.accent),
            (50_000.0, "Active Creators", p.sky),
            (150.0, "Countries", p.violet),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (value, label, color))| Metric {
            label,
            color,
            counter: Counter::new(0.0, value, COUNT_UP_S)
                .delay(cfg.fps.frames_to_secs(Self::metric_delay(i)) + COUNT_LAG_S)
                .ease(Ease::Smooth)
                .abbreviated()
                .suffix("+"),
        })
        .collect();

        let duration = cfg.durations.social;
        eyebrow.validate(cfg.fps, duration)?;
        headline.validate(cfg.fps, duration)?;
        for i in 0..metrics.len() {
            Self::metric_entrance(i).validate(&format!("social.metric.{i}"), duration)?;
        }
        AVATARS.validate("social.avatars", duration)?;

        Ok(Self {
            fps: cfg.fps,
            duration,
            palette: p,
            font_family: cfg.font_family.clone(),
            eyebrow,
            headline,
            metrics,
        })
    }

    /// Length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Metrics in display order.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Entrance delay of metric `index`.
    pub fn metric_delay(index: usize) -> f64 {
        FIRST_METRIC + index as f64 * METRIC_STEP
    }

    fn metric_entrance(index: usize) -> Entrance {
        Entrance::new(Self::metric_delay(index), 12.0, 100.0, 12.0)
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
            .text_node(f, self.fps, fonts.font(50.0, 800), p.text);
        headline.letter_spacing_em = -0.03;

        let metrics = self
            .metrics
            .iter()
            .enumerate()
            .map(|(i, m)| self.metric_node(i, m, f, &fonts));

        NodeBuilder::stage("social", p.background)
            .clip()
            .child(
                Orb::circle("social.orb.green", 0.5, 0.4, 700.0, p.accent.with_alpha(0.06))
                    .size(700.0, 400.0)
                    .fade_at(0.6)
                    .blur(60.0)
                    .node(Vec2::new(-350.0, orb_y), 1.0),
            )
            .child(
                Orb::circle("social.orb.violet", -0.2, 0.1, 200.0, p.violet.with_alpha(0.08))
                    .blur(30.0)
                    .node(Vec2::new(ORB_X.sample(f), -orb_y), 1.0),
            )
            .child(
                content("social.content", Flex::column().gap(20.0).padding(80.0, 0.0))
                    .child(NodeBuilder::text("social.eyebrow", eyebrow).build())
                    .child(NodeBuilder::text("social.headline", headline).build())
                    .child(
                        NodeBuilder::group("social.metrics")
                            .flex(Flex::row().gap(36.0))
                            .children(metrics)
                            .build(),
                    )
                    .child(self.avatars(f, &fonts))
                    .build(),
            )
            .build()
    }

    fn metric_node(&self, index: usize, m: &Metric, f: f64, fonts: &Fonts<'_>) -> Node {
        let p = &self.palette;
        let entrance = Self::metric_entrance(index);
        let id = format!("social.metric.{index}");
        let t = secs(f, self.fps);
        let float = METRIC_FLOAT
            .shifted_by_frames(index as f64 * 30.0)
            .sample(f);
        let glow = Glow::new(m.color, 10.0).pulsing(3.0);

        let mut value = label(fonts.font(44.0, 800), p.text, m.counter.text_at(t));
        value.letter_spacing_em = -0.02;

        card(&id, 0.03, 0.06, 24.0)
            .flex(Flex::column().gap(8.0).padding(40.0, 30.0))
            .opacity(entrance.opacity(f))
            .scale(entrance.map(f, self.fps, 0.7, 1.0))
            .translate(0.0, entrance.map(f, self.fps, 50.0, 0.0) + float)
            .glow(Some(glow.style_at(t)))
            .child(
                NodeBuilder::shape(
                    format!("{id}.bar"),
                    Shape::Rect { corner_radius: 2.0 },
                    Fill::Solid(m.color),
                )
                .size(40.0, 3.0)
                .build(),
            )
            .child(NodeBuilder::text(format!("{id}.value"), value).build())
            .child(
                NodeBuilder::text(
                    format!("{id}.label"),
                    label(fonts.font(14.0, 500), p.muted(0.5), m.label),
                )
                .build(),
            )
            .build()
    }

    fn avatars(&self, f: f64, fonts: &Fonts<'_>) -> Node {
        let p = &self.palette;
        let colors = [p.accent, p.sky, p.violet, p.amber, p.pink, p.cyan];
        let circles = colors.iter().enumerate().map(|(i, &c)| {
            NodeBuilder::shape(
                format!("social.avatars.{i}"),
                Shape::Ellipse,
                Fill::Linear {
                    angle_deg: 135.0,
                    from: c,
                    to: alpha_byte(c, 0x80),
                },
            )
            .size(AVATAR_PX, AVATAR_PX)
            .border(p.background, 2.0)
            .build()
        });

        NodeBuilder::group("social.avatars")
            .flex(Flex::row().gap(16.0))
            .opacity(AVATARS.opacity(f))
            .translate(0.0, AVATARS.map(f, self.fps, 20.0, 0.0))
            .child(
                NodeBuilder::group("social.avatars.stack")
                    .flex(Flex::row().gap(-10.0))
                    .children(circles)
                    .build(),
            )
            .child(
                NodeBuilder::text(
                    "social.avatars.caption",
                    label(fonts.font(15.0, 500), p.muted(0.5), "Join 50,000+ creators"),
                )
                .build(),
            )
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/social.rs"]
mod tests;

use crate::{
    animation::{ambient::Oscillator, ease::Ease},
    config::{Palette, ReelConfig},
    effects::glow::{AnimatedGlow, Glow},
    foundation::{
        core::{Color, Fps, Vec2},
        error::ReelResult,
    },
    scene::{
        dsl::{NodeBuilder, label},
        model::{Align, Fill, Flex, GlowStyle, Node, Position, Shape, TextAlign},
    },
    scenes::common::{Entrance, Fonts, Orb, alpha_byte, content, secs},
    text::{
        reveal::{RevealKind, TextReveal},
        units::SplitBy,
    },
};

const PHONE: Entrance = Entrance::new(0.0, 15.0, 80.0, 15.0);
const PHONE_FLOAT: Oscillator = Oscillator::sin(0.04, 6.0);
const PHONE_ROCK_DEG: Oscillator = Oscillator::sin(0.025, 1.5);
const ORB_Y: Oscillator = Oscillator::sin(0.035, 15.0);
const STAT_PULSE: Oscillator = Oscillator::sin(0.08, 0.02).around(1.0);

/// Device body size before the mockup scale is applied.
const DEVICE: Vec2 = Vec2::new(433.0, 882.0);
const BEZEL: f64 = 20.0;
const MOCKUP_SCALE: f64 = 0.55;

/// One headline number beside the phone.
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    /// Display value, already formatted.
    pub value: &'static str,
    /// Caption.
    pub label: &'static str,
    /// Entrance delay in frames.
    pub delay: f64,
    /// Accent bar color.
    pub color: Color,
}

impl Stat {
    fn entrance(&self) -> Entrance {
        Entrance::new(self.delay, 14.0, 120.0, 10.0)
    }
}

/// Phone mockup on the right, copy and stats on the left.
#[derive(Clone, Debug)]
pub struct PhoneScene {
    fps: Fps,
    duration: u64,
    palette: Palette,
    font_family: String,
    screen_src: String,
    eyebrow: TextReveal,
    headline: TextReveal,
    stats: Vec<Stat>,
    glow: AnimatedGlow,
}

impl PhoneScene {
    /// Build and validate against the configured duration.
    pub fn new(cfg: &ReelConfig) -> ReelResult<Self> {
        let p = cfg.palette;
        let eyebrow = TextReveal::new(
            "phone.eyebrow",
            "Mobile First",
            SplitBy::Chars,
            RevealKind::wave(25.0),
        )
        .start_from(8.0)
        .stagger(0.03);
        let headline = TextReveal::new(
            "phone.headline",
            "Designed for the platforms you love",
            SplitBy::Chars,
            RevealKind::fade(0.5, Ease::OutQuart),
        )
        .start_from(14.0)
        .stagger(0.02);
        let stats = vec![
            Stat {
                value: "10M+",
                label: "Videos created",
                delay: 20.0,
                color: p.accent,
            },
            Stat {
                value: "50K+",
                label: "Active creators",
                delay: 28.0,
                color: p.sky,
            },
            Stat {
                value: "98%",
                label: "Time saved",
                delay: 36.0,
                color: p.violet,
            },
        ];

        let duration = cfg.durations.phone;
        eyebrow.validate(cfg.fps, duration)?;
        headline.validate(cfg.fps, duration)?;
        PHONE.validate("phone.device", duration)?;
        for (i, s) in stats.iter().enumerate() {
            s.entrance().validate(&format!("phone.stat.{i}"), duration)?;
        }

        Ok(Self {
            fps: cfg.fps,
            duration,
            palette: p,
            font_family: cfg.font_family.clone(),
            screen_src: cfg.assets.phone_screen.clone(),
            eyebrow,
            headline,
            stats,
            glow: AnimatedGlow::new(Glow::new(p.accent, 25.0).pulsing(3.0).layers(2), 0.8, true),
        })
    }

    /// Length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Stats in display order.
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Visual tree at scene-local `frame`.
    pub fn render(&self, frame: u64) -> Node {
        let f = frame as f64;
        let p = &self.palette;
        let fonts = Fonts::new(&self.font_family);

        let mut eyebrow = self
            .eyebrow
            .text_node(f, self.fps, fonts.font(16.0, 600), p.accent);
        eyebrow.letter_spacing_em = 0.12;
        eyebrow.uppercase = true;
        eyebrow.align = TextAlign::Start;

        let mut headline = self
            .headline
            .text_node(f, self.fps, fonts.font(48.0, 800), p.text);
        headline.line_height = 1.15;
        headline.letter_spacing_em = -0.03;
        headline.align = TextAlign::Start;

        let copy = NodeBuilder::group("phone.copy")
            .flex(Flex::column().gap(20.0).align(Align::Start))
            .child(NodeBuilder::text("phone.eyebrow", eyebrow).build())
            .child(NodeBuilder::text("phone.headline", headline).build())
            .child(
                NodeBuilder::group("phone.stats")
                    .flex(Flex::column().gap(20.0).align(Align::Start))
                    .children(
                        self.stats
                            .iter()
                            .enumerate()
                            .map(|(i, s)| self.stat_node(i, s, f, &fonts)),
                    )
                    .build(),
            )
            .build();

        let phone = NodeBuilder::group("phone.device")
            .opacity(PHONE.opacity(f))
            .translate(0.0, PHONE.map(f, self.fps, 120.0, 0.0) + PHONE_FLOAT.sample(f))
            .rotate_deg(PHONE_ROCK_DEG.sample(f))
            .glow(Some(self.glow.style_at(secs(f, self.fps))))
            .child(self.mockup())
            .build();

        NodeBuilder::stage("phone", p.background)
            .clip()
            .child(
                Orb::circle("phone.orb", 0.5, 0.2, 600.0, p.accent.with_alpha(0.1))
                    .mid(p.sky.with_alpha(0.05), 0.4)
                    .blur(60.0)
                    .node(Vec2::new(-300.0, ORB_Y.sample(f)), 1.0),
            )
            .child(
                content("phone.content", Flex::row().gap(80.0).padding(100.0, 0.0))
                    .child(copy)
                    .child(phone)
                    .build(),
            )
            .build()
    }

    fn stat_node(&self, index: usize, s: &Stat, f: f64, fonts: &Fonts<'_>) -> Node {
        let p = &self.palette;
        let entrance = s.entrance();
        let id = format!("phone.stat.{index}");

        let mut value = label(fonts.font(28.0, 800), p.text, s.value);
        value.letter_spacing_em = -0.02;
        value.align = TextAlign::Start;
        let mut caption = label(fonts.font(14.0, 400), p.muted(0.45), s.label);
        caption.align = TextAlign::Start;

        NodeBuilder::group(&id)
            .flex(Flex::row().gap(16.0))
            .opacity(entrance.opacity(f))
            .translate(entrance.map(f, self.fps, -40.0, 0.0), 0.0)
            .child(
                NodeBuilder::shape(
                    format!("{id}.bar"),
                    Shape::Rect { corner_radius: 2.0 },
                    Fill::Solid(s.color),
                )
                .size(4.0, 36.0)
                .glow(Some(GlowStyle {
                    color: alpha_byte(s.color, 0x60),
                    radius_px: 12.0,
                    layers: 1,
                    offset: Vec2::ZERO,
                }))
                .build(),
            )
            .child(
                NodeBuilder::group(format!("{id}.text"))
                    .flex(Flex::column().align(Align::Start))
                    .child(
                        NodeBuilder::text(format!("{id}.value"), value)
                            .scale(STAT_PULSE.sample(f - s.delay))
                            .build(),
                    )
                    .child(NodeBuilder::text(format!("{id}.label"), caption).build())
                    .build(),
            )
            .build()
    }

    fn mockup(&self) -> Node {
        let screen = DEVICE - Vec2::new(2.0 * BEZEL, 2.0 * BEZEL);
        NodeBuilder::group("phone.mockup")
            .size(DEVICE.x, DEVICE.y)
            .scale(MOCKUP_SCALE)
            .background(Fill::Solid(Color::rgb(0x1a, 0x1a, 0x1a)))
            .rounded(68.0)
            .glow(Some(GlowStyle {
                color: Color::rgb(0, 0, 0).with_alpha(0.5),
                radius_px: 60.0,
                layers: 1,
                offset: Vec2::new(0.0, 30.0),
            }))
            .child(
                NodeBuilder::group("phone.screen")
                    .position(Position::Pixels { x: BEZEL, y: BEZEL })
                    .size(screen.x, screen.y)
                    .rounded(50.0)
                    .clip()
                    .child(
                        NodeBuilder::image("phone.screen.img", &self.screen_src)
                            .position(Position::Fill)
                            .cover()
                            .build(),
                    )
                    .build(),
            )
            .child(
                NodeBuilder::shape(
                    "phone.reflection",
                    Shape::Rect {
                        corner_radius: 68.0,
                    },
                    Fill::Linear {
                        angle_deg: 135.0,
                        from: Color::rgb(255, 255, 255).with_alpha(0.1),
                        to: Color::transparent(),
                    },
                )
                .position(Position::Fill)
                .build(),
            )
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/phone.rs"]
mod tests;

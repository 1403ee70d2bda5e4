//! Static configuration shared by every scene.
//!
//! A [`ReelConfig`] is built once, validated, and then passed by reference to every scene
//! constructor. Missing JSON fields fall back to the shipped defaults.

use std::io::Read;

use crate::{
    effects::transitions::{TransitionKind, parse_transition_kind_params},
    foundation::{
        core::{Canvas, Color, Fps},
        error::{ReelError, ReelResult},
    },
};

const ASSET_BASE: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/revid-promo";
const ICON_BASE: &str = "https://api.iconify.design/heroicons";

/// Whole-video configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Font family every text node uses.
    pub font_family: String,
    /// Per-scene lengths in frames.
    pub durations: SceneDurations,
    /// Transition between adjacent scenes.
    pub transition: TransitionConfig,
    /// Remote asset URLs.
    pub assets: AssetCatalog,
    /// Brand colors.
    pub palette: Palette,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            font_family: "Inter".to_owned(),
            durations: SceneDurations::default(),
            transition: TransitionConfig::default(),
            assets: AssetCatalog::default(),
            palette: Palette::default(),
        }
    }
}

impl ReelConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    pub fn from_reader<R: Read>(reader: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse JSON overrides from a string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Fail fast on malformed values.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.font_family.trim().is_empty() {
            return Err(ReelError::validation("font_family must be non-empty"));
        }
        for (name, frames) in self.durations.named() {
            if frames == 0 {
                return Err(ReelError::validation(format!(
                    "scene '{name}' duration must be > 0"
                )));
            }
            if self.transition.duration_frames > frames {
                return Err(ReelError::validation(format!(
                    "transition ({} frames) is longer than scene '{name}' ({frames} frames)",
                    self.transition.duration_frames
                )));
            }
        }
        if self.durations.total().is_none() {
            return Err(ReelError::validation("total duration overflows"));
        }
        self.transition.kind()?;
        self.assets.validate()?;
        Ok(())
    }
}

/// Scene lengths in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneDurations {
    /// Opening scene.
    pub hero: u64,
    /// Feature cards.
    pub features: u64,
    /// Phone mockup and stats.
    pub phone: u64,
    /// Metrics and avatars.
    pub social: u64,
    /// Call to action; longer for the end hold.
    pub closing: u64,
}

impl Default for SceneDurations {
    fn default() -> Self {
        Self {
            hero: 120,
            features: 120,
            phone: 120,
            social: 120,
            closing: 150,
        }
    }
}

impl SceneDurations {
    /// Durations in timeline order, with scene names.
    pub fn named(&self) -> [(&'static str, u64); 5] {
        [
            ("hero", self.hero),
            ("features", self.features),
            ("phone", self.phone),
            ("social", self.social),
            ("closing", self.closing),
        ]
    }

    /// Sum of all scene durations; `None` if it overflows.
    pub fn total(&self) -> Option<u64> {
        self.named()
            .iter()
            .try_fold(0u64, |acc, (_, f)| acc.checked_add(*f))
    }
}

/// Transition inserted between every pair of adjacent scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Overlap length in frames.
    pub duration_frames: u64,
    /// `blur_dissolve` or `crossfade`.
    pub kind: String,
    /// Kind-specific parameters.
    pub params: serde_json::Value,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_frames: 20,
            kind: "blur_dissolve".to_owned(),
            params: serde_json::Value::Null,
        }
    }
}

impl TransitionConfig {
    /// Parsed transition kind.
    pub fn kind(&self) -> ReelResult<TransitionKind> {
        parse_transition_kind_params(&self.kind, &self.params)
    }
}

/// Remote images referenced by the scenes. Fetching is the rendering engine's job.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetCatalog {
    /// Hero background.
    pub hero_bg: String,
    /// Closing background.
    pub closing_bg: String,
    /// App screen shown inside the phone mockup.
    pub phone_screen: String,
    /// Feature card illustrations, in card order.
    pub feature_icons: [String; 3],
    /// Play icon for the hero logo.
    pub logo_icon: String,
    /// Larger play icon for the closing logo.
    pub logo_icon_large: String,
    /// Arrow on the hero CTA.
    pub cta_arrow: String,
    /// Arrow on the closing CTA.
    pub cta_arrow_large: String,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        let r2 = |file: &str| format!("{ASSET_BASE}/{file}");
        Self {
            hero_bg: r2("1770410367124_3zghsod7yyd_revid_hero_bg.png"),
            closing_bg: r2("1770410372556_h75s5mrwiuj_revid_closing_bg.png"),
            phone_screen: r2("1770410371650_ivirv0id2u_revid_phone_screen.png"),
            feature_icons: [
                r2("1770410368240_vkx56gyhbs_revid_ai_icon.png"),
                r2("1770410369196_3hlb5qo8nk8_revid_lightning_icon.png"),
                r2("1770410370327_g8a8rv7bg4p_revid_chart_icon.png"),
            ],
            logo_icon: format!("{ICON_BASE}/play-solid.svg?color=%234ade80&width=44"),
            logo_icon_large: format!("{ICON_BASE}/play-solid.svg?color=%234ade80&width=56"),
            cta_arrow: format!("{ICON_BASE}/arrow-right.svg?color=%230a0a0f&width=22"),
            cta_arrow_large: format!("{ICON_BASE}/arrow-right.svg?color=%230a0a0f&width=24"),
        }
    }
}

impl AssetCatalog {
    fn urls(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("hero_bg", self.hero_bg.as_str()),
            ("closing_bg", self.closing_bg.as_str()),
            ("phone_screen", self.phone_screen.as_str()),
            ("feature_icons[0]", self.feature_icons[0].as_str()),
            ("feature_icons[1]", self.feature_icons[1].as_str()),
            ("feature_icons[2]", self.feature_icons[2].as_str()),
            ("logo_icon", self.logo_icon.as_str()),
            ("logo_icon_large", self.logo_icon_large.as_str()),
            ("cta_arrow", self.cta_arrow.as_str()),
            ("cta_arrow_large", self.cta_arrow_large.as_str()),
        ]
        .into_iter()
    }

    /// Every URL must be non-empty.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, url) in self.urls() {
            if url.trim().is_empty() {
                return Err(ReelError::validation(format!(
                    "asset '{name}' must be non-empty"
                )));
            }
        }
        Ok(())
    }
}

/// Brand colors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// Brand green.
    pub accent: Color,
    /// Darker end of the CTA gradient.
    pub accent_dark: Color,
    /// Secondary blue.
    pub sky: Color,
    /// Tertiary purple.
    pub violet: Color,
    /// Avatar amber.
    pub amber: Color,
    /// Avatar pink.
    pub pink: Color,
    /// Avatar cyan.
    pub cyan: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x0a, 0x0a, 0x0f),
            text: Color::rgb(0xff, 0xff, 0xff),
            accent: Color::rgb(0x4a, 0xde, 0x80),
            accent_dark: Color::rgb(0x22, 0xc5, 0x5e),
            sky: Color::rgb(0x38, 0xbd, 0xf8),
            violet: Color::rgb(0xa8, 0x55, 0xf7),
            amber: Color::rgb(0xf5, 0x9e, 0x0b),
            pink: Color::rgb(0xec, 0x48, 0x99),
            cyan: Color::rgb(0x06, 0xb6, 0xd4),
        }
    }
}

impl Palette {
    /// Primary text at a reduced alpha.
    pub fn muted(&self, alpha: f64) -> Color {
        self.text.with_alpha(alpha)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

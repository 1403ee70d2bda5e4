//! The five scenes of the reel, in play order.

pub(crate) mod closing;
pub(crate) mod common;
pub(crate) mod features;
pub(crate) mod hero;
pub(crate) mod phone;
pub(crate) mod social;

use crate::{
    config::ReelConfig,
    foundation::error::ReelResult,
    scene::model::Node,
    scenes::{
        closing::ClosingScene, features::FeaturesScene, hero::HeroScene, phone::PhoneScene,
        social::SocialScene,
    },
};

/// Identifies a scene slot in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Logo, headline and first call to action.
    Hero,
    /// Three feature cards.
    Features,
    /// Phone mockup with stats.
    PhoneShowcase,
    /// Counting metrics and avatars.
    SocialProof,
    /// Final call to action.
    Closing,
}

impl SceneKind {
    /// Play order.
    pub const ALL: [SceneKind; 5] = [
        Self::Hero,
        Self::Features,
        Self::PhoneShowcase,
        Self::SocialProof,
        Self::Closing,
    ];

    /// Stable lowercase name, matching the config duration keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::PhoneShowcase => "phone",
            Self::SocialProof => "social",
            Self::Closing => "closing",
        }
    }
}

/// A built scene, ready to render any local frame.
#[derive(Clone, Debug)]
pub enum Scene {
    /// See [`HeroScene`].
    Hero(HeroScene),
    /// See [`FeaturesScene`].
    Features(FeaturesScene),
    /// See [`PhoneScene`].
    PhoneShowcase(PhoneScene),
    /// See [`SocialScene`].
    SocialProof(SocialScene),
    /// See [`ClosingScene`].
    Closing(ClosingScene),
}

impl Scene {
    /// Build the scene occupying `kind`'s slot.
    pub fn build(kind: SceneKind, cfg: &ReelConfig) -> ReelResult<Self> {
        Ok(match kind {
            SceneKind::Hero => Self::Hero(HeroScene::new(cfg)?),
            SceneKind::Features => Self::Features(FeaturesScene::new(cfg)?),
            SceneKind::PhoneShowcase => Self::PhoneShowcase(PhoneScene::new(cfg)?),
            SceneKind::SocialProof => Self::SocialProof(SocialScene::new(cfg)?),
            SceneKind::Closing => Self::Closing(ClosingScene::new(cfg)?),
        })
    }

    /// Which slot this scene fills.
    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Hero(_) => SceneKind::Hero,
            Self::Features(_) => SceneKind::Features,
            Self::PhoneShowcase(_) => SceneKind::PhoneShowcase,
            Self::SocialProof(_) => SceneKind::SocialProof,
            Self::Closing(_) => SceneKind::Closing,
        }
    }

    /// Length in frames.
    pub fn duration(&self) -> u64 {
        match self {
            Self::Hero(s) => s.duration(),
            Self::Features(s) => s.duration(),
            Self::PhoneShowcase(s) => s.duration(),
            Self::SocialProof(s) => s.duration(),
            Self::Closing(s) => s.duration(),
        }
    }

    /// Visual tree at scene-local `frame`.
    pub fn render(&self, frame: u64) -> Node {
        match self {
            Self::Hero(s) => s.render(frame),
            Self::Features(s) => s.render(frame),
            Self::PhoneShowcase(s) => s.render(frame),
            Self::SocialProof(s) => s.render(frame),
            Self::Closing(s) => s.render(frame),
        }
    }
}

/// Build all five scenes in play order.
pub fn build_scenes(cfg: &ReelConfig) -> ReelResult<Vec<Scene>> {
    SceneKind::ALL
        .into_iter()
        .map(|kind| Scene::build(kind, cfg))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/mod.rs"]
mod tests;

use crate::{
    foundation::{
        core::{Color, Vec2},
        error::{ReelError, ReelResult},
    },
    scene::{
        dsl::NodeBuilder,
        model::{GridNode, Node},
    },
};

/// Scroll direction of a [`GridBackground`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Lines move towards the top edge.
    Up,
    /// Lines move towards the bottom edge.
    Down,
    /// Lines move towards the left edge.
    Left,
    /// Lines move towards the right edge.
    Right,
}

impl ScrollDirection {
    fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Scrolling line grid drawn behind scene content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridBackground {
    /// Cell edge length in pixels.
    pub cell_size: f64,
    /// Line color.
    pub line_color: Color,
    /// Scroll speed in pixels per second; 0 keeps the grid still.
    pub velocity: f64,
    /// Scroll direction.
    pub direction: ScrollDirection,
    /// Fade towards the canvas edges.
    pub fade_edges: bool,
}

impl GridBackground {
    /// Reject non-positive cell sizes and non-finite velocities.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ReelError::validation("grid cell_size must be finite and > 0"));
        }
        if !self.velocity.is_finite() {
            return Err(ReelError::validation("grid velocity must be finite"));
        }
        Ok(())
    }

    /// Scroll offset at `secs`: `(secs · velocity) mod cell_size` along the direction.
    pub fn scroll_at(&self, secs: f64) -> Vec2 {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 || !secs.is_finite() {
            return Vec2::ZERO;
        }
        let d = (secs * self.velocity).rem_euclid(self.cell_size);
        self.direction.unit() * d
    }

    /// Grid node at `secs`.
    pub fn node(&self, id: &str, secs: f64) -> Node {
        NodeBuilder::grid(
            id,
            GridNode {
                cell_size: self.cell_size,
                line_color: self.line_color,
                scroll: self.scroll_at(secs),
                fade_edges: self.fade_edges,
            },
        )
        .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/grid.rs"]
mod tests;

//! Recording renderer

use glam::Vec2;

use super::{Color, Renderer, Sprite};
use crate::sim::Rect;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Blit { sprite: Sprite, position: Vec2 },
    Fill { rect: Rect, color: Color },
    Text { text: String, position: Vec2 },
}

/// Records the calls of the frame in progress and keeps the last presented one
#[derive(Debug, Default)]
pub struct DrawList {
    pending: Vec<DrawCall>,
    presented: Vec<DrawCall>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls of the most recently presented frame, in draw order
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.presented
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Texts of the last frame, handy for asserting on HUD content
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.presented.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Position of the first blit of `sprite` in the last frame
    pub fn blit_position(&self, sprite: Sprite) -> Option<Vec2> {
        self.presented.iter().find_map(|call| match call {
            DrawCall::Blit { sprite: s, position } if *s == sprite => Some(*position),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn blit(&mut self, sprite: Sprite, position: Vec2) {
        self.pending.push(DrawCall::Blit { sprite, position });
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCall::Fill { rect, color });
    }

    fn text(&mut self, text: &str, position: Vec2) {
        self.pending.push(DrawCall::Text {
            text: text.to_string(),
            position,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
        log::trace!("Frame {} presented ({} draw calls)", self.frames, self.presented.len());
    }
}

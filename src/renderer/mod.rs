//! Rendering boundary
//!
//! States issue draw calls back to front (background, entities, HUD) into a
//! [`Renderer`]. No pixel work happens in this crate; a windowing backend
//! implements the trait, and [`DrawList`] records calls for the headless
//! runner and tests.

pub mod draw_list;

pub use draw_list::{DrawCall, DrawList};

use glam::Vec2;

use crate::sim::Rect;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

pub const BISQUE: Color = [0.93, 0.84, 0.72, 1.0];
pub const AZURE: Color = [0.94, 1.0, 1.0, 1.0];
pub const GOLD: Color = [1.0, 0.84, 0.0, 1.0];
pub const SILVER: Color = [0.75, 0.75, 0.75, 1.0];

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Sky,
    Ground,
    PlayerStand,
    PlayerJump,
    Snail,
}

/// Draw-call sink for one frame
pub trait Renderer {
    /// Draw an image with its top-left corner at `position`
    fn blit(&mut self, sprite: Sprite, position: Vec2);
    /// Fill a rectangle (HUD panels, buttons)
    fn fill(&mut self, rect: Rect, color: Color);
    /// Draw a line of text centered at `position`
    fn text(&mut self, text: &str, position: Vec2);
    /// Finish the frame
    fn present(&mut self);
}

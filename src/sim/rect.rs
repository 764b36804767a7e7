//! Axis-aligned rectangle geometry for sprites and bodies
//!
//! Screen space: x grows right, y grows down. A rect covers the half-open
//! range `[left, right) x [top, bottom)`, the same convention a pixel grid uses.

use glam::Vec2;

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size whose bottom edge is centered on `midbottom`
    pub fn from_midbottom(midbottom: Vec2, width: f32, height: f32) -> Self {
        Self::new(midbottom.x - width / 2.0, midbottom.y - height, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Translate in place
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grow (or shrink, with negative values) around the center
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        Self::new(
            self.x - dw / 2.0,
            self.y - dh / 2.0,
            self.width + dw,
            self.height + dh,
        )
    }

    /// True when the two rects share any area. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Check if a point lies inside the rect (right/bottom edges excluded)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

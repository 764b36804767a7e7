//! Menu widgets

use glam::Vec2;

use crate::renderer::{Color, GOLD, Renderer, SILVER};
use crate::sim::Rect;
use crate::states::Transition;

/// Brightening applied to inactive buttons
const INACTIVE_FADE: f32 = 0.125;

/// A labelled button that requests a screen transition when pressed
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    /// Label area; the drawn box is slightly larger, see [`Button::box_rect`]
    pub rect: Rect,
    pub color: Color,
    pub transition: Transition,
    pub active: bool,
    pub focused: bool,
}

impl Button {
    pub fn new(
        label: impl Into<String>,
        rect: Rect,
        color: Color,
        transition: Transition,
    ) -> Self {
        Self {
            label: label.into(),
            rect,
            color,
            transition,
            active: true,
            focused: false,
        }
    }

    /// The whole clickable box around the label
    pub fn box_rect(&self) -> Rect {
        let mut rect = self.rect.inflate(20.0, 15.0);
        rect.y -= 4.0;
        rect
    }

    pub fn hit(&self, point: Vec2) -> bool {
        self.box_rect().contains_point(point)
    }

    /// The transition to request, if the button is active
    pub fn press(&self) -> Option<Transition> {
        self.active.then_some(self.transition)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        let bg = if self.active {
            self.color
        } else {
            let [r, g, b, a] = self.color;
            [
                (r + INACTIVE_FADE).min(1.0),
                (g + INACTIVE_FADE).min(1.0),
                (b + INACTIVE_FADE).min(1.0),
                a,
            ]
        };

        let bx = self.box_rect();
        if self.focused {
            let halo = if self.active { GOLD } else { SILVER };
            renderer.fill(bx.inflate(5.0, 5.0), halo);
        }
        renderer.fill(bx, bg);
        renderer.text(&self.label, self.rect.center());
    }
}

//! Collision checks for the play field
//!
//! Ground contact snaps bodies onto the ground and reports landings, actor
//! overlap ends the run, and the obstacle wraps around the screen edge.

use glam::Vec2;

use super::actor::Actor;
use super::rect::Rect;

/// Outcome of resolving one body against the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundContact {
    /// Body is above the ground
    Airborne,
    /// Body was airborne and just touched down (jump state reset)
    Landed,
    /// Body was already on the ground and gravity pushed it in again
    Resting,
}

/// Outcome of one obstacle scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollResult {
    Scrolled,
    /// Obstacle left the screen and was moved back to the right edge
    Wrapped,
}

/// Axis-aligned overlap between two bodies
#[inline]
pub fn overlaps(a: &Actor, b: &Actor) -> bool {
    a.rect.intersects(&b.rect)
}

/// Check if a screen-space point (pointer press) hits a body
#[inline]
pub fn point_hits(actor: &Actor, point: Vec2) -> bool {
    actor.rect.contains_point(point)
}

/// Clamp a body onto the ground. Must run after gravity integration.
///
/// Only the first contact after being airborne counts as a landing, so the
/// jump controller is reset once per touchdown rather than every frame the
/// body sits on the ground.
pub fn resolve_ground(actor: &mut Actor, ground_top: f32) -> GroundContact {
    if actor.rect.bottom() <= ground_top {
        return GroundContact::Airborne;
    }

    actor.rect.set_bottom(ground_top);
    if actor.is_grounded() {
        actor.vertical_velocity = 0.0;
        GroundContact::Resting
    } else {
        actor.land();
        GroundContact::Landed
    }
}

/// Scroll the obstacle left by a fixed per-frame step, wrapping it to the
/// right edge once it is fully off screen.
pub fn scroll_obstacle(rect: &mut Rect, step: f32, screen_width: f32) -> ScrollResult {
    if rect.right() <= 0.0 {
        rect.set_left(screen_width);
        ScrollResult::Wrapped
    } else {
        rect.translate(-step, 0.0);
        ScrollResult::Scrolled
    }
}

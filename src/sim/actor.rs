//! Moving bodies: the player and the obstacle

use super::jump::{JumpController, JumpProfile};
use super::rect::Rect;
use crate::consts::GRAVITY;

/// A positioned body with a gravity accumulator and an optional jump capability
#[derive(Debug, Clone)]
pub struct Actor {
    pub rect: Rect,
    /// Pixels per frame, positive is downward
    pub vertical_velocity: f32,
    grounded: bool,
    jump: Option<JumpController>,
}

impl Actor {
    /// An actor that cannot jump (the obstacle)
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vertical_velocity: 0.0,
            grounded: false,
            jump: None,
        }
    }

    /// An actor owning a jump controller over `profiles`
    pub fn with_jumps(rect: Rect, profiles: Vec<JumpProfile>) -> Self {
        Self {
            jump: Some(JumpController::new(profiles)),
            ..Self::new(rect)
        }
    }

    pub fn jump_controller(&self) -> Option<&JumpController> {
        self.jump.as_ref()
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn move_horizontal(&mut self, dx: f32) {
        self.rect.translate(dx, 0.0);
    }

    /// Keep the rect inside `[min_x, max_x]`
    pub fn clamp_horizontal(&mut self, min_x: f32, max_x: f32) {
        if self.rect.left() < min_x {
            self.rect.set_left(min_x);
        } else if self.rect.right() > max_x {
            self.rect.set_right(max_x);
        }
    }

    /// Semi-implicit Euler step: velocity first, then position.
    /// `dt` is in milliseconds, so the result depends on frame rate.
    pub fn apply_gravity(&mut self, dt: f32) {
        self.vertical_velocity += GRAVITY * dt;
        self.rect.translate(0.0, self.vertical_velocity);
    }

    /// Jump if the controller allows it. Actors without one never jump.
    pub fn jump(&mut self) -> bool {
        let Some(controller) = self.jump.as_mut() else {
            return false;
        };
        let jumped = controller.request_jump(&mut self.vertical_velocity);
        if jumped {
            self.grounded = false;
        }
        jumped
    }

    /// Ground contact after being airborne
    pub fn land(&mut self) {
        match self.jump.as_mut() {
            Some(controller) => controller.notify_landed(&mut self.vertical_velocity),
            None => self.vertical_velocity = 0.0,
        }
        self.grounded = true;
    }

    pub fn change_jump_profile(&mut self) {
        if let Some(controller) = self.jump.as_mut() {
            controller.cycle_profile();
        }
    }

    pub fn active_jump_name(&self) -> Option<&str> {
        self.jump
            .as_ref()
            .and_then(|c| c.active_profile())
            .map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Actor {
        Actor::with_jumps(Rect::new(16.0, 216.0, 68.0, 84.0), JumpProfile::defaults())
    }

    #[test]
    fn test_gravity_integrates_velocity_then_position() {
        let mut actor = Actor::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        actor.apply_gravity(10.0);

        assert!((actor.vertical_velocity - 1.1).abs() < 1e-6);
        assert!((actor.rect.y - 1.1).abs() < 1e-6);

        actor.apply_gravity(10.0);
        assert!((actor.vertical_velocity - 2.2).abs() < 1e-5);
        assert!((actor.rect.y - 3.3).abs() < 1e-5);
    }

    #[test]
    fn test_jump_clears_grounded() {
        let mut actor = player();
        actor.land();
        assert!(actor.is_grounded());

        assert!(actor.jump());
        assert_eq!(actor.vertical_velocity, -25.0);
        assert!(!actor.is_grounded());
    }

    #[test]
    fn test_actor_without_controller_never_jumps() {
        let mut snail = Actor::new(Rect::new(764.0, 264.0, 72.0, 36.0));
        assert!(!snail.jump());
        assert_eq!(snail.vertical_velocity, 0.0);
        assert!(snail.active_jump_name().is_none());
        snail.change_jump_profile();
    }

    #[test]
    fn test_land_resets_controller() {
        let mut actor = player();
        assert!(actor.jump());
        actor.apply_gravity(16.0);

        actor.land();
        assert_eq!(actor.vertical_velocity, 0.0);
        assert_eq!(actor.jump_controller().map(|c| c.jumps_used()), Some(0));
    }

    #[test]
    fn test_change_jump_profile_cycles_names() {
        let mut actor = player();
        assert_eq!(actor.active_jump_name(), Some("Jump"));
        actor.change_jump_profile();
        assert_eq!(actor.active_jump_name(), Some("Double Jump"));
        actor.change_jump_profile();
        actor.change_jump_profile();
        assert_eq!(actor.active_jump_name(), Some("Rocket"));
        actor.change_jump_profile();
        assert_eq!(actor.active_jump_name(), Some("Jump"));
    }

    #[test]
    fn test_clamp_horizontal() {
        let mut actor = player();
        actor.move_horizontal(-100.0);
        actor.clamp_horizontal(0.0, 800.0);
        assert_eq!(actor.rect.left(), 0.0);

        actor.move_horizontal(2000.0);
        actor.clamp_horizontal(0.0, 800.0);
        assert_eq!(actor.rect.right(), 800.0);
    }

    proptest! {
        #[test]
        fn prop_gravity_velocity_is_linear_in_dt(dt1 in 1u32..100, dt2 in 1u32..100) {
            let mut split = Actor::new(Rect::default());
            split.apply_gravity(dt1 as f32);
            let after_first = split.vertical_velocity;
            split.apply_gravity(dt2 as f32);

            let mut joined = Actor::new(Rect::default());
            joined.apply_gravity((dt1 + dt2) as f32);

            prop_assert!(split.vertical_velocity > after_first);
            prop_assert!((split.vertical_velocity - joined.vertical_velocity).abs() < 1e-3);
        }
    }
}

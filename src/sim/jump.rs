//! Jump profiles and the per-actor jump controller
//!
//! Jump behaviours differ only by their constants, so each one is a plain
//! [`JumpProfile`] value and the controller picks the active one by index.
//! Vertical velocity is in pixels per frame; negative is upward.

use serde::{Deserialize, Serialize};

/// Tunable constants describing one jump "feel"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpProfile {
    /// Display name shown in the HUD
    pub name: String,
    /// Jumps allowed per airborne period (>= 1)
    pub max_jumps: u32,
    /// Magnitude of the upward velocity impulse
    pub jump_height: f32,
    /// Minimum vertical velocity for a second-or-later jump.
    /// Negative values allow chaining while still rising.
    pub multi_jump_tempo: f32,
}

impl JumpProfile {
    pub fn new(
        name: impl Into<String>,
        max_jumps: u32,
        jump_height: f32,
        multi_jump_tempo: f32,
    ) -> Self {
        Self {
            name: name.into(),
            max_jumps,
            jump_height,
            multi_jump_tempo,
        }
    }

    /// Single jump, must be on the ground
    pub fn basic() -> Self {
        Self::new("Jump", 1, 25.0, 0.0)
    }

    /// Second jump allowed once the first one has peaked and is falling
    pub fn double() -> Self {
        Self::new("Double Jump", 2, 22.0, 7.0)
    }

    /// Rapid short bursts while the key is held
    pub fn jetpack() -> Self {
        Self::new("Jetpack", 25, 10.0, -8.0)
    }

    /// One big launch
    pub fn rocket() -> Self {
        Self::new("Rocket", 1, 40.0, 0.0)
    }

    /// Profiles the player starts with, in cycling order
    pub fn defaults() -> Vec<Self> {
        vec![Self::basic(), Self::double(), Self::jetpack(), Self::rocket()]
    }
}

/// Tracks which profile is active and how many jumps were spent since landing
#[derive(Debug, Clone, Default)]
pub struct JumpController {
    profiles: Vec<JumpProfile>,
    active_index: usize,
    jumps_used: u32,
}

impl JumpController {
    /// An empty profile list is allowed; such a controller never jumps.
    pub fn new(profiles: Vec<JumpProfile>) -> Self {
        Self {
            profiles,
            active_index: 0,
            jumps_used: 0,
        }
    }

    pub fn active_profile(&self) -> Option<&JumpProfile> {
        self.profiles.get(self.active_index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn jumps_used(&self) -> u32 {
        self.jumps_used
    }

    pub fn profiles(&self) -> &[JumpProfile] {
        &self.profiles
    }

    /// Select the next profile, wrapping around. Jumps already spent stay spent.
    pub fn cycle_profile(&mut self) {
        if self.profiles.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.profiles.len();
    }

    /// Whether a jump is allowed at the given vertical velocity
    pub fn can_jump(&self, vertical_velocity: f32) -> bool {
        let Some(profile) = self.active_profile() else {
            return false;
        };
        if self.jumps_used >= profile.max_jumps {
            return false;
        }

        let velocity_floor = if self.jumps_used == 0 {
            0.0
        } else {
            profile.multi_jump_tempo
        };
        vertical_velocity >= velocity_floor
    }

    /// Perform a jump if allowed. Returns whether the jump happened.
    pub fn request_jump(&mut self, vertical_velocity: &mut f32) -> bool {
        if !self.can_jump(*vertical_velocity) {
            return false;
        }
        let Some(profile) = self.active_profile() else {
            return false;
        };

        *vertical_velocity = -profile.jump_height;
        self.jumps_used += 1;
        true
    }

    /// Reset on ground contact
    pub fn notify_landed(&mut self, vertical_velocity: &mut f32) {
        self.jumps_used = 0;
        *vertical_velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller_with(profile: JumpProfile, jumps_used: u32) -> JumpController {
        let mut controller = JumpController::new(vec![profile]);
        controller.jumps_used = jumps_used;
        controller
    }

    #[test]
    fn test_grounded_basic_jump() {
        let mut controller = JumpController::new(vec![JumpProfile::basic()]);
        let mut velocity = 0.0;

        assert!(controller.request_jump(&mut velocity));
        assert_eq!(velocity, -25.0);
        assert_eq!(controller.jumps_used(), 1);
    }

    #[test]
    fn test_basic_jump_refused_while_airborne() {
        let mut controller = controller_with(JumpProfile::basic(), 1);
        let mut velocity = 3.0;

        assert!(!controller.request_jump(&mut velocity));
        assert_eq!(velocity, 3.0);
        assert_eq!(controller.jumps_used(), 1);
    }

    #[test]
    fn test_first_jump_refused_while_rising() {
        let mut controller = JumpController::new(vec![JumpProfile::jetpack()]);
        let mut velocity = -0.5;

        assert!(!controller.request_jump(&mut velocity));
        assert_eq!(controller.jumps_used(), 0);
    }

    #[test]
    fn test_double_jump_waits_for_tempo() {
        let mut controller = JumpController::new(vec![JumpProfile::double()]);
        let mut velocity = 0.0;
        assert!(controller.request_jump(&mut velocity));

        // Still rising, below the 7.0 tempo
        velocity = 2.0;
        assert!(!controller.request_jump(&mut velocity));

        velocity = 7.0;
        assert!(controller.request_jump(&mut velocity));
        assert_eq!(velocity, -22.0);
        assert_eq!(controller.jumps_used(), 2);

        velocity = 20.0;
        assert!(!controller.request_jump(&mut velocity));
    }

    #[test]
    fn test_jetpack_chains_while_rising() {
        let mut controller = JumpController::new(vec![JumpProfile::jetpack()]);
        let mut velocity = 0.0;
        assert!(controller.request_jump(&mut velocity));

        velocity = -8.0;
        assert!(controller.request_jump(&mut velocity));
        assert_eq!(velocity, -10.0);
        assert_eq!(controller.jumps_used(), 2);
    }

    #[test]
    fn test_empty_controller_never_jumps() {
        let mut controller = JumpController::new(Vec::new());
        let mut velocity = 0.0;

        assert!(controller.active_profile().is_none());
        assert!(!controller.request_jump(&mut velocity));
        controller.cycle_profile();
        assert_eq!(controller.active_index(), 0);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_notify_landed_resets() {
        let mut controller = controller_with(JumpProfile::jetpack(), 17);
        let mut velocity = 12.5;

        controller.notify_landed(&mut velocity);
        assert_eq!(controller.jumps_used(), 0);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_cycle_keeps_jumps_used() {
        let mut controller = JumpController::new(JumpProfile::defaults());
        let mut velocity = 0.0;
        assert!(controller.request_jump(&mut velocity));

        controller.cycle_profile();
        assert_eq!(controller.active_profile().map(|p| p.name.as_str()), Some("Double Jump"));
        assert_eq!(controller.jumps_used(), 1);
    }

    #[test]
    fn test_cycle_to_smaller_profile_refuses_until_landing() {
        let mut controller =
            JumpController::new(vec![JumpProfile::jetpack(), JumpProfile::rocket()]);
        for _ in 0..3 {
            let mut velocity = 0.0;
            assert!(controller.request_jump(&mut velocity));
        }

        controller.cycle_profile();
        assert_eq!(controller.jumps_used(), 3);
        let mut velocity = 5.0;
        assert!(!controller.request_jump(&mut velocity));
        assert_eq!(velocity, 5.0);

        controller.notify_landed(&mut velocity);
        assert!(controller.request_jump(&mut velocity));
        assert_eq!(velocity, -40.0);
    }

    proptest! {
        #[test]
        fn prop_eligible_jump_sets_exact_velocity(
            jumps_used in 0u32..30,
            extra in 1u32..10,
            jump_height in 0.5f32..80.0,
            tempo in -30.0f32..30.0,
            margin in 0.0f32..40.0,
        ) {
            let profile = JumpProfile::new("p", jumps_used + extra, jump_height, tempo);
            let mut controller = controller_with(profile, jumps_used);
            let floor = if jumps_used == 0 { 0.0 } else { tempo };
            let mut velocity = floor + margin;

            prop_assert!(controller.request_jump(&mut velocity));
            prop_assert_eq!(velocity, -jump_height);
            prop_assert_eq!(controller.jumps_used(), jumps_used + 1);
        }

        #[test]
        fn prop_exhausted_jumps_change_nothing(
            max_jumps in 1u32..30,
            velocity in -100.0f32..100.0,
        ) {
            let profile = JumpProfile::new("p", max_jumps, 25.0, -100.0);
            let mut controller = controller_with(profile, max_jumps);
            let mut after = velocity;

            prop_assert!(!controller.request_jump(&mut after));
            prop_assert_eq!(after, velocity);
            prop_assert_eq!(controller.jumps_used(), max_jumps);
        }

        #[test]
        fn prop_landing_always_resets(jumps_used in 0u32..30, velocity in -100.0f32..100.0) {
            let mut controller = controller_with(JumpProfile::jetpack(), jumps_used.min(25));
            let mut velocity = velocity;

            controller.notify_landed(&mut velocity);
            prop_assert_eq!(controller.jumps_used(), 0);
            prop_assert_eq!(velocity, 0.0);
        }

        #[test]
        fn prop_cycling_is_a_closed_rotation(len in 1usize..12, start in 0usize..12) {
            let profiles = (0..len)
                .map(|i| JumpProfile::new(format!("p{i}"), 1, 10.0, 0.0))
                .collect();
            let mut controller = JumpController::new(profiles);
            for _ in 0..(start % len) {
                controller.cycle_profile();
            }
            let origin = controller.active_index();

            for _ in 0..len {
                controller.cycle_profile();
            }
            prop_assert_eq!(controller.active_index(), origin);
        }
    }
}

//! Sup? - a side-scrolling jump-the-snail arcade game
//!
//! Core modules:
//! - `sim`: Actor physics, jump profiles, collisions
//! - `states`: Screen state machine (menu, play, pause, game over)
//! - `game`: Frame loop boundary driving the active state
//! - `platform`: Input events, key bindings, clock, event sources
//! - `renderer`: Draw-call sink the states render into
//! - `settings`: Data-driven configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod states;
pub mod ui;

pub use error::{GameError, Result};
pub use game::{Flow, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    pub const GAME_TITLE: &str = "Sup?";

    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Top edge of the ground strip (the sky covers everything above)
    pub const GROUND_TOP: f32 = 300.0;

    /// Frame limiter cap
    pub const MAX_FPS: u32 = 60;

    /// Gravity, added to vertical velocity per millisecond of frame time
    pub const GRAVITY: f32 = 0.11;

    /// Player horizontal speed (pixels per millisecond)
    pub const PLAYER_SPEED: f32 = 0.5;
    pub const PLAYER_WIDTH: f32 = 68.0;
    pub const PLAYER_HEIGHT: f32 = 84.0;
    /// Player spawn x (center of the bottom edge)
    pub const PLAYER_START_X: f32 = 50.0;

    /// Obstacle scroll step (pixels per frame, independent of dt)
    pub const OBSTACLE_STEP: f32 = 1.0;
    pub const OBSTACLE_WIDTH: f32 = 72.0;
    pub const OBSTACLE_HEIGHT: f32 = 36.0;

    /// Score for the obstacle crossing the whole screen
    pub const WRAP_BONUS: u64 = 100;
    /// Score for clicking the obstacle
    pub const CLICK_BONUS: u64 = 5;
}

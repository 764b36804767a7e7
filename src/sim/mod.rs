//! Gameplay simulation core
//!
//! Physics, jumping and collision for the play field. Pure and
//! platform-free: the only time input is the `dt` passed in by the caller.

pub mod actor;
pub mod collision;
pub mod jump;
pub mod rect;
pub mod session;

pub use actor::Actor;
pub use collision::{
    GroundContact, ScrollResult, overlaps, point_hits, resolve_ground, scroll_obstacle,
};
pub use jump::{JumpController, JumpProfile};
pub use rect::Rect;
pub use session::GameSession;

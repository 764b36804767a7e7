//! Platform abstraction layer
//!
//! Handles the collaborators the game core consumes:
//! - Input events and key bindings
//! - Time/ticks
//! - Event sources (scripted, autopilot)

pub mod clock;
pub mod input;
pub mod source;

pub use clock::{Clock, FixedClock, FrameClock};
pub use input::{Action, Event, Key, KeyBindings, KeyState};
pub use source::{Autopilot, EventSource, ScriptedEvents};

//! Input events, logical actions and key bindings

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Physical key as reported by the event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Space => write!(f, "SPACE"),
            Key::Enter => write!(f, "ENTER"),
            Key::Escape => write!(f, "ESCAPE"),
            Key::Left => write!(f, "LEFT"),
            Key::Right => write!(f, "RIGHT"),
            Key::Up => write!(f, "UP"),
            Key::Down => write!(f, "DOWN"),
        }
    }
}

/// A discrete input event, in occurrence order within a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer press at a screen-space position
    PointerDown(Vec2),
    FocusLost,
}

impl Event {
    /// Window close, or Escape released
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit | Event::KeyUp(Key::Escape))
    }
}

/// What a bound key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    ChangeJumpProfile,
    Pause,
    Menu,
    Restart,
}

/// Static mapping from physical keys to actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Key,
    pub move_right: Key,
    pub jump: Key,
    pub change_jump_profile: Key,
    pub pause: Key,
    pub menu: Key,
    pub restart: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: Key::Char('a'),
            move_right: Key::Char('d'),
            jump: Key::Char('w'),
            change_jump_profile: Key::Char('q'),
            pause: Key::Char('p'),
            menu: Key::Char('m'),
            restart: Key::Char('r'),
        }
    }
}

impl KeyBindings {
    /// Action bound to `key`. Earlier actions win if a key is bound twice.
    pub fn action(&self, key: Key) -> Option<Action> {
        self.pairs()
            .into_iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| action)
    }

    /// Key bound to `action`
    pub fn key(&self, action: Action) -> Key {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
            Action::ChangeJumpProfile => self.change_jump_profile,
            Action::Pause => self.pause,
            Action::Menu => self.menu,
            Action::Restart => self.restart,
        }
    }

    fn pairs(&self) -> [(Key, Action); 7] {
        [
            (self.move_left, Action::MoveLeft),
            (self.move_right, Action::MoveRight),
            (self.jump, Action::Jump),
            (self.change_jump_profile, Action::ChangeJumpProfile),
            (self.pause, Action::Pause),
            (self.menu, Action::Menu),
            (self.restart, Action::Restart),
        ]
    }
}

/// Held state of the continuously-tracked actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl KeyState {
    /// Mark `action` held. Returns false for actions that are not tracked.
    pub fn press(&mut self, action: Action) -> bool {
        self.set(action, true)
    }

    /// Mark `action` released. Returns false for actions that are not tracked.
    pub fn release(&mut self, action: Action) -> bool {
        self.set(action, false)
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
            _ => false,
        }
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// -1, 0 or 1 depending on which direction keys are held
    pub fn horizontal_axis(&self) -> f32 {
        (self.move_right as i32 - self.move_left as i32) as f32
    }

    fn set(&mut self, action: Action, pressed: bool) -> bool {
        let slot = match action {
            Action::MoveLeft => &mut self.move_left,
            Action::MoveRight => &mut self.move_right,
            Action::Jump => &mut self.jump,
            _ => return false,
        };
        *slot = pressed;
        true
    }
}

//! Screen state machine
//!
//! Each screen is a [`GameState`]; the [`StateManager`] owns one instance per
//! [`State`] tag, dispatches input/update/render to the active one and
//! validates every [`Transition`] it is asked to perform.

pub mod game_over;
pub mod manager;
pub mod menu;
pub mod pause;
pub mod play;

pub use game_over::GameOverState;
pub use manager::StateManager;
pub use menu::MenuState;
pub use pause::PauseState;
pub use play::PlayState;

use std::fmt;

use crate::platform::{Event, KeyBindings};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::GameSession;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Menu,
    Playing,
    Pause,
    GameOver,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Menu => "Menu",
            State::Playing => "Playing",
            State::Pause => "Pause",
            State::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// A request to change screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    NewGame,
    ResumeGame,
    PauseGame,
    GameOver,
    MainMenu,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::NewGame => "new_game",
            Transition::ResumeGame => "resume_game",
            Transition::PauseGame => "pause_game",
            Transition::GameOver => "game_over",
            Transition::MainMenu => "main_menu",
        };
        f.write_str(name)
    }
}

/// What the screens share: the session, settings and a way to ask for a
/// transition. Requests are applied by the manager once the current call
/// returns.
#[derive(Debug)]
pub struct Context {
    pub session: GameSession,
    pub settings: Settings,
    resumable: bool,
    requests: Vec<Transition>,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: GameSession::default(),
            settings,
            resumable: false,
            requests: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.settings.key_bindings
    }

    /// Whether a started session is waiting to be resumed
    pub fn can_resume(&self) -> bool {
        self.resumable
    }

    /// Queue a transition for the manager to perform
    pub fn request(&mut self, transition: Transition) {
        self.requests.push(transition);
    }

    pub(crate) fn set_resumable(&mut self, resumable: bool) {
        self.resumable = resumable;
    }

    pub(crate) fn take_requests(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.requests)
    }
}

/// One screen of the game.
///
/// `update` is game logic only; input arrives through `handle_event` and
/// drawing through `render`. Quit events never reach a state.
pub trait GameState {
    fn tag(&self) -> State;

    /// Called every time the state becomes active
    fn enter(&mut self, _ctx: &Context) {}

    fn handle_event(&mut self, event: &Event, dt: u32, ctx: &mut Context);

    fn update(&mut self, dt: u32, ctx: &mut Context);

    fn render(&self, ctx: &Context, renderer: &mut dyn Renderer);
}

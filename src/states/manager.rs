//! Owns every screen and the active-state pointer

use super::{
    Context, GameOverState, GameState, MenuState, PauseState, PlayState, State, Transition,
};
use crate::error::{GameError, Result};
use crate::platform::Event;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::GameSession;

/// Finite state machine over the game screens.
///
/// The play screen only exists while a session is live: it is created by
/// `new_game` and dropped when the run ends in `game_over`.
#[derive(Debug)]
pub struct StateManager {
    ctx: Context,
    active: State,
    menu: MenuState,
    play: Option<PlayState>,
    pause: PauseState,
    game_over: GameOverState,
}

impl StateManager {
    /// Start on the main menu
    pub fn new(settings: Settings) -> Self {
        let mut manager = Self {
            ctx: Context::new(settings),
            active: State::Menu,
            menu: MenuState::new(),
            play: None,
            pause: PauseState,
            game_over: GameOverState,
        };
        manager.menu.enter(&manager.ctx);
        manager
    }

    pub fn active(&self) -> State {
        self.active
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn session(&self) -> &GameSession {
        &self.ctx.session
    }

    pub fn has_session(&self) -> bool {
        self.play.is_some()
    }

    pub fn play(&self) -> Option<&PlayState> {
        self.play.as_ref()
    }

    pub fn play_mut(&mut self) -> Option<&mut PlayState> {
        self.play.as_mut()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn active_state(&self) -> Option<&dyn GameState> {
        match self.active {
            State::Menu => Some(&self.menu as &dyn GameState),
            State::Playing => self.play.as_ref().map(|p| p as &dyn GameState),
            State::Pause => Some(&self.pause as &dyn GameState),
            State::GameOver => Some(&self.game_over as &dyn GameState),
        }
    }

    /// Start a fresh session: score reset, new bodies
    pub fn new_game(&mut self) -> Result<()> {
        self.guard(
            Transition::NewGame,
            matches!(self.active, State::Menu | State::GameOver),
        )?;
        self.ctx.session = GameSession::default();
        self.play = Some(PlayState::new(&self.ctx.settings));
        log::info!("New game started");
        self.set_state(State::Playing);
        Ok(())
    }

    /// Back to the live session, from the pause screen or the menu
    pub fn resume_game(&mut self) -> Result<()> {
        let allowed = match self.active {
            State::Pause => true,
            State::Menu => self.play.is_some(),
            _ => false,
        };
        self.guard(Transition::ResumeGame, allowed)?;
        self.set_state(State::Playing);
        Ok(())
    }

    pub fn pause_game(&mut self) -> Result<()> {
        self.guard(Transition::PauseGame, self.active == State::Playing)?;
        self.set_state(State::Pause);
        Ok(())
    }

    /// End the run. The score stays readable until the next `new_game`.
    pub fn game_over(&mut self) -> Result<()> {
        self.guard(Transition::GameOver, self.active == State::Playing)?;
        self.play = None;
        self.set_state(State::GameOver);
        Ok(())
    }

    pub fn main_menu(&mut self) -> Result<()> {
        self.guard(Transition::MainMenu, self.active != State::Menu)?;
        self.set_state(State::Menu);
        Ok(())
    }

    /// Perform a transition by tag
    pub fn apply(&mut self, transition: Transition) -> Result<()> {
        match transition {
            Transition::NewGame => self.new_game(),
            Transition::ResumeGame => self.resume_game(),
            Transition::PauseGame => self.pause_game(),
            Transition::GameOver => self.game_over(),
            Transition::MainMenu => self.main_menu(),
        }
    }

    /// Route one (non-quit) event to the active state
    pub fn handle_event(&mut self, event: &Event, dt: u32) -> Result<()> {
        log::debug!("{} <- {:?}", self.active, event);
        let (state, ctx) = self.split_active();
        if let Some(state) = state {
            state.handle_event(event, dt, ctx);
        }
        self.apply_requests()
    }

    pub fn update(&mut self, dt: u32) -> Result<()> {
        let (state, ctx) = self.split_active();
        if let Some(state) = state {
            state.update(dt, ctx);
        }
        self.apply_requests()
    }

    /// Draw the active screen. Pause is drawn over the frozen play field.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if let (State::Pause, Some(play)) = (self.active, &self.play) {
            play.render(&self.ctx, renderer);
        }
        if let Some(state) = self.active_state() {
            state.render(&self.ctx, renderer);
        }
    }

    fn split_active(&mut self) -> (Option<&mut dyn GameState>, &mut Context) {
        let state = match self.active {
            State::Menu => Some(&mut self.menu as &mut dyn GameState),
            State::Playing => self.play.as_mut().map(|p| p as &mut dyn GameState),
            State::Pause => Some(&mut self.pause as &mut dyn GameState),
            State::GameOver => Some(&mut self.game_over as &mut dyn GameState),
        };
        (state, &mut self.ctx)
    }

    fn apply_requests(&mut self) -> Result<()> {
        for transition in self.ctx.take_requests() {
            self.apply(transition)?;
        }
        Ok(())
    }

    fn guard(&self, transition: Transition, allowed: bool) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                from: self.active,
                transition,
            })
        }
    }

    fn set_state(&mut self, next: State) {
        log::info!("State {} -> {}", self.active, next);
        self.active = next;
        self.ctx.session.keys.release_all();
        self.ctx.set_resumable(self.play.is_some());

        let (state, ctx) = self.split_active();
        if let Some(state) = state {
            state.enter(ctx);
        }
    }
}

//! Main menu: start a new game or continue the current one

use glam::Vec2;

use super::{Context, GameState, State, Transition};
use crate::consts::{GAME_TITLE, SCREEN_WIDTH};
use crate::platform::{Action, Event};
use crate::renderer::{AZURE, BISQUE, Renderer, Sprite};
use crate::sim::Rect;
use crate::ui::Button;

const BUTTON_WIDTH: f32 = 160.0;
const BUTTON_HEIGHT: f32 = 30.0;

#[derive(Debug, Clone)]
pub struct MenuState {
    buttons: Vec<Button>,
    focus: usize,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    pub fn new() -> Self {
        let button_rect = |center_y: f32| {
            Rect::new(
                SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
                center_y - BUTTON_HEIGHT / 2.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
        };

        let mut buttons = vec![
            Button::new("New Game", button_rect(170.0), AZURE, Transition::NewGame),
            Button::new("Continue", button_rect(230.0), BISQUE, Transition::ResumeGame),
        ];
        buttons[0].focused = true;
        buttons[1].active = false;

        Self { buttons, focus: 0 }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn focused(&self) -> usize {
        self.focus
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.buttons.len();
        self.buttons[self.focus].focused = false;
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
        self.buttons[self.focus].focused = true;
    }

    fn press(&self, index: usize, ctx: &mut Context) {
        if let Some(transition) = self.buttons.get(index).and_then(Button::press) {
            ctx.request(transition);
        }
    }
}

impl GameState for MenuState {
    fn tag(&self) -> State {
        State::Menu
    }

    fn enter(&mut self, ctx: &Context) {
        for button in &mut self.buttons {
            if button.transition == Transition::ResumeGame {
                button.active = ctx.can_resume();
            }
        }
    }

    fn handle_event(&mut self, event: &Event, _dt: u32, ctx: &mut Context) {
        match *event {
            Event::PointerDown(pos) => {
                if let Some(index) = self.buttons.iter().position(|b| b.hit(pos)) {
                    self.press(index, ctx);
                }
            }
            Event::KeyDown(key) => match ctx.bindings().action(key) {
                Some(Action::MoveLeft) => self.move_focus(false),
                Some(Action::MoveRight) => self.move_focus(true),
                Some(Action::Jump) => self.press(self.focus, ctx),
                Some(Action::Restart) => ctx.request(Transition::NewGame),
                Some(Action::Pause) if ctx.can_resume() => ctx.request(Transition::ResumeGame),
                _ => {}
            },
            _ => {}
        }
    }

    fn update(&mut self, _dt: u32, _ctx: &mut Context) {}

    fn render(&self, _ctx: &Context, renderer: &mut dyn Renderer) {
        renderer.blit(Sprite::Sky, Vec2::ZERO);
        renderer.text(GAME_TITLE, Vec2::new(SCREEN_WIDTH / 2.0, 80.0));
        for button in &self.buttons {
            button.render(renderer);
        }
    }
}

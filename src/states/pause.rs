//! Pause screen, drawn over the frozen play field

use glam::Vec2;

use super::{Context, GameState, State, Transition};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Action, Event};
use crate::renderer::{AZURE, Renderer};
use crate::sim::Rect;

#[derive(Debug, Clone, Default)]
pub struct PauseState;

impl GameState for PauseState {
    fn tag(&self) -> State {
        State::Pause
    }

    fn handle_event(&mut self, event: &Event, _dt: u32, ctx: &mut Context) {
        let Event::KeyDown(key) = *event else {
            return;
        };
        match ctx.bindings().action(key) {
            Some(Action::Pause) => ctx.request(Transition::ResumeGame),
            Some(Action::Menu) => ctx.request(Transition::MainMenu),
            _ => {}
        }
    }

    fn update(&mut self, _dt: u32, _ctx: &mut Context) {}

    fn render(&self, ctx: &Context, renderer: &mut dyn Renderer) {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        renderer.fill(Rect::new(center.x - 220.0, center.y - 50.0, 440.0, 100.0), AZURE);
        renderer.text("Paused", center - Vec2::new(0.0, 20.0));

        let bindings = ctx.bindings();
        let hint = format!(
            "[{}] resume   [{}] main menu",
            bindings.pause, bindings.menu
        );
        renderer.text(&hint, center + Vec2::new(0.0, 20.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use crate::settings::Settings;

    #[test]
    fn test_pause_key_resumes_menu_key_leaves() {
        let mut pause = PauseState;
        let mut ctx = Context::new(Settings::default());

        pause.handle_event(&Event::KeyDown(Key::Char('p')), 16, &mut ctx);
        pause.handle_event(&Event::KeyUp(Key::Char('m')), 16, &mut ctx);
        pause.handle_event(&Event::FocusLost, 16, &mut ctx);
        pause.handle_event(&Event::KeyDown(Key::Char('m')), 16, &mut ctx);

        assert_eq!(
            ctx.take_requests(),
            vec![Transition::ResumeGame, Transition::MainMenu]
        );
    }
}

//! Game over screen with the final score

use glam::Vec2;

use super::{Context, GameState, State, Transition};
use crate::consts::SCREEN_WIDTH;
use crate::platform::{Action, Event};
use crate::renderer::{Renderer, Sprite};

#[derive(Debug, Clone, Default)]
pub struct GameOverState;

impl GameState for GameOverState {
    fn tag(&self) -> State {
        State::GameOver
    }

    fn handle_event(&mut self, event: &Event, _dt: u32, ctx: &mut Context) {
        let Event::KeyDown(key) = *event else {
            return;
        };
        match ctx.bindings().action(key) {
            Some(Action::Restart) => ctx.request(Transition::NewGame),
            Some(Action::Menu) => ctx.request(Transition::MainMenu),
            _ => {}
        }
    }

    fn update(&mut self, _dt: u32, _ctx: &mut Context) {}

    fn render(&self, ctx: &Context, renderer: &mut dyn Renderer) {
        let x = SCREEN_WIDTH / 2.0;
        renderer.blit(Sprite::Sky, Vec2::ZERO);
        renderer.text("Game Over", Vec2::new(x, 100.0));
        renderer.text(&format!("Score: {}", ctx.session.score), Vec2::new(x, 160.0));

        let bindings = ctx.bindings();
        let hint = format!("[{}] play again   [{}] main menu", bindings.restart, bindings.menu);
        renderer.text(&hint, Vec2::new(x, 240.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use crate::renderer::DrawList;
    use crate::settings::Settings;

    #[test]
    fn test_restart_and_menu_keys() {
        let mut over = GameOverState;
        let mut ctx = Context::new(Settings::default());

        over.handle_event(&Event::KeyDown(Key::Char('w')), 16, &mut ctx);
        over.handle_event(&Event::KeyDown(Key::Char('r')), 16, &mut ctx);
        over.handle_event(&Event::KeyDown(Key::Char('m')), 16, &mut ctx);

        assert_eq!(
            ctx.take_requests(),
            vec![Transition::NewGame, Transition::MainMenu]
        );
    }

    #[test]
    fn test_shows_final_score() {
        let mut ctx = Context::new(Settings::default());
        ctx.session.score = 205;
        let mut list = DrawList::new();

        GameOverState.render(&ctx, &mut list);
        list.present();
        assert!(list.texts().any(|t| t == "Score: 205"));
    }
}

//! The playing screen: player, snail, score

use glam::Vec2;

use super::{Context, GameState, State, Transition};
use crate::consts::*;
use crate::platform::{Action, Event, Key};
use crate::renderer::{AZURE, BISQUE, Color, Renderer, Sprite};
use crate::settings::Settings;
use crate::sim::{
    Actor, GroundContact, Rect, ScrollResult, overlaps, point_hits, resolve_ground,
    scroll_obstacle,
};

/// Rough glyph width used to size HUD panels around text
const HUD_GLYPH_WIDTH: f32 = 11.0;
const HUD_PANEL_HEIGHT: f32 = 32.0;

/// Active play session: the bodies on the field
#[derive(Debug, Clone)]
pub struct PlayState {
    pub player: Actor,
    pub snail: Actor,
    player_speed: f32,
    obstacle_step: f32,
}

impl PlayState {
    /// Fresh field: player on the left, snail entering from the right
    pub fn new(settings: &Settings) -> Self {
        let player = Actor::with_jumps(
            Rect::from_midbottom(
                Vec2::new(PLAYER_START_X, GROUND_TOP),
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            settings.jump_profiles.clone(),
        );
        let snail = Actor::new(Rect::from_midbottom(
            Vec2::new(SCREEN_WIDTH, GROUND_TOP),
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        ));

        Self {
            player,
            snail,
            player_speed: settings.player_speed,
            obstacle_step: settings.obstacle_step,
        }
    }

    fn handle_key_down(&mut self, key: Key, ctx: &mut Context) {
        let Some(action) = ctx.bindings().action(key) else {
            return;
        };
        if ctx.session.keys.press(action) {
            return;
        }
        match action {
            Action::Pause => ctx.request(Transition::PauseGame),
            Action::Menu => ctx.request(Transition::MainMenu),
            _ => {}
        }
    }

    fn handle_key_up(&mut self, key: Key, ctx: &mut Context) {
        let Some(action) = ctx.bindings().action(key) else {
            return;
        };
        if ctx.session.keys.release(action) {
            return;
        }
        if action == Action::ChangeJumpProfile {
            self.player.change_jump_profile();
            log::debug!(
                "Jump type: {}",
                self.player.active_jump_name().unwrap_or("none")
            );
        }
    }

    fn handle_movement(&mut self, dt: f32, ctx: &Context) {
        let keys = ctx.session.keys;
        let dx = keys.horizontal_axis() * dt * self.player_speed;
        if keys.jump {
            self.player.jump();
        }

        self.player.move_horizontal(dx);
        self.player.clamp_horizontal(0.0, SCREEN_WIDTH);

        self.player.apply_gravity(dt);
        self.snail.apply_gravity(dt);
    }

    /// Returns false when the run is over
    fn check_collisions(&mut self, ctx: &mut Context) -> bool {
        if overlaps(&self.player, &self.snail) {
            log::info!("Player hit the snail, final score {}", ctx.session.score);
            ctx.request(Transition::GameOver);
            return false;
        }

        if resolve_ground(&mut self.player, GROUND_TOP) == GroundContact::Landed {
            log::trace!("Player landed");
        }
        resolve_ground(&mut self.snail, GROUND_TOP);
        true
    }

    fn scroll_snail(&mut self, ctx: &mut Context) {
        let step = scroll_obstacle(&mut self.snail.rect, self.obstacle_step, SCREEN_WIDTH);
        if step == ScrollResult::Wrapped {
            ctx.session.add_score(WRAP_BONUS);
            log::debug!("Snail crossed the screen, score {}", ctx.session.score);
        }
    }

    fn render_hud(&self, ctx: &Context, renderer: &mut dyn Renderer) {
        let score = format!("Score: {}", ctx.session.score);
        hud_text(renderer, &score, Vec2::new(90.0, SCREEN_HEIGHT - 28.0), BISQUE);

        let jump_info = format!(
            "Press [{}] to change jump type. Using: {}",
            ctx.bindings().change_jump_profile,
            self.player.active_jump_name().unwrap_or("none")
        );
        hud_text(renderer, &jump_info, Vec2::new(SCREEN_WIDTH / 2.0, 30.0), AZURE);
    }
}

/// Text on a colored backing panel
fn hud_text(renderer: &mut dyn Renderer, text: &str, center: Vec2, color: Color) {
    let width = text.chars().count() as f32 * HUD_GLYPH_WIDTH + 10.0;
    let panel = Rect::new(
        center.x - width / 2.0,
        center.y - HUD_PANEL_HEIGHT / 2.0,
        width,
        HUD_PANEL_HEIGHT,
    );
    renderer.fill(panel, color);
    renderer.text(text, center);
}

impl GameState for PlayState {
    fn tag(&self) -> State {
        State::Playing
    }

    fn handle_event(&mut self, event: &Event, _dt: u32, ctx: &mut Context) {
        match *event {
            Event::KeyDown(key) => self.handle_key_down(key, ctx),
            Event::KeyUp(key) => self.handle_key_up(key, ctx),
            Event::FocusLost => ctx.request(Transition::PauseGame),
            Event::PointerDown(pos) => {
                if point_hits(&self.snail, pos) {
                    ctx.session.add_score(CLICK_BONUS);
                }
            }
            Event::Quit => {}
        }
    }

    fn update(&mut self, dt: u32, ctx: &mut Context) {
        self.handle_movement(dt as f32, ctx);
        if !self.check_collisions(ctx) {
            return;
        }
        self.scroll_snail(ctx);
    }

    fn render(&self, ctx: &Context, renderer: &mut dyn Renderer) {
        renderer.blit(Sprite::Sky, Vec2::ZERO);
        renderer.blit(Sprite::Ground, Vec2::new(0.0, GROUND_TOP));

        let player_sprite = if self.player.is_grounded() {
            Sprite::PlayerStand
        } else {
            Sprite::PlayerJump
        };
        renderer.blit(player_sprite, self.player.rect.top_left());
        renderer.blit(Sprite::Snail, self.snail.rect.top_left());

        self.render_hud(ctx, renderer);
    }
}

//! Event sources feeding the frame loop

use std::collections::VecDeque;

use super::input::{Action, Event, KeyBindings, KeyState};
use crate::states::{State, StateManager};

/// Non-blocking per-frame input poll
pub trait EventSource {
    /// Events that occurred since the last poll, in order. Empty if none.
    fn poll(&mut self, game: &StateManager) -> Vec<Event>;
}

/// Replays prepared per-frame batches, then sends Quit once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<Event>>,
}

impl ScriptedEvents {
    pub fn new(frames: impl IntoIterator<Item = Vec<Event>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` frames with no input
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(Vec::new(), count));
        self
    }

    pub fn then(mut self, events: Vec<Event>) -> Self {
        self.frames.push_back(events);
        self
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _game: &StateManager) -> Vec<Event> {
        self.frames.pop_front().unwrap_or_else(|| vec![Event::Quit])
    }
}

/// Distance to the snail at which the autopilot jumps
const JUMP_DISTANCE: f32 = 40.0;
/// Gap the snail must have before the autopilot walks back home
const SAFE_DISTANCE: f32 = 200.0;
/// Left edge the autopilot drifts back to between jumps
const HOME_X: f32 = 100.0;

/// Demo player: starts games, jumps the snail, restarts after a loss.
///
/// Emits key presses through the normal event stream, so it exercises the
/// same paths a human would.
#[derive(Debug, Clone)]
pub struct Autopilot {
    bindings: KeyBindings,
    held: KeyState,
    frame: u64,
    max_frames: Option<u64>,
}

impl Autopilot {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: KeyState::default(),
            frame: 0,
            max_frames: None,
        }
    }

    /// Quit after `frames` polls
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    fn tap(&self, action: Action) -> Vec<Event> {
        let key = self.bindings.key(action);
        vec![Event::KeyDown(key), Event::KeyUp(key)]
    }

    /// Keys the autopilot wants held this frame
    fn desired(game: &StateManager) -> KeyState {
        let mut want = KeyState::default();
        let Some(play) = game.play() else {
            return want;
        };
        let player = &play.player.rect;
        let snail = &play.snail.rect;
        let ahead = snail.left() - player.right();
        let grounded = play.player.is_grounded();

        want.jump = grounded && (0.0..JUMP_DISTANCE).contains(&ahead);
        // Carry the jump over the snail
        want.move_right = !grounded && snail.right() > player.left();
        want.move_left = grounded && ahead > SAFE_DISTANCE && player.left() > HOME_X;
        want
    }

    /// Key transitions needed to go from the held set to `want`
    fn diff(&mut self, want: KeyState) -> Vec<Event> {
        let mut events = Vec::new();
        for action in [Action::MoveLeft, Action::MoveRight, Action::Jump] {
            let key = self.bindings.key(action);
            match (self.held.is_pressed(action), want.is_pressed(action)) {
                (false, true) => events.push(Event::KeyDown(key)),
                (true, false) => events.push(Event::KeyUp(key)),
                _ => {}
            }
        }
        self.held = want;
        events
    }
}

impl EventSource for Autopilot {
    fn poll(&mut self, game: &StateManager) -> Vec<Event> {
        self.frame += 1;
        if self.max_frames.is_some_and(|max| self.frame > max) {
            return vec![Event::Quit];
        }

        match game.active() {
            State::Playing => {
                let want = Self::desired(game);
                self.diff(want)
            }
            State::Menu | State::GameOver => {
                self.held.release_all();
                self.tap(Action::Restart)
            }
            State::Pause => {
                self.held.release_all();
                self.tap(Action::Pause)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use crate::settings::Settings;

    #[test]
    fn test_scripted_events_then_quit() {
        let game = StateManager::new(Settings::default());
        let mut source = ScriptedEvents::default()
            .then(vec![Event::KeyDown(Key::Char('r'))])
            .idle(1);

        assert_eq!(source.poll(&game), vec![Event::KeyDown(Key::Char('r'))]);
        assert!(source.poll(&game).is_empty());
        assert_eq!(source.poll(&game), vec![Event::Quit]);
    }

    #[test]
    fn test_autopilot_starts_game_from_menu() {
        let game = StateManager::new(Settings::default());
        let mut pilot = Autopilot::new(KeyBindings::default());
        assert_eq!(
            pilot.poll(&game),
            vec![Event::KeyDown(Key::Char('r')), Event::KeyUp(Key::Char('r'))]
        );
    }

    #[test]
    fn test_autopilot_jumps_when_snail_close() {
        let mut game = StateManager::new(Settings::default());
        game.new_game().unwrap();
        game.update(16).unwrap();
        let play = game.play_mut().unwrap();
        let left = play.player.rect.right() + 20.0;
        play.snail.rect.set_left(left);

        let mut pilot = Autopilot::new(KeyBindings::default());
        assert_eq!(pilot.poll(&game), vec![Event::KeyDown(Key::Char('w'))]);
    }

    #[test]
    fn test_autopilot_frame_limit() {
        let game = StateManager::new(Settings::default());
        let mut pilot = Autopilot::new(KeyBindings::default()).with_frame_limit(1);
        assert!(!pilot.poll(&game).is_empty());
        assert_eq!(pilot.poll(&game), vec![Event::Quit]);
    }
}

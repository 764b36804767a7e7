//! Per-run session data shared between screens

use crate::platform::KeyState;

/// Score and held keys for one play session.
///
/// Survives pausing; replaced wholesale when a new game starts.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub score: u64,
    pub keys: KeyState,
}

impl GameSession {
    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

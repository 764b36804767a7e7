//! Frame loop
//!
//! Each frame: wait for the clock, drain input, update the active screen,
//! render it. Quit (or releasing Escape) is handled here, before any screen
//! sees the event.

use crate::error::Result;
use crate::platform::{Clock, Event, EventSource};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::states::StateManager;

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    manager: StateManager,
    frames: u64,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self {
            manager: StateManager::new(settings),
            frames: 0,
        }
    }

    pub fn manager(&self) -> &StateManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut StateManager {
        &mut self.manager
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame with the given delta time and input batch
    pub fn frame(
        &mut self,
        dt: u32,
        events: &[Event],
        renderer: &mut dyn Renderer,
    ) -> Result<Flow> {
        for event in events {
            if event.is_quit() {
                log::info!("Quit requested after {} frames", self.frames);
                return Ok(Flow::Quit);
            }
            self.manager.handle_event(event, dt)?;
        }

        self.manager.update(dt)?;
        self.manager.render(renderer);
        renderer.present();
        self.frames += 1;
        Ok(Flow::Continue)
    }

    /// Drive frames until the source sends Quit. Returns the frame count.
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        source: &mut dyn EventSource,
        renderer: &mut dyn Renderer,
    ) -> Result<u64> {
        loop {
            let dt = clock.tick();
            let events = source.poll(&self.manager);
            if self.frame(dt, &events, renderer)? == Flow::Quit {
                return Ok(self.frames);
            }
        }
    }
}

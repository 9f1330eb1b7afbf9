use std::sync::{Arc, Mutex};

use engine::{Direction, GameState, GridSize};

/// Everything the UI can ask of the game loop. Consumed by the runner task
/// between ticks; direction requests only ever touch the pending direction.
#[derive(Clone, Copy, Debug)]
pub enum ClientCommand {
    Start { grid: GridSize },
    TogglePause,
    Turn(Direction),
    Quit,
}

#[derive(Clone, Debug)]
pub enum AppState {
    Idle,
    InGame {
        snapshot: GameState,
    },
    GameOver {
        snapshot: GameState,
        final_score: u32,
    },
}

/// Shared between the runner task (writer) and the egui thread (reader).
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    status: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Idle)),
            status: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    pub fn set_status(&self, status: String) {
        *self.status.lock().unwrap() = Some(status);
    }

    pub fn clear_status(&self) {
        *self.status.lock().unwrap() = None;
    }

    pub fn get_status(&self) -> Option<String> {
        self.status.lock().unwrap().clone()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

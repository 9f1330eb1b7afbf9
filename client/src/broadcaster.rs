use engine::{GameBroadcaster, GameState};

use crate::state::{AppState, SharedState};

/// Routes runner snapshots into the state the egui thread renders from.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, state: GameState) {
        self.shared_state.set_state(AppState::InGame { snapshot: state });
    }

    async fn broadcast_game_over(&self, final_score: u32, state: GameState) {
        self.shared_state.set_state(AppState::GameOver {
            snapshot: state,
            final_score,
        });
    }

    async fn broadcast_error(&self, message: String) {
        self.shared_state.set_status(message);
    }
}

#[cfg(test)]
mod tests {
    use engine::{GamePhase, GameRules, GridSize, SessionRng};

    use super::*;

    fn snapshot() -> GameState {
        let mut rng = SessionRng::new(1);
        GameState::new(GridSize::new(10, 10), GameRules::default(), &mut rng).unwrap()
    }

    #[tokio::test]
    async fn test_state_broadcast_reaches_shared_state() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_state(snapshot()).await;

        match shared_state.get_state() {
            AppState::InGame { snapshot } => assert_eq!(snapshot.phase(), GamePhase::Idle),
            other => panic!("expected InGame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_game_over_broadcast_carries_final_score() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_game_over(12, snapshot()).await;

        match shared_state.get_state() {
            AppState::GameOver { final_score, .. } => assert_eq!(final_score, 12),
            other => panic!("expected GameOver, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_broadcast_sets_status() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_error("boom".to_string()).await;

        assert_eq!(shared_state.get_status(), Some("boom".to_string()));
    }
}

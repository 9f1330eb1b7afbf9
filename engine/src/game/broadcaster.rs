use std::future::Future;

use super::GameState;

/// Outbound interface from the game loop to the presentation layer. The
/// loop hands out immutable snapshots; implementations decide where they go.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameState) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        final_score: u32,
        state: GameState,
    ) -> impl Future<Output = ()> + Send;

    /// Fatal session conditions, e.g. a viewport too small to seed a board.
    fn broadcast_error(&self, message: String) -> impl Future<Output = ()> + Send;
}

use engine::{GameBroadcaster, GamePhase, GameRules, GameState, SessionRng, TickOutcome, log};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::state::ClientCommand;

/// The game loop. Owns the only mutable `GameState` and the single tick
/// deadline; commands arrive on the channel and are applied between ticks,
/// so exactly one tick is ever in flight. Pausing disarms the deadline,
/// restarting replaces it, which keeps at most one pending timer at a time.
pub async fn run(
    rules: GameRules,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    broadcaster: impl GameBroadcaster,
    mut rng: SessionRng,
) {
    let mut game: Option<GameState> = None;
    let mut next_tick = Instant::now();

    loop {
        let tick_armed = game
            .as_ref()
            .is_some_and(|state| state.phase() == GamePhase::Running);

        tokio::select! {
            _ = tokio::time::sleep_until(next_tick), if tick_armed => {
                let Some(state) = game.as_mut() else { continue };

                let outcome = state.step(&mut rng);
                broadcaster.broadcast_state(state.clone()).await;

                if outcome == TickOutcome::Collided {
                    broadcaster.broadcast_game_over(state.score(), state.clone()).await;
                } else {
                    next_tick = Instant::now() + state.tick_delay();
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else { break };

                match command {
                    ClientCommand::Start { grid } => {
                        match GameState::new(grid, rules, &mut rng) {
                            Ok(mut state) => {
                                state.start();
                                next_tick = Instant::now() + state.tick_delay();
                                broadcaster.broadcast_state(state.clone()).await;
                                game = Some(state);
                            }
                            Err(e) => {
                                log!("refusing to start: {}", e);
                                broadcaster
                                    .broadcast_error(format!("Cannot start game: {}", e))
                                    .await;
                                game = None;
                            }
                        }
                    }
                    ClientCommand::TogglePause => {
                        if let Some(state) = game.as_mut() {
                            state.toggle_pause();
                            if state.phase() == GamePhase::Running {
                                next_tick = Instant::now() + state.tick_delay();
                            }
                            broadcaster.broadcast_state(state.clone()).await;
                        }
                    }
                    ClientCommand::Turn(direction) => {
                        if let Some(state) = game.as_mut() {
                            state.set_direction(direction);
                        }
                    }
                    ClientCommand::Quit => break,
                }
            }
        }
    }
}

pub mod config;
pub mod game;
pub mod logger;
pub mod rng;

pub use game::{
    Cell, Direction, GameBroadcaster, GamePhase, GameRules, GameState, GridSize, InvalidGridError,
    Snake, TickOutcome,
};
pub use rng::SessionRng;

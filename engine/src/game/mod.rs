mod broadcaster;
mod rules;
mod snake;
mod state;
mod types;

pub use broadcaster::GameBroadcaster;
pub use rules::GameRules;
pub use snake::Snake;
pub use state::{GameState, InvalidGridError};
pub use types::{Cell, Direction, GamePhase, GridSize, TickOutcome};

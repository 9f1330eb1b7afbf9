use std::fmt;
use std::time::Duration;

use crate::log;
use crate::rng::SessionRng;

use super::rules::GameRules;
use super::snake::Snake;
use super::types::{Cell, Direction, GamePhase, GridSize, TickOutcome};

/// The grid is too small to seed a two-segment snake and still leave room
/// to move. Fatal at initialization; nothing else in the simulation fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidGridError {
    pub cols: usize,
    pub rows: usize,
}

impl fmt::Display for InvalidGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid {}x{} is too small, the board must be at least 3x3",
            self.cols, self.rows
        )
    }
}

impl std::error::Error for InvalidGridError {}

/// Complete simulation state for one game. Advanced one discrete step at a
/// time by [`GameState::step`]; cloned as an immutable snapshot for the
/// presentation layer after every change.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: GridSize,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Cell,
    score: u32,
    tick_delay_ms: u64,
    phase: GamePhase,
    rules: GameRules,
}

impl GameState {
    /// Seed state: a two-segment snake centered on the grid, heading right,
    /// with food somewhere off the snake. The phase starts at `Idle`;
    /// [`GameState::start`] switches it to `Running`.
    pub fn new(
        grid: GridSize,
        rules: GameRules,
        rng: &mut SessionRng,
    ) -> Result<Self, InvalidGridError> {
        if grid.cols < 3 || grid.rows < 3 {
            return Err(InvalidGridError {
                cols: grid.cols,
                rows: grid.rows,
            });
        }

        let snake = Snake::new(grid.center(), Direction::Right, &grid);
        let food = spawn_food(&grid, &snake, &rules, rng);

        Ok(Self {
            grid,
            snake,
            direction: Direction::Right,
            pending_direction: None,
            food,
            score: 0,
            tick_delay_ms: rules.initial_delay_ms,
            phase: GamePhase::Idle,
            rules,
        })
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// The committed direction: the one applied at the most recent tick.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Records a direction request for the next tick. The request is dropped
    /// when it would reverse the committed direction straight into the
    /// second body segment, or when the game is not running; the direction
    /// actually in effect is returned either way. Between two ticks the most
    /// recent surviving request wins.
    pub fn set_direction(&mut self, requested: Direction) -> Direction {
        if self.phase != GamePhase::Running || requested.is_opposite(&self.direction) {
            return self.direction;
        }
        self.pending_direction = Some(requested);
        requested
    }

    /// Advances the simulation by exactly one step. Total over every state
    /// this type can reach; `Collided` is an outcome, not an error.
    pub fn step(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.grid.step(self.snake.head(), self.direction);

        if self.snake.contains(&next_head) {
            // The snake is left as it was for a final render.
            self.phase = GamePhase::GameOver;
            log!(
                "snake hit itself at ({}, {}), final score {}",
                next_head.x,
                next_head.y,
                self.score
            );
            return TickOutcome::Collided;
        }

        if next_head == self.food {
            self.snake.grow(next_head);
            self.score += 1;
            self.tick_delay_ms = self
                .tick_delay_ms
                .saturating_sub(self.rules.delay_step_ms)
                .max(self.rules.min_delay_ms);
            self.food = spawn_food(&self.grid, &self.snake, &self.rules, rng);
            TickOutcome::Ate
        } else {
            self.snake.advance(next_head);
            TickOutcome::Moved
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    #[cfg(test)]
    fn set_snake_cells(&mut self, cells: &[Cell]) {
        self.snake = Snake::from_cells(cells);
    }

    #[cfg(test)]
    fn force_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.pending_direction = None;
    }
}

/// Uniform-random rejection sampling over the grid, bounded by the attempt
/// budget. At near-full occupancy the sampling can exhaust its budget, so
/// the fallback scans row-major for the first free cell; (0, 0) is only
/// returned for a completely full board.
fn spawn_food(grid: &GridSize, snake: &Snake, rules: &GameRules, rng: &mut SessionRng) -> Cell {
    for _ in 0..rules.food_spawn_attempts {
        let cell = rng.random_cell(grid);
        if !snake.contains(&cell) {
            return cell;
        }
    }

    for y in 0..grid.rows {
        for x in 0..grid.cols {
            let cell = Cell::new(x, y);
            if !snake.contains(&cell) {
                log!("food sampling exhausted, falling back to ({}, {})", x, y);
                return cell;
            }
        }
    }

    Cell::new(0, 0)
}

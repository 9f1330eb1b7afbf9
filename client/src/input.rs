use egui::{Key, Vec2};
use engine::Direction;

/// Drags shorter than this are taps, not swipes.
const MIN_SWIPE_DISTANCE: f32 = 8.0;

/// Arrow keys and WASD steer the snake.
pub fn key_direction(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp | Key::W => Some(Direction::Up),
        Key::ArrowDown | Key::S => Some(Direction::Down),
        Key::ArrowLeft | Key::A => Some(Direction::Left),
        Key::ArrowRight | Key::D => Some(Direction::Right),
        _ => None,
    }
}

/// Resolves a swipe to the axis with the larger displacement; ties go
/// horizontal. `None` for taps below the swipe threshold.
pub fn resolve_swipe(delta: Vec2) -> Option<Direction> {
    if delta.length() < MIN_SWIPE_DISTANCE {
        return None;
    }

    let direction = if delta.x.abs() >= delta.y.abs() {
        if delta.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };

    Some(direction)
}

use std::time::Instant;

use crate::game::Game;
use crate::input::action::Action;

/// Applies one action to the game. Returns whether the screen needs a redraw.
///
/// `Quit` is left to the caller.
pub fn handle_input(game: &mut Game, action: Action, now: Instant) -> bool {
    match action {
        Action::Left => game.move_piece(-1, 0),
        Action::Right => game.move_piece(1, 0),
        Action::SoftDrop => game.drop_piece(),
        Action::Rotate => game.rotate_piece(),
        Action::TogglePause => game.toggle_pause(now),
        Action::Acknowledge => game.acknowledge_game_over(now),
        Action::Quit => false,
    }
}

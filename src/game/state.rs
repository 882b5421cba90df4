use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;

use crate::constants::{COLS, ROWS};
use crate::game::board::Board;
use crate::game::piece::{rotate, ActivePiece};
use crate::game::score::ScoreTracker;
use crate::storage::HighScoreStore;
use crate::ui::surface::Surface;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Running,
    Paused,
    GameOver(u32), // Final score, shown until acknowledged
}

pub struct Game {
    pub board: Board,
    pub current_piece: ActivePiece,
    pub score: ScoreTracker,
    pub game_state: GameState,
    pub drop_timer: Instant,
    tick_interval: Duration,
    rng: StdRng,
}

impl Game {
    pub fn new(store: Box<dyn HighScoreStore>, mut rng: StdRng, tick_interval: Duration) -> Self {
        let current_piece = ActivePiece::spawn(&mut rng);
        Self {
            board: Board::new(),
            current_piece,
            score: ScoreTracker::new(store),
            game_state: GameState::Running,
            drop_timer: Instant::now(),
            tick_interval,
            rng,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn is_running(&self) -> bool {
        self.game_state == GameState::Running
    }

    /// Replaces the current piece with a random one at the spawn point.
    /// A piece that cannot fit where it spawns ends the game.
    pub fn spawn_piece(&mut self) {
        self.current_piece = ActivePiece::spawn(&mut self.rng);
        debug!("spawned {:?}", self.current_piece.kind);

        if self.board.collides(&self.current_piece, 0, 0) {
            let final_score = self.score.current();
            info!("game over with score {}", final_score);
            self.game_state = GameState::GameOver(final_score);
        }
    }

    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if !self.is_running() || self.board.collides(&self.current_piece, dx, dy) {
            return false;
        }
        self.current_piece.x += dx;
        self.current_piece.y += dy;
        true
    }

    pub fn rotate_piece(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rotated = rotate(&self.current_piece.shape);
        if self.board.collides_shape(&self.current_piece, &rotated, 0, 0) {
            return false;
        }
        self.current_piece.shape = rotated;
        true
    }

    /// One step of gravity. A piece that cannot fall any further is locked
    /// into the board and the next piece spawns.
    pub fn drop_piece(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if !self.move_piece(0, 1) {
            self.lock_piece();
        }
        true
    }

    fn lock_piece(&mut self) {
        self.board.merge(&self.current_piece);

        let lines = self.board.clear_full_lines();
        if lines > 0 {
            debug!("cleared {} line(s)", lines);
            self.score.award(lines);
        }

        self.spawn_piece();
    }

    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        match self.game_state {
            GameState::Running => {
                self.game_state = GameState::Paused;
                debug!("paused");
            }
            GameState::Paused => {
                self.game_state = GameState::Running;
                // No catch-up tick for the time spent paused
                self.drop_timer = now;
                debug!("resumed");
            }
            GameState::GameOver(_) => return false,
        }
        true
    }

    pub fn pause_label(&self) -> &'static str {
        match self.game_state {
            GameState::Paused => "Resume",
            _ => "Pause",
        }
    }

    /// Dismisses the game-over notice and starts a fresh game.
    pub fn acknowledge_game_over(&mut self, now: Instant) -> bool {
        if !matches!(self.game_state, GameState::GameOver(_)) {
            return false;
        }
        self.board.reset();
        self.score.reset();
        self.game_state = GameState::Running;
        self.spawn_piece();
        self.drop_timer = now;
        true
    }

    /// Advances the gravity timer. Returns whether anything changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        if now.saturating_duration_since(self.drop_timer) >= self.tick_interval {
            self.drop_timer = now;
            return self.drop_piece();
        }
        false
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();

        for (x, y, color) in self.board.occupied_cells() {
            surface.draw_block(x, y, color);
        }

        for (x, y) in self.current_piece.get_blocks() {
            if x >= 0 && x < COLS as i32 && y >= 0 && y < ROWS as i32 {
                surface.draw_block(x as usize, y as usize, self.current_piece.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use crate::game::piece::ShapeKind;
    use crate::storage::MemoryStore;
    use crate::ui::surface::CellGrid;
    use rand::SeedableRng;
    use ratatui::style::Color;

    const TICK: Duration = Duration::from_millis(500);

    fn new_game() -> Game {
        Game::new(
            Box::new(MemoryStore::with_high_score(0)),
            StdRng::seed_from_u64(1),
            TICK,
        )
    }

    fn place(game: &mut Game, kind: ShapeKind, x: i32, y: i32) {
        let mut piece = ActivePiece::new(kind);
        piece.x = x;
        piece.y = y;
        game.current_piece = piece;
    }

    fn fill(game: &mut Game, xs: std::ops::Range<usize>, y: usize) {
        for x in xs {
            game.board.set(x, y, Cell::Filled(Color::Red));
        }
    }

    #[test]
    fn test_new_game_starts_running_at_spawn() {
        let game = new_game();
        assert_eq!(game.game_state, GameState::Running);
        assert_eq!((game.current_piece.x, game.current_piece.y), (3, 0));
        assert!(game.board.is_empty());
        assert_eq!(game.score.current(), 0);
        assert_eq!(game.pause_label(), "Pause");
    }

    #[test]
    fn test_move_piece() {
        let mut game = new_game();
        place(&mut game, ShapeKind::O, 4, 5);
        assert!(game.move_piece(-1, 0));
        assert!(game.move_piece(0, 1));
        assert_eq!((game.current_piece.x, game.current_piece.y), (3, 6));
    }

    #[test]
    fn test_blocked_move_is_noop() {
        let mut game = new_game();
        place(&mut game, ShapeKind::O, 0, 5);
        let before = game.current_piece.clone();
        assert!(!game.move_piece(-1, 0));
        assert_eq!(game.current_piece, before);
    }

    #[test]
    fn test_rotate_piece() {
        let mut game = new_game();
        place(&mut game, ShapeKind::I, 3, 5);
        assert!(game.rotate_piece());
        assert_eq!(game.current_piece.shape, vec![vec![true]; 4]);
        assert_eq!((game.current_piece.x, game.current_piece.y), (3, 5));
    }

    #[test]
    fn test_rotation_rejected_on_collision() {
        let mut game = new_game();
        // Vertical bar would reach below the floor
        place(&mut game, ShapeKind::I, 3, ROWS as i32 - 1);
        let before = game.current_piece.clone();
        assert!(!game.rotate_piece());
        assert_eq!(game.current_piece, before);
    }

    #[test]
    fn test_rotation_rejected_without_wall_kick() {
        let mut game = new_game();
        place(&mut game, ShapeKind::I, 3, 5);
        game.board.set(3, 7, Cell::Filled(Color::Red));
        assert!(!game.rotate_piece());
        assert_eq!(game.current_piece.shape, ShapeKind::I.shape());
    }

    #[test]
    fn test_drop_moves_down_one_row() {
        let mut game = new_game();
        place(&mut game, ShapeKind::T, 3, 0);
        assert!(game.drop_piece());
        assert_eq!(game.current_piece.y, 1);
        assert!(game.board.is_empty());
    }

    #[test]
    fn test_drop_at_floor_merges_and_spawns() {
        let mut game = new_game();
        place(&mut game, ShapeKind::O, 0, ROWS as i32 - 2);
        assert!(game.drop_piece());

        let color = ShapeKind::O.color();
        assert_eq!(game.board.cell(0, ROWS as i32 - 1), Some(Cell::Filled(color)));
        assert_eq!(game.board.occupied_cells().count(), 4);
        assert_eq!((game.current_piece.x, game.current_piece.y), (3, 0));
        assert_eq!(game.game_state, GameState::Running);
    }

    #[test]
    fn test_drop_clears_lines_and_scores() {
        let mut game = new_game();
        fill(&mut game, 2..COLS, ROWS - 1);
        fill(&mut game, 2..COLS, ROWS - 2);
        game.board.set(9, ROWS - 3, Cell::Filled(Color::Blue));
        place(&mut game, ShapeKind::O, 0, ROWS as i32 - 2);

        game.drop_piece();

        assert_eq!(game.score.current(), 300);
        assert_eq!(game.score.best(), 300);
        assert_eq!(game.score.store().load(), Some(300));
        assert_eq!(game.board.occupied_cells().count(), 1);
        assert_eq!(game.board.cell(9, ROWS as i32 - 1), Some(Cell::Filled(Color::Blue)));
    }

    #[test]
    fn test_game_over_when_spawn_area_blocked() {
        let mut game = new_game();
        game.score.award(1);
        fill(&mut game, 3..7, 0);
        fill(&mut game, 3..7, 1);

        game.spawn_piece();
        assert_eq!(game.game_state, GameState::GameOver(100));

        // Nothing moves while the notice is up
        let start = game.drop_timer;
        assert!(!game.update(start + TICK));
        assert!(!game.move_piece(1, 0));
        assert!(!game.toggle_pause(start));

        assert!(game.acknowledge_game_over(start));
        assert_eq!(game.game_state, GameState::Running);
        assert!(game.board.is_empty());
        assert_eq!(game.score.current(), 0);
        assert_eq!(game.score.best(), 100);
        assert_eq!((game.current_piece.x, game.current_piece.y), (3, 0));
    }

    #[test]
    fn test_game_over_after_lock_near_top() {
        let mut game = new_game();
        // Stack reaching the top everywhere except column 0, with no full rows
        for y in 1..ROWS {
            fill(&mut game, 1..COLS, y);
        }
        place(&mut game, ShapeKind::O, 4, -1);

        game.drop_piece();
        assert_eq!(game.game_state, GameState::GameOver(0));
    }

    #[test]
    fn test_acknowledge_only_in_game_over() {
        let mut game = new_game();
        assert!(!game.acknowledge_game_over(Instant::now()));
        assert_eq!(game.game_state, GameState::Running);
    }

    #[test]
    fn test_update_drops_on_tick() {
        let mut game = new_game();
        place(&mut game, ShapeKind::T, 3, 0);
        let start = game.drop_timer;

        assert!(!game.update(start + TICK / 2));
        assert_eq!(game.current_piece.y, 0);

        assert!(game.update(start + TICK));
        assert_eq!(game.current_piece.y, 1);
        assert_eq!(game.drop_timer, start + TICK);
    }

    #[test]
    fn test_pause_stops_ticks_and_input() {
        let mut game = new_game();
        place(&mut game, ShapeKind::T, 3, 0);
        let start = game.drop_timer;

        assert!(game.toggle_pause(start));
        assert_eq!(game.game_state, GameState::Paused);
        assert_eq!(game.pause_label(), "Resume");

        assert!(!game.update(start + TICK * 3));
        assert!(!game.move_piece(-1, 0));
        assert!(!game.move_piece(1, 0));
        assert!(!game.rotate_piece());
        assert!(!game.drop_piece());
        assert_eq!((game.current_piece.x, game.current_piece.y), (3, 0));
        assert!(game.board.is_empty());

        let resumed = start + TICK * 4;
        assert!(game.toggle_pause(resumed));
        assert_eq!(game.game_state, GameState::Running);
        assert_eq!(game.pause_label(), "Pause");

        // The timer restarts from the resume instant
        assert!(!game.update(resumed + TICK / 2));
        assert!(game.update(resumed + TICK));
        assert_eq!(game.current_piece.y, 1);
        assert!(game.move_piece(-1, 0));
    }

    #[test]
    fn test_draw_board_and_piece() {
        let mut game = new_game();
        game.board.set(0, ROWS - 1, Cell::Filled(Color::Red));
        place(&mut game, ShapeKind::I, 3, 0);

        let mut grid = CellGrid::new();
        grid.draw_block(9, 9, Color::White);
        game.draw(&mut grid);

        assert_eq!(grid.block_count(), 5);
        assert_eq!(grid.get(9, 9), None);
        assert_eq!(grid.get(0, ROWS - 1), Some(Color::Red));
        for x in 3..7 {
            assert_eq!(grid.get(x, 0), Some(ShapeKind::I.color()));
        }
    }

    #[test]
    fn test_draw_skips_cells_above_top() {
        let mut game = new_game();
        place(&mut game, ShapeKind::O, 4, -1);
        let mut grid = CellGrid::new();
        game.draw(&mut grid);
        assert_eq!(grid.block_count(), 2);
    }
}

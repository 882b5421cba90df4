pub const COLS: usize = 10;
pub const ROWS: usize = 20;

// Spawn point of every new piece (top-left corner of its matrix)
pub const SPAWN_X: i32 = 3;
pub const SPAWN_Y: i32 = 0;

// Gravity interval (in milliseconds)
pub const DEFAULT_TICK_MS: u64 = 500;

// How long the main loop waits for a key before checking the timer
pub const INPUT_POLL_MS: u64 = 16;

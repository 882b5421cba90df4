use ratatui::style::Color;

use crate::constants::{COLS, ROWS};

/// What the game needs from a drawing backend.
pub trait Surface {
    fn clear(&mut self);
    /// Draws one bordered block at board column `x`, row `y`.
    fn draw_block(&mut self, x: usize, y: usize, color: Color);
}

/// A board-sized frame of blocks, handed to the terminal renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct CellGrid {
    cells: [[Option<Color>; COLS]; ROWS],
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellGrid {
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>; COLS]> {
        self.cells.iter()
    }

    #[cfg(test)]
    pub fn block_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl Surface for CellGrid {
    fn clear(&mut self) {
        self.cells = [[None; COLS]; ROWS];
    }

    fn draw_block(&mut self, x: usize, y: usize, color: Color) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = Some(color);
        }
    }
}

use ratatui::style::Color;

use crate::constants::{COLS, ROWS};
use crate::game::piece::{ActivePiece, Shape};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

pub type Row = [Cell; COLS];

const EMPTY_ROW: Row = [Cell::Empty; COLS];

/// The playfield. Row 0 is the top, row `ROWS - 1` the bottom.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; ROWS],
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    #[cfg(test)]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    #[cfg(test)]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| !cell.is_occupied())
    }

    /// Every occupied cell as `(x, y, color)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.color().map(|color| (x, y, color)))
        })
    }

    pub fn collides(&self, piece: &ActivePiece, dx: i32, dy: i32) -> bool {
        self.collides_shape(piece, &piece.shape, dx, dy)
    }

    /// Collision test for `shape` placed at the piece position shifted by `(dx, dy)`.
    ///
    /// Cells above the top edge never collide; the sides and the floor always do.
    pub fn collides_shape(&self, piece: &ActivePiece, shape: &Shape, dx: i32, dy: i32) -> bool {
        let origin_x = piece.x + dx;
        let origin_y = piece.y + dy;

        for (i, row) in shape.iter().enumerate() {
            for (j, &filled) in row.iter().enumerate() {
                if !filled {
                    continue;
                }
                let x = origin_x + j as i32;
                let y = origin_y + i as i32;

                if x < 0 || x >= COLS as i32 || y >= ROWS as i32 {
                    return true;
                }
                if y >= 0 && self.rows[y as usize][x as usize].is_occupied() {
                    return true;
                }
            }
        }
        false
    }

    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y) in piece.get_blocks() {
            if y >= 0 && y < ROWS as i32 && x >= 0 && x < COLS as i32 {
                self.rows[y as usize][x as usize] = Cell::Filled(piece.color);
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut lines_cleared = 0;
        let mut y = ROWS;

        // After a removal the rows above shift down, so the same index is checked again.
        while y > 0 {
            let row = y - 1;
            if self.rows[row].iter().all(Cell::is_occupied) {
                self.rows.copy_within(0..row, 1);
                self.rows[0] = EMPTY_ROW;
                lines_cleared += 1;
            } else {
                y -= 1;
            }
        }

        lines_cleared
    }

    pub fn reset(&mut self) {
        self.rows = [EMPTY_ROW; ROWS];
    }
}

use rand::Rng;
use ratatui::style::Color;

use crate::constants::{SPAWN_X, SPAWN_Y};

pub type Shape = Vec<Vec<bool>>;

/// The fixed piece catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    I, T, L, J, O, Z, S
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
    ];

    fn template(self) -> &'static [&'static [u8]] {
        match self {
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            ShapeKind::L => &[&[1, 1, 1], &[1, 0, 0]],
            ShapeKind::J => &[&[1, 1, 1], &[0, 0, 1]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        }
    }

    pub fn shape(self) -> Shape {
        self.template()
            .iter()
            .map(|row| row.iter().map(|&cell| cell == 1).collect())
            .collect()
    }

    pub fn color(self) -> Color {
        match self {
            ShapeKind::I => Color::Cyan,
            ShapeKind::T => Color::Magenta,
            ShapeKind::L => Color::LightYellow,
            ShapeKind::J => Color::Blue,
            ShapeKind::O => Color::Yellow,
            ShapeKind::Z => Color::Red,
            ShapeKind::S => Color::Green,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A quarter turn: transpose, then reverse the row order.
pub fn rotate(shape: &[Vec<bool>]) -> Shape {
    let height = shape.len();
    let width = shape.first().map_or(0, Vec::len);

    let mut rotated: Shape = (0..width)
        .map(|j| (0..height).map(|i| shape[i][j]).collect())
        .collect();
    rotated.reverse();
    rotated
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl ActivePiece {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            x: SPAWN_X,
            y: SPAWN_Y,
            color: kind.color(),
        }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(ShapeKind::random(rng))
    }

    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}

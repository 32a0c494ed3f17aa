//! Grid module - playfield geometry
//!
//! The grid wraps horizontally and is walled vertically. The top `HUD_ROWS`
//! rows are part of the grid (the snake may cross them) but nothing is ever
//! spawned there.

use crate::error::ValidationError;
use crate::types::{Cell, HUD_ROWS, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, ValidationError> {
        if width < MIN_GRID_SIZE || height < MIN_GRID_SIZE {
            return Err(ValidationError::GridTooSmall {
                width,
                height,
                min: MIN_GRID_SIZE,
            });
        }
        if width > MAX_GRID_SIZE || height > MAX_GRID_SIZE {
            return Err(ValidationError::GridTooLarge {
                width,
                height,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Fold an x coordinate back into `[0, width)`
    pub fn wrap_x(&self, x: i32) -> i32 {
        x.rem_euclid(self.width)
    }

    /// Rows below the HUD accept food and obstacles
    pub fn is_spawn_row(&self, y: i32) -> bool {
        (HUD_ROWS..self.height).contains(&y)
    }

    /// Starting head position (middle of the grid)
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Iterate every spawnable cell in row-major order
    pub fn spawn_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (HUD_ROWS..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

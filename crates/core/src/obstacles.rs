//! Obstacle module - score-unlocked blocking cells
//!
//! The field is rebuilt from scratch whenever the unlocked count grows.
//! Capacity is fixed at `MAX_OBSTACLES`, so cells live in an `ArrayVec`.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Cell, HUD_ROWS, MAX_OBSTACLES, OBSTACLE_ATTEMPTS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleField {
    cells: ArrayVec<Cell, MAX_OBSTACLES>,
    unlocked: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// How many obstacles have been unlocked this round (uncapped)
    pub fn unlocked(&self) -> u32 {
        self.unlocked
    }

    /// Remove every obstacle and reset the unlock counter
    pub fn clear(&mut self) {
        self.cells.clear();
        self.unlocked = 0;
    }

    /// Unlock one more obstacle and rebuild the field
    pub fn unlock_one(&mut self, grid: &Grid, excluded: &HashSet<Cell>, rng: &mut SimpleRng) {
        self.unlocked = self.unlocked.saturating_add(1);
        self.regenerate(self.unlocked, grid, excluded, rng);
    }

    /// Rebuild the field with up to `min(count, MAX_OBSTACLES)` cells.
    ///
    /// Each slot gets `OBSTACLE_ATTEMPTS` random samples; a slot that finds no
    /// free cell is skipped, so the field may come out smaller than asked.
    pub fn regenerate(
        &mut self,
        count: u32,
        grid: &Grid,
        excluded: &HashSet<Cell>,
        rng: &mut SimpleRng,
    ) {
        self.cells.clear();
        let target = (count as usize).min(MAX_OBSTACLES);

        for _ in 0..target {
            for _ in 0..OBSTACLE_ATTEMPTS {
                let cell = Cell::new(
                    rng.range_i32(0, grid.width()),
                    rng.range_i32(HUD_ROWS, grid.height()),
                );
                if !excluded.contains(&cell) && !self.cells.contains(&cell) {
                    self.cells.push(cell);
                    break;
                }
            }
        }

        debug!(
            requested = target,
            placed = self.cells.len(),
            "obstacles regenerated"
        );
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

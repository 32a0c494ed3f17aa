//! Food module - the single active food cell and its color

use std::collections::HashSet;

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Cell, Rgb, FOOD_COLOR_MIN, HUD_ROWS};

/// Random samples tried before falling back to a scan of free cells
const RANDOM_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
    pub color: Rgb,
}

impl Food {
    /// Pick a new free cell below the HUD and a fresh non-green color.
    ///
    /// Random sampling covers the normal case; when the board is crowded the
    /// remaining free cells are enumerated and one is drawn uniformly, so the
    /// search always terminates. On error the food is left unchanged.
    pub fn randomize(
        &mut self,
        grid: &Grid,
        excluded: &HashSet<Cell>,
        rng: &mut SimpleRng,
    ) -> Result<(), PlacementError> {
        self.position = pick_free_cell(grid, excluded, rng)?;
        self.color = random_color(rng);
        Ok(())
    }

    /// Place new food avoiding `excluded`
    pub fn spawn(
        grid: &Grid,
        excluded: &HashSet<Cell>,
        rng: &mut SimpleRng,
    ) -> Result<Self, PlacementError> {
        let mut food = Food {
            position: Cell::default(),
            color: Rgb::default(),
        };
        food.randomize(grid, excluded, rng)?;
        Ok(food)
    }
}

fn pick_free_cell(
    grid: &Grid,
    excluded: &HashSet<Cell>,
    rng: &mut SimpleRng,
) -> Result<Cell, PlacementError> {
    for _ in 0..RANDOM_ATTEMPTS {
        let cell = Cell::new(
            rng.range_i32(0, grid.width()),
            rng.range_i32(HUD_ROWS, grid.height()),
        );
        if !excluded.contains(&cell) {
            return Ok(cell);
        }
    }

    let free: Vec<Cell> = grid.spawn_cells().filter(|c| !excluded.contains(c)).collect();
    if free.is_empty() {
        return Err(PlacementError::NoFreeCell);
    }
    Ok(free[rng.next_range(free.len() as u32) as usize])
}

/// Random color with every channel in `[FOOD_COLOR_MIN, 255]`, re-rolled while green dominates
pub fn random_color(rng: &mut SimpleRng) -> Rgb {
    loop {
        let color = Rgb::new(
            rng.range_u8(FOOD_COLOR_MIN, 255),
            rng.range_u8(FOOD_COLOR_MIN, 255),
            rng.range_u8(FOOD_COLOR_MIN, 255),
        );
        if !color.is_greenish() {
            return color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_avoids_excluded_and_hud() {
        let grid = Grid::new(10, 10).unwrap();
        let mut rng = SimpleRng::new(42);
        let excluded: HashSet<Cell> = (0..10).map(|x| Cell::new(x, 5)).collect();

        for _ in 0..200 {
            let food = Food::spawn(&grid, &excluded, &mut rng).unwrap();
            assert!(food.position.y >= 2);
            assert!(grid.contains(food.position));
            assert!(!excluded.contains(&food.position));
        }
    }

    #[test]
    fn test_food_finds_last_free_cell() {
        let grid = Grid::new(6, 6).unwrap();
        let mut rng = SimpleRng::new(1);
        let hole = Cell::new(4, 3);
        let excluded: HashSet<Cell> = grid.spawn_cells().filter(|&c| c != hole).collect();

        let food = Food::spawn(&grid, &excluded, &mut rng).unwrap();
        assert_eq!(food.position, hole);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let grid = Grid::new(6, 6).unwrap();
        let mut rng = SimpleRng::new(1);
        let excluded: HashSet<Cell> = grid.spawn_cells().collect();

        let mut food = Food::spawn(&grid, &HashSet::new(), &mut rng).unwrap();
        let before = food;
        assert_eq!(
            food.randomize(&grid, &excluded, &mut rng),
            Err(PlacementError::NoFreeCell)
        );
        assert_eq!(food, before);
    }

    #[test]
    fn test_colors_are_never_green() {
        let mut rng = SimpleRng::new(2024);
        for _ in 0..2000 {
            let c = random_color(&mut rng);
            assert!(!c.is_greenish(), "{:?} is green", c);
            assert!(c.r >= FOOD_COLOR_MIN && c.g >= FOOD_COLOR_MIN && c.b >= FOOD_COLOR_MIN);
        }
    }
}

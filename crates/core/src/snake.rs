//! Snake module - body, heading and movement rules
//!
//! The body is an ordered deque with the head at the front. A move pushes a
//! new head and pops the tail unless a growth was queued by eating.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::{Cell, Direction};

/// Length of a freshly spawned snake
pub const START_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    /// Heading used by the last move.
    direction: Direction,
    /// Latest accepted turn request, applied on the next move.
    pending: Option<Direction>,
    growing: bool,
}

impl Snake {
    /// Create a snake centered on the grid, heading right
    pub fn new(grid: &Grid) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(START_LENGTH),
            direction: Direction::Right,
            pending: None,
            growing: false,
        };
        snake.reset(grid);
        snake
    }

    /// Re-center as a length-3 snake heading right, trailing to the left
    pub fn reset(&mut self, grid: &Grid) {
        let center = grid.center();
        self.body.clear();
        for i in 0..START_LENGTH as i32 {
            self.body.push_back(Cell::new(grid.wrap_x(center.x - i), center.y));
        }
        self.direction = Direction::Right;
        self.pending = None;
        self.growing = false;
    }

    pub fn head(&self) -> Cell {
        // Body is never empty: reset() always pushes START_LENGTH cells.
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Heading the next move will use
    pub fn next_direction(&self) -> Direction {
        self.pending.unwrap_or(self.direction)
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Request a new heading.
    ///
    /// Reversal is checked against the heading of the last move, so two quick
    /// turns between ticks cannot fold the snake back onto its neck. Returns
    /// whether the request was accepted.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Queue one segment of growth for the next move
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// Advance one cell, wrapping horizontally.
    pub fn advance(&mut self, grid: &Grid) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let next = self.head().offset(self.direction);
        let next = Cell::new(grid.wrap_x(next.x), next.y);

        self.body.push_front(next);
        if self.growing {
            self.growing = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Head overlaps the body, or left the grid through the top or bottom wall
    pub fn check_self_or_wall_collision(&self, grid: &Grid) -> bool {
        let head = self.head();
        if head.y < 0 || head.y >= grid.height() {
            return true;
        }
        self.body.iter().skip(1).any(|&c| c == head)
    }
}

//! Game session module - one round of play
//!
//! Owns the snake, food, obstacles and scoreboard and applies the per-tick
//! rules in a fixed order:
//!
//! 1. move the snake
//! 2. eat: relocate food, queue growth, add points, unlock an obstacle at 200+
//! 3. fail: wall or self collision, or an obstacle hit at 200+ ends the round
//! 4. black & white mode switches on at 100+
//! 5. completion at 300+ ends the round as a win, overriding a same-tick failure

use std::collections::HashSet;

use tracing::{debug, error, info};

use crate::difficulty::SpeedTier;
use crate::food::Food;
use crate::grid::Grid;
use crate::obstacles::ObstacleField;
use crate::rng::SimpleRng;
use crate::scoreboard::ScoreBoard;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Cell, Direction, Rgb, BW_MODE_SCORE, COMPLETION_SCORE, OBSTACLE_SCORE,
};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// No round running (before the first reset, or back at the menu).
    Ready,
    Playing,
    Paused,
    Over,
    Completed,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    food: Food,
    obstacles: ObstacleField,
    scoreboard: ScoreBoard,
    rng: SimpleRng,
    state: RoundState,
    bw_mode: bool,
    /// Incremented on every reset.
    round_id: u32,
}

impl GameSession {
    /// Create an idle session; call [`GameSession::reset`] to start playing
    pub fn new(grid: Grid, seed: u32) -> Self {
        let mut session = Self {
            grid,
            snake: Snake::new(&grid),
            food: Food {
                position: grid.center(),
                color: Rgb::default(),
            },
            obstacles: ObstacleField::new(),
            scoreboard: ScoreBoard::new(),
            rng: SimpleRng::new(seed),
            state: RoundState::Ready,
            bw_mode: false,
            round_id: 0,
        };
        session.relocate_food();
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == RoundState::Over
    }

    pub fn is_completed(&self) -> bool {
        self.state == RoundState::Completed
    }

    pub fn is_paused(&self) -> bool {
        self.state == RoundState::Paused
    }

    /// Round ended either way
    pub fn is_finished(&self) -> bool {
        matches!(self.state, RoundState::Over | RoundState::Completed)
    }

    pub fn bw_mode(&self) -> bool {
        self.bw_mode
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn speed_tier(&self) -> SpeedTier {
        SpeedTier::from_score(self.score())
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// Obstacles only exist and collide once the score reaches the unlock threshold
    pub fn obstacles_active(&self) -> bool {
        self.score() >= OBSTACLE_SCORE
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scoreboard
    }

    /// Start a fresh round: new snake, food, no obstacles, score zero.
    pub fn reset(&mut self) {
        self.snake.reset(&self.grid);
        self.obstacles.clear();
        self.scoreboard.reset_score();
        self.bw_mode = false;
        self.relocate_food();
        self.state = RoundState::Playing;
        self.round_id = self.round_id.wrapping_add(1);
        info!(round = self.round_id, "round started");
    }

    /// Leave the round without starting another
    pub fn idle(&mut self) {
        self.state = RoundState::Ready;
    }

    /// Flip between Playing and Paused; returns whether anything changed
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            RoundState::Playing => self.state = RoundState::Paused,
            RoundState::Paused => self.state = RoundState::Playing,
            _ => return false,
        }
        true
    }

    /// Forward a heading request to the snake (only while Playing)
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.state != RoundState::Playing {
            return false;
        }
        self.snake.request_turn(direction)
    }

    /// Advance one step. Returns false when the round is not running.
    pub fn tick(&mut self) -> bool {
        if self.state != RoundState::Playing {
            return false;
        }

        self.snake.advance(&self.grid);

        if self.snake.head() == self.food.position {
            self.eat();
        }

        let head = self.snake.head();
        let hit_obstacle = self.obstacles_active() && self.obstacles.contains(head);
        if self.snake.check_self_or_wall_collision(&self.grid) || hit_obstacle {
            self.state = RoundState::Over;
        }

        let score = self.score();
        self.bw_mode = self.bw_mode || score >= BW_MODE_SCORE;

        if score >= COMPLETION_SCORE {
            self.state = RoundState::Completed;
        }

        if self.is_finished() {
            info!(
                round = self.round_id,
                score,
                completed = self.is_completed(),
                "round finished"
            );
        }
        true
    }

    fn eat(&mut self) {
        self.relocate_food();
        self.snake.grow();
        let points = self.scoreboard.record_food_eaten(self.bw_mode);
        debug!(
            points,
            score = self.score(),
            x = self.snake.head().x,
            y = self.snake.head().y,
            "food eaten"
        );

        if self.obstacles_active() {
            let mut excluded = self.snake_cells();
            excluded.insert(self.food.position);
            self.obstacles
                .unlock_one(&self.grid, &excluded, &mut self.rng);
        }
    }

    fn relocate_food(&mut self) {
        let mut excluded = self.snake_cells();
        excluded.extend(self.obstacles.cells().iter().copied());
        if let Err(e) = self.food.randomize(&self.grid, &excluded, &mut self.rng) {
            // Only reachable when the snake and obstacles fill the whole spawn area.
            error!(error = %e, "food placement failed");
            if self.state == RoundState::Playing {
                self.state = RoundState::Over;
            }
        }
    }

    fn snake_cells(&self) -> HashSet<Cell> {
        self.snake.body().iter().copied().collect()
    }

    /// Fill the round-related fields of `out`
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let tier = self.speed_tier();

        out.round_id = self.round_id;
        out.grid_width = self.grid.width();
        out.grid_height = self.grid.height();
        out.score = self.score();
        out.high_score = self.scoreboard.high_score();
        out.bw_mode = self.bw_mode;
        out.paused = self.is_paused();
        out.over = self.is_over();
        out.completed = self.is_completed();
        out.speed_tier = tier;
        out.speed_factor = tier.factor();
        out.snake.clear();
        out.snake.extend(self.snake.body().iter().copied());
        out.direction = self.snake.direction();
        out.food = self.food.position;
        out.food_color = self.food.color;
        out.obstacles.clear();
        if self.obstacles_active() {
            out.obstacles
                .extend(self.obstacles.cells().iter().copied());
        }
    }

    #[cfg(test)]
    pub(crate) fn force_score(&mut self, score: u32) {
        self.scoreboard.set_score(score);
        self.bw_mode = score >= BW_MODE_SCORE;
    }

    #[cfg(test)]
    pub(crate) fn put_food(&mut self, cell: Cell) {
        self.food.position = cell;
    }

    #[cfg(test)]
    pub(crate) fn put_obstacles(&mut self, count: u32) {
        let mut excluded = self.snake_cells();
        excluded.insert(self.food.position);
        self.obstacles
            .regenerate(count, &self.grid, &excluded, &mut self.rng);
    }
}

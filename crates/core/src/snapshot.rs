use arrayvec::ArrayVec;
use serde::Serialize;

use crate::difficulty::SpeedTier;
use crate::types::{Cell, Direction, Rgb, Screen, MAX_OBSTACLES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub score: u32,
    pub timestamp: String,
    /// Row holds the best score in the history.
    pub best: bool,
}

/// Read-only view of everything a renderer needs, refreshed after each command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub round_id: u32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub score: u32,
    pub high_score: u32,
    pub bw_mode: bool,
    pub paused: bool,
    pub over: bool,
    pub completed: bool,
    pub speed_tier: SpeedTier,
    pub speed_factor: f32,
    pub snake: Vec<Cell>,
    pub direction: Direction,
    pub food: Cell,
    pub food_color: Rgb,
    pub obstacles: ArrayVec<Cell, MAX_OBSTACLES>,
    pub player_name: String,
    pub leaderboard: Vec<LeaderboardRow>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.screen = Screen::MainMenu;
        self.round_id = 0;
        self.grid_width = 0;
        self.grid_height = 0;
        self.score = 0;
        self.high_score = 0;
        self.bw_mode = false;
        self.paused = false;
        self.over = false;
        self.completed = false;
        self.speed_tier = SpeedTier::Slow;
        self.speed_factor = SpeedTier::Slow.factor();
        self.snake.clear();
        self.direction = Direction::Right;
        self.food = Cell::default();
        self.food_color = Rgb::default();
        self.obstacles.clear();
        self.player_name.clear();
        self.leaderboard.clear();
    }

    /// Snake is moving and accepts turns
    pub fn playable(&self) -> bool {
        self.screen == Screen::Playing
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::MainMenu,
            round_id: 0,
            grid_width: 0,
            grid_height: 0,
            score: 0,
            high_score: 0,
            bw_mode: false,
            paused: false,
            over: false,
            completed: false,
            speed_tier: SpeedTier::Slow,
            speed_factor: SpeedTier::Slow.factor(),
            snake: Vec::new(),
            direction: Direction::Right,
            food: Cell::default(),
            food_color: Rgb::default(),
            obstacles: ArrayVec::new(),
            player_name: String::new(),
            leaderboard: Vec::new(),
        }
    }
}

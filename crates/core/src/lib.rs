//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal, file or network I/O, making it:
//!
//! - **Deterministic**: Same seed and commands produce identical rounds
//! - **Testable**: Unit tests for every rule, integration tests on top
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: playfield geometry, horizontal wrap, HUD rows
//! - [`snake`]: body, heading, growth and collision checks
//! - [`food`]: the single food cell and its color
//! - [`obstacles`]: score-unlocked blocking cells
//! - [`scoreboard`]: score, high score and the capped leaderboard
//! - [`history`]: `name|score|timestamp` line codec
//! - [`difficulty`]: speed tiers derived from score
//! - [`session`]: one round, ticked by the host
//! - [`flow`]: menus, name entry and the round lifecycle
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Movement**: the snake moves one cell per tick, wraps left/right, dies on
//!   the top and bottom walls and on itself
//! - **Food**: worth 10 points, 20 once black & white mode starts at 100
//! - **Obstacles**: one more per food eaten from 200 points, at most 10
//! - **Completion**: reaching 300 points wins the round
//! - **Leaderboard**: a round is written only when it beats the player's best
//!   of this session
//!
//! # Example
//!
//! ```
//! use snake_arcade_core::{Grid, ScreenFlow};
//! use snake_arcade_types::{Command, Screen};
//!
//! let grid = Grid::new(20, 20).unwrap();
//! let mut flow = ScreenFlow::new(grid, 12345);
//!
//! flow.apply(Command::SelectPlay);
//! flow.apply(Command::NameAppend('A'));
//! flow.apply(Command::ConfirmName);
//! assert_eq!(flow.screen(), Screen::Playing);
//!
//! flow.apply(Command::Tick);
//! let snap = flow.snapshot();
//! assert_eq!(snap.snake.len(), 3);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The host calls `tick` at the interval given by
//! [`SpeedTier::tick_interval`](difficulty::SpeedTier::tick_interval) for the
//! current score.

pub mod difficulty;
pub mod error;
pub mod flow;
pub mod food;
pub mod grid;
pub mod history;
pub mod obstacles;
pub mod rng;
pub mod scoreboard;
pub mod session;
pub mod snake;
pub mod snapshot;

pub use snake_arcade_types as types;

// Re-export commonly used types for convenience
pub use difficulty::SpeedTier;
pub use error::{PlacementError, ValidationError};
pub use flow::{display_name, ScreenFlow, ANONYMOUS, RULES};
pub use food::Food;
pub use grid::Grid;
pub use history::{format_history, parse_history, ScoreRecord, TIMESTAMP_FORMAT};
pub use obstacles::ObstacleField;
pub use rng::SimpleRng;
pub use scoreboard::ScoreBoard;
pub use session::{GameSession, RoundState};
pub use snake::Snake;
pub use snapshot::{GameSnapshot, LeaderboardRow};

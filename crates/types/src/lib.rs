//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small helpers, making them
//! usable in any context (engine, input mapping, terminal rendering).
//!
//! # Grid Coordinates
//!
//! The playfield is addressed in cells, never pixels:
//!
//! - **x** grows to the right, **y** grows downward
//! - Rows `0..HUD_ROWS` are reserved for the score display
//! - The horizontal axis wraps, the vertical axis is a wall
//!
//! # Score Thresholds
//!
//! | Constant | Value | Effect |
//! |----------|-------|--------|
//! | `SPEED_UP_SCORE` | 50 | speed factor 0.5x -> 0.75x |
//! | `BW_MODE_SCORE` | 100 | black & white mode, food worth 20, speed 1.0x |
//! | `OBSTACLE_SCORE` | 200 | obstacles unlock, speed 2.0x |
//! | `COMPLETION_SCORE` | 300 | round completed |
//!
//! # Examples
//!
//! ```
//! use snake_arcade_types::{Cell, Command, Direction};
//!
//! let head = Cell::new(4, 7);
//! assert_eq!(head.offset(Direction::Up), Cell::new(4, 6));
//!
//! assert!(Direction::Left.is_opposite(&Direction::Right));
//! assert_eq!(Direction::from_str("W"), Some(Direction::Up));
//!
//! assert_eq!(Command::from_str("togglePause"), Some(Command::TogglePause));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: i32 = 20;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: i32 = 20;

/// Smallest accepted grid side
pub const MIN_GRID_SIZE: i32 = 6;

/// Largest accepted grid side
pub const MAX_GRID_SIZE: i32 = 1000;

/// Rows at the top of the grid reserved for the score display
pub const HUD_ROWS: i32 = 2;

/// Ticks per second at speed factor 1.0
pub const BASE_FPS: u32 = 10;

/// Points per food in color mode
pub const FOOD_POINTS: u32 = 10;

/// Points per food in black & white mode
pub const BW_FOOD_POINTS: u32 = 20;

/// Score at which the snake speeds up from 0.5x to 0.75x
pub const SPEED_UP_SCORE: u32 = 50;

/// Score at which black & white mode starts
pub const BW_MODE_SCORE: u32 = 100;

/// Score at which obstacles unlock
pub const OBSTACLE_SCORE: u32 = 200;

/// Score that completes the round
pub const COMPLETION_SCORE: u32 = 300;

/// Upper bound on simultaneously placed obstacles
pub const MAX_OBSTACLES: usize = 10;

/// Random samples tried per obstacle slot before the slot is skipped
pub const OBSTACLE_ATTEMPTS: u32 = 100;

/// Records kept in the persisted history
pub const MAX_HISTORY: usize = 25;

/// Records shown on the leaderboard screen
pub const LEADERBOARD_ROWS: usize = 10;

/// Maximum player name length in characters
pub const MAX_NAME_LEN: usize = 15;

/// Lowest value of each food color channel
pub const FOOD_COLOR_MIN: u8 = 50;

/// A grid position.
///
/// Coordinates are signed because a head may step outside the grid
/// vertically before the collision check ends the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction` (no wrapping).
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(dx, dy)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check if this direction is the exact reverse of `other`
    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or WASD letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("D"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// 24-bit color tag carried by food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Green strictly dominates both other channels.
    ///
    /// Such colors disappear against the green playfield, so food never uses them.
    pub fn is_greenish(&self) -> bool {
        self.g > self.r && self.g > self.b
    }
}

/// Every screen the player can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    MainMenu,
    Rules,
    Leaderboard,
    NameEntry,
    Playing,
    Paused,
    GameOver,
    Completed,
}

impl Screen {
    /// True for the screens that belong to a running or finished round
    pub fn in_round(&self) -> bool {
        matches!(
            self,
            Screen::Playing | Screen::Paused | Screen::GameOver | Screen::Completed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::MainMenu => "main_menu",
            Screen::Rules => "rules",
            Screen::Leaderboard => "leaderboard",
            Screen::NameEntry => "name_entry",
            Screen::Playing => "playing",
            Screen::Paused => "paused",
            Screen::GameOver => "game_over",
            Screen::Completed => "completed",
        }
    }
}

/// Commands a front end can send to the engine
///
/// These are the only way a UI layer mutates the game; key mapping
/// translates device events into this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Main menu: go to name entry
    SelectPlay,
    /// Main menu: show the rules
    SelectRules,
    /// Main menu: show the leaderboard
    SelectLeaderboard,
    /// Rules / leaderboard / name entry: return to the main menu
    BackToMenu,
    /// Name entry: append one character
    NameAppend(char),
    /// Name entry: delete the last character
    NameBackspace,
    /// Name entry: start the round
    ConfirmName,
    /// Request a new heading
    Turn(Direction),
    /// Pause or resume a running round
    TogglePause,
    /// After a round ends: record it and play again
    Restart,
    /// After a round ends: record it and go back to the menu
    QuitToMenu,
    /// Advance the simulation one step
    Tick,
}

impl Command {
    /// Parse a command name (case-insensitive).
    ///
    /// `NameAppend` carries a character and has no textual form.
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_arcade_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("selectPlay"), Some(Command::SelectPlay));
    /// assert_eq!(Command::from_str("turnLeft"), Some(Command::Turn(Direction::Left)));
    /// assert_eq!(Command::from_str("fly"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "selectplay" => Some(Command::SelectPlay),
            "selectrules" => Some(Command::SelectRules),
            "selectleaderboard" => Some(Command::SelectLeaderboard),
            "backtomenu" => Some(Command::BackToMenu),
            "namebackspace" => Some(Command::NameBackspace),
            "confirmname" => Some(Command::ConfirmName),
            "turnup" => Some(Command::Turn(Direction::Up)),
            "turndown" => Some(Command::Turn(Direction::Down)),
            "turnleft" => Some(Command::Turn(Direction::Left)),
            "turnright" => Some(Command::Turn(Direction::Right)),
            "togglepause" => Some(Command::TogglePause),
            "restart" => Some(Command::Restart),
            "quittomenu" => Some(Command::QuitToMenu),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// camelCase command name, `None` for `NameAppend`
    pub fn as_str(&self) -> Option<&'static str> {
        let name = match self {
            Command::SelectPlay => "selectPlay",
            Command::SelectRules => "selectRules",
            Command::SelectLeaderboard => "selectLeaderboard",
            Command::BackToMenu => "backToMenu",
            Command::NameAppend(_) => return None,
            Command::NameBackspace => "nameBackspace",
            Command::ConfirmName => "confirmName",
            Command::Turn(Direction::Up) => "turnUp",
            Command::Turn(Direction::Down) => "turnDown",
            Command::Turn(Direction::Left) => "turnLeft",
            Command::Turn(Direction::Right) => "turnRight",
            Command::TogglePause => "togglePause",
            Command::Restart => "restart",
            Command::QuitToMenu => "quitToMenu",
            Command::Tick => "tick",
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_thresholds_are_ordered() {
        assert!(SPEED_UP_SCORE < BW_MODE_SCORE);
        assert!(BW_MODE_SCORE < OBSTACLE_SCORE);
        assert!(OBSTACLE_SCORE < COMPLETION_SCORE);
        assert!(LEADERBOARD_ROWS <= MAX_HISTORY);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(&d.opposite()));
            assert!(!d.is_opposite(&d));
        }
    }

    #[test]
    fn greenish_requires_strict_dominance() {
        assert!(Rgb::new(50, 200, 60).is_greenish());
        assert!(!Rgb::new(200, 200, 50).is_greenish());
        assert!(!Rgb::new(90, 90, 90).is_greenish());
        assert!(!Rgb::new(255, 60, 60).is_greenish());
    }

    #[test]
    fn command_names_round_trip() {
        let cmds = [
            Command::SelectPlay,
            Command::SelectRules,
            Command::SelectLeaderboard,
            Command::BackToMenu,
            Command::NameBackspace,
            Command::ConfirmName,
            Command::Turn(Direction::Down),
            Command::TogglePause,
            Command::Restart,
            Command::QuitToMenu,
            Command::Tick,
        ];
        for cmd in cmds {
            let name = cmd.as_str().unwrap();
            assert_eq!(Command::from_str(name), Some(cmd));
        }
        assert_eq!(Command::NameAppend('x').as_str(), None);
    }

    #[test]
    fn in_round_screens() {
        assert!(Screen::Paused.in_round());
        assert!(Screen::Completed.in_round());
        assert!(!Screen::NameEntry.in_round());
        assert!(!Screen::MainMenu.in_round());
    }
}

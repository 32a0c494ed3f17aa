//! Screen flow - the top-level state machine
//!
//! Menu screens are handled here; once a name is confirmed the flow delegates
//! to its [`GameSession`] until the player leaves the round. Every command is
//! total: one that does not apply to the current screen is ignored and
//! reported as `false`.
//!
//! ```text
//! MainMenu --P--> NameEntry --Enter--> round (Playing <-> Paused)
//!    |  ^             |                    |
//!    |  +----Esc------+                    +--> GameOver  --Space--> Playing
//!    |  +----Esc---- Rules / Leaderboard   |       |
//!    |  +-------------------------------------Esc--+
//!    |  +----Space/Esc----------------------+--> Completed
//!    +--R/L--> Rules / Leaderboard
//! ```

use tracing::info;

use crate::grid::Grid;
use crate::history::ScoreRecord;
use crate::session::{GameSession, RoundState};
use crate::snapshot::{GameSnapshot, LeaderboardRow};
use crate::types::{Command, Direction, Screen, MAX_NAME_LEN};

/// Lines shown on the rules screen
pub const RULES: [&str; 8] = [
    "Use WASD or Arrow keys to control the snake",
    "Eat food to grow and earn points",
    "Each food is worth 10 points (20 in B&W mode)",
    "Game turns B&W at 100 points",
    "Obstacles appear at 200 points",
    "Complete the game at 300 points",
    "Game over if snake hits itself or top/bottom walls",
    "Press SHIFT to pause/resume the game",
];

/// Shown in place of an empty player name
pub const ANONYMOUS: &str = "Anonymous";

/// Name to display for a possibly empty player name
pub fn display_name(name: &str) -> &str {
    if name.is_empty() {
        ANONYMOUS
    } else {
        name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    MainMenu,
    Rules,
    Leaderboard,
    NameEntry,
    Round,
}

#[derive(Debug, Clone)]
pub struct ScreenFlow {
    stage: Stage,
    player_name: String,
    session: GameSession,
    /// Set when a finished round changed the history.
    history_dirty: bool,
}

impl ScreenFlow {
    pub fn new(grid: Grid, seed: u32) -> Self {
        Self {
            stage: Stage::MainMenu,
            player_name: String::new(),
            session: GameSession::new(grid, seed),
            history_dirty: false,
        }
    }

    /// Screen currently shown; in a round it follows the session state
    pub fn screen(&self) -> Screen {
        match self.stage {
            Stage::MainMenu => Screen::MainMenu,
            Stage::Rules => Screen::Rules,
            Stage::Leaderboard => Screen::Leaderboard,
            Stage::NameEntry => Screen::NameEntry,
            Stage::Round => match self.session.state() {
                RoundState::Playing | RoundState::Ready => Screen::Playing,
                RoundState::Paused => Screen::Paused,
                RoundState::Over => Screen::GameOver,
                RoundState::Completed => Screen::Completed,
            },
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Replace the history with records read from storage
    pub fn load_history(&mut self, records: Vec<ScoreRecord>) {
        self.session.scoreboard_mut().load_history(records);
    }

    pub fn export_history(&self) -> Vec<ScoreRecord> {
        self.session.scoreboard().export_history()
    }

    /// Whether history changed since the last call; clears the flag
    pub fn take_history_dirty(&mut self) -> bool {
        std::mem::take(&mut self.history_dirty)
    }

    /// Apply one command. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::SelectPlay => self.select_play(),
            Command::SelectRules => self.select_rules(),
            Command::SelectLeaderboard => self.select_leaderboard(),
            Command::BackToMenu => self.back_to_menu(),
            Command::NameAppend(c) => self.name_append(c),
            Command::NameBackspace => self.name_backspace(),
            Command::ConfirmName => self.confirm_name(),
            Command::Turn(direction) => self.turn(direction),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            Command::QuitToMenu => self.quit_to_menu(),
            Command::Tick => self.tick(),
        }
    }

    pub fn select_play(&mut self) -> bool {
        if self.stage != Stage::MainMenu {
            return false;
        }
        self.player_name.clear();
        self.stage = Stage::NameEntry;
        true
    }

    pub fn select_rules(&mut self) -> bool {
        if self.stage != Stage::MainMenu {
            return false;
        }
        self.stage = Stage::Rules;
        true
    }

    pub fn select_leaderboard(&mut self) -> bool {
        if self.stage != Stage::MainMenu {
            return false;
        }
        self.stage = Stage::Leaderboard;
        true
    }

    /// Leave rules, leaderboard or name entry
    pub fn back_to_menu(&mut self) -> bool {
        match self.stage {
            Stage::Rules | Stage::Leaderboard | Stage::NameEntry => {
                self.player_name.clear();
                self.stage = Stage::MainMenu;
                true
            }
            Stage::MainMenu | Stage::Round => false,
        }
    }

    /// Append a printable character while the name is shorter than the limit
    pub fn name_append(&mut self, c: char) -> bool {
        if self.stage != Stage::NameEntry
            || c.is_control()
            || self.player_name.chars().count() >= MAX_NAME_LEN
        {
            return false;
        }
        self.player_name.push(c);
        true
    }

    pub fn name_backspace(&mut self) -> bool {
        self.stage == Stage::NameEntry && self.player_name.pop().is_some()
    }

    /// Start a round with the name typed so far (may be empty)
    pub fn confirm_name(&mut self) -> bool {
        if self.stage != Stage::NameEntry {
            return false;
        }
        self.stage = Stage::Round;
        self.session.reset();
        info!(player = display_name(&self.player_name), "player joined");
        true
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        self.stage == Stage::Round && self.session.turn(direction)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.stage == Stage::Round && self.session.toggle_pause()
    }

    /// After a round ends: record it and play again.
    ///
    /// A completed game goes back to the menu instead of straight into
    /// another round.
    pub fn restart(&mut self) -> bool {
        if self.stage != Stage::Round || !self.session.is_finished() {
            return false;
        }
        self.finalize();
        if self.session.is_completed() {
            self.leave_round();
        } else {
            self.session.reset();
        }
        true
    }

    /// After a round ends: record it and return to the menu
    pub fn quit_to_menu(&mut self) -> bool {
        if self.stage != Stage::Round || !self.session.is_finished() {
            return false;
        }
        self.finalize();
        self.leave_round();
        true
    }

    /// Advance the round one step; ignored outside a round
    pub fn tick(&mut self) -> bool {
        self.stage == Stage::Round && self.session.tick()
    }

    fn finalize(&mut self) {
        let changed = self
            .session
            .scoreboard_mut()
            .finalize_round(&self.player_name);
        self.history_dirty |= changed;
    }

    fn leave_round(&mut self) {
        self.session.idle();
        self.player_name.clear();
        self.stage = Stage::MainMenu;
    }

    /// Fill `out` with the current view, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        self.session.snapshot_into(out);
        out.screen = self.screen();
        out.player_name.push_str(&self.player_name);

        let rows = self.session.scoreboard().leaderboard();
        let best = rows.first().map(|r| r.score);
        out.leaderboard.extend(rows.iter().map(|r| LeaderboardRow {
            name: r.name.clone(),
            score: r.score,
            timestamp: r.timestamp.clone(),
            best: Some(r.score) == best,
        }));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

//! Scoreboard module - round score, high score and the persisted leaderboard
//!
//! History is kept sorted by score (descending, stable) and capped at
//! `MAX_HISTORY`. A finished round is written to history only when it beats
//! the player's best of this process lifetime; the previous entry written for
//! that player in this session is replaced, so one session never leaves more
//! than one row per name.

use std::collections::HashMap;

use chrono::Local;
use tracing::info;

use crate::history::{ScoreRecord, TIMESTAMP_FORMAT};
use crate::types::{BW_FOOD_POINTS, FOOD_POINTS, LEADERBOARD_ROWS, MAX_HISTORY};

#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    score: u32,
    high_score: u32,
    history: Vec<ScoreRecord>,
    /// Best record written per player name since process start.
    session_best: HashMap<String, ScoreRecord>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Best score recorded for `name` in this session, if any
    pub fn session_best(&self, name: &str) -> Option<u32> {
        self.session_best.get(name).map(|r| r.score)
    }

    /// Start a new round at zero; the high score survives
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Credit one food and return the points awarded
    pub fn record_food_eaten(&mut self, bw_mode: bool) -> u32 {
        let points = if bw_mode { BW_FOOD_POINTS } else { FOOD_POINTS };
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
        points
    }

    /// Record the finished round stamped with the current local time.
    ///
    /// Returns whether the history changed.
    pub fn finalize_round(&mut self, name: &str) -> bool {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.finalize_round_at(name, timestamp)
    }

    /// Record the finished round with an explicit timestamp.
    pub fn finalize_round_at(&mut self, name: &str, timestamp: impl Into<String>) -> bool {
        if let Some(best) = self.session_best.get(name) {
            if self.score <= best.score {
                return false;
            }
            let previous = best.clone();
            if let Some(pos) = self.history.iter().position(|r| *r == previous) {
                self.history.remove(pos);
            }
        }

        let record = ScoreRecord::new(name, self.score, timestamp);
        self.session_best.insert(name.to_string(), record.clone());
        self.history.push(record);
        self.normalize_history();

        info!(player = name, score = self.score, "round recorded");
        true
    }

    /// Replace history with persisted records.
    ///
    /// Keeps the last `MAX_HISTORY` records in the given order, then sorts.
    pub fn load_history(&mut self, records: Vec<ScoreRecord>) {
        let skip = records.len().saturating_sub(MAX_HISTORY);
        self.history = records.into_iter().skip(skip).collect();
        self.history.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Copy of the history for persistence, sorted and capped
    pub fn export_history(&self) -> Vec<ScoreRecord> {
        self.history.clone()
    }

    pub fn history(&self) -> &[ScoreRecord] {
        &self.history
    }

    /// Rows shown on the leaderboard screen
    pub fn leaderboard(&self) -> &[ScoreRecord] {
        let n = self.history.len().min(LEADERBOARD_ROWS);
        &self.history[..n]
    }

    fn normalize_history(&mut self) {
        // Stable: equal scores keep insertion order, so older rows rank first.
        self.history.sort_by(|a, b| b.score.cmp(&a.score));
        self.history.truncate(MAX_HISTORY);
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
        self.high_score = self.high_score.max(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(board: &ScoreBoard) -> Vec<(String, u32)> {
        board
            .history()
            .iter()
            .map(|r| (r.name.clone(), r.score))
            .collect()
    }

    #[test]
    fn food_points_follow_mode() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.record_food_eaten(false), 10);
        assert_eq!(board.record_food_eaten(true), 20);
        assert_eq!(board.score(), 30);
        assert_eq!(board.high_score(), 30);
    }

    #[test]
    fn high_score_survives_reset() {
        let mut board = ScoreBoard::new();
        board.record_food_eaten(false);
        board.record_food_eaten(false);
        board.reset_score();
        assert_eq!(board.score(), 0);
        assert_eq!(board.high_score(), 20);
        board.record_food_eaten(false);
        assert_eq!(board.high_score(), 20);
    }

    #[test]
    fn lower_round_is_not_persisted() {
        let mut board = ScoreBoard::new();
        board.set_score(50);
        assert!(board.finalize_round_at("Ann", "t1"));
        board.set_score(30);
        assert!(!board.finalize_round_at("Ann", "t2"));
        assert_eq!(names(&board), vec![("Ann".to_string(), 50)]);
    }

    #[test]
    fn equal_round_is_not_persisted() {
        let mut board = ScoreBoard::new();
        board.set_score(50);
        board.finalize_round_at("Ann", "t1");
        assert!(!board.finalize_round_at("Ann", "t2"));
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn improvement_replaces_session_entry() {
        let mut board = ScoreBoard::new();
        board.set_score(50);
        board.finalize_round_at("Ann", "t1");
        board.set_score(70);
        assert!(board.finalize_round_at("Ann", "t2"));

        assert_eq!(names(&board), vec![("Ann".to_string(), 70)]);
        assert_eq!(board.history()[0].timestamp, "t2");
        assert_eq!(board.session_best("Ann"), Some(70));
    }

    #[test]
    fn loaded_rows_for_same_name_are_kept() {
        let mut board = ScoreBoard::new();
        board.load_history(vec![ScoreRecord::new("Ann", 90, "old")]);
        board.set_score(40);
        assert!(board.finalize_round_at("Ann", "new"));
        assert_eq!(
            names(&board),
            vec![("Ann".to_string(), 90), ("Ann".to_string(), 40)]
        );
    }

    #[test]
    fn zero_score_first_round_is_recorded() {
        let mut board = ScoreBoard::new();
        assert!(board.finalize_round_at("", "t"));
        assert_eq!(board.history()[0].score, 0);
    }

    #[test]
    fn history_is_sorted_and_capped() {
        let mut board = ScoreBoard::new();
        for i in 0..40u32 {
            board.set_score((i * 37) % 300);
            board.finalize_round_at(&format!("p{}", i), "t");
        }
        let history = board.history();
        assert_eq!(history.len(), MAX_HISTORY);
        assert!(history.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(board.leaderboard().len(), LEADERBOARD_ROWS);
    }

    #[test]
    fn load_keeps_last_records_in_file_order() {
        let records: Vec<ScoreRecord> = (0..30u32)
            .map(|i| ScoreRecord::new(format!("p{}", i), i, "t"))
            .collect();
        let mut board = ScoreBoard::new();
        board.load_history(records);

        let history = board.export_history();
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history[0].name, "p29");
        assert_eq!(history[MAX_HISTORY - 1].name, "p5");
    }

    #[test]
    fn finalize_stamps_local_time() {
        let mut board = ScoreBoard::new();
        board.set_score(10);
        board.finalize_round("Zed");
        let ts = &board.history()[0].timestamp;
        assert!(ts.ends_with("AM") || ts.ends_with("PM"), "{}", ts);
        assert_eq!(ts.len(), "2024-01-01 01:00:00 AM".len());
    }
}

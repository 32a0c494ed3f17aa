//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The playfield keeps the handheld look: Nokia green background with black
//! pieces, switching to white once black & white mode starts. Menu screens
//! reuse the same frame so the window does not jump between screens.

use crate::core::{display_name, GameSnapshot, RULES};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Screen, HUD_ROWS};

const NOKIA_GREEN: Rgb = Rgb::new(170, 215, 81);
const GRID_LINE: Rgb = Rgb::new(150, 200, 70);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const GREY: Rgb = Rgb::new(150, 150, 150);
const OBSTACLE_RED: Rgb = Rgb::new(255, 0, 0);
const HIGHLIGHT: Rgb = Rgb::new(255, 215, 0);

/// Text screens widen the frame so the longest rule line fits.
const TEXT_FRAME_WIDTH: u16 = 58;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors for one frame, picked from the snapshot's mode
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Rgb,
    grid_dot: Rgb,
    ink: Rgb,
    obstacle: Rgb,
}

impl Palette {
    fn for_mode(bw_mode: bool) -> Self {
        if bw_mode {
            Self {
                background: WHITE,
                grid_dot: Rgb::new(200, 200, 200),
                ink: BLACK,
                obstacle: BLACK,
            }
        } else {
            Self {
                background: NOKIA_GREEN,
                grid_dot: GRID_LINE,
                ink: BLACK,
                obstacle: OBSTACLE_RED,
            }
        }
    }
}

/// Placement of the playfield frame inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Frame {
    fn center_x(&self, text: &str) -> u16 {
        let text_w = text.chars().count() as u16;
        self.x + self.w.saturating_sub(text_w) / 2
    }
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(snap, viewport);
        let palette = Palette::for_mode(snap.bw_mode);
        let border = CellStyle::default();
        self.draw_border(fb, frame, border);

        match snap.screen {
            Screen::MainMenu => self.draw_main_menu(fb, frame),
            Screen::Rules => self.draw_rules(fb, frame),
            Screen::Leaderboard => self.draw_leaderboard(fb, snap, frame),
            Screen::NameEntry => self.draw_name_entry(fb, snap, frame),
            Screen::Playing | Screen::Paused | Screen::GameOver | Screen::Completed => {
                self.draw_playfield(fb, snap, frame, palette);
                self.draw_hud(fb, snap, frame, palette);
                match snap.screen {
                    Screen::Paused => self.draw_overlay(fb, frame, &["PAUSED"]),
                    Screen::GameOver => self.draw_game_over(fb, snap, frame),
                    Screen::Completed => self.draw_completed(fb, snap, frame),
                    _ => {}
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let cols = u16::try_from(snap.grid_width.max(1)).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.grid_height.max(1)).unwrap_or(u16::MAX);
        let mut w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_mul(self.cell_h).saturating_add(2);
        if !snap.screen.in_round() {
            w = w.max(TEXT_FRAME_WIDTH);
        }
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_playfield(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame: Frame,
        palette: Palette,
    ) {
        let dot = CellStyle::new(palette.grid_dot, palette.background);
        for y in 0..snap.grid_height {
            for x in 0..snap.grid_width {
                let ch = if y >= HUD_ROWS { '·' } else { ' ' };
                self.fill_cell(fb, frame, x, y, ch, dot);
            }
        }

        let food_fg = if snap.bw_mode { palette.ink } else { snap.food_color };
        self.fill_cell(
            fb,
            frame,
            snap.food.x,
            snap.food.y,
            '█',
            CellStyle::new(food_fg, palette.background),
        );

        let obstacle = CellStyle::new(palette.obstacle, palette.background);
        for cell in &snap.obstacles {
            self.fill_cell(fb, frame, cell.x, cell.y, '█', obstacle);
        }

        let body = CellStyle::new(palette.ink, palette.background);
        for cell in snap.snake.iter().skip(1) {
            self.fill_cell(fb, frame, cell.x, cell.y, '▓', body);
        }
        if let Some(head) = snap.head() {
            self.fill_cell(fb, frame, head.x, head.y, '█', body.bold());
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame, palette: Palette) {
        let style = CellStyle::new(palette.ink, palette.background).bold();
        let x = frame.x + 2;
        let y = frame.y + 1;

        fb.put_str(x, y, "SCORE ", style);
        fb.put_u32(x + 6, y, snap.score, style);

        let hi_x = x + 14;
        fb.put_str(hi_x, y, "HI ", style);
        fb.put_u32(hi_x + 3, y, snap.high_score, style);

        let marker = if snap.paused { "||" } else { "> " };
        let marker_x = (frame.x + frame.w).saturating_sub(4);
        fb.put_str(marker_x, y, marker, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: CellStyle,
    ) {
        // Heads past the top or bottom wall are not drawn.
        let (Ok(cx), Ok(cy)) = (u16::try_from(cell_x), u16::try_from(cell_y)) else {
            return;
        };
        let px = (frame.x + 1).saturating_add(cx.saturating_mul(self.cell_w));
        let py = (frame.y + 1).saturating_add(cy.saturating_mul(self.cell_h));
        let right = (frame.x + frame.w).saturating_sub(1);
        let bottom = (frame.y + frame.h).saturating_sub(1);
        if px.saturating_add(self.cell_w) > right || py.saturating_add(self.cell_h) > bottom {
            return;
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_main_menu(&self, fb: &mut FrameBuffer, frame: Frame) {
        let title = CellStyle::new(NOKIA_GREEN, BLACK).bold();
        let text = CellStyle::default();
        let mut y = frame.y + 2;
        self.put_centered(fb, frame, y, "S N A K E", title);
        y += 3;
        for line in ["P - Play", "R - Rules", "L - Leaderboard", "Q - Quit"] {
            self.put_centered(fb, frame, y, line, text);
            y += 2;
        }
    }

    fn draw_rules(&self, fb: &mut FrameBuffer, frame: Frame) {
        let title = CellStyle::default().bold();
        let text = CellStyle::default();
        self.put_centered(fb, frame, frame.y + 1, "RULES", title);

        let mut y = frame.y + 3;
        for (i, line) in RULES.iter().enumerate() {
            let x = frame.x + 2;
            fb.put_u32(x, y, i as u32 + 1, text);
            fb.put_str(x + 2, y, ". ", text);
            fb.put_str(x + 4, y, line, text);
            y += 1;
        }
        self.put_footer(fb, frame, "ESC - Back");
    }

    fn draw_leaderboard(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let title = CellStyle::default().bold();
        let text = CellStyle::default();
        let best = CellStyle::new(HIGHLIGHT, BLACK).bold();
        self.put_centered(fb, frame, frame.y + 1, "LEADERBOARD", title);

        if snap.leaderboard.is_empty() {
            self.put_centered(fb, frame, frame.y + 4, "No scores yet", text);
        }

        let x = frame.x + 2;
        let mut y = frame.y + 3;
        for (i, row) in snap.leaderboard.iter().enumerate() {
            let style = if row.best { best } else { text };
            let n = fb.put_u32(x, y, i as u32 + 1, style);
            fb.put_str(x + n, y, ".", style);
            fb.put_str(x + 4, y, display_name(&row.name), style);
            fb.put_u32(x + 21, y, row.score, style);
            fb.put_str(x + 26, y, &row.timestamp, CellStyle::new(GREY, BLACK));
            y += 1;
        }
        self.put_footer(fb, frame, "ESC - Back");
    }

    fn draw_name_entry(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let text = CellStyle::default();
        let input = CellStyle::new(NOKIA_GREEN, BLACK).bold();
        let mid = frame.y + frame.h / 2;

        self.put_centered(fb, frame, mid.saturating_sub(2), "Enter your name:", text);
        let field = format!("{}_", snap.player_name);
        self.put_centered(fb, frame, mid, &field, input);
        self.put_footer(fb, frame, "ENTER - Start   ESC - Back");
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let score = format!("{}: {}", display_name(&snap.player_name), snap.score);
        self.draw_overlay(fb, frame, &["GAME OVER", score.as_str(), "SPACE - Restart", "ESC - Menu"]);
    }

    fn draw_completed(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let score = format!("{}: {}", display_name(&snap.player_name), snap.score);
        self.draw_overlay(fb, frame, &["YOU WIN!", score.as_str(), "SPACE / ESC - Menu"]);
    }

    /// Lines centered on the playfield, one blank row apart
    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(WHITE, BLACK).bold();
        let span = (lines.len() as u16 * 2).saturating_sub(1);
        let mut y = (frame.y + frame.h / 2).saturating_sub(span / 2);
        for line in lines {
            let padded = format!(" {} ", line);
            self.put_centered(fb, frame, y, &padded, style);
            y += 2;
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
        fb.put_str(frame.center_x(text), y, text, style);
    }

    fn put_footer(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let y = (frame.y + frame.h).saturating_sub(2);
        self.put_centered(fb, frame, y, text, CellStyle::new(GREY, BLACK));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LeaderboardRow;
    use crate::types::Cell as GridCell;

    fn snapshot(screen: Screen) -> GameSnapshot {
        GameSnapshot {
            screen,
            grid_width: 20,
            grid_height: 20,
            ..GameSnapshot::default()
        }
    }

    fn playing() -> GameSnapshot {
        let mut snap = snapshot(Screen::Playing);
        snap.snake = vec![
            GridCell::new(10, 10),
            GridCell::new(9, 10),
            GridCell::new(8, 10),
        ];
        snap.food = GridCell::new(3, 5);
        snap.food_color = Rgb::new(200, 60, 60);
        snap
    }

    fn contains_text(fb: &FrameBuffer, text: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(text))
    }

    /// Column and row where `text` first appears
    fn find_text(fb: &FrameBuffer, text: &str) -> Option<(u16, u16)> {
        let needle: Vec<char> = text.chars().collect();
        (0..fb.height()).find_map(|y| {
            let row: Vec<char> = fb.row_text(y).chars().collect();
            row.windows(needle.len())
                .position(|w| w == needle.as_slice())
                .map(|x| (x as u16, y))
        })
    }

    // Frame is 42x22 centered in 60x30: origin (9, 4).
    fn cell_at(fb: &FrameBuffer, x: u16, y: u16) -> Cell {
        fb.get(9 + 1 + x * 2, 4 + 1 + y).unwrap_or_default()
    }

    #[test]
    fn main_menu_lists_options() {
        let fb = GameView::default().render(&snapshot(Screen::MainMenu), Viewport::new(60, 30));
        assert!(contains_text(&fb, "P - Play"));
        assert!(contains_text(&fb, "L - Leaderboard"));
    }

    #[test]
    fn rules_screen_shows_every_rule() {
        let fb = GameView::default().render(&snapshot(Screen::Rules), Viewport::new(60, 30));
        for rule in RULES {
            assert!(contains_text(&fb, rule), "missing {}", rule);
        }
    }

    #[test]
    fn name_entry_shows_typed_name() {
        let mut snap = snapshot(Screen::NameEntry);
        snap.player_name = "Ann".to_string();
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert!(contains_text(&fb, "Ann_"));
    }

    #[test]
    fn leaderboard_highlights_best_row() {
        let mut snap = snapshot(Screen::Leaderboard);
        snap.leaderboard = vec![
            LeaderboardRow {
                name: "Ann".into(),
                score: 70,
                timestamp: "t".into(),
                best: true,
            },
            LeaderboardRow {
                name: String::new(),
                score: 40,
                timestamp: "t".into(),
                best: false,
            },
        ];
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert!(contains_text(&fb, "Ann"));
        assert!(contains_text(&fb, "Anonymous"));

        let (x, y) = find_text(&fb, "Ann").unwrap();
        assert_eq!(fb.get(x, y).unwrap().style.fg, HIGHLIGHT);
        let (x, y) = find_text(&fb, "Anonymous").unwrap();
        assert_eq!(fb.get(x, y).unwrap().style.fg, Rgb::new(220, 220, 220));
    }

    #[test]
    fn empty_leaderboard_message() {
        let fb = GameView::default().render(&snapshot(Screen::Leaderboard), Viewport::new(60, 30));
        assert!(contains_text(&fb, "No scores yet"));
    }

    #[test]
    fn playfield_draws_snake_and_food() {
        let fb = GameView::default().render(&playing(), Viewport::new(60, 30));
        let head = cell_at(&fb, 10, 10);
        assert_eq!(head.ch, '█');
        assert_eq!(head.style.fg, BLACK);
        assert_eq!(head.style.bg, NOKIA_GREEN);
        assert_eq!(cell_at(&fb, 9, 10).ch, '▓');

        let food = cell_at(&fb, 3, 5);
        assert_eq!(food.style.fg, Rgb::new(200, 60, 60));
        assert_eq!(cell_at(&fb, 0, 19).ch, '·');
        assert!(contains_text(&fb, "SCORE 0"));
    }

    #[test]
    fn bw_mode_switches_palette() {
        let mut snap = playing();
        snap.bw_mode = true;
        snap.obstacles.push(GridCell::new(5, 15));
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert_eq!(cell_at(&fb, 10, 10).style.bg, WHITE);
        assert_eq!(cell_at(&fb, 3, 5).style.fg, BLACK);
        assert_eq!(cell_at(&fb, 5, 15).style.fg, BLACK);
    }

    #[test]
    fn obstacles_are_red_in_color_mode() {
        let mut snap = playing();
        snap.obstacles.push(GridCell::new(5, 15));
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert_eq!(cell_at(&fb, 5, 15).style.fg, OBSTACLE_RED);
    }

    #[test]
    fn overlays_for_round_end() {
        let mut snap = playing();
        snap.screen = Screen::GameOver;
        snap.player_name = "Bo".into();
        snap.score = 40;
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "Bo: 40"));

        snap.screen = Screen::Completed;
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert!(contains_text(&fb, "YOU WIN!"));

        snap.screen = Screen::Paused;
        snap.paused = true;
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        assert!(contains_text(&fb, "PAUSED"));
    }

    #[test]
    fn head_past_wall_is_skipped() {
        let mut snap = playing();
        snap.snake[0] = GridCell::new(10, -1);
        snap.screen = Screen::GameOver;
        GameView::default().render(&snap, Viewport::new(60, 30));

        snap.snake[0] = GridCell::new(10, 20);
        GameView::default().render(&snap, Viewport::new(60, 30));
    }

    #[test]
    fn oversized_grid_clips_instead_of_overflowing() {
        let mut snap = playing();
        snap.grid_width = 40_000;
        snap.food = GridCell::new(39_999, 5);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&playing(), Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}

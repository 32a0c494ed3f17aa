//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! - [`GameView`] turns a snapshot into a framebuffer (pure, testable)
//! - [`TerminalRenderer`] writes framebuffers to the terminal, diffing frames
//! - Each grid cell is two columns wide to offset the glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use snake_arcade_core as core;
pub use snake_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

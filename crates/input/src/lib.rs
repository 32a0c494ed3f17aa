//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The mapping is
//! screen-aware: on the name entry screen printable keys type characters,
//! everywhere else they are shortcuts.

pub mod map;

pub use snake_arcade_types as types;

pub use map::{handle_key_event, should_quit};

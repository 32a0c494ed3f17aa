//! Snake arcade (workspace facade crate).
//!
//! Re-exports the member crates under `snake_arcade::{core,input,term,types}`
//! and holds the pieces that touch the host: environment configuration, the
//! score file and log setup.

pub mod config;
pub mod logging;
pub mod store;

pub use snake_arcade_core as core;
pub use snake_arcade_input as input;
pub use snake_arcade_term as term;
pub use snake_arcade_types as types;

pub use config::GameConfig;
pub use store::ScoreStore;

//! Torus Snake - a Snake game on a wrap-around board
//!
//! This library provides:
//! - Core simulation (game module)
//! - Draw commands and terminal rendering (render module)
//! - Keyboard and synthetic input sources (input module)
//! - Tick pacing (clock module)
//! - In-memory session stats (metrics module)
//! - Execution modes (play, headless)

pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

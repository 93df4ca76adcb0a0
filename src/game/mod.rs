//! Core game logic module for Snake
//!
//! The board is a torus: leaving one edge re-enters from the opposite one.
//! Everything here is free of terminal I/O; drawing goes through
//! [`crate::render::RenderSink`] and input through [`crate::input::InputSource`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, InputEvent};
pub use config::{ConfigError, GameConfig, Palette, Rgb};
pub use engine::{GameLoop, RunSummary, TickOutcome};
pub use food::Food;
pub use grid::{Grid, Position};
pub use snake::Snake;

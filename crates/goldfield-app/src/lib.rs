//! GOLDFIELD headless runner.
//!
//! This crate wires the simulation crates to a terminal: CLI parsing,
//! logging bootstrap, the real-time game loop thread, and console commands.

pub mod console;
pub mod game_loop;
pub mod state;
pub mod telemetry;

pub use goldfield_core as core;

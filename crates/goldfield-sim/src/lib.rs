//! Simulation engine for GOLDFIELD.
//!
//! Owns the hecs ECS world, runs the per-frame systems, applies player
//! commands, and produces GameStateSnapshots for the renderer.

pub mod economy;
pub mod engine;
pub mod interpreter;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use goldfield_core as core;
pub use goldfield_terrain as terrain;
pub use engine::{SimConfig, SimulationEngine};

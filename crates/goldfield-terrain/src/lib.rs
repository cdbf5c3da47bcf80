//! Terrain for GOLDFIELD.
//!
//! The static tile grid: generated once at startup, immutable afterwards.

pub use goldfield_core as core;

pub mod grid;

pub use grid::{Tile, TileGrid};

//! Core types and definitions for the GOLDFIELD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid coordinates, components, commands, rules, state snapshots,
//! events, errors, and constants. Apart from `hecs::Entity` handles in
//! components it has no dependency on the ECS runtime, and none on any
//! I/O frontend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod rules;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

//! Error types for configuration loading and command handling.

use thiserror::Error;

use crate::enums::UnitKind;

/// Errors raised while loading or validating a rules file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Rules file could not be read.
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// Rules file is not valid TOML or has unknown fields.
    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Reasons a player command was rejected. A rejected command leaves the
/// simulation state untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("no unit at cell ({x}, {y})")]
    NoUnitAtCell { x: i32, y: i32 },

    #[error("cell ({x}, {y}) is occupied by a building")]
    CellOccupied { x: i32, y: i32 },

    #[error("insufficient gold for {kind:?}: costs {cost}, have {available:.1}")]
    InsufficientGold {
        kind: UnitKind,
        cost: f64,
        available: f64,
    },
}

//! Line-oriented console commands for the real-time runner.
//!
//! ```text
//! click 3 4          place / toggle on cell (3, 4)
//! pixel 130.5 88     click at canvas pixel coordinates
//! task 3 4 attack    assign a task (idle | mine | attack)
//! select soldier     choose the next purchase (worker | soldier)
//! pause | resume
//! status             print the latest snapshot summary
//! quit
//! ```

use std::str::FromStr;

use thiserror::Error;

use goldfield_core::commands::PlayerCommand;
use goldfield_core::enums::{UnitKind, UnitTask};

use crate::state::GameLoopCommand;

/// A parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Forwarded to the game loop.
    Loop(GameLoopCommand),
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("unknown task '{0}' (idle, mine, attack)")]
    UnknownTask(String),

    #[error("unknown unit kind '{0}' (worker, soldier)")]
    UnknownUnitKind(String),

    #[error("expected a cell as 'x,y', got '{0}'")]
    InvalidCell(String),
}

/// Parse one console line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["click", x, y] => forward(PlayerCommand::Click {
            x: number(x)?,
            y: number(y)?,
        }),
        ["click", ..] => Err(usage("click", "<x> <y>")),
        ["pixel", px, py] => Ok(Some(ConsoleCommand::Loop(GameLoopCommand::PixelClick {
            px: number(px)?,
            py: number(py)?,
        }))),
        ["pixel", ..] => Err(usage("pixel", "<px> <py>")),
        ["task", x, y, task] => forward(PlayerCommand::AssignTask {
            x: number(x)?,
            y: number(y)?,
            task: parse_task(task)?,
        }),
        ["task", ..] => Err(usage("task", "<x> <y> <idle|mine|attack>")),
        ["select", kind] => forward(PlayerCommand::SelectPurchase {
            kind: parse_unit_kind(kind)?,
        }),
        ["select", ..] => Err(usage("select", "<worker|soldier>")),
        ["pause"] => forward(PlayerCommand::Pause),
        ["resume"] => forward(PlayerCommand::Resume),
        ["status"] => Ok(Some(ConsoleCommand::Status)),
        ["quit"] | ["exit"] => Ok(Some(ConsoleCommand::Quit)),
        [other, ..] => Err(ParseError::UnknownCommand(other.to_string())),
        [] => Ok(None),
    }
}

/// Parse a `x,y` cell, as taken by `--click`.
pub fn parse_cell(s: &str) -> Result<(i32, i32), ParseError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| ParseError::InvalidCell(s.to_string()))?;
    let x = x.trim().parse().map_err(|_| ParseError::InvalidCell(s.to_string()))?;
    let y = y.trim().parse().map_err(|_| ParseError::InvalidCell(s.to_string()))?;
    Ok((x, y))
}

pub fn parse_task(s: &str) -> Result<UnitTask, ParseError> {
    match s {
        "idle" => Ok(UnitTask::Idle),
        "mine" => Ok(UnitTask::Mine),
        "attack" => Ok(UnitTask::Attack),
        other => Err(ParseError::UnknownTask(other.to_string())),
    }
}

pub fn parse_unit_kind(s: &str) -> Result<UnitKind, ParseError> {
    match s {
        "worker" => Ok(UnitKind::Worker),
        "soldier" => Ok(UnitKind::Soldier),
        other => Err(ParseError::UnknownUnitKind(other.to_string())),
    }
}

fn forward(command: PlayerCommand) -> Result<Option<ConsoleCommand>, ParseError> {
    Ok(Some(ConsoleCommand::Loop(GameLoopCommand::PlayerCommand(
        command,
    ))))
}

fn number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

fn usage(command: &'static str, expected: &'static str) -> ParseError {
    ParseError::Usage { command, expected }
}

//! Errors for loading configuration and levels
//!
//! The simulation itself never fails; only parsing and lookup do.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    NonPositiveCanvas { width: f32, height: f32 },
    NoRoomForPlayer { canvas_height: f32, ground_height: f32, player_size: f32 },
    CoinDropRange { min: u32, max: u32 },
    ZeroJumpInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::NonPositiveCanvas { width, height } => {
                write!(f, "canvas must be positive: got {width}x{height}")
            }
            Self::NoRoomForPlayer {
                canvas_height,
                ground_height,
                player_size,
            } => write!(
                f,
                "canvas height {canvas_height} leaves no room for ground {ground_height} and player {player_size}"
            ),
            Self::CoinDropRange { min, max } => {
                write!(f, "enemy coin drop range is empty: {min}..={max}")
            }
            Self::ZeroJumpInterval => write!(f, "enemy jump interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[derive(Debug)]
pub enum LevelError {
    Parse(serde_json::Error),
    NonPositiveLength { id: u32, length: f32 },
    UnknownLevel { id: u32 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid level json: {err}"),
            Self::NonPositiveLength { id, length } => {
                write!(f, "level {id} has non-positive length {length}")
            }
            Self::UnknownLevel { id } => write!(f, "no built-in level with id {id}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

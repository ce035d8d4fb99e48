//! Error types
//!
//! The simulation itself is total. Errors only come from rejected
//! configuration and from collaborators outside the core.

use thiserror::Error;

/// A `GameConfig` that cannot describe a playable game
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("arena must have a positive finite size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("fps must be greater than zero")]
    ZeroFps,

    #[error("paddle must have a positive size, got {width}x{height}")]
    InvalidPaddleSize { width: f32, height: f32 },

    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("paddles with inset {inset} and width {width} do not fit side by side in arena width {arena}")]
    PaddlesOverlap { inset: f32, width: f32, arena: f32 },

    #[error("{what} speed must be finite and non-negative, got {value}")]
    InvalidSpeed { what: &'static str, value: f32 },

    #[error("ball radius {radius} must be non-negative and fit in the arena")]
    InvalidBallRadius { radius: f32 },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// A renderer could not take the frame
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("renderer i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Encode(String),
}

/// Why a game loop could not start or stopped early
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

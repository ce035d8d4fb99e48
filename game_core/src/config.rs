use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{Ball, Paddle, Side};
use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::map::Arena;
use crate::params::Params;

/// Colors handed to whatever draws the game (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: [u8; 3],
    pub paddle: [u8; 3],
    pub ball: [u8; 3],
    pub text: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Params::BACKGROUND,
            paddle: Params::PADDLE_COLOR,
            ball: Params::BALL_COLOR,
            text: Params::TEXT_COLOR,
        }
    }
}

/// Game configuration
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides. Use [`GameConfig::validate`] (or [`GameConfig::from_json`])
/// before building a game from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub fps: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub palette: Palette,
    pub player_names: [String; 2],
    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            fps: Params::FPS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            palette: Palette::default(),
            player_names: [
                Params::LEFT_PLAYER_NAME.to_string(),
                Params::RIGHT_PLAYER_NAME.to_string(),
            ],
            bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.arena_width, self.arena_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidArena {
                width: w,
                height: h,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::InvalidPaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > h {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: h,
            });
        }
        if !(self.paddle_inset >= 0.0 && 2.0 * (self.paddle_inset + self.paddle_width) <= w) {
            return Err(ConfigError::PaddlesOverlap {
                inset: self.paddle_inset,
                width: self.paddle_width,
                arena: w,
            });
        }
        for (what, value) in [("paddle", self.paddle_speed), ("ball", self.ball_speed)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpeed { what, value });
            }
        }
        let diameter = self.ball_radius * 2.0;
        if !(self.ball_radius >= 0.0 && diameter <= w && diameter <= h) {
            return Err(ConfigError::InvalidBallRadius {
                radius: self.ball_radius,
            });
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.arena().center()
    }

    /// A paddle as it stands at the start of a session, top edge at y = 0
    pub fn spawn_paddle(&self, side: Side) -> Paddle {
        Paddle::new(
            side,
            self.paddle_x(side),
            0.0,
            self.paddle_size(),
            self.paddle_speed,
        )
    }

    /// The ball at kick-off: centered, serving right and upward
    pub fn spawn_ball(&self) -> Ball {
        Ball::new(self.ball_spawn(), self.ball_radius, self.ball_speed)
    }

    /// HUD text for one player's score, e.g. `Geek_1 : 3`
    pub fn score_label(&self, side: Side, score: u64) -> String {
        format!("{} : {}", self.player_names[side.index()], score)
    }

    /// Center point of a player's score text
    pub fn score_anchor(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => Params::SCORE_ANCHOR_INSET,
            Side::Right => self.arena_width - Params::SCORE_ANCHOR_INSET,
        };
        Vec2::new(x, Params::SCORE_ANCHOR_Y)
    }
}

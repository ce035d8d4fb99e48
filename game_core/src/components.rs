use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::map::{Arena, Rect};

/// Which half of the arena a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Numeric scoring signal: +1 when the right player scores, -1 for the left
    pub fn signal(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Vertical velocity factor of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Motion {
    Up,
    #[default]
    Idle,
    Down,
}

impl Motion {
    pub fn factor(self) -> i8 {
        match self {
            Motion::Up => -1,
            Motion::Idle => 0,
            Motion::Down => 1,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // fixed at creation
    pub y: f32, // top edge, clamped to arena
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width: size.x,
            height: size.y,
            speed,
        }
    }

    /// Move by one step of `motion` and clamp into `[0, H - height]`
    pub fn update(&mut self, motion: Motion, arena: &Arena) {
        self.y += self.speed * motion.factor() as f32;
        self.y = arena.clamp_top(self.y, self.height);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Movement intent for paddle, written from input once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub motion: Motion,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Sign of travel on each axis, every component is -1 or +1
    pub dir: IVec2,
    pub radius: f32,
    pub speed: f32,
    /// Set by `reset`, cleared by the first exit past a side wall
    pub exit_armed: bool,
}

impl Ball {
    /// Ball served right and upward
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            dir: IVec2::new(1, -1),
            radius,
            speed,
            exit_armed: true,
        }
    }

    /// Advance one step. Returns the side that scored when the ball leaves the
    /// arena through a side wall, at most once between two resets.
    pub fn update(&mut self, arena: &Arena) -> Option<Side> {
        if self.on_wall(arena) {
            self.dir.y = -self.dir.y;
        }

        self.pos += self.dir.as_vec2() * self.speed;
        self.pos.y = self.pos.y.max(0.0).min(arena.height.max(0.0));

        if !self.exit_armed {
            return None;
        }
        if self.pos.x <= 0.0 {
            self.exit_armed = false;
            Some(Side::Right)
        } else if self.pos.x >= arena.width {
            self.exit_armed = false;
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Back to center, serving toward the other side
    pub fn reset(&mut self, arena: &Arena) {
        self.pos = arena.center();
        self.dir.x = -self.dir.x;
        self.exit_armed = true;
    }

    /// Reflect horizontally after touching a paddle
    pub fn hit(&mut self) {
        self.dir.x = -self.dir.x;
    }

    /// Bounding square of the ball
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// True while the ball sits on a wall it is about to bounce off
    pub fn on_wall(&self, arena: &Arena) -> bool {
        (self.pos.y <= 0.0 && self.dir.y < 0) || (self.pos.y >= arena.height && self.dir.y > 0)
    }
}

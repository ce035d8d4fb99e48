//! Fixed-rate game loop
//!
//! Owns the authoritative simulation state and sequences one tick as
//! input → collision → paddles → ball → score → render.

use hecs::{Entity, World};

use crate::error::{ConfigError, GameError};
use crate::input::{InputEvent, InputState};
use crate::io::{Clock, InputSource, RenderSnapshot, Renderer};
use crate::{create_ball, create_paddle, step, Ball, Events, GameConfig, Paddle, ScoreTracker, Side};

/// Loop lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Outcome of [`GameLoop::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub score: ScoreTracker,
}

pub struct GameLoop {
    world: World,
    left: Entity,
    right: Entity,
    ball: Entity,
    config: GameConfig,
    input: InputState,
    score: ScoreTracker,
    events: Events,
    state: LoopState,
    tick: u64,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(&mut world, &config);

        Ok(Self {
            world,
            left,
            right,
            ball,
            config,
            input: InputState::new(),
            score: ScoreTracker::new(),
            events: Events::new(),
            state: LoopState::Running,
            tick: 0,
        })
    }

    /// Fold a batch of device events into the input snapshot for the next tick
    pub fn ingest<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Key(key) => {
                    log::trace!("input {:?} pressed={}", key.control, key.pressed);
                    self.input.apply(key);
                }
                InputEvent::Quit => self.stop(),
            }
        }
    }

    /// Run one simulation tick. Does nothing once stopped.
    ///
    /// Returns the side that scored during this tick, if any.
    pub fn tick(&mut self) -> Option<Side> {
        if !self.is_running() {
            return None;
        }
        self.advance()
    }

    fn advance(&mut self) -> Option<Side> {
        let signal = step(
            &mut self.world,
            &self.config.arena(),
            &self.input,
            &mut self.score,
            &mut self.events,
        );
        self.tick += 1;

        if self.tick % u64::from(self.config.fps) == 0 {
            let snapshot = self.snapshot();
            log::debug!(
                "tick={} ball=({:.1}, {:.1}) paddles=({:.1}, {:.1}) score={}-{}",
                self.tick,
                snapshot.ball_center.x,
                snapshot.ball_center.y,
                snapshot.left_paddle.y,
                snapshot.right_paddle.y,
                self.score.left,
                self.score.right
            );
        }

        signal
    }

    /// Drive the loop until it is stopped
    pub fn run<I, R, C>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
    ) -> Result<RunSummary, GameError>
    where
        I: InputSource,
        R: Renderer,
        C: Clock,
    {
        log::info!(
            "game loop starting: {}x{} arena at {} fps",
            self.config.arena_width,
            self.config.arena_height,
            self.config.fps
        );

        while self.is_running() {
            self.ingest(input.drain());
            // A quit seen above still lets this tick complete
            self.advance();
            renderer.present(&self.snapshot())?;
            clock.tick(self.config.fps);
        }

        log::info!(
            "game loop stopped after {} ticks, final score {} - {}",
            self.tick,
            self.score.left,
            self.score.right
        );
        Ok(RunSummary {
            ticks: self.tick,
            score: self.score,
        })
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("stop requested at tick {}", self.tick);
        }
        self.state = LoopState::Stopped;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let ball = self.ball();
        RenderSnapshot {
            tick: self.tick,
            left_paddle: self.paddle(Side::Left).bounds(),
            right_paddle: self.paddle(Side::Right).bounds(),
            ball_center: ball.pos,
            ball_radius: ball.radius,
            left_score: self.score.left,
            right_score: self.score.right,
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|p| *p)
            .unwrap_or_else(|_| self.config.spawn_paddle(side))
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| self.config.spawn_ball())
    }

    /// Direct access to the ball, for hosts that place it (tests, replays)
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn score(&self) -> ScoreTracker {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

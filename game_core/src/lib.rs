pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod io;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use io::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::{check_collisions, check_scoring, ingest_inputs, move_ball, move_paddles};

/// Run one deterministic Pong simulation tick.
///
/// Returns the side that scored, if the ball left the arena this tick.
pub fn step(
    world: &mut World,
    arena: &Arena,
    input: &InputState,
    score: &mut ScoreTracker,
    events: &mut Events,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Check collisions against the paddles as they were last frame
    check_collisions(world, events);

    // 3. Move paddles based on intents
    move_paddles(world, arena);

    // 4. Move ball
    let signal = move_ball(world, arena, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, signal, arena, score, events);

    signal
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, config: &GameConfig, side: Side) -> hecs::Entity {
    world.spawn((config.spawn_paddle(side), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &GameConfig) -> hecs::Entity {
    world.spawn((config.spawn_ball(),))
}

use hecs::World;

use crate::components::*;
use crate::input::InputState;

/// Copy this tick's input snapshot into the paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.motion = input.motion(paddle.side);
    }
}

use crate::{Arena, Ball, Events, ScoreTracker, Side};
use hecs::World;

/// Credit the scoring player and serve again from the center
pub fn check_scoring(
    world: &mut World,
    signal: Option<Side>,
    arena: &Arena,
    score: &mut ScoreTracker,
    events: &mut Events,
) {
    score.apply(signal);
    let Some(side) = signal else {
        return;
    };

    events.scored(side);
    log::info!("{:?} player scores ({} - {})", side, score.left, score.right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(arena);
    }
}

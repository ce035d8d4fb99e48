use crate::{Ball, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the first paddle its bounding square overlaps.
///
/// Paddles are tested in the order given and at most one of them is applied
/// per call, so a ball touching both paddles in the same frame flips once.
/// The ball's direction is not consulted: a ball that stays inside a paddle
/// flips again on every call until it gets clear.
/// Returns the side of the paddle that was hit.
pub fn resolve(ball: &mut Ball, paddles: &[Paddle]) -> Option<Side> {
    let ball_rect = ball.bounds();
    let hit = paddles
        .iter()
        .find(|paddle| paddle.bounds().intersects(&ball_rect))?;
    ball.hit();
    Some(hit.side)
}

/// Check the ball against both paddles
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side.index());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = resolve(ball, &paddles) {
            log::debug!("ball hit {:?} paddle at ({:.1}, {:.1})", side, ball.pos.x, ball.pos.y);
            events.ball_hit_paddle = true;
        }
    }
}

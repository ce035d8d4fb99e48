use crate::{Arena, Ball, Events, Paddle, PaddleIntent, Side};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, arena: &Arena) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.update(intent.motion, arena);
    }
}

/// Move the ball one step. Returns the scoring side if it left the arena.
pub fn move_ball(world: &mut World, arena: &Arena, events: &mut Events) -> Option<Side> {
    let mut signal = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.on_wall(arena) {
            events.ball_hit_wall = true;
        }
        if let Some(side) = ball.update(arena) {
            signal = Some(side);
        }
    }
    signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, GameConfig, Motion};
    use glam::Vec2;

    #[test]
    fn test_paddles_follow_intent() {
        let mut world = World::new();
        let config = GameConfig::new();
        let arena = config.arena();
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);
        world.get::<&mut PaddleIntent>(left).unwrap().motion = Motion::Down;
        world.get::<&mut PaddleIntent>(right).unwrap().motion = Motion::Up;

        move_paddles(&mut world, &arena);

        assert_eq!(world.get::<&Paddle>(left).unwrap().y, 10.0);
        assert_eq!(
            world.get::<&Paddle>(right).unwrap().y,
            0.0,
            "Right paddle starts at the top and cannot rise further"
        );
    }

    #[test]
    fn test_move_ball_reports_wall_bounce() {
        let mut world = World::new();
        let config = GameConfig::new();
        let arena = config.arena();
        let ball = create_ball(&mut world, &config);
        world.get::<&mut Ball>(ball).unwrap().pos = Vec2::new(450.0, 0.0);
        let mut events = Events::new();

        let signal = move_ball(&mut world, &arena, &mut events);

        assert_eq!(signal, None);
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(457.0, 7.0));
    }

    #[test]
    fn test_move_ball_reports_exit() {
        let mut world = World::new();
        let config = GameConfig::new();
        let arena = config.arena();
        let ball = create_ball(&mut world, &config);
        world.get::<&mut Ball>(ball).unwrap().pos = Vec2::new(895.0, 300.0);
        let mut events = Events::new();

        assert_eq!(move_ball(&mut world, &arena, &mut events), Some(Side::Left));
        assert!(!events.ball_hit_wall);
    }
}

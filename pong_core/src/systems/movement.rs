use crate::{Config, Paddle, PaddleIntent, Puck};
use hecs::World;

/// Shift a paddle by `speed` (negative = up) and clamp it to the field
pub fn move_paddle(paddle: &mut Paddle, speed: f32, config: &Config) {
    paddle.y = config.clamp_paddle_y(paddle.y + speed);
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            move_paddle(paddle, intent.dir as f32 * config.paddle_speed, config);
        }
    }
}

/// Advance the puck by one tick of velocity
pub fn integrate(puck: &mut Puck) {
    puck.pos += puck.vel;
}

/// Move puck based on velocity
pub fn move_puck(world: &mut World) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        integrate(puck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, create_puck, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_move_paddle_clamps_top() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, 20.0, 3.0, 20.0, config.paddle_height);
        move_paddle(&mut paddle, -config.paddle_speed, &config);
        assert_eq!(paddle.y, 0.0);
        assert_eq!(paddle.top().y, 0.0);
    }

    #[test]
    fn test_move_paddle_clamps_bottom() {
        let config = Config::new();
        let max_y = config.field_height - config.paddle_height;
        let mut paddle = Paddle::new(Side::Right, 1240.0, max_y - 1.0, 20.0, config.paddle_height);
        move_paddle(&mut paddle, config.paddle_speed, &config);
        assert_eq!(paddle.y, max_y);
        assert_eq!(paddle.bottom().y, config.field_height);
    }

    #[test]
    fn test_move_paddles_follows_intent() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, &config, Side::Left, 300.0);
        let right = create_paddle(&mut world, &config, Side::Right, 300.0);
        world.get::<&mut PaddleIntent>(left).unwrap().dir = -1;
        world.get::<&mut PaddleIntent>(right).unwrap().dir = 0;

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(left).unwrap().y, 300.0 - config.paddle_speed);
        assert_eq!(world.get::<&Paddle>(right).unwrap().y, 300.0);
    }

    #[test]
    fn test_move_puck_integrates_velocity() {
        let mut world = World::new();
        let puck = create_puck(
            &mut world,
            Puck::new(Vec2::new(640.0, 360.0), Vec2::new(4.0, -3.0), 10.0),
        );

        move_puck(&mut world);
        move_puck(&mut world);

        assert_eq!(world.get::<&Puck>(puck).unwrap().pos, Vec2::new(648.0, 354.0));
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_field(
            start in 0.0f32..600.0,
            dirs in prop::collection::vec(-1i8..=1, 0..400),
        ) {
            let config = Config::new();
            let mut paddle = Paddle::new(Side::Left, 20.0, start, 20.0, config.paddle_height);
            for dir in dirs {
                move_paddle(&mut paddle, dir as f32 * config.paddle_speed, &config);
                prop_assert!(paddle.y >= 0.0);
                prop_assert!(paddle.y <= config.field_height - config.paddle_height);
            }
        }
    }
}

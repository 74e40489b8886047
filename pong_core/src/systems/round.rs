use crate::params::Params;
use crate::{Config, GameRng, Paddle, Puck};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Re-center the puck and give it a fresh serve at base speed
///
/// The serve heads toward either player with equal odds, at an angle drawn
/// uniformly from ±45° around the horizontal.
pub fn serve(puck: &mut Puck, config: &Config, rng: &mut GameRng) {
    let toward_right = rng.0.gen_bool(0.5);
    let angle: f32 = rng
        .0
        .gen_range(-Params::SERVE_MAX_ANGLE..Params::SERVE_MAX_ANGLE);
    let dir_x = if toward_right { 1.0 } else { -1.0 };

    puck.pos = config.field_center();
    puck.speed = config.puck_speed;
    puck.vel = Vec2::new(dir_x * angle.cos(), angle.sin()) * puck.speed;
}

/// Serve every puck in the world
pub fn reset_puck(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        serve(puck, config, rng);
        log::debug!(
            "serve vel=({:.2}, {:.2}) speed={:.2}",
            puck.vel.x,
            puck.vel.y,
            puck.speed
        );
    }
}

/// Put both paddles back at vertical center
pub fn reset_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_center_y();
    }
}

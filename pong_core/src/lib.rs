//! Tick-based simulation core for two-player Pong
//!
//! One call to [`Game::step`] advances the match by one rendered frame. The
//! core never draws or plays sound: it hands out a [`Snapshot`] and a list of
//! [`Cue`]s for the host to act on.

pub mod components;
pub mod config;
pub mod cues;
pub mod deflection;
pub mod error;
pub mod game;
pub mod input;
pub mod params;
pub mod phase;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use cues::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use phase::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;

/// Helper to create a paddle entity at the side's x offset
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        y,
        config.paddle_width,
        config.paddle_height,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the puck entity
pub fn create_puck(world: &mut World, puck: Puck) -> hecs::Entity {
    world.spawn((puck,))
}

use hecs::World;

use crate::components::*;
use crate::input::TickInput;

/// Turn this tick's key levels into paddle intents
pub fn ingest_inputs(world: &mut World, input: &TickInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.side);
    }
}

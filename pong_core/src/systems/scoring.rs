use crate::{Config, Cue, Events, Puck, Score, Side};
use hecs::World;

/// Side that scored if the puck center left the field horizontally
pub fn detect_goal(puck: &Puck, config: &Config) -> Option<Side> {
    if puck.pos.x < 0.0 {
        Some(Side::Right)
    } else if puck.pos.x > config.field_width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if the puck left the arena and credit the scorer
///
/// Re-serving is left to the round logic, which also ends the rally.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let scorer = world
        .query::<&Puck>()
        .iter()
        .find_map(|(_entity, puck)| detect_goal(puck, config))?;

    score.increment(scorer);
    events.goal = Some(scorer);
    events.emit(Cue::Goal);
    log::info!(
        "{:?} scores, now {} - {}",
        scorer,
        score.left,
        score.right
    );
    Some(scorer)
}

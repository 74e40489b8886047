use crate::deflection::{deflection_angle, segment_index};
use crate::{Config, Cue, Events, Paddle, Puck, Side};
use glam::Vec2;
use hecs::World;

/// Horizontal field boundary the puck bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Outcome of a puck/paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    pub side: Side,
    pub segment: usize,
    /// Outgoing direction in radians
    pub angle: f32,
}

/// Wall the puck is touching while still heading into it
///
/// Bounds are inclusive. A puck already moving away after a reflection is
/// never reported, so one crossing yields one bounce.
pub fn detect_wall_collision(puck: &Puck, config: &Config) -> Option<Wall> {
    if puck.top_edge() <= 0.0 && puck.vel.y < 0.0 {
        Some(Wall::Top)
    } else if puck.bottom_edge() >= config.field_height && puck.vel.y > 0.0 {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Reflect the vertical velocity and pull the puck back inside the field
pub fn resolve_wall_collision(puck: &mut Puck, wall: Wall, config: &Config) {
    puck.vel.y = -puck.vel.y;
    match wall {
        Wall::Top => puck.pos.y = puck.pos.y.max(puck.radius),
        Wall::Bottom => puck.pos.y = puck.pos.y.min(config.field_height - puck.radius),
    }
}

fn touches_paddle(puck: &Puck, paddle: &Paddle) -> bool {
    if !paddle.spans_y(puck.pos.y) {
        return false;
    }
    let face = paddle.face_x();
    match paddle.side {
        Side::Left => {
            let edge = puck.pos.x - puck.radius;
            let overlapping = edge <= face && puck.pos.x + puck.radius >= paddle.back_x();
            let crossing = edge > face && edge + puck.vel.x <= face;
            puck.vel.x < 0.0 && (overlapping || crossing)
        }
        Side::Right => {
            let edge = puck.pos.x + puck.radius;
            let overlapping = edge >= face && puck.pos.x - puck.radius <= paddle.back_x();
            let crossing = edge < face && edge + puck.vel.x >= face;
            puck.vel.x > 0.0 && (overlapping || crossing)
        }
    }
}

/// Paddle contact this tick, if any
///
/// The leading edge must touch the paddle face now or cross it during this
/// tick's move, the puck center must lie within the paddle's vertical span
/// and the puck must be heading toward the paddle. Checking the swept edge
/// keeps a fast puck from skipping over the paddle between two ticks.
pub fn detect_paddle_collision(puck: &Puck, left: &Paddle, right: &Paddle) -> Option<Deflection> {
    [left, right]
        .into_iter()
        .find(|paddle| touches_paddle(puck, paddle))
        .map(|paddle| Deflection {
            side: paddle.side,
            segment: segment_index(paddle, puck.pos.y),
            angle: deflection_angle(paddle, puck.pos.y),
        })
}

/// Speed the puck up, send it off at the deflection angle and move it clear
pub fn apply_deflection(
    puck: &mut Puck,
    paddle: &Paddle,
    deflection: &Deflection,
    config: &Config,
) {
    puck.speed *= config.puck_speed_growth;
    puck.vel = Vec2::new(deflection.angle.cos(), deflection.angle.sin()) * puck.speed;

    let clearance = puck.radius + 2.0 * puck.vel.x.abs();
    puck.pos.x = match paddle.side {
        Side::Left => paddle.face_x() + clearance,
        Side::Right => paddle.face_x() - clearance,
    };
}

/// Check puck collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles without holding borrows
    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        if let Some(wall) = detect_wall_collision(puck, config) {
            resolve_wall_collision(puck, wall, config);
            log::debug!("puck hit {:?} wall at x={:.1}", wall, puck.pos.x);
            events.wall_hit = true;
            events.emit(Cue::WallHit);
        }

        let (Some(left), Some(right)) = (left.as_ref(), right.as_ref()) else {
            continue;
        };
        if let Some(deflection) = detect_paddle_collision(puck, left, right) {
            let paddle = match deflection.side {
                Side::Left => left,
                Side::Right => right,
            };
            apply_deflection(puck, paddle, &deflection, config);
            log::debug!(
                "puck hit {:?} paddle segment {} -> {:.1} deg, speed {:.2}",
                deflection.side,
                deflection.segment,
                deflection.angle.to_degrees(),
                puck.speed
            );
            events.paddle_hit = Some(deflection.side);
            events.emit(Cue::PaddleHit);
        }
    }
}

//! Contact-point deflection
//!
//! A paddle is split into eight equal segments from top to bottom. Where the
//! puck touches decides the rebound angle: steep near the ends, flat in the
//! middle.

use std::f32::consts::PI;

use crate::components::{Paddle, Side};

pub const SEGMENTS: usize = 8;

/// Rebound angles in degrees for the left paddle, top segment first.
/// Negative is up (y grows downward).
pub const DEFLECTION_TABLE: [f32; SEGMENTS] = [-45.0, -30.0, -15.0, 0.0, 0.0, 15.0, 30.0, 45.0];

/// Segment index for a contact y, clamped to the paddle
pub fn segment_index(paddle: &Paddle, contact_y: f32) -> usize {
    let segment_height = paddle.height / SEGMENTS as f32;
    let raw = ((contact_y - paddle.y) / segment_height).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(SEGMENTS - 1)
    }
}

/// Outgoing direction in radians for a hit at `contact_y`
pub fn deflection_angle(paddle: &Paddle, contact_y: f32) -> f32 {
    let angle = DEFLECTION_TABLE[segment_index(paddle, contact_y)].to_radians();
    match paddle.side {
        Side::Left => angle,
        Side::Right => PI - angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn left() -> Paddle {
        Paddle::new(Side::Left, 20.0, 300.0, 20.0, 120.0)
    }

    fn right() -> Paddle {
        Paddle::new(Side::Right, 1240.0, 300.0, 20.0, 120.0)
    }

    #[test]
    fn test_segment_boundaries() {
        let paddle = left();
        assert_eq!(segment_index(&paddle, 300.0), 0);
        assert_eq!(segment_index(&paddle, 314.9), 0);
        assert_eq!(segment_index(&paddle, 315.0), 1);
        assert_eq!(segment_index(&paddle, 360.0), 4);
        assert_eq!(segment_index(&paddle, 419.9), 7);
    }

    #[test]
    fn test_segment_clamps_outside_span() {
        let paddle = left();
        assert_eq!(segment_index(&paddle, 250.0), 0);
        assert_eq!(segment_index(&paddle, 420.0), 7);
        assert_eq!(segment_index(&paddle, 999.0), 7);
    }

    #[test]
    fn test_left_paddle_angles() {
        let paddle = left();
        assert!((deflection_angle(&paddle, 310.0) - (-45f32).to_radians()).abs() < EPS);
        assert!(deflection_angle(&paddle, 360.0).abs() < EPS);
        assert!((deflection_angle(&paddle, 405.0) - 45f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn test_right_paddle_is_mirrored() {
        let paddle = right();
        // Top of the paddle still sends the puck upward, but leftward
        let top = deflection_angle(&paddle, 310.0);
        assert!((top - 225f32.to_radians()).abs() < EPS);
        assert!(top.cos() < 0.0 && top.sin() < 0.0);

        let middle = deflection_angle(&paddle, 360.0);
        assert!((middle - PI).abs() < EPS);

        let bottom = deflection_angle(&paddle, 405.0);
        assert!((bottom - 135f32.to_radians()).abs() < EPS);
        assert!(bottom.cos() < 0.0 && bottom.sin() > 0.0);
    }

    #[test]
    fn test_table_is_symmetric() {
        for i in 0..SEGMENTS {
            assert_eq!(DEFLECTION_TABLE[i], -DEFLECTION_TABLE[SEGMENTS - 1 - i]);
        }
    }
}

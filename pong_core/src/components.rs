use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which end of the field a paddle (or a scoring player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a vertical bar at a fixed x offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge
    pub y: f32, // Top edge, clamped to the field
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    /// Midpoint of the top edge
    pub fn top(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y)
    }

    /// Midpoint of the bottom edge
    pub fn bottom(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height)
    }

    /// X of the face the puck bounces off
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x + self.width,
            Side::Right => self.x,
        }
    }

    /// X of the face turned toward the paddle's own goal line
    pub fn back_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x,
            Side::Right => self.x + self.width,
        }
    }

    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }
}

/// Puck component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puck {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Current speed; grows on every paddle hit, reset on serve
    pub speed: f32,
}

impl Puck {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed: vel.length(),
        }
    }

    pub fn top_edge(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom_edge(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve two held keys into one direction; both held cancel out
    pub fn from_keys(up: bool, down: bool) -> Self {
        let dir = match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        Self { dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_edges_follow_position() {
        let mut paddle = Paddle::new(Side::Left, 20.0, 300.0, 20.0, 120.0);
        assert_eq!(paddle.top(), Vec2::new(30.0, 300.0));
        assert_eq!(paddle.bottom(), Vec2::new(30.0, 420.0));

        paddle.y = 0.0;
        assert_eq!(paddle.top().y, 0.0);
        assert_eq!(paddle.bottom().y, 120.0);
    }

    #[test]
    fn test_paddle_faces() {
        let left = Paddle::new(Side::Left, 20.0, 0.0, 20.0, 120.0);
        let right = Paddle::new(Side::Right, 1240.0, 0.0, 20.0, 120.0);
        assert_eq!(left.face_x(), 40.0);
        assert_eq!(left.back_x(), 20.0);
        assert_eq!(right.face_x(), 1240.0);
        assert_eq!(right.back_x(), 1260.0);
    }

    #[test]
    fn test_intent_from_keys() {
        assert_eq!(PaddleIntent::from_keys(true, false).dir, -1);
        assert_eq!(PaddleIntent::from_keys(false, true).dir, 1);
        assert_eq!(PaddleIntent::from_keys(false, false).dir, 0);
        assert_eq!(PaddleIntent::from_keys(true, true).dir, 0);
    }
}

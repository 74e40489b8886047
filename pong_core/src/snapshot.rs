//! Per-tick view of the game handed to the renderer

use glam::Vec2;
use serde::Serialize;

use crate::params::Params;
use crate::{Config, Paddle, RoundPhase, Score, Side};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PuckView {
    pub center: Vec2,
    pub radius: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            side: paddle.side,
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
        }
    }
}

/// Static field decorations: midline and center circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldView {
    pub width: f32,
    pub height: f32,
    pub midline_x: f32,
    pub center_circle_radius: f32,
}

impl From<&Config> for FieldView {
    fn from(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            midline_x: config.field_width / 2.0,
            center_circle_radius: Params::CENTER_CIRCLE_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: RoundPhase,
    pub field: FieldView,
    pub puck: PuckView,
    pub left: PaddleView,
    pub right: PaddleView,
    pub score: Score,
}

/// Anything that can draw a snapshot
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Built from [`Params`] by default; any subset of fields can be overridden
/// from JSON, missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub puck_radius: f32,
    pub puck_speed: f32,
    pub puck_speed_growth: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            puck_radius: Params::PUCK_RADIUS,
            puck_speed: Params::PUCK_SPEED,
            puck_speed_growth: Params::PUCK_SPEED_GROWTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the geometry preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("puck_radius", self.puck_radius),
            ("puck_speed", self.puck_speed),
            ("puck_speed_growth", self.puck_speed_growth),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.puck_speed_growth < 1.0 {
            return Err(ConfigError::ShrinkingGrowth(self.puck_speed_growth));
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.puck_radius * 2.0 >= self.field_height {
            return Err(ConfigError::PuckTooLarge {
                diameter: self.puck_radius * 2.0,
                field: self.field_height,
            });
        }
        // Each paddle sits one paddle width in from its goal line
        if self.paddle_width * 4.0 >= self.field_width {
            return Err(ConfigError::FieldTooNarrow {
                paddle_width: self.paddle_width,
                field: self.field_width,
            });
        }
        Ok(())
    }

    /// Get the paddle's left x coordinate for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width,
            Side::Right => self.field_width - self.paddle_width * 2.0,
        }
    }

    /// Top y that centers a paddle vertically
    pub fn paddle_center_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle top y to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    pub fn field_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}

use thiserror::Error;

/// Rejected field geometry or tuning values.
///
/// The tick loop itself cannot fail; every precondition it relies on is
/// checked once here before a [`crate::Game`] is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("puck speed growth must be at least 1.0, got {0}")]
    ShrinkingGrowth(f32),

    #[error("paddle height {paddle} does not fit a field {field} high")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("puck diameter {diameter} does not fit a field {field} high")]
    PuckTooLarge { diameter: f32, field: f32 },

    #[error("paddles {paddle_width} wide leave no room in a field {field} wide")]
    FieldTooNarrow { paddle_width: f32, field: f32 },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

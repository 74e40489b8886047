/// Game tuning parameters for Pong
///
/// Units are pixels and pixels per tick; the simulation advances one fixed
/// step per rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;
    pub const CENTER_CIRCLE_RADIUS: f32 = 150.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0; // 8 segments of 15px
    pub const PADDLE_SPEED: f32 = 6.0;

    // Puck
    pub const PUCK_RADIUS: f32 = 10.0;
    pub const PUCK_SPEED: f32 = 4.5;
    pub const PUCK_SPEED_GROWTH: f32 = 1.05; // Multiply speed on paddle hit

    // Serve spread either side of the horizontal
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Host loop
    pub const TICKS_PER_SECOND: u32 = 60;
}

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 20.0; // gap between paddle and its side wall
    pub const PADDLE_SPEED: f32 = 10.0; // pixels per tick

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED: f32 = 7.0; // pixels per tick on each axis

    // Loop
    pub const FPS: u32 = 30;

    // Palette (RGB)
    pub const BACKGROUND: [u8; 3] = [221, 190, 169];
    pub const PADDLE_COLOR: [u8; 3] = [88, 64, 52];
    pub const BALL_COLOR: [u8; 3] = [235, 225, 205];
    pub const TEXT_COLOR: [u8; 3] = [235, 225, 205];

    // HUD
    pub const LEFT_PLAYER_NAME: &'static str = "Geek_1";
    pub const RIGHT_PLAYER_NAME: &'static str = "Geek_2";
    pub const SCORE_ANCHOR_INSET: f32 = 100.0;
    pub const SCORE_ANCHOR_Y: f32 = 20.0;
}

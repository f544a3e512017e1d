//! Space Invaders - a fixed-formation arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement models, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Session leaderboard
//!
//! Rendering, windowing and raw input belong to the embedding engine; this
//! crate only advances game state one fixed timestep at a time.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth movement)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (portrait, matching the classic cabinet layout)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 920.0;

    /// Sprite size shared by ship and aliens (square sprites)
    pub const SPRITE_SIZE: f32 = 70.0;

    /// Alien formation
    pub const ALIEN_COUNT: usize = 7;
    /// Row the formation spawns on
    pub const FORMATION_ROW_Y: f32 = 100.0;
    /// Horizontal sweep speed (pixels/s)
    pub const SWEEP_SPEED: f32 = 60.0;
    /// Vertical drop when the sweep reverses at an arena edge
    pub const EDGE_DROP: f32 = SPRITE_SIZE / 2.0;

    /// Gravity model: descent scales with current depth (1/s)
    pub const GRAVITY_FACTOR: f32 = 9.8 / 100.0;
    /// Parabolic model: pixels of offset per unit of parabola width
    pub const PARABOLA_SCALE: f32 = 20.0;
    /// Parabolic model: apex height in sprite heights
    pub const PARABOLA_APEX: f32 = 4.0;
    /// Sine model: wobble amplitude (pixels)
    pub const SINE_AMPLITUDE: f32 = 100.0 / 1.5;
    /// Sine model: wobble angular frequency (rad/s)
    pub const SINE_FREQUENCY: f32 = 2.0;
    /// Sine model: steady descent speed (pixels/s)
    pub const SINE_DESCENT: f32 = 30.0;

    /// Player ship
    pub const SHIP_SPEED: f32 = 600.0;
    pub const SHIP_START_Y: f32 = 700.0;

    /// Lasers
    pub const MAX_SHOTS: usize = 3;
    pub const LASER_SPEED: f32 = 200.0;
    pub const LASER_WIDTH: f32 = 8.0;
    pub const LASER_HEIGHT: f32 = 40.0;
    /// Muzzle offset from the ship's top-left corner
    pub const MUZZLE_OFFSET_X: f32 = 36.0;
    pub const MUZZLE_OFFSET_Y: f32 = -46.0;

    /// Score per alien destroyed
    pub const KILL_SCORE: u64 = 10;
}

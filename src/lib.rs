//! Petri Dash - a microbe survival arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cells, collisions, per-frame step)
//! - `board`: Frame-loop thread and round lifecycle
//! - `spawner`: Interval spawn timers feeding the pending-add buffer
//! - `surface`: Render surface abstraction (host provides the real one)
//! - `host`: Host callback boundary (score, round outcome)
//! - `config`: Data-driven board tuning

pub mod board;
pub mod config;
pub mod host;
pub mod sim;
pub mod spawner;
pub mod surface;

pub use board::Board;
pub use config::BoardConfig;
pub use host::HostEvents;
pub use surface::{Color, Frame, HeadlessSurface, RenderSurface};

/// Game configuration constants
pub mod consts {
    use crate::surface::Color;

    /// Default board dimensions (portrait phone, board pixels)
    pub const BOARD_WIDTH: f32 = 1080.0;
    pub const BOARD_HEIGHT: f32 = 1920.0;

    /// Cell sizes (square bounding boxes, board pixels)
    pub const PLAYER_SIZE: f32 = 60.0;
    pub const FOOD_SIZE: f32 = 30.0;
    pub const ENEMY_SIZE: f32 = 100.0;

    /// Player spawns this far above board center
    pub const PLAYER_START_RAISE: f32 = 75.0;

    /// Enemy velocity per frame (both axes)
    pub const ENEMY_SPEED: f32 = 5.0;

    /// Spawn intervals
    pub const FOOD_SPAWN_MS: u64 = 500;
    pub const ENEMY_SPAWN_MS: u64 = 3000;

    /// Food cells seeded onto the board at round start
    pub const INITIAL_FOOD_COUNT: usize = 50;

    /// Palette (0xRRGGBB)
    pub const COLOR_BG: Color = 0x000000;
    pub const COLOR_PLAYER: Color = 0x66d9ef;
    pub const COLOR_FOOD: Color = 0x7ec850;
    pub const COLOR_ENEMY: Color = 0xe05252;
    /// Death state, rendered once before the reap pass
    pub const COLOR_DEAD: Color = 0x3a3a3a;
}

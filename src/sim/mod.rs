//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure with respect
//! to threads and timers:
//! - Seeded RNG only
//! - Stable iteration order (collection order within a frame)
//! - No platform dependencies; rendering goes through the `Frame` trait

pub mod bounds;
pub mod cell;
pub mod spawn;
pub mod step;

pub use bounds::Aabb;
pub use cell::{Cell, Enemy, Food, Player};
pub use spawn::{player_start, random_enemy, random_food};
pub use step::{BoardState, StepOutcome, step};

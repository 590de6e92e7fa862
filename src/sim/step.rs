//! Per-frame board step
//!
//! The whole frame algorithm over `BoardState`, free of threads and timers:
//! clear, update/render/collide each cell in collection order, apply
//! collision effects through the host boundary, reap the dead. The frame
//! loop in `board` owns presenting the frame and merging spawned cells —
//! both happen after this returns, so anything spawned mid-frame is never
//! visible to the current collision pass.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::bounds::Aabb;
use super::cell::Cell;
use super::spawn;
use crate::config::BoardConfig;
use crate::consts::COLOR_BG;
use crate::host::HostEvents;
use crate::surface::Frame;

/// Live cell collection plus board dimensions. Owned exclusively by the
/// frame-loop thread; contains exactly one `Cell::Player` for the lifetime
/// of a round.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub cells: Vec<Cell>,
    pub width: f32,
    pub height: f32,
}

impl BoardState {
    /// Fresh round: initial food population plus the player, centered
    pub fn new(config: &BoardConfig, rng: &mut Pcg32) -> Self {
        let (w, h) = (config.width, config.height);
        let mut cells = Vec::with_capacity(config.initial_food + 1);
        for _ in 0..config.initial_food {
            cells.push(spawn::random_food(rng, w, h));
        }
        cells.push(Cell::player(spawn::player_start(w, h)));
        Self {
            cells,
            width: w,
            height: h,
        }
    }

    /// The player's current position
    pub fn player_pos(&self) -> Option<Vec2> {
        self.cells.iter().find(|c| c.is_player()).map(Cell::pos)
    }

    /// Overwrite the player's position (steering applied once per frame)
    pub fn set_player_pos(&mut self, pos: Vec2) {
        if let Some(Cell::Player(p)) = self.cells.iter_mut().find(|c| c.is_player()) {
            p.pos = pos;
        }
    }

    fn player_bounds(&self) -> Option<Aabb> {
        self.cells.iter().find(|c| c.is_player()).map(Cell::bounds)
    }
}

/// What a single frame did
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    /// Distinct food cells consumed this frame
    pub foods_eaten: u32,
    /// An enemy touched the player; the round must end after this frame
    pub enemy_hit: bool,
    /// Dead cells removed by the reap pass
    pub reaped: usize,
}

/// Run one frame over the live collection: update, render, player-collision,
/// effects, reap. Collision is tested only between the player and every
/// other cell.
pub fn step(state: &mut BoardState, frame: &mut dyn Frame, host: &dyn HostEvents) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    frame.clear(COLOR_BG);

    // Steering happened before this frame; the player does not move during
    // it, so one snapshot of its box serves the whole collision pass.
    let Some(player_bounds) = state.player_bounds() else {
        return outcome;
    };

    let (w, h) = (state.width, state.height);
    for cell in &mut state.cells {
        cell.update(w, h);
        cell.render(frame);

        if cell.is_player() || !cell.bounds().intersects(&player_bounds) {
            continue;
        }
        match cell {
            Cell::Enemy(_) => {
                host.enemy_hit();
                cell.kill();
                cell.render(frame);
                outcome.enemy_hit = true;
                log::debug!("enemy hit player at {:?}", cell.pos());
            }
            Cell::Food(_) => {
                host.food_eaten();
                cell.kill();
                cell.render(frame);
                outcome.foods_eaten += 1;
            }
            Cell::Player(_) => {}
        }
    }

    let before = state.cells.len();
    state.cells.retain(Cell::is_alive);
    outcome.reaped = before - state.cells.len();

    outcome
}

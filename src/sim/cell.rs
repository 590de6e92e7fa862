//! Cell entity variants
//!
//! One tagged sum type covers everything that lives on the board. Collision
//! effects dispatch on the variant tag, never on runtime type inspection.
//! Update order rules:
//! - Player position is steered from outside the frame loop; `update` never
//!   moves it
//! - Food is static
//! - Enemy advances by a fixed per-frame velocity and bounces off board edges

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use crate::consts::*;
use crate::surface::{Color, Frame};

/// The player-controlled cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    alive: bool,
}

/// A static, consumable food cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    alive: bool,
}

/// An autonomously moving enemy cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    alive: bool,
}

impl Enemy {
    /// Advance one frame, reflecting any velocity component whose next
    /// position would leave the board.
    fn advance(&mut self, board_w: f32, board_h: f32) {
        let next_x = self.pos.x + self.vel.x;
        if next_x < 0.0 || next_x + ENEMY_SIZE > board_w {
            self.vel.x = -self.vel.x;
        }
        let next_y = self.pos.y + self.vel.y;
        if next_y < 0.0 || next_y + ENEMY_SIZE > board_h {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;
    }
}

/// Any cell participating in the board simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Cell {
    Player(Player),
    Food(Food),
    Enemy(Enemy),
}

impl Cell {
    pub fn player(pos: Vec2) -> Self {
        Cell::Player(Player { pos, alive: true })
    }

    pub fn food(pos: Vec2) -> Self {
        Cell::Food(Food { pos, alive: true })
    }

    pub fn enemy(pos: Vec2, vel: Vec2) -> Self {
        Cell::Enemy(Enemy { pos, vel, alive: true })
    }

    /// Advance the cell's own state by one frame. No side effects on other
    /// cells.
    pub fn update(&mut self, board_w: f32, board_h: f32) {
        match self {
            // Position is steered externally; nothing to advance
            Cell::Player(_) | Cell::Food(_) => {}
            Cell::Enemy(e) => e.advance(board_w, board_h),
        }
    }

    /// Draw the cell's current state. Dead cells draw their death color
    /// (shown once, before the reap pass removes them).
    pub fn render(&self, frame: &mut dyn Frame) {
        frame.draw_rect(self.bounds(), self.color());
    }

    /// Current bounding box, derived from position and fixed size
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos(), self.size())
    }

    /// Idempotent: sets alive to false, nothing else
    pub fn kill(&mut self) {
        match self {
            Cell::Player(p) => p.alive = false,
            Cell::Food(f) => f.alive = false,
            Cell::Enemy(e) => e.alive = false,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Cell::Player(p) => p.alive,
            Cell::Food(f) => f.alive,
            Cell::Enemy(e) => e.alive,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Cell::Player(_))
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Cell::Player(p) => p.pos,
            Cell::Food(f) => f.pos,
            Cell::Enemy(e) => e.pos,
        }
    }

    fn size(&self) -> f32 {
        match self {
            Cell::Player(_) => PLAYER_SIZE,
            Cell::Food(_) => FOOD_SIZE,
            Cell::Enemy(_) => ENEMY_SIZE,
        }
    }

    fn color(&self) -> Color {
        if !self.is_alive() {
            return COLOR_DEAD;
        }
        match self {
            Cell::Player(_) => COLOR_PLAYER,
            Cell::Food(_) => COLOR_FOOD,
            Cell::Enemy(_) => COLOR_ENEMY,
        }
    }
}

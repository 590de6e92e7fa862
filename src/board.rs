//! Board lifecycle and frame loop
//!
//! The board is the aggregate root: it owns the live cell collection
//! (through the loop thread), the pending-add buffer the spawners feed,
//! the steering state the host's input thread writes, and the
//! RUNNING/STOPPED round lifecycle.
//!
//! Ownership rules that make the concurrency simple:
//! - The live collection is touched only by the frame-loop thread.
//! - Spawners only append to the pending buffer; the loop drains it at one
//!   point per frame, after presenting.
//! - Steering goes through a mutex and is applied once per frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::BoardConfig;
use crate::host::HostEvents;
use crate::sim::{self, BoardState, Cell};
use crate::spawner::Spawner;
use crate::surface::RenderSurface;

/// Independent RNG streams so food and enemy placement never perturb each
/// other's sequences
const FOOD_RNG_STREAM: u64 = 1;
const ENEMY_RNG_STREAM: u64 = 2;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The game board. `start()` launches a round on its own thread; `stop()`
/// joins it. One `Board` plays any number of rounds, one at a time.
pub struct Board {
    config: BoardConfig,
    host: Arc<dyn HostEvents>,
    running: Arc<AtomicBool>,
    /// `None` until the first round constructs the player
    player: Arc<Mutex<Option<Vec2>>>,
    pending: Arc<Mutex<Vec<Cell>>>,
    frame_loop: Option<JoinHandle<()>>,
    spawners: Vec<Spawner>,
}

impl Board {
    pub fn new(config: BoardConfig, host: Arc<dyn HostEvents>) -> Self {
        Self {
            config,
            host,
            running: Arc::new(AtomicBool::new(false)),
            player: Arc::new(Mutex::new(None)),
            pending: Arc::new(Mutex::new(Vec::new())),
            frame_loop: None,
            spawners: Vec::new(),
        }
    }

    /// Begin a fresh round: build the initial population, launch the spawn
    /// timers and the frame loop. No-op while a round is already running.
    pub fn start(&mut self, mut surface: Box<dyn RenderSurface>) {
        if self.running.load(Ordering::SeqCst) {
            log::warn!("start() ignored: round already running");
            return;
        }
        // Join leftovers from a round that ended on an enemy hit
        self.stop();

        let seed = self.config.seed;
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = BoardState::new(&self.config, &mut rng);
        if let Some(pos) = state.player_pos() {
            *lock(&self.player) = Some(pos);
        }
        lock(&self.pending).clear();
        self.running.store(true, Ordering::SeqCst);

        let (w, h) = (self.config.width, self.config.height);
        let mut food_rng = Pcg32::new(seed, FOOD_RNG_STREAM);
        self.spawners.push(Spawner::start(
            "food",
            Duration::from_millis(self.config.food_interval_ms),
            Arc::clone(&self.pending),
            move || sim::random_food(&mut food_rng, w, h),
        ));
        let mut enemy_rng = Pcg32::new(seed, ENEMY_RNG_STREAM);
        self.spawners.push(Spawner::start(
            "enemy",
            Duration::from_millis(self.config.enemy_interval_ms),
            Arc::clone(&self.pending),
            move || sim::random_enemy(&mut enemy_rng, w, h),
        ));

        let running = Arc::clone(&self.running);
        let player = Arc::clone(&self.player);
        let pending = Arc::clone(&self.pending);
        let host = Arc::clone(&self.host);
        self.frame_loop = Some(std::thread::spawn(move || {
            frame_loop(
                &running,
                &player,
                &pending,
                &mut state,
                surface.as_mut(),
                host.as_ref(),
            );
        }));
        log::info!("round started (seed {seed}, {w}x{h})");
    }

    /// End the round. Blocks until the frame loop has fully exited, then
    /// cancels the spawn timers. Safe to call repeatedly, and a no-op when
    /// nothing is running.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.frame_loop.take() {
            if handle.join().is_err() {
                log::error!("frame loop thread panicked");
            }
            log::info!("round stopped");
        }
        for spawner in &mut self.spawners {
            spawner.cancel();
        }
        self.spawners.clear();
    }

    /// Whether a round is currently running. Flips to false on `stop()` or
    /// after the frame in which an enemy reached the player.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Steer the player horizontally. No-op until a round has constructed
    /// the player; safe to call from any thread at any time.
    pub fn set_player_x(&self, x: f32) {
        if let Some(pos) = lock(&self.player).as_mut() {
            pos.x = x;
        }
    }

    /// Steer the player vertically. Same contract as [`Board::set_player_x`].
    pub fn set_player_y(&self, y: f32) {
        if let Some(pos) = lock(&self.player).as_mut() {
            pos.y = y;
        }
    }

    pub fn player_exists(&self) -> bool {
        lock(&self.player).is_some()
    }
}

impl Drop for Board {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The round's frame loop. Runs until the running flag clears or an enemy
/// reaches the player; an unavailable surface just yields and retries.
fn frame_loop(
    running: &AtomicBool,
    player: &Mutex<Option<Vec2>>,
    pending: &Mutex<Vec<Cell>>,
    state: &mut BoardState,
    surface: &mut dyn RenderSurface,
    host: &dyn HostEvents,
) {
    while running.load(Ordering::Acquire) {
        let Some(mut frame) = surface.acquire_frame() else {
            std::thread::yield_now();
            continue;
        };

        if let Some(pos) = *lock(player) {
            state.set_player_pos(pos);
        }

        let outcome = sim::step(state, frame.as_mut(), host);
        surface.present(frame);

        // Merge after present: cells spawned during frame N are first
        // visible to frame N+1
        state.cells.append(&mut lock(pending));

        if outcome.enemy_hit {
            running.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, Frame, HeadlessSurface, SurfaceStats};
    use std::sync::atomic::AtomicU32;

    #[derive(Default)]
    struct CountingHost {
        foods: AtomicU32,
        enemies: AtomicU32,
    }

    impl HostEvents for CountingHost {
        fn food_eaten(&self) {
            self.foods.fetch_add(1, Ordering::SeqCst);
        }
        fn enemy_hit(&self) {
            self.enemies.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn quiet_config() -> BoardConfig {
        BoardConfig {
            width: 500.0,
            height: 500.0,
            initial_food: 0,
            // Long intervals keep spawners out of these tests' way
            food_interval_ms: 60_000,
            enemy_interval_ms: 60_000,
            seed: 1,
        }
    }

    #[test]
    fn test_enemy_hit_ends_round_after_exactly_one_frame() {
        let running = AtomicBool::new(true);
        let player = Mutex::new(Some(Vec2::ZERO));
        let pending = Mutex::new(Vec::new());
        let mut state = BoardState {
            cells: vec![Cell::player(Vec2::ZERO), Cell::enemy(Vec2::ZERO, Vec2::ZERO)],
            width: 500.0,
            height: 500.0,
        };
        let mut surface = HeadlessSurface::new();
        let stats = surface.stats();
        let host = CountingHost::default();

        frame_loop(&running, &player, &pending, &mut state, &mut surface, &host);

        assert!(!running.load(Ordering::SeqCst));
        assert_eq!(host.enemies.load(Ordering::SeqCst), 1);
        // The fatal frame still completed and presented; no frame followed
        assert_eq!(stats.frames_presented.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_pending_cells_merge_after_the_collision_pass() {
        let running = AtomicBool::new(true);
        let player = Mutex::new(Some(Vec2::ZERO));
        // A food sitting right on the player, but only in the pending buffer
        let pending = Mutex::new(vec![Cell::food(Vec2::ZERO)]);
        let mut state = BoardState {
            cells: vec![Cell::player(Vec2::ZERO), Cell::enemy(Vec2::ZERO, Vec2::ZERO)],
            width: 500.0,
            height: 500.0,
        };
        let mut surface = HeadlessSurface::new();
        let host = CountingHost::default();

        frame_loop(&running, &player, &pending, &mut state, &mut surface, &host);

        // Merged into the live set, but never part of this frame's pass
        assert_eq!(host.foods.load(Ordering::SeqCst), 0);
        assert!(pending.lock().unwrap().is_empty());
        assert!(
            state
                .cells
                .iter()
                .any(|c| matches!(c, Cell::Food(_)) && c.is_alive())
        );
    }

    #[test]
    fn test_round_lifecycle() {
        let host = Arc::new(CountingHost::default());
        let mut board = Board::new(quiet_config(), host);

        // Steering before any round exists is a no-op
        assert!(!board.player_exists());
        board.set_player_x(10.0);
        board.set_player_y(10.0);
        assert!(!board.is_running());

        let surface = HeadlessSurface::new();
        let stats = surface.stats();
        board.start(Box::new(surface));
        assert!(board.is_running());
        assert!(board.player_exists());

        std::thread::sleep(Duration::from_millis(50));
        board.set_player_x(250.0);
        board.set_player_y(250.0);

        board.stop();
        assert!(!board.is_running());
        assert!(stats.frames_presented.load(Ordering::Relaxed) > 0);
        // Player survives the round for later steering
        assert!(board.player_exists());

        // Repeated stop must not double-join or error
        board.stop();
    }

    #[test]
    fn test_start_while_running_is_a_noop() {
        let host = Arc::new(CountingHost::default());
        let mut board = Board::new(quiet_config(), host);
        board.start(Box::new(HeadlessSurface::new()));
        assert!(board.is_running());

        board.start(Box::new(HeadlessSurface::new()));
        assert!(board.is_running());

        board.stop();
        assert!(!board.is_running());
    }

    #[test]
    fn test_board_can_run_a_second_round() {
        let host = Arc::new(CountingHost::default());
        let mut board = Board::new(quiet_config(), host);

        board.start(Box::new(HeadlessSurface::new()));
        std::thread::sleep(Duration::from_millis(20));
        board.stop();

        let surface = HeadlessSurface::new();
        let stats = surface.stats();
        board.start(Box::new(surface));
        assert!(board.is_running());
        std::thread::sleep(Duration::from_millis(20));
        board.stop();
        assert!(stats.frames_presented.load(Ordering::Relaxed) > 0);
    }

    /// Surface whose frames take a while to present, so `stop()` lands
    /// mid-frame
    struct SlowSurface {
        stats: Arc<SurfaceStats>,
    }

    struct NullFrame;

    impl Frame for NullFrame {
        fn clear(&mut self, _color: Color) {}
        fn draw_rect(&mut self, _rect: crate::sim::Aabb, _color: Color) {}
    }

    impl RenderSurface for SlowSurface {
        fn acquire_frame(&mut self) -> Option<Box<dyn Frame>> {
            Some(Box::new(NullFrame))
        }
        fn present(&mut self, _frame: Box<dyn Frame>) {
            std::thread::sleep(Duration::from_millis(20));
            self.stats.frames_presented.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_stop_blocks_until_the_inflight_frame_completes() {
        let host = Arc::new(CountingHost::default());
        let mut board = Board::new(quiet_config(), host);
        let stats = Arc::new(SurfaceStats::default());
        board.start(Box::new(SlowSurface {
            stats: Arc::clone(&stats),
        }));

        std::thread::sleep(Duration::from_millis(10));
        board.stop();

        // Once stop() returns, no frame is still in flight
        let settled = stats.frames_presented.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(stats.frames_presented.load(Ordering::SeqCst), settled);
    }
}

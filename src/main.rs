//! Petri Dash entry point
//!
//! Headless demo round: runs the board for a few seconds with scripted
//! steering and prints the result. Real hosts embed the library and supply
//! their own `RenderSurface` and `HostEvents`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use petri_dash::config::ConfigError;
use petri_dash::{Board, BoardConfig, HeadlessSurface, HostEvents};

/// Console host: tallies score, logs the quiz hand-off
#[derive(Default)]
struct ConsoleHost {
    score: AtomicU64,
}

impl HostEvents for ConsoleHost {
    fn food_eaten(&self) {
        let score = self.score.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("score: {score}");
    }

    fn enemy_hit(&self) {
        log::info!("enemy caught the player - quiz time");
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::from_json_file(path)?,
        None => BoardConfig::default(),
    };
    log::info!("Petri Dash starting ({}x{})", config.width, config.height);

    let host = Arc::new(ConsoleHost::default());
    let surface = HeadlessSurface::new();
    let stats = surface.stats();

    let board_host: Arc<dyn HostEvents> = host.clone();
    let mut board = Board::new(config.clone(), board_host);
    board.start(Box::new(surface));

    // Sweep the player across the board so it runs into food
    let steps = 40;
    for i in 0..steps {
        if !board.is_running() {
            break;
        }
        let t = i as f32 / steps as f32;
        board.set_player_x(t * config.width);
        board.set_player_y(config.height / 2.0 + (t * 12.0).sin() * config.height / 4.0);
        std::thread::sleep(Duration::from_millis(100));
    }

    let survived = board.is_running();
    board.stop();

    println!(
        "round over: score {}, {} frames, {} rects, {}",
        host.score.load(Ordering::SeqCst),
        stats.frames_presented.load(Ordering::Relaxed),
        stats.rects_drawn.load(Ordering::Relaxed),
        if survived { "survived" } else { "caught by an enemy" },
    );
    Ok(())
}

//! Interval spawn timers
//!
//! Each spawner runs its own background thread on a fixed period,
//! independent of the frame rate. A fire constructs one cell and appends it
//! to the shared pending buffer; the frame loop drains that buffer once per
//! frame. Nothing caps how much food accumulates — unbounded growth is part
//! of the game, not a defect to paper over.
//!
//! The wait is a `recv_timeout` on a cancellation channel, so `cancel()`
//! wakes the thread immediately instead of waiting out the interval.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::sim::Cell;

/// Handle to a running spawn timer. Dropping it cancels the timer.
pub struct Spawner {
    label: &'static str,
    cancel_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Spawner {
    /// Start a timer that appends `make()` to `pending` every `interval`
    pub fn start<F>(
        label: &'static str,
        interval: Duration,
        pending: Arc<Mutex<Vec<Cell>>>,
        mut make: F,
    ) -> Self
    where
        F: FnMut() -> Cell + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let cell = make();
                        pending
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner())
                            .push(cell);
                    }
                    // Cancelled, or the handle went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        log::debug!("{label} spawner started ({}ms)", interval.as_millis());
        Self {
            label,
            cancel_tx,
            handle: Some(handle),
        }
    }

    /// Stop the timer and join its thread. Idempotent.
    pub fn cancel(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        // Err means the thread already exited on its own
        let _ = self.cancel_tx.send(());
        if handle.join().is_err() {
            log::error!("{} spawner thread panicked", self.label);
        }
        log::debug!("{} spawner cancelled", self.label);
    }
}

impl Drop for Spawner {
    fn drop(&mut self) {
        self.cancel();
    }
}

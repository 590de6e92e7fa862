//! Render surface abstraction
//!
//! The core never talks to a real canvas. The host hands the board a
//! `RenderSurface`; the frame loop acquires one exclusive frame per
//! iteration, draws into it, and presents it back. A surface that is
//! momentarily invalid returns `None` from `acquire_frame` and the loop
//! retries without other side effects.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::sim::Aabb;

/// Packed 0xRRGGBB color
pub type Color = u32;

/// One exclusive drawable frame
pub trait Frame {
    /// Fill the whole frame with a background color
    fn clear(&mut self, color: Color);
    /// Draw a filled rectangle
    fn draw_rect(&mut self, rect: Aabb, color: Color);
}

/// The host's drawing target. Moved onto the frame-loop thread, so
/// implementations must be `Send`.
pub trait RenderSurface: Send {
    /// Acquire the next drawable frame, or `None` while the surface is
    /// transiently invalid
    fn acquire_frame(&mut self) -> Option<Box<dyn Frame>>;
    /// Commit a finished frame
    fn present(&mut self, frame: Box<dyn Frame>);
}

/// Draw-call counters shared with whoever constructed the surface
#[derive(Debug, Default)]
pub struct SurfaceStats {
    pub frames_presented: AtomicU64,
    pub rects_drawn: AtomicU64,
}

/// A surface that swallows all drawing and counts it. Backs the demo binary
/// and the frame-loop tests; a windowed host would supply its own
/// `RenderSurface` instead.
#[derive(Default)]
pub struct HeadlessSurface {
    stats: Arc<SurfaceStats>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the counters, valid after the surface moves to the loop
    pub fn stats(&self) -> Arc<SurfaceStats> {
        Arc::clone(&self.stats)
    }
}

struct HeadlessFrame {
    stats: Arc<SurfaceStats>,
}

impl Frame for HeadlessFrame {
    fn clear(&mut self, _color: Color) {}

    fn draw_rect(&mut self, _rect: Aabb, _color: Color) {
        self.stats.rects_drawn.fetch_add(1, Ordering::Relaxed);
    }
}

impl RenderSurface for HeadlessSurface {
    fn acquire_frame(&mut self) -> Option<Box<dyn Frame>> {
        Some(Box::new(HeadlessFrame {
            stats: Arc::clone(&self.stats),
        }))
    }

    fn present(&mut self, _frame: Box<dyn Frame>) {
        self.stats.frames_presented.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_headless_surface_counts_work() {
        let mut surface = HeadlessSurface::new();
        let stats = surface.stats();

        let mut frame = surface.acquire_frame().expect("headless is always valid");
        frame.clear(0x000000);
        frame.draw_rect(Aabb::from_pos_size(Vec2::ZERO, 10.0), 0xffffff);
        frame.draw_rect(Aabb::from_pos_size(Vec2::ONE, 10.0), 0xffffff);
        surface.present(frame);

        assert_eq!(stats.frames_presented.load(Ordering::Relaxed), 1);
        assert_eq!(stats.rects_drawn.load(Ordering::Relaxed), 2);
    }
}

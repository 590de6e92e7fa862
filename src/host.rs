//! Host callback boundary
//!
//! The board never navigates, scores, or shows UI itself; it reports
//! collisions through this trait and moves on. Both calls are
//! fire-and-forget from the frame loop's point of view — implementations
//! run on the loop thread and must not block it.

/// Round events the host reacts to
pub trait HostEvents: Send + Sync {
    /// The player consumed a food cell. Called once per distinct food cell
    /// killed in a frame; the host owns the score counter.
    fn food_eaten(&self);

    /// The player touched an enemy cell. The host starts its quiz flow;
    /// the board stops after the current frame completes and treats the
    /// round as over.
    fn enemy_hit(&self);
}

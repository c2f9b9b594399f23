//! Per-tick counters reported by the transition engine.

/// Counts of per-bee outcomes collected during a single tick.
///
/// The engine populates one of these per [`tick`](crate::TransitionEngine::tick)
/// call; consumers (drivers, telemetry, tests) read whichever counters
/// they care about. Every bee contributes to at least one counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Bees that successfully advanced one cell.
    pub moved: usize,
    /// Bees that set a wait counter this tick (wall hit or meeting).
    pub stopped: usize,
    /// Bees that bounced off an obstacle or the boundary without stopping.
    pub reversed: usize,
    /// Bees blocked by another bee without stopping.
    pub blocked: usize,
    /// Bees that resolved amnesia by choosing a fresh heading.
    pub woke: usize,
    /// Bees that spent the tick resting (counter still draining).
    pub resting: usize,
    /// Random heading changes applied to non-amnesiac bees.
    pub turned: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = TickMetrics::default();
        assert_eq!(m.moved, 0);
        assert_eq!(m.stopped, 0);
        assert_eq!(m.reversed, 0);
        assert_eq!(m.blocked, 0);
        assert_eq!(m.woke, 0);
        assert_eq!(m.resting, 0);
        assert_eq!(m.turned, 0);
    }
}

//! The single-threaded per-tick state machine.

use crate::metrics::TickMetrics;
use beeclust_core::{Cell, Grid, Heading, Params, Pos, AMNESIA};
use beeclust_field::HeatField;
use rand::Rng;

/// What blocked a bee's movement attempt.
enum Blocker {
    /// Wall, heater, cooler, or the grid boundary.
    Obstacle,
    /// Another bee in the target cell.
    Meeting,
}

/// Advances a [`Grid`] by one discrete tick at a time.
///
/// Holds only the injected random source; the grid and heat field are
/// passed per call. Bees are processed in row-major scan order with
/// mutations applied immediately, so a bee that has already moved this
/// tick occupies its new cell from the point of view of bees processed
/// after it. Given the same seed, grid, and heat field, traces are
/// bit-identical.
///
/// Ticks never fail: walls and meetings are first-class branches of the
/// state machine, not errors.
#[derive(Debug)]
pub struct TransitionEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> TransitionEngine<R> {
    /// Create an engine driven by `rng`.
    ///
    /// Use a seeded generator (e.g. `ChaCha8Rng::seed_from_u64`) for
    /// reproducible traces.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Advance every bee exactly once.
    ///
    /// Returns the per-tick outcome counters; `metrics.moved` is the
    /// number of bees that advanced one cell. The heat field is read at
    /// each stopping bee's current cell to size its rest; callers must
    /// pass a field computed for this grid's current obstacle layout.
    pub fn tick(&mut self, grid: &mut Grid, heat: &HeatField) -> TickMetrics {
        let mut metrics = TickMetrics::default();
        // Bees only ever move into Empty cells, so positions collected
        // at tick start still hold their bee when the scan reaches them.
        for pos in grid.bee_positions() {
            self.step_bee(grid, heat, pos, &mut metrics);
        }
        metrics
    }

    /// Consume the engine, returning its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    fn step_bee(&mut self, grid: &mut Grid, heat: &HeatField, pos: Pos, metrics: &mut TickMetrics) {
        let Cell::Bee { mut heading, mut wait } = grid.get(pos) else {
            unreachable!("bee position {pos} vacated before processing");
        };

        // Resting counter drains by one tick; reaching the sentinel
        // means the rest is over and the heading is forgotten.
        if wait < 0 && wait != AMNESIA {
            wait += 1;
        }
        let amnesia = wait == AMNESIA;

        // The heading-change draw happens regardless of rest state.
        let change = self.rng.gen::<f64>() < grid.params().p_changedir;
        if change || amnesia {
            heading = self.pick_other_heading(heading);
        }

        if amnesia {
            // Fresh heading chosen; no movement attempt this tick.
            grid.set(pos, Cell::Bee { heading, wait: 0 });
            metrics.woke += 1;
            return;
        }
        if change {
            metrics.turned += 1;
        }
        if wait < 0 {
            // Still resting.
            grid.set(pos, Cell::Bee { heading, wait });
            metrics.resting += 1;
            return;
        }

        let blocker = match grid.target(pos, heading) {
            Some(target) => match grid.get(target) {
                Cell::Empty => {
                    grid.set(target, Cell::Bee { heading, wait });
                    grid.set(pos, Cell::Empty);
                    metrics.moved += 1;
                    return;
                }
                Cell::Bee { .. } => Blocker::Meeting,
                Cell::Wall | Cell::Heater | Cell::Cooler => Blocker::Obstacle,
            },
            None => Blocker::Obstacle,
        };

        match blocker {
            Blocker::Obstacle => {
                if self.rng.gen::<f64>() < grid.params().p_wall {
                    wait = -stop_time(grid.params(), heat.temperature(pos));
                    metrics.stopped += 1;
                } else {
                    heading = heading.reverse();
                    metrics.reversed += 1;
                }
            }
            Blocker::Meeting => {
                if self.rng.gen::<f64>() < grid.params().p_meet {
                    wait = -stop_time(grid.params(), heat.temperature(pos));
                    metrics.stopped += 1;
                } else {
                    metrics.blocked += 1;
                }
            }
        }
        grid.set(pos, Cell::Bee { heading, wait });
    }

    fn pick_other_heading(&mut self, current: Heading) -> Heading {
        let options = current.others();
        options[self.rng.gen_range(0..options.len())]
    }
}

/// Ticks a stopping bee rests for, from the local temperature.
///
/// `min(floor(k_stay / (1 + |t_ideal - t_local|)), min_wait)` — the
/// upstream model's literal `min` semantics, where `min_wait` caps the
/// rest from above. A result of 0 leaves the bee moving; a result of 1
/// is one tick of rest (the counter lands on the amnesia sentinel).
fn stop_time(params: &Params, t_local: f64) -> i32 {
    let computed = (params.k_stay / (1.0 + (params.t_ideal - t_local).abs())).floor();
    computed.min(f64::from(params.min_wait)) as i32
}

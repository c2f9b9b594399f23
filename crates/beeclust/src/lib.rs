//! BeeClust: heat-driven swarm aggregation on a 2D grid.
//!
//! Bees wander a grid of walls, heaters, and coolers. A precomputed
//! ambient-temperature field decides how long a bee rests when it runs
//! into something; over many ticks the swarm aggregates near its
//! preferred temperature. This facade crate re-exports the public API
//! from all BeeClust sub-crates and ties them together in
//! [`Simulation`]; for most users, adding `beeclust` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use beeclust::prelude::*;
//!
//! // A 1x5 corridor: heater, bee heading right, two free cells, cooler.
//! let grid = Grid::from_codes(1, 5, &[6, 2, 0, 0, 7], Params::default()).unwrap();
//! let mut sim = Simulation::seeded(grid, 42);
//!
//! for _ in 0..10 {
//!     sim.tick();
//! }
//!
//! assert_eq!(sim.bees().len(), 1);
//! let comfort = sim.score().unwrap();
//! assert!(comfort.is_finite());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `beeclust-core` | cells, headings, grid, parameters, errors |
//! | [`field`] | `beeclust-field` | ambient-temperature field |
//! | [`engine`] | `beeclust-engine` | per-tick transition engine, tick metrics |
//! | [`analysis`] | `beeclust-analysis` | bee/swarm/score queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Read-only swarm queries (`beeclust-analysis`).
pub use beeclust_analysis as analysis;

/// Per-tick transition engine (`beeclust-engine`).
pub use beeclust_engine as engine;

/// Ambient-temperature field (`beeclust-field`).
pub use beeclust_field as field;

/// Core types: cells, headings, grid, parameters, errors
/// (`beeclust-core`).
pub use beeclust_core as types;

use beeclust_core::{DomainError, Grid, Pos};
use beeclust_engine::{TickMetrics, TransitionEngine};
use beeclust_field::HeatField;
use indexmap::IndexSet;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Commonly used types, one `use` away.
pub mod prelude {
    pub use crate::Simulation;
    pub use beeclust_core::{Cell, ConfigError, DomainError, Grid, Heading, Params, Pos, AMNESIA};
    pub use beeclust_engine::{TickMetrics, TransitionEngine};
    pub use beeclust_field::HeatField;
}

/// A complete BeeClust simulation: grid, heat field, and engine.
///
/// Construction validation happens when the [`Grid`] is built; a
/// `Simulation` always starts from a valid grid and computes its heat
/// field up front. Single-threaded: `tick`, heat recomputation, and the
/// analysis queries never interleave within one call.
#[derive(Debug)]
pub struct Simulation<R: Rng> {
    grid: Grid,
    heat: HeatField,
    engine: TransitionEngine<R>,
    last_metrics: TickMetrics,
}

impl Simulation<ChaCha8Rng> {
    /// Build a simulation with a deterministic, seeded random source.
    ///
    /// Two simulations built from equal grids and the same seed produce
    /// bit-identical traces.
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Simulation::new(grid, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Build a simulation from a validated grid and a random source.
    pub fn new(grid: Grid, rng: R) -> Self {
        let heat = HeatField::compute(&grid);
        Simulation {
            grid,
            heat,
            engine: TransitionEngine::new(rng),
            last_metrics: TickMetrics::default(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the number of bees that successfully advanced one cell;
    /// the full outcome counters are available via
    /// [`last_metrics`](Simulation::last_metrics).
    pub fn tick(&mut self) -> usize {
        self.last_metrics = self.engine.tick(&mut self.grid, &self.heat);
        self.last_metrics.moved
    }

    /// Outcome counters of the most recent tick.
    pub fn last_metrics(&self) -> TickMetrics {
        self.last_metrics
    }

    /// Positions of all bees, row-major.
    pub fn bees(&self) -> IndexSet<Pos> {
        beeclust_analysis::bees(&self.grid)
    }

    /// The bee set partitioned into maximal 4-connected swarms.
    pub fn swarms(&self) -> Vec<IndexSet<Pos>> {
        beeclust_analysis::swarms(&self.grid)
    }

    /// Mean heat-field value over all bee positions.
    ///
    /// Fails with [`DomainError::NoBees`] on a beeless grid.
    pub fn score(&self) -> Result<f64, DomainError> {
        beeclust_analysis::score(&self.grid, &self.heat)
    }

    /// Put every bee into the amnesia state: wait counters reset to the
    /// sentinel, headings untouched until each bee's next tick.
    pub fn forget(&mut self) {
        self.grid.forget();
    }

    /// Rebuild the heat field from the grid's current non-bee cells.
    ///
    /// Call after editing wall/heater/cooler placement via
    /// [`grid_mut`](Simulation::grid_mut). Bee movement never requires
    /// this — temperature is independent of bee occupancy.
    pub fn recompute_heat(&mut self) {
        self.heat = HeatField::compute(&self.grid);
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid for external layout edits.
    ///
    /// After changing any wall, heater, or cooler cell, call
    /// [`recompute_heat`](Simulation::recompute_heat) before the next
    /// tick or score.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The current heat field.
    pub fn heat(&self) -> &HeatField {
        &self.heat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_core::Params;

    #[test]
    fn seeded_simulations_agree() {
        let grid =
            Grid::from_codes(2, 3, &[6, 2, 0, 0, 4, 7], Params::default()).unwrap();
        let mut a = Simulation::seeded(grid.clone(), 7);
        let mut b = Simulation::seeded(grid, 7);
        for _ in 0..25 {
            assert_eq!(a.tick(), b.tick());
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn tick_reports_moved_count_from_metrics() {
        let params = Params {
            p_changedir: 0.0,
            ..Params::default()
        };
        let grid = Grid::from_codes(1, 3, &[2, 0, 0], params).unwrap();
        let mut sim = Simulation::seeded(grid, 1);
        let moved = sim.tick();
        assert_eq!(moved, 1);
        assert_eq!(sim.last_metrics().moved, 1);
    }

    #[test]
    fn recompute_heat_is_idempotent() {
        // Wall cell keeps a NaN in the field the equality must survive.
        let grid =
            Grid::from_codes(2, 3, &[6, 5, 7, 0, 0, 0], Params::default()).unwrap();
        let mut sim = Simulation::seeded(grid, 1);
        let before = sim.heat().clone();
        sim.recompute_heat();
        assert_eq!(sim.heat(), &before);
    }
}

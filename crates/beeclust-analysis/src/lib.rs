//! Read-only swarm queries over BeeClust grids.
//!
//! Three aggregate views of a grid's bees: the bee set itself, its
//! partition into 4-connected swarms, and the mean-comfort score
//! against a [`HeatField`]. All queries are pure reads; none caches
//! anything across calls.
//!
//! Swarm adjacency is deliberately 4-connected (cardinal only) while
//! heat diffusion is 8-connected — the two algorithms are defined on
//! different neighbourhoods.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use beeclust_core::{DomainError, Grid, Pos};
use beeclust_field::HeatField;
use indexmap::IndexSet;
use std::collections::VecDeque;

/// Positions of every bee cell, in row-major order.
///
/// The ordering carries no meaning but is deterministic, so repeated
/// calls on the same grid iterate identically.
pub fn bees(grid: &Grid) -> IndexSet<Pos> {
    grid.positions()
        .filter(|&pos| grid.get(pos).is_bee())
        .collect()
}

/// Partition the bee set into maximal 4-connected swarms.
///
/// Flood fill over bee-occupied cells with a per-cell visited vec;
/// swarms appear in row-major order of their first-discovered member,
/// members in BFS discovery order. Every bee lands in exactly one swarm.
pub fn swarms(grid: &Grid) -> Vec<IndexSet<Pos>> {
    let mut visited = vec![false; grid.cell_count()];
    let mut result = Vec::new();

    for origin in grid.positions() {
        if !grid.get(origin).is_bee() || visited[grid.index(origin)] {
            continue;
        }
        let mut swarm = IndexSet::new();
        let mut queue = VecDeque::new();
        visited[grid.index(origin)] = true;
        queue.push_back(origin);
        while let Some(pos) = queue.pop_front() {
            swarm.insert(pos);
            for nb in grid.neighbours4(pos) {
                let idx = grid.index(nb);
                if !visited[idx] && grid.get(nb).is_bee() {
                    visited[idx] = true;
                    queue.push_back(nb);
                }
            }
        }
        result.push(swarm);
    }

    result
}

/// Arithmetic mean of the heat-field values at all bee positions.
///
/// Returns [`DomainError::NoBees`] on a beeless grid rather than
/// dividing by zero. Bees are never at walls, so every read is defined.
pub fn score(grid: &Grid, heat: &HeatField) -> Result<f64, DomainError> {
    let bees = bees(grid);
    if bees.is_empty() {
        return Err(DomainError::NoBees);
    }
    let total: f64 = bees.iter().map(|&pos| heat.temperature(pos)).sum();
    Ok(total / bees.len() as f64)
}

//! Multi-source BFS distance maps over the grid.

use beeclust_core::{Cell, Grid};
use std::collections::VecDeque;

/// Graph distance from every cell to the nearest cell matching
/// `is_source`, flooding over 8-connected neighbours.
///
/// Source cells sit at distance 0. Expansion only passes through
/// heat-transparent cells (empty or bee-occupied); walls and *both*
/// source kinds terminate paths, so a heater shadowed by coolers is
/// unreachable exactly as in the per-cell outward search it replaces.
/// Unreached cells are `None` (infinite distance).
pub(crate) fn source_distances(grid: &Grid, is_source: impl Fn(Cell) -> bool) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();

    for pos in grid.positions() {
        if is_source(grid.get(pos)) {
            dist[grid.index(pos)] = Some(0);
            queue.push_back((pos, 0u32));
        }
    }

    while let Some((pos, d)) = queue.pop_front() {
        for nb in grid.neighbours8(pos) {
            let idx = grid.index(nb);
            if dist[idx].is_none() && grid.get(nb).is_heat_transparent() {
                dist[idx] = Some(d + 1);
                queue.push_back((nb, d + 1));
            }
        }
    }

    dist
}

//! Benchmark profiles for the BeeClust simulation.
//!
//! Provides deterministic arena builders shared by the criterion
//! benches:
//!
//! - [`arena_profile`]: walled arena with corner sources and a seeded
//!   scattering of bees
//! - [`open_profile`]: sourceless open grid (heat-field worst case is
//!   the all-unreachable flood)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use beeclust_core::{Cell, Grid, Heading, Params, Pos};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a walled `rows x cols` arena with a heater and a cooler in
/// opposite corners and roughly `bee_permille`/1000 of the free cells
/// occupied by bees, placed deterministically from `seed`.
pub fn arena_profile(rows: u32, cols: u32, bee_permille: u32, seed: u64) -> Grid {
    assert!(rows >= 3 && cols >= 3, "arena needs an interior");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = vec![Cell::Empty; (rows as usize) * (cols as usize)];

    let idx = |r: u32, c: u32| (r as usize) * (cols as usize) + (c as usize);
    for r in 0..rows {
        cells[idx(r, 0)] = Cell::Wall;
        cells[idx(r, cols - 1)] = Cell::Wall;
    }
    for c in 0..cols {
        cells[idx(0, c)] = Cell::Wall;
        cells[idx(rows - 1, c)] = Cell::Wall;
    }
    cells[idx(1, 1)] = Cell::Heater;
    cells[idx(rows - 2, cols - 2)] = Cell::Cooler;

    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            if cells[idx(r, c)] == Cell::Empty && rng.gen_range(0..1000) < bee_permille {
                let heading = Heading::ALL[rng.gen_range(0..4)];
                cells[idx(r, c)] = Cell::bee(heading);
            }
        }
    }

    Grid::from_cells(rows, cols, cells, Params::default()).expect("profile grid is valid")
}

/// Build an open `rows x cols` grid with no walls or sources and a
/// single bee in the middle.
pub fn open_profile(rows: u32, cols: u32) -> Grid {
    let mut cells = vec![Cell::Empty; (rows as usize) * (cols as usize)];
    let center = (rows as usize / 2) * (cols as usize) + (cols as usize / 2);
    cells[center] = Cell::bee(Heading::Up);
    Grid::from_cells(rows, cols, cells, Params::default()).expect("profile grid is valid")
}

/// Find any bee position, for sanity checks in benches.
pub fn first_bee(grid: &Grid) -> Option<Pos> {
    grid.bee_positions().into_iter().next()
}

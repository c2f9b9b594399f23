//! Ambient-temperature field for the BeeClust simulation.
//!
//! [`HeatField`] assigns every grid cell a temperature derived from its
//! graph distance to the nearest heater and nearest cooler. Distances
//! flow over 8-connected neighbours and never cross walls or other
//! sources. The field is pure derived data: deterministic for a given
//! grid, recomputed wholesale on demand, and independent of bee
//! occupancy (bees are transparent to heat).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod distance;

use beeclust_core::{Cell, Grid, Pos};
use distance::source_distances;

/// Per-cell ambient temperature, derived from a [`Grid`].
///
/// Heater cells hold exactly `t_heater`, cooler cells exactly
/// `t_cooler`, wall cells `NaN` (undefined — never read by the engine
/// or analysis, since bees are never at walls). Every other cell holds
///
/// ```text
/// heating = max(0, (1/dist_heater) * (t_heater - t_env))
/// cooling = max(0, (1/dist_cooler) * (t_env - t_cooler))
/// temperature = t_env + k_temp * (heating - cooling)
/// ```
///
/// where an unreachable source contributes `1/∞ = 0`.
///
/// The field does not track the grid: callers recompute it whenever
/// wall/heater/cooler placement changes. Bee movement never requires a
/// recomputation.
#[derive(Clone, Debug)]
pub struct HeatField {
    rows: u32,
    cols: u32,
    temps: Vec<f64>,
}

/// Bitwise equality: two fields are equal when every cell holds the
/// same `f64` bit pattern. Derived `f64` equality would make any
/// wall-bearing field unequal to itself (`NaN != NaN`).
impl PartialEq for HeatField {
    fn eq(&self, other: &HeatField) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.temps.len() == other.temps.len()
            && self
                .temps
                .iter()
                .zip(&other.temps)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for HeatField {}

impl HeatField {
    /// Compute the field for the grid's current non-bee cells.
    ///
    /// Runs two multi-source BFS passes (heater distances, cooler
    /// distances) and applies the temperature formula per cell.
    /// O(rows·cols); idempotent.
    pub fn compute(grid: &Grid) -> HeatField {
        let p = *grid.params();
        let dist_heater = source_distances(grid, |c| c == Cell::Heater);
        let dist_cooler = source_distances(grid, |c| c == Cell::Cooler);

        let mut temps = vec![f64::NAN; grid.cell_count()];
        for pos in grid.positions() {
            let idx = grid.index(pos);
            temps[idx] = match grid.get(pos) {
                Cell::Heater => p.t_heater,
                Cell::Cooler => p.t_cooler,
                Cell::Wall => f64::NAN,
                Cell::Empty | Cell::Bee { .. } => {
                    let heating = contribution(dist_heater[idx], p.t_heater - p.t_env);
                    let cooling = contribution(dist_cooler[idx], p.t_env - p.t_cooler);
                    p.t_env + p.k_temp * (heating - cooling)
                }
            };
        }

        HeatField {
            rows: grid.rows(),
            cols: grid.cols(),
            temps,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Raw field value at `pos`; `NaN` at wall cells.
    pub fn get(&self, pos: Pos) -> f64 {
        self.temps[(pos.row as usize) * (self.cols as usize) + (pos.col as usize)]
    }

    /// Temperature at a non-wall cell.
    ///
    /// Panics if `pos` holds a wall — such a read is a programming
    /// defect (bees are never at walls), not a recoverable condition.
    pub fn temperature(&self, pos: Pos) -> f64 {
        let t = self.get(pos);
        assert!(!t.is_nan(), "heat field read at wall cell {pos}");
        t
    }
}

/// One source term of the temperature formula: `max(0, delta / dist)`,
/// with `None` (unreachable) contributing zero.
fn contribution(dist: Option<u32>, delta: f64) -> f64 {
    match dist {
        Some(d) if d > 0 => (delta / f64::from(d)).max(0.0),
        // Distance 0 only occurs at source cells, which take their
        // fixed temperature before the formula is consulted.
        _ => 0.0,
    }
}

//! The owning 2D grid: cell storage, shape validation, and
//! neighbourhood queries.

use crate::cell::{Cell, Heading, AMNESIA};
use crate::error::ConfigError;
use crate::params::Params;
use smallvec::SmallVec;
use std::fmt;

/// Cardinal offsets: N, S, W, E.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A grid position `(row, col)`.
///
/// Orders row-major (`Ord` derives over `(row, col)`), which is the
/// canonical deterministic ordering used for bee enumeration and tick
/// processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Row index, `0 <= row < rows`.
    pub row: u32,
    /// Column index, `0 <= col < cols`.
    pub col: u32,
}

impl Pos {
    /// Construct a position.
    pub fn new(row: u32, col: u32) -> Pos {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A two-dimensional grid of [`Cell`]s with row-major storage.
///
/// Owns the cell array and the simulation [`Params`]. Dimensions are
/// fixed at construction (`rows × cols >= 1×1`); the transition engine
/// mutates cells in place but the grid is never resized. Parameter
/// validation runs before any cells are inspected, so an invalid
/// configuration is never partially applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
    params: Params,
}

impl Grid {
    /// Maximum dimension size: offsets use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a grid from a flat row-major cell buffer.
    ///
    /// Rejects zero dimensions, dimensions beyond [`Grid::MAX_DIM`], a
    /// buffer whose length is not `rows * cols`, and invalid parameters.
    pub fn from_cells(
        rows: u32,
        cols: u32,
        cells: Vec<Cell>,
        params: Params,
    ) -> Result<Grid, ConfigError> {
        params.validate()?;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(ConfigError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Grid {
            rows,
            cols,
            cells,
            params,
        })
    }

    /// Build a grid from nested rows.
    ///
    /// Rejects an empty outer vector, empty rows, and ragged layouts.
    pub fn from_rows(rows: Vec<Vec<Cell>>, params: Params) -> Result<Grid, ConfigError> {
        params.validate()?;
        let Some(first) = rows.first() else {
            return Err(ConfigError::EmptyGrid);
        };
        let expected = first.len();
        if expected == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(ConfigError::RaggedRows {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        let n_rows = u32::try_from(rows.len()).map_err(|_| ConfigError::DimensionTooLarge {
            name: "rows",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        let n_cols = u32::try_from(expected).map_err(|_| ConfigError::DimensionTooLarge {
            name: "cols",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        Grid::from_cells(n_rows, n_cols, cells, params)
    }

    /// Build a grid from the numeric cell codes of an external layout
    /// supplier (see [`Cell::from_code`]).
    pub fn from_codes(
        rows: u32,
        cols: u32,
        codes: &[i32],
        params: Params,
    ) -> Result<Grid, ConfigError> {
        let cells: Vec<Cell> = codes
            .iter()
            .map(|&code| Cell::from_code(code))
            .collect::<Result<_, _>>()?;
        Grid::from_cells(rows, cols, cells, params)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// The simulation parameters, fixed for this grid's lifetime.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Flat row-major index of an in-bounds position.
    pub fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        (pos.row as usize) * (self.cols as usize) + (pos.col as usize)
    }

    /// Cell at `pos`. Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Overwrite the cell at `pos`. Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Resolve signed coordinates to a position, `None` if out of bounds.
    pub fn resolve(&self, row: i32, col: i32) -> Option<Pos> {
        if row >= 0 && (row as u32) < self.rows && col >= 0 && (col as u32) < self.cols {
            Some(Pos::new(row as u32, col as u32))
        } else {
            None
        }
    }

    /// The cell one step from `pos` in `heading`, `None` at the boundary.
    pub fn target(&self, pos: Pos, heading: Heading) -> Option<Pos> {
        let (dr, dc) = heading.offset();
        self.resolve(pos.row as i32 + dr, pos.col as i32 + dc)
    }

    /// In-bounds 4-connected (cardinal) neighbours of `pos`.
    pub fn neighbours4(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_4 {
            if let Some(nb) = self.resolve(pos.row as i32 + dr, pos.col as i32 + dc) {
                result.push(nb);
            }
        }
        result
    }

    /// In-bounds 8-connected (cardinal + diagonal) neighbours of `pos`.
    pub fn neighbours8(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            if let Some(nb) = self.resolve(pos.row as i32 + dr, pos.col as i32 + dc) {
                result.push(nb);
            }
        }
        result
    }

    /// Iterate every position in row-major canonical order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// Positions of all bee cells in row-major order.
    pub fn bee_positions(&self) -> Vec<Pos> {
        self.positions()
            .filter(|&pos| self.get(pos).is_bee())
            .collect()
    }

    /// Set every bee's wait counter to the amnesia sentinel, moving or
    /// resting alike. Headings are untouched; each bee replaces its
    /// heading on its next processing turn.
    pub fn forget(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Bee { heading, .. } = *cell {
                *cell = Cell::Bee {
                    heading,
                    wait: AMNESIA,
                };
            }
        }
    }

    /// Encode the grid back to flat row-major numeric codes.
    pub fn codes(&self) -> Vec<i32> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn empty_grid(rows: u32, cols: u32) -> Grid {
        let cells = vec![Cell::Empty; (rows as usize) * (cols as usize)];
        Grid::from_cells(rows, cols, cells, Params::default()).unwrap()
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Grid::from_cells(0, 5, vec![], Params::default()),
            Err(ConfigError::EmptyGrid)
        ));
        assert!(matches!(
            Grid::from_rows(vec![], Params::default()),
            Err(ConfigError::EmptyGrid)
        ));
    }

    #[test]
    fn cell_count_mismatch_rejected() {
        assert!(matches!(
            Grid::from_cells(2, 2, vec![Cell::Empty; 3], Params::default()),
            Err(ConfigError::CellCountMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![Cell::Empty, Cell::Empty], vec![Cell::Empty]];
        assert!(matches!(
            Grid::from_rows(rows, Params::default()),
            Err(ConfigError::RaggedRows { row: 1, .. })
        ));
    }

    #[test]
    fn invalid_params_rejected_before_shape() {
        let params = Params {
            p_wall: 2.0,
            ..Params::default()
        };
        // Shape is also bad; the parameter error must win.
        assert!(matches!(
            Grid::from_cells(0, 0, vec![], params),
            Err(ConfigError::ProbabilityOutOfRange { name: "p_wall", .. })
        ));
    }

    #[test]
    fn from_codes_round_trips() {
        let codes = [6, 0, 1, 5, -2, 7];
        let grid = Grid::from_codes(2, 3, &codes, Params::default()).unwrap();
        assert_eq!(grid.codes(), codes);
    }

    #[test]
    fn from_codes_rejects_unknown() {
        assert!(matches!(
            Grid::from_codes(1, 2, &[0, 9], Params::default()),
            Err(ConfigError::UnknownCellCode { code: 9 })
        ));
    }

    #[test]
    fn target_stops_at_boundary() {
        let grid = empty_grid(2, 2);
        assert_eq!(grid.target(Pos::new(0, 0), Heading::Up), None);
        assert_eq!(grid.target(Pos::new(0, 0), Heading::Left), None);
        assert_eq!(
            grid.target(Pos::new(0, 0), Heading::Down),
            Some(Pos::new(1, 0))
        );
        assert_eq!(
            grid.target(Pos::new(0, 0), Heading::Right),
            Some(Pos::new(0, 1))
        );
    }

    #[test]
    fn neighbour_counts_at_corner_edge_interior() {
        let grid = empty_grid(5, 5);
        assert_eq!(grid.neighbours4(Pos::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbours8(Pos::new(0, 0)).len(), 3);
        assert_eq!(grid.neighbours4(Pos::new(0, 2)).len(), 3);
        assert_eq!(grid.neighbours8(Pos::new(0, 2)).len(), 5);
        assert_eq!(grid.neighbours4(Pos::new(2, 2)).len(), 4);
        assert_eq!(grid.neighbours8(Pos::new(2, 2)).len(), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let grid = empty_grid(1, 1);
        assert!(grid.neighbours4(Pos::new(0, 0)).is_empty());
        assert!(grid.neighbours8(Pos::new(0, 0)).is_empty());
    }

    #[test]
    fn bee_positions_row_major() {
        let grid = Grid::from_codes(2, 2, &[0, 2, 3, 0], Params::default()).unwrap();
        assert_eq!(
            grid.bee_positions(),
            vec![Pos::new(0, 1), Pos::new(1, 0)]
        );
    }

    #[test]
    fn forget_marks_every_bee() {
        let mut grid = Grid::from_codes(1, 4, &[1, -5, 5, 0], Params::default()).unwrap();
        grid.forget();
        assert_eq!(
            grid.get(Pos::new(0, 0)),
            Cell::Bee {
                heading: Heading::Up,
                wait: AMNESIA
            }
        );
        assert_eq!(
            grid.get(Pos::new(0, 1)),
            Cell::Bee {
                heading: Heading::Up,
                wait: AMNESIA
            }
        );
        assert_eq!(grid.get(Pos::new(0, 2)), Cell::Wall);
        assert_eq!(grid.get(Pos::new(0, 3)), Cell::Empty);
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 1u32..8,
            cols in 1u32..8,
            r in 0u32..8,
            c in 0u32..8,
        ) {
            let grid = empty_grid(rows, cols);
            let pos = Pos::new(r % rows, c % cols);
            for nb in grid.neighbours8(pos) {
                prop_assert!(
                    grid.neighbours8(nb).contains(&pos),
                    "neighbour symmetry violated between {} and {}",
                    pos, nb,
                );
            }
        }

        #[test]
        fn positions_cover_grid(rows in 1u32..8, cols in 1u32..8) {
            let grid = empty_grid(rows, cols);
            let all: Vec<Pos> = grid.positions().collect();
            prop_assert_eq!(all.len(), grid.cell_count());
            let mut sorted = all.clone();
            sorted.sort();
            prop_assert_eq!(all, sorted); // row-major is already sorted
        }
    }
}

//! Cell state and bee heading sum types, plus the numeric cell-code interface.
//!
//! Grid layouts arrive from external suppliers as flat arrays of integer
//! cell codes; [`Cell::from_code`] and [`Cell::code`] translate between
//! that representation and the closed [`Cell`] type used everywhere else.

use crate::error::ConfigError;
use std::fmt;

/// Wait-counter sentinel for a bee that has finished resting and forgotten
/// its heading.
///
/// A bee whose counter reaches this value chooses a fresh random heading on
/// its next processing turn and makes no movement attempt that turn.
/// Counters below `AMNESIA` mean "still resting"; counting up by one each
/// tick drains the rest period.
pub const AMNESIA: i32 = -1;

/// Cardinal heading of a moving bee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Row − 1.
    Up,
    /// Col + 1.
    Right,
    /// Row + 1.
    Down,
    /// Col − 1.
    Left,
}

impl Heading {
    /// All four headings in cell-code order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Returns the `(row_offset, col_offset)` for this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }

    /// The opposite heading (Up↔Down, Left↔Right).
    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
        }
    }

    /// The three headings other than `self`, in cell-code order.
    ///
    /// This is the candidate set for a random heading change: a bee never
    /// "changes" to the heading it already has.
    pub fn others(self) -> [Heading; 3] {
        match self {
            Heading::Up => [Heading::Right, Heading::Down, Heading::Left],
            Heading::Right => [Heading::Up, Heading::Down, Heading::Left],
            Heading::Down => [Heading::Up, Heading::Right, Heading::Left],
            Heading::Left => [Heading::Up, Heading::Right, Heading::Down],
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::Up => "up",
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
        };
        write!(f, "{name}")
    }
}

/// State of a single grid cell.
///
/// A cell holds exactly one of these. Bees never share a cell with a
/// wall, heater, cooler, or another bee; the transition engine enforces
/// this by construction (bees only ever move into [`Cell::Empty`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Nothing here; bees may move in.
    Empty,
    /// A bee with its current heading and wait counter.
    ///
    /// `wait == 0`: moving. `wait < 0`: resting with `-wait` ticks of
    /// rest remaining, except [`AMNESIA`] which marks a bee that must
    /// pick a fresh heading before its next movement attempt. The
    /// heading is retained while resting and only replaced when the
    /// amnesia turn (or a random heading change) fires.
    Bee {
        /// Direction of the next movement attempt.
        heading: Heading,
        /// Rest state; see type-level docs.
        wait: i32,
    },
    /// Static obstacle; blocks movement and heat diffusion.
    Wall,
    /// Fixed-temperature heat source; blocks movement.
    Heater,
    /// Fixed-temperature cold source; blocks movement.
    Cooler,
}

impl Cell {
    /// A moving bee with the given heading.
    pub fn bee(heading: Heading) -> Cell {
        Cell::Bee { heading, wait: 0 }
    }

    /// Whether this cell holds a bee, regardless of heading or rest state.
    pub fn is_bee(self) -> bool {
        matches!(self, Cell::Bee { .. })
    }

    /// Whether this cell blocks bee movement (wall, heater, or cooler).
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::Wall | Cell::Heater | Cell::Cooler)
    }

    /// Whether heat diffusion passes through this cell.
    ///
    /// Bees do not affect temperature, so bee cells are transparent;
    /// walls and both source kinds terminate diffusion paths.
    pub fn is_heat_transparent(self) -> bool {
        matches!(self, Cell::Empty | Cell::Bee { .. })
    }

    /// Decode a numeric cell code from an external grid-layout supplier.
    ///
    /// Codes: `0` empty, `1`–`4` a moving bee heading up/right/down/left,
    /// `5` wall, `6` heater, `7` cooler. Any negative code is a resting
    /// bee with that wait counter; the numeric form does not record a
    /// resting bee's heading, so decoding synthesizes [`Heading::Up`]
    /// (the heading is replaced on the bee's amnesia turn anyway).
    ///
    /// Returns [`ConfigError::UnknownCellCode`] for anything else.
    pub fn from_code(code: i32) -> Result<Cell, ConfigError> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::bee(Heading::Up)),
            2 => Ok(Cell::bee(Heading::Right)),
            3 => Ok(Cell::bee(Heading::Down)),
            4 => Ok(Cell::bee(Heading::Left)),
            5 => Ok(Cell::Wall),
            6 => Ok(Cell::Heater),
            7 => Ok(Cell::Cooler),
            w if w < 0 => Ok(Cell::Bee {
                heading: Heading::Up,
                wait: w,
            }),
            _ => Err(ConfigError::UnknownCellCode { code }),
        }
    }

    /// Encode this cell back to its numeric code.
    ///
    /// The inverse of [`Cell::from_code`] up to the heading of resting
    /// bees, which the numeric form drops.
    pub fn code(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Bee { heading, wait: 0 } => match heading {
                Heading::Up => 1,
                Heading::Right => 2,
                Heading::Down => 3,
                Heading::Left => 4,
            },
            Cell::Bee { wait, .. } => wait,
            Cell::Wall => 5,
            Cell::Heater => 6,
            Cell::Cooler => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reverse_is_involution() {
        for h in Heading::ALL {
            assert_eq!(h.reverse().reverse(), h);
        }
    }

    #[test]
    fn reverse_negates_offset() {
        for h in Heading::ALL {
            let (dr, dc) = h.offset();
            assert_eq!(h.reverse().offset(), (-dr, -dc));
        }
    }

    #[test]
    fn others_excludes_self() {
        for h in Heading::ALL {
            let others = h.others();
            assert_eq!(others.len(), 3);
            assert!(!others.contains(&h));
        }
    }

    #[test]
    fn code_round_trip_non_resting() {
        for code in 0..=7 {
            let cell = Cell::from_code(code).unwrap();
            assert_eq!(cell.code(), code);
        }
    }

    #[test]
    fn negative_codes_decode_to_resting_bees() {
        let cell = Cell::from_code(-3).unwrap();
        assert_eq!(
            cell,
            Cell::Bee {
                heading: Heading::Up,
                wait: -3
            }
        );
        assert_eq!(cell.code(), -3);
    }

    #[test]
    fn amnesia_code_round_trips() {
        let cell = Cell::from_code(AMNESIA).unwrap();
        assert!(cell.is_bee());
        assert_eq!(cell.code(), AMNESIA);
    }

    #[test]
    fn unknown_codes_rejected() {
        assert!(matches!(
            Cell::from_code(8),
            Err(ConfigError::UnknownCellCode { code: 8 })
        ));
        assert!(matches!(
            Cell::from_code(42),
            Err(ConfigError::UnknownCellCode { code: 42 })
        ));
    }

    #[test]
    fn obstacle_membership_is_exact() {
        assert!(Cell::Wall.is_obstacle());
        assert!(Cell::Heater.is_obstacle());
        assert!(Cell::Cooler.is_obstacle());
        assert!(!Cell::Empty.is_obstacle());
        assert!(!Cell::bee(Heading::Up).is_obstacle());
    }

    proptest! {
        #[test]
        fn resting_codes_round_trip(wait in i32::MIN..0) {
            let cell = Cell::from_code(wait).unwrap();
            prop_assert!(cell.is_bee());
            prop_assert_eq!(cell.code(), wait);
        }
    }
}

//! Error types for grid construction and analysis queries.
//!
//! Construction-time problems are [`ConfigError`]: fatal to that
//! construction attempt, raised before any heat-field computation runs.
//! [`DomainError`] covers recoverable query failures. Invariant
//! violations (a heat read at a wall cell) are programming defects and
//! panic via assertions instead of appearing here.

use std::fmt;

/// Errors detected while validating simulation parameters or grid shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A probability parameter is outside `[0, 1]` (or not finite).
    ProbabilityOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A coefficient parameter is negative or not finite.
    NegativeCoefficient {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A temperature parameter is not finite.
    NonFiniteTemperature {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The fixed temperatures violate `t_heater >= t_env >= t_cooler`.
    TemperatureOrdering {
        /// Heater temperature.
        t_heater: f64,
        /// Ambient temperature.
        t_env: f64,
        /// Cooler temperature.
        t_cooler: f64,
    },
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A grid dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// A nested-row layout is not rectangular.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat cell buffer does not match `rows * cols`.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
    /// A numeric cell code has no [`Cell`](crate::Cell) interpretation.
    UnknownCellCode {
        /// The offending code.
        code: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} = {value} is not a probability in [0, 1]")
            }
            Self::NegativeCoefficient { name, value } => {
                write!(f, "{name} = {value} must be finite and >= 0")
            }
            Self::NonFiniteTemperature { name, value } => {
                write!(f, "{name} = {value} is not a finite temperature")
            }
            Self::TemperatureOrdering {
                t_heater,
                t_env,
                t_cooler,
            } => write!(
                f,
                "temperatures must satisfy t_heater >= t_env >= t_cooler \
                 (got {t_heater} / {t_env} / {t_cooler})"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} (layout must be rectangular)"
            ),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "cell buffer holds {found} cells, expected {expected}")
            }
            Self::UnknownCellCode { code } => write!(f, "unknown cell code {code}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Recoverable errors from read-only analysis queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// A score was requested on a grid with zero bees.
    NoBees,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBees => write!(f, "no bees on the grid"),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_parameter_name() {
        let err = ConfigError::ProbabilityOutOfRange {
            name: "p_wall",
            value: 1.5,
        };
        assert!(err.to_string().contains("p_wall"));
    }

    #[test]
    fn domain_error_display() {
        assert_eq!(DomainError::NoBees.to_string(), "no bees on the grid");
    }
}

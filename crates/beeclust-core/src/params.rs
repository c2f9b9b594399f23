//! Simulation parameters and their construction-time validation.

use crate::error::ConfigError;

/// Fixed parameters of a BeeClust simulation.
///
/// Owned by the [`Grid`](crate::Grid) and immutable for its lifetime.
/// All ranges are checked by [`Params::validate`] before any derived
/// state (the heat field) is computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Per-tick probability that a moving bee randomly changes heading.
    pub p_changedir: f64,
    /// Probability that a bee stops (rather than reverses) on hitting an
    /// obstacle or the grid boundary.
    pub p_wall: f64,
    /// Probability that a bee stops (rather than waits in place) when its
    /// target cell holds another bee.
    pub p_meet: f64,
    /// Heat-field scaling coefficient.
    pub k_temp: f64,
    /// Base resting-duration coefficient.
    pub k_stay: f64,
    /// Temperature at which bees rest longest.
    pub t_ideal: f64,
    /// Fixed temperature of heater cells.
    pub t_heater: f64,
    /// Fixed temperature of cooler cells.
    pub t_cooler: f64,
    /// Ambient temperature far from any source.
    pub t_env: f64,
    /// Cap on the computed resting duration, in ticks.
    ///
    /// The stop-time formula takes `min(computed, min_wait)` — the
    /// upstream model's literal semantics, where this parameter bounds
    /// rests from above despite its name. Kept as-is deliberately.
    pub min_wait: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            p_changedir: 0.2,
            p_wall: 0.8,
            p_meet: 0.8,
            k_temp: 0.9,
            k_stay: 50.0,
            t_ideal: 35.0,
            t_heater: 40.0,
            t_cooler: 5.0,
            t_env: 22.0,
            min_wait: 2,
        }
    }
}

impl Params {
    /// Check every parameter against its declared range.
    ///
    /// Probabilities must lie in `[0, 1]`; `k_temp` and `k_stay` must be
    /// finite and non-negative; temperatures must be finite and satisfy
    /// `t_heater >= t_env >= t_cooler`. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("p_changedir", self.p_changedir),
            ("p_wall", self.p_wall),
            ("p_meet", self.p_meet),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        for (name, value) in [("k_temp", self.k_temp), ("k_stay", self.k_stay)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeCoefficient { name, value });
            }
        }
        for (name, value) in [
            ("t_ideal", self.t_ideal),
            ("t_heater", self.t_heater),
            ("t_cooler", self.t_cooler),
            ("t_env", self.t_env),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteTemperature { name, value });
            }
        }
        if self.t_heater < self.t_env || self.t_cooler > self.t_env {
            return Err(ConfigError::TemperatureOrdering {
                t_heater: self.t_heater,
                t_env: self.t_env,
                t_cooler: self.t_cooler,
            });
        }
        Ok(())
    }
}

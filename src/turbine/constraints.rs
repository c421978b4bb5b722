use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Regulation constraint violations caught before the controller runs
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("{field} is not finite: {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("desired_voltage_v must be positive, got {0}")]
    NonPositiveVoltage(f64),

    #[error("rheostat_min_ohms cannot be negative, got {0}")]
    NegativeResistance(f64),

    #[error("rheostat_min_ohms {min} exceeds rheostat_max_ohms {max}")]
    InvertedRheostatBounds { min: f64, max: f64 },
}

/// Electrical regulation limits: the voltage target and the rheostat range.
///
/// Loaded once from configuration and never mutated while the controller
/// runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulationConstraints {
    /// Voltage the rheostat is asked to hold (V)
    pub desired_voltage_v: f64,

    /// Minimum rheostat resistance (ohms)
    pub rheostat_min_ohms: f64,

    /// Maximum rheostat resistance (ohms); also the setting commanded when
    /// no current flows
    pub rheostat_max_ohms: f64,
}

impl Default for RegulationConstraints {
    fn default() -> Self {
        Self {
            desired_voltage_v: 230.0, // Standard European grid voltage
            rheostat_min_ohms: 0.0,
            rheostat_max_ohms: 1e21,
        }
    }
}

impl RegulationConstraints {
    /// Validate the constraints for consistency
    pub fn validate(&self) -> Result<(), ConstraintError> {
        for (field, value) in [
            ("desired_voltage_v", self.desired_voltage_v),
            ("rheostat_min_ohms", self.rheostat_min_ohms),
            ("rheostat_max_ohms", self.rheostat_max_ohms),
        ] {
            if !value.is_finite() {
                return Err(ConstraintError::NotFinite { field, value });
            }
        }

        if self.desired_voltage_v <= 0.0 {
            return Err(ConstraintError::NonPositiveVoltage(self.desired_voltage_v));
        }

        if self.rheostat_min_ohms < 0.0 {
            return Err(ConstraintError::NegativeResistance(self.rheostat_min_ohms));
        }

        if self.rheostat_min_ohms > self.rheostat_max_ohms {
            return Err(ConstraintError::InvertedRheostatBounds {
                min: self.rheostat_min_ohms,
                max: self.rheostat_max_ohms,
            });
        }

        Ok(())
    }
}

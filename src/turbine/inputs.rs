use serde::{Deserialize, Serialize};

/// Measured operating conditions for one control period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurbineInputs {
    /// Free-stream wind speed (m/s)
    pub wind_speed_ms: f64,

    /// Wind direction relative to the rotor axis (degrees)
    pub wind_angle_deg: f64,

    /// Ambient temperature (K)
    pub temperature_k: f64,

    /// Generator current (A)
    pub current_a: f64,

    /// Control period (hours)
    pub time_period_h: f64,
}

impl TurbineInputs {
    /// Create a new set of operating conditions
    pub fn new(
        wind_speed_ms: f64,
        wind_angle_deg: f64,
        temperature_k: f64,
        current_a: f64,
        time_period_h: f64,
    ) -> Self {
        Self {
            wind_speed_ms,
            wind_angle_deg,
            temperature_k,
            current_a,
            time_period_h,
        }
    }

    /// Sanity-check the measurements against the physical operating envelope.
    ///
    /// Advisory only: the control pipeline stays permissive and runs on the
    /// raw values regardless of what is reported here.
    pub fn validate(&self) -> Result<(), String> {
        if self.wind_speed_ms < 0.0 {
            return Err("wind_speed_ms cannot be negative".to_string());
        }

        if self.temperature_k == 0.0 {
            return Err("temperature_k of zero makes the shaft speed unbounded".to_string());
        }

        if self.time_period_h < 0.0 {
            return Err("time_period_h cannot be negative".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_creation() {
        let inputs = TurbineInputs::new(60.0, 0.0, 600.0, 5.0, 1.0);
        assert_eq!(inputs.wind_speed_ms, 60.0);
        assert_eq!(inputs.temperature_k, 600.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_negative_wind_speed_flagged() {
        let inputs = TurbineInputs::new(-5.0, 0.0, 600.0, 5.0, 1.0);
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_zero_temperature_flagged() {
        let inputs = TurbineInputs::new(60.0, 0.0, 0.0, 5.0, 1.0);
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_negative_period_flagged() {
        let inputs = TurbineInputs::new(60.0, 0.0, 600.0, 5.0, -1.0);
        assert!(inputs.validate().is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating point computed by one pass of the control pipeline.
///
/// Field order matches the order in which the values are reported; serde
/// renames pin the external key names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurbineReport {
    /// Commanded blade pitch (degrees); positive infinity when the wind
    /// direction is singular
    #[serde(rename = "Blade Pitch Angle (degrees)")]
    pub blade_pitch_deg: f64,

    /// Commanded rheostat resistance (ohms), clamped to the regulation bounds
    #[serde(rename = "Rheostat Resistance (ohms)")]
    pub rheostat_ohms: f64,

    /// Energy delivered over the control period (kWh)
    #[serde(rename = "Energy Delivered (kWh)")]
    pub energy_kwh: f64,
}

impl TurbineReport {
    /// True when the wind direction left the pitch command singular
    pub fn pitch_is_singular(&self) -> bool {
        self.blade_pitch_deg.is_infinite()
    }
}

impl fmt::Display for TurbineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Blade Pitch Angle (degrees): {}", self.blade_pitch_deg)?;
        writeln!(f, "Rheostat Resistance (ohms): {}", self.rheostat_ohms)?;
        write!(f, "Energy Delivered (kWh): {}", self.energy_kwh)
    }
}

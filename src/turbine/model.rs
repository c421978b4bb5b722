use super::{physics, RegulationConstraints, TurbineInputs, TurbineReport};

/// Power coupling between shaft angular speed and effective wind (W per rad/s per m/s)
const POWER_COUPLING: f64 = 1e5;

/// Turbine control model.
///
/// Derives a single operating point from ambient conditions through a fixed
/// pipeline:
/// 1. Project the wind onto the rotor plane (effective wind speed)
/// 2. Derive shaft angular speed from effective wind and ambient temperature
/// 3. Command blade pitch from the wind direction
/// 4. Set the rheostat resistance to hold the desired voltage
/// 5. Integrate delivered energy over the control period
///
/// The zero-current branch in the rheostat step is the only guarded failure
/// mode; every other non-physical input propagates through the arithmetic as
/// IEEE-754 infinity or NaN.
pub struct TurbineModel {
    regulation: RegulationConstraints,
}

impl TurbineModel {
    /// Create a new control model with the given regulation constraints
    pub fn new(regulation: RegulationConstraints) -> Self {
        Self { regulation }
    }

    /// Run the full control pipeline for one set of operating conditions.
    ///
    /// The desired voltage from the regulation constraints feeds both the
    /// rheostat and the energy steps; measured voltage plays no role.
    pub fn optimize(&self, inputs: &TurbineInputs) -> TurbineReport {
        // Step 1: Project the wind onto the rotor plane
        let effective_wind_ms =
            physics::effective_wind_speed(inputs.wind_speed_ms, inputs.wind_angle_deg);

        // Step 2: Shaft angular speed
        let omega_rad_s = physics::angular_speed(effective_wind_ms, inputs.temperature_k);

        // Step 3: Blade pitch command
        let blade_pitch_deg = physics::blade_pitch_angle(inputs.wind_angle_deg);

        // Step 4: Rheostat setting for the desired voltage
        let rheostat_ohms = self.adjust_rheostat(
            self.regulation.desired_voltage_v,
            inputs.current_a,
            effective_wind_ms,
        );

        // Step 5: Delivered energy over the control period
        let energy = self.delivered_energy(
            self.regulation.desired_voltage_v,
            inputs.current_a,
            inputs.time_period_h,
            effective_wind_ms,
            omega_rad_s,
        );

        TurbineReport {
            blade_pitch_deg,
            rheostat_ohms,
            energy_kwh: energy / 1000.0,
        }
    }

    /// Rheostat resistance that holds the desired voltage under the current
    /// effective wind.
    ///
    /// Ohm's law gives the base resistance; higher effective wind scales it
    /// up to damp voltage swings. The result is clamped to the configured
    /// rheostat range.
    pub fn adjust_rheostat(&self, voltage_v: f64, current_a: f64, effective_wind_ms: f64) -> f64 {
        // Dead generator: pin the rheostat at its upper bound rather than
        // divide by zero
        if current_a == 0.0 {
            return self.regulation.rheostat_max_ohms;
        }

        let resistance_ohms = voltage_v / current_a;

        let adjusted_ohms = resistance_ohms * (1.0 + effective_wind_ms / 100.0);

        adjusted_ohms.clamp(
            self.regulation.rheostat_min_ohms,
            self.regulation.rheostat_max_ohms,
        )
    }

    /// Energy delivered over the control period, in watt-hours before the
    /// caller converts to kWh.
    pub fn delivered_energy(
        &self,
        voltage_v: f64,
        current_a: f64,
        time_period_h: f64,
        effective_wind_ms: f64,
        omega_rad_s: f64,
    ) -> f64 {
        // Wind-scaled electrical quantities; the simplified power law below
        // consumes only shaft speed and effective wind, so these stay unused
        let _adjusted_voltage_v = voltage_v * (1.0 + effective_wind_ms / 100.0);
        let _adjusted_current_a = current_a * (1.0 + effective_wind_ms / 100.0);

        let power_w = omega_rad_s * effective_wind_ms * POWER_COUPLING;

        power_w * time_period_h
    }
}

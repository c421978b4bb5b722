//! Pure aerodynamic and electromechanical relations used by the control model.
//!
//! Every function here is a deterministic transform of its arguments. None of
//! them validate their inputs; non-physical values flow through as IEEE-754
//! arithmetic dictates.

/// Shaft speed gained per m/s of effective wind, damped by ambient temperature (K)
const ANGULAR_COUPLING: f64 = 1.45;

/// Blade pitch curve: tangent output span in degrees
const PITCH_SPAN_DEG: f64 = 180.0;
/// Blade pitch curve: damping divisor applied to the tangent output
const PITCH_DAMPING: f64 = 10.0;

/// Pitch magnitudes below this are collapsed to exactly zero
const ZERO_PITCH_TOLERANCE: f64 = 1e-14;

/// Component of the wind velocity perpendicular to the rotor plane.
///
/// Negative wind speeds are accepted and treated as a signed projection.
pub fn effective_wind_speed(wind_speed_ms: f64, wind_angle_deg: f64) -> f64 {
    wind_speed_ms * wind_angle_deg.to_radians().cos()
}

/// Shaft angular speed for a given effective wind and ambient temperature.
///
/// A temperature of zero kelvin is not guarded; the division yields an
/// infinite or NaN shaft speed that propagates downstream.
pub fn angular_speed(effective_wind_ms: f64, temperature_k: f64) -> f64 {
    ANGULAR_COUPLING * effective_wind_ms / temperature_k
}

/// Commanded blade pitch for a wind direction.
///
/// The command follows a tangent curve centred on 0° and 180°: it stays near
/// zero while the wind faces the rotor and grows as the wind turns side-on.
/// At exactly 90° and 270° the orientation is singular and the command is
/// positive infinity. The singularity check is literal equality on the
/// wrapped angle, so directions arbitrarily close to (but not equal to) 90°
/// or 270° still produce very large finite commands.
pub fn blade_pitch_angle(wind_angle_deg: f64) -> f64 {
    // Wrap into [0, 360); rem_euclid keeps negative directions non-negative
    let wrapped_deg = wind_angle_deg.rem_euclid(360.0);

    if wrapped_deg == 90.0 || wrapped_deg == 270.0 {
        return f64::INFINITY;
    }

    let pitch_deg = PITCH_SPAN_DEG * (wrapped_deg - 180.0).to_radians().tan() / PITCH_DAMPING;

    // Collapse floating-point noise at the tangent zero crossings (0° and 180°)
    if pitch_deg.abs() < ZERO_PITCH_TOLERANCE {
        return 0.0;
    }

    pitch_deg
}

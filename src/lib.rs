//! # Wind Turbine Controller
//!
//! Educational model of a wind-turbine control loop. Given wind speed and
//! direction, ambient temperature, generator current, and a control period,
//! the controller computes a blade pitch command, a rheostat resistance
//! setting, and the energy delivered:
//!
//! ```rust
//! use wind_turbine_controller::turbine::{RegulationConstraints, TurbineInputs, TurbineModel};
//!
//! let model = TurbineModel::new(RegulationConstraints::default());
//! let inputs = TurbineInputs::new(60.0, 0.0, 600.0, 5.0, 1.0);
//!
//! let report = model.optimize(&inputs);
//! assert_eq!(report.blade_pitch_deg, 0.0);
//! ```
//!
//! Regulation constraints (voltage target, rheostat bounds) come from layered
//! configuration; see [`config::Config`].

pub mod config;
pub mod telemetry;
pub mod turbine;

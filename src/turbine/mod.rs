/// Turbine Control Pipeline
///
/// This module contains the control model that turns ambient wind conditions
/// into a blade pitch command, a rheostat setting, and the energy delivered
/// over the control period. The pipeline is a fixed sequence of pure
/// transforms; the only guarded failure mode is the zero-current branch of
/// the rheostat step.
pub mod constraints;
pub mod inputs;
pub mod model;
pub mod physics;
pub mod report;

pub use constraints::{ConstraintError, RegulationConstraints};
pub use inputs::TurbineInputs;
pub use model::TurbineModel;
pub use report::TurbineReport;

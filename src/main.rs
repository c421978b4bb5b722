use anyhow::Result;
use tracing::{info, warn};
use wind_turbine_controller::{config::Config, telemetry, turbine::TurbineModel};

fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = Config::load()?;
    cfg.regulation.validate()?;

    let model = TurbineModel::new(cfg.regulation.clone());
    let inputs = cfg.demo.inputs();

    if let Err(reason) = inputs.validate() {
        warn!(%reason, "operating conditions outside the physical envelope");
    }

    info!(
        wind_speed_ms = inputs.wind_speed_ms,
        wind_angle_deg = inputs.wind_angle_deg,
        temperature_k = inputs.temperature_k,
        current_a = inputs.current_a,
        time_period_h = inputs.time_period_h,
        "optimizing turbine operating point"
    );

    let report = model.optimize(&inputs);
    println!("{report}");

    Ok(())
}

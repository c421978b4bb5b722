use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;

use crate::turbine::{RegulationConstraints, TurbineInputs};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub regulation: RegulationConstraints,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Sample operating point run by the demonstration binary
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub wind_speed_ms: f64,
    pub wind_angle_deg: f64,
    pub temperature_k: f64,
    pub current_a: f64,
    pub time_period_h: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            wind_speed_ms: 60.0,
            wind_angle_deg: 0.0,
            temperature_k: 600.0,
            current_a: 5.0,
            time_period_h: 1.0,
        }
    }
}

impl DemoConfig {
    pub fn inputs(&self) -> TurbineInputs {
        TurbineInputs::new(
            self.wind_speed_ms,
            self.wind_angle_deg,
            self.temperature_k,
            self.current_a,
            self.time_period_h,
        )
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("WTC__").split("__"));
        Ok(figment.extract()?)
    }
}

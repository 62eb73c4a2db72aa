pub mod aggregate;
pub mod model;
pub mod seed;
pub mod what_if;

pub use aggregate::{FeatureImportance, ForecastDay};
pub use model::{DataSource, ModelInfo};
pub use seed::{feature_importance, forecast_days, model_info};
pub use what_if::{
    SimulatedRisk, SliderRange, WhatIfScenario, RAINFALL_RANGE, TEMPERATURE_RANGE, TURBIDITY_RANGE,
};

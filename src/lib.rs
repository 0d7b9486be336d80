pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::OpenWeatherClient;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    etl::{ReportEngine, RunOutcome},
    pipeline::AirQualityPipeline,
};
pub use domain::model::{City, FetchMode, PollutionReading, RecommendationBundle};
pub use domain::services::{classifier, recommendation};
pub use domain::tier::SeverityTier;
pub use utils::error::{AirAwareError, Result};

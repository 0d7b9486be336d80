pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::CliConfig;

/// Resolves configured city names against the catalogue. Unknown names are
/// dropped; validation reports them before this is reached.
pub(crate) fn resolve_cities(names: &[String]) -> Vec<&'static crate::domain::model::City> {
    use crate::domain::model::City;

    if names.is_empty() {
        return City::available().iter().collect();
    }
    names.iter().filter_map(|name| City::find(name)).collect()
}

#[cfg(feature = "cli")]
mod args {
    use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
    use crate::domain::model::{City, FetchMode};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::{AirAwareError, Result};
    use crate::utils::validation::{self, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "air-aware")]
    #[command(about = "Fetch air pollution for a set of cities and write a health report")]
    pub struct CliConfig {
        /// OpenWeather API key
        #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
        pub api_key: String,

        #[arg(long, default_value = DEFAULT_BASE_URL)]
        pub base_url: String,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        /// Cities to report on (default: all)
        #[arg(long, value_delimiter = ',')]
        pub cities: Vec<String>,

        /// current, forecast or history
        #[arg(long, default_value = "current")]
        pub mode: String,

        /// History window start (unix seconds)
        #[arg(long)]
        pub start: Option<i64>,

        /// History window end (unix seconds)
        #[arg(long)]
        pub end: Option<i64>,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        /// Print the full recommendation for this city
        #[arg(long)]
        pub show: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn api_key(&self) -> &str {
            &self.api_key
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn cities(&self) -> Vec<&'static City> {
            super::resolve_cities(&self.cities)
        }

        fn fetch_mode(&self) -> Result<FetchMode> {
            FetchMode::from_parts(&self.mode, self.start, self.end)
        }

        fn timeout_seconds(&self) -> u64 {
            self.timeout_seconds
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_url("base_url", &self.base_url)?;
            validation::validate_non_empty_string("api_key", &self.api_key)?;
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_city_names("cities", &self.cities)?;
            validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
            self.fetch_mode()?;

            if let Some(show) = &self.show {
                if City::find(show).is_none() {
                    return Err(AirAwareError::InvalidConfigValueError {
                        field: "show".to_string(),
                        value: show.clone(),
                        reason: "Unknown city".to_string(),
                    });
                }
            }
            Ok(())
        }
    }

}

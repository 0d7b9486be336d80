use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::config::resolve_cities;
use crate::domain::model::{City, FetchMode};
use crate::domain::ports::{ConfigProvider, DEFAULT_ARCHIVE_NAME};
use crate::utils::error::{AirAwareError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub api_key: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub mode: Option<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub archive_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub verbose: Option<bool>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AirAwareError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AirAwareError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENWEATHER_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AirAwareError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn api_key(&self) -> &str {
        &self.source.api_key
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn archive_name(&self) -> &str {
        self.load
            .archive_name
            .as_deref()
            .unwrap_or(DEFAULT_ARCHIVE_NAME)
    }

    fn cities(&self) -> Vec<&'static City> {
        resolve_cities(&self.extract.cities)
    }

    fn fetch_mode(&self) -> Result<FetchMode> {
        FetchMode::from_parts(
            self.extract.mode.as_deref().unwrap_or("current"),
            self.extract.start,
            self.extract.end,
        )
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", self.base_url())?;
        validation::validate_non_empty_string("source.api_key", &self.source.api_key)?;
        if self.source.api_key.contains("${") {
            return Err(AirAwareError::MissingConfigError {
                field: format!("source.api_key (unresolved {})", self.source.api_key),
            });
        }
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_path("load.archive_name", self.archive_name())?;
        validation::validate_city_names("extract.cities", &self.extract.cities)?;
        validation::validate_range("source.timeout_seconds", self.timeout_seconds(), 1, 300)?;
        self.fetch_mode()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[report]
name = "daily"

[source]
api_key = "abc123"

[extract]
mode = "forecast"
cities = ["Paris", "Zurich"]

[load]
output_path = "./test-output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.report.name, "daily");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds(), 20);
        assert_eq!(config.fetch_mode().unwrap(), FetchMode::Forecast);
        assert_eq!(config.cities().len(), 2);
        assert_eq!(config.archive_name(), DEFAULT_ARCHIVE_NAME);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extract_section_is_optional() {
        let toml_content = r#"
[report]
name = "all"

[source]
api_key = "abc123"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.cities().len(), 12);
        assert_eq!(config.fetch_mode().unwrap(), FetchMode::Current);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AIR_AWARE_TEST_KEY", "secret-from-env");

        let toml_content = r#"
[report]
name = "env"

[source]
api_key = "${AIR_AWARE_TEST_KEY}"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.api_key, "secret-from-env");

        std::env::remove_var("AIR_AWARE_TEST_KEY");
    }

    #[test]
    fn test_unresolved_api_key_fails_validation() {
        let toml_content = r#"
[report]
name = "env"

[source]
api_key = "${AIR_AWARE_UNSET_VARIABLE_FOR_TEST}"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(AirAwareError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[report]
name = "bad"

[source]
endpoint = "invalid-url"
api_key = "abc123"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[report\nname = ");
        assert!(matches!(result, Err(AirAwareError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[report]
name = "file-test"

[source]
endpoint = "http://localhost:9000"
api_key = "abc123"
timeout_seconds = 5

[extract]
mode = "history"
start = 1606223802
end = 1606482999

[load]
output_path = "./output"
archive_name = "history.zip"

[monitoring]
verbose = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.report.name, "file-test");
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.archive_name(), "history.zip");
        assert!(config.verbose());
        assert!(matches!(config.fetch_mode().unwrap(), FetchMode::History { .. }));
        assert!(config.validate().is_ok());
    }
}

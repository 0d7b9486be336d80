use crate::domain::model::{City, FetchMode, PollutionReading, ReportResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination of the finished report archive.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub const DEFAULT_ARCHIVE_NAME: &str = "air_quality_report.zip";

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn output_path(&self) -> &str;
    fn archive_name(&self) -> &str {
        DEFAULT_ARCHIVE_NAME
    }
    /// Configured cities, or the whole catalogue when none are named.
    fn cities(&self) -> Vec<&'static City>;
    fn fetch_mode(&self) -> Result<FetchMode>;
    fn timeout_seconds(&self) -> u64;
}

/// Where pollution readings come from.
#[async_trait]
pub trait PollutionSource: Send + Sync {
    async fn current(&self, city: &City) -> Result<Vec<PollutionReading>>;
    async fn forecast(&self, city: &City) -> Result<Vec<PollutionReading>>;
    async fn history(&self, city: &City, start: i64, end: i64) -> Result<Vec<PollutionReading>>;

    async fn fetch(&self, city: &City, mode: FetchMode) -> Result<Vec<PollutionReading>> {
        match mode {
            FetchMode::Current => self.current(city).await,
            FetchMode::Forecast => self.forecast(city).await,
            FetchMode::History { start, end } => self.history(city, start, end).await,
        }
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PollutionReading>>;
    async fn transform(&self, readings: Vec<PollutionReading>) -> Result<ReportResult>;
    async fn load(&self, result: &ReportResult) -> Result<String>;
}

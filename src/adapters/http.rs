use crate::adapters::openweather::AirPollutionResponse;
use crate::domain::model::{City, PollutionReading};
use crate::domain::ports::{ConfigProvider, PollutionSource};
use crate::utils::error::{AirAwareError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// OpenWeather Air Pollution API client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.api_key(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    async fn get(
        &self,
        endpoint: &str,
        city: &City,
        extra: &[(&str, String)],
    ) -> Result<Vec<PollutionReading>> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut params = vec![
            ("lat", city.latitude.to_string()),
            ("lon", city.longitude.to_string()),
        ];
        params.extend(extra.iter().map(|(k, v)| (*k, v.clone())));
        params.push(("appid", self.api_key.clone()));

        // appid 不寫進日誌，reqwest 錯誤也要先去掉 URL
        tracing::debug!("Making API request to: {} for {}", url, city.name);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AirAwareError::ApiError(e.without_url()))?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!("API error {} from {} for {}", status, endpoint, city.name);
            return Err(AirAwareError::ApiStatus {
                status,
                endpoint: endpoint.to_string(),
            });
        }

        let body: AirPollutionResponse = response
            .json()
            .await
            .map_err(|e| AirAwareError::ApiError(e.without_url()))?;
        let readings = body.into_readings(city);
        tracing::debug!("Received {} readings for {}", readings.len(), city.name);
        Ok(readings)
    }
}

#[async_trait]
impl PollutionSource for OpenWeatherClient {
    async fn current(&self, city: &City) -> Result<Vec<PollutionReading>> {
        self.get("air_pollution", city, &[]).await
    }

    async fn forecast(&self, city: &City) -> Result<Vec<PollutionReading>> {
        self.get("air_pollution/forecast", city, &[]).await
    }

    async fn history(&self, city: &City, start: i64, end: i64) -> Result<Vec<PollutionReading>> {
        let window = [("start", start.to_string()), ("end", end.to_string())];
        self.get("air_pollution/history", city, &window).await
    }
}

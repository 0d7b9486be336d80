use crate::core::{
    Assessment, ConfigProvider, Pipeline, PollutionReading, PollutionSource, ReportResult, Storage,
};
use crate::domain::services::classifier::assess;
use crate::utils::error::{AirAwareError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const COLUMNS: [&str; 16] = [
    "location",
    "latitude",
    "longitude",
    "timestamp",
    "observed_at",
    "aqi",
    "status",
    "tier",
    "score",
    "hazardous",
    "color",
    "pm2_5",
    "pm10",
    "no2",
    "o3",
    "co",
];

/// Fetches readings for the configured cities, classifies them and writes a
/// zip report through `Storage`.
pub struct AirQualityPipeline<P: PollutionSource, S: Storage, C: ConfigProvider> {
    pub(crate) source: P,
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<P: PollutionSource, S: Storage, C: ConfigProvider> AirQualityPipeline<P, S, C> {
    pub fn new(source: P, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }
}

fn observed_at(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

fn render_table(assessments: &[Assessment], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for a in assessments {
        let r = &a.reading;
        writer.write_record([
            r.location.clone(),
            r.latitude.to_string(),
            r.longitude.to_string(),
            r.timestamp.to_string(),
            observed_at(r.timestamp),
            r.aqi.to_string(),
            a.status.as_str().to_string(),
            a.tier.label().to_string(),
            a.score.to_string(),
            a.hazardous.to_string(),
            a.color_code.to_string(),
            r.pm2_5.to_string(),
            r.pm10.to_string(),
            r.no2.to_string(),
            r.o3.to_string(),
            r.co.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AirAwareError::ProcessingError {
            message: format!("Failed to flush table: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| AirAwareError::ProcessingError {
        message: format!("Table is not valid UTF-8: {}", e),
    })
}

/// Human-readable block for one assessment: heading, summary and the full
/// recommendation text.
pub fn render_assessment(assessment: &Assessment) -> String {
    let r = &assessment.reading;
    format!(
        "=== {} {} ({}) ===\nAQI {} ({}) · score {}/100 · {}\n{}\n\n{}\n",
        assessment.tier.emoji(),
        r.location,
        observed_at(r.timestamp),
        r.aqi,
        assessment.status.as_str(),
        assessment.score,
        assessment.color_code,
        assessment.tier.summary(),
        assessment.recommendation.render(),
    )
}

#[async_trait::async_trait]
impl<P: PollutionSource, S: Storage, C: ConfigProvider> Pipeline for AirQualityPipeline<P, S, C> {
    async fn extract(&self) -> Result<Vec<PollutionReading>> {
        let mode = self.config.fetch_mode()?;
        let cities = self.config.cities();

        tracing::info!(
            "🚀 Fetching {} air pollution for {} cities",
            mode.name(),
            cities.len()
        );

        let mut readings = Vec::new();
        let mut succeeded = 0usize;
        let mut last_error = None;

        for city in cities {
            match self.source.fetch(city, mode).await {
                Ok(batch) => {
                    succeeded += 1;
                    tracing::debug!("{}: {} readings", city.name, batch.len());
                    for reading in batch {
                        // 超出範圍的 AQI 不送進分類器
                        match reading.validate() {
                            Ok(()) => readings.push(reading),
                            Err(e) => tracing::warn!("⚠️ Skipping reading: {}", e),
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("❌ Failed to fetch {}: {}", city.name, e);
                    last_error = Some(e);
                }
            }
        }

        if succeeded == 0 {
            if let Some(e) = last_error {
                return Err(e);
            }
        }

        tracing::info!("📊 Extracted {} readings", readings.len());
        Ok(readings)
    }

    async fn transform(&self, readings: Vec<PollutionReading>) -> Result<ReportResult> {
        tracing::info!("🔧 Classifying {} readings", readings.len());

        let assessments: Vec<Assessment> = readings.into_iter().map(assess).collect();

        let alerts: Vec<Assessment> = assessments
            .iter()
            .filter(|a| a.hazardous)
            .cloned()
            .collect();
        for alert in &alerts {
            tracing::warn!(
                "{} {}: {} (score {})",
                alert.tier.risk_icon(),
                alert.reading.location,
                alert.tier.label(),
                alert.score
            );
        }

        let csv_output = render_table(&assessments, b',')?;
        let tsv_output = render_table(&assessments, b'\t')?;

        Ok(ReportResult {
            assessments,
            csv_output,
            tsv_output,
            alerts,
        })
    }

    async fn load(&self, result: &ReportResult) -> Result<String> {
        let archive_name = self.config.archive_name();
        let output_path = format!("{}/{}", self.config.output_path(), archive_name);

        tracing::debug!(
            "Creating ZIP file with {} files",
            4 + usize::from(!result.alerts.is_empty())
        );

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("air_quality.csv", FileOptions::default())?;
            zip.write_all(result.csv_output.as_bytes())?;

            zip.start_file::<_, ()>("air_quality.tsv", FileOptions::default())?;
            zip.write_all(result.tsv_output.as_bytes())?;

            zip.start_file::<_, ()>("assessments.json", FileOptions::default())?;
            let json_data = serde_json::to_string_pretty(&result.assessments)?;
            zip.write_all(json_data.as_bytes())?;

            zip.start_file::<_, ()>("recommendations.txt", FileOptions::default())?;
            for assessment in &result.assessments {
                zip.write_all(render_assessment(assessment).as_bytes())?;
                zip.write_all(b"\n")?;
            }

            if !result.alerts.is_empty() {
                zip.start_file::<_, ()>("alerts.json", FileOptions::default())?;
                let json_data = serde_json::to_string_pretty(&result.alerts)?;
                zip.write_all(json_data.as_bytes())?;
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(archive_name, &zip_data).await?;

        tracing::info!("📦 Report saved: {}", output_path);
        Ok(output_path)
    }
}

use crate::core::{Pipeline, ReportResult};
use crate::utils::error::Result;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: String,
    pub report: ReportResult,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting air quality report...");

        // Extract
        let readings = self.pipeline.extract().await?;
        tracing::info!("Extracted {} readings", readings.len());

        // Transform
        let report = self.pipeline.transform(readings).await?;
        tracing::info!(
            "Classified {} readings, {} alerts",
            report.assessments.len(),
            report.alerts.len()
        );

        // Load
        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunOutcome {
            output_path,
            report,
        })
    }
}

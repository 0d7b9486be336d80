use air_aware::utils::error::ErrorSeverity;
use air_aware::utils::{logger, validation::Validate};
use air_aware::{
    AirQualityPipeline, City, CliConfig, LocalStorage, OpenWeatherClient, ReportEngine,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting air-aware CLI");
    tracing::debug!(
        "base_url={} mode={} cities={:?} output={}",
        config.base_url,
        config.mode,
        config.cities,
        config.output_path
    );

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let show = config.show.as_deref().and_then(City::find);

    let client = match OpenWeatherClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = AirQualityPipeline::new(client, storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            println!("✅ Report completed: {} readings", outcome.report.assessments.len());
            for assessment in &outcome.report.assessments {
                println!(
                    "{} {:<24} {:<20} score {:>3}/100",
                    assessment.tier.emoji(),
                    assessment.reading.location,
                    assessment.tier.label(),
                    assessment.score
                );
            }
            if !outcome.report.alerts.is_empty() {
                println!("⚠️ {} hazardous readings", outcome.report.alerts.len());
            }
            println!("📁 Output saved to: {}", outcome.output_path);

            if let Some(city) = show {
                match outcome
                    .report
                    .assessments
                    .iter()
                    .find(|a| a.reading.location == city.name)
                {
                    Some(assessment) => println!(
                        "\n{}",
                        air_aware::core::pipeline::render_assessment(assessment)
                    ),
                    None => {
                        println!("\n{}", air_aware::recommendation::insufficient_data().render())
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

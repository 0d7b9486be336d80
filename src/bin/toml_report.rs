use air_aware::core::ConfigProvider;
use air_aware::utils::error::ErrorSeverity;
use air_aware::utils::{logger, validation::Validate};
use air_aware::{AirQualityPipeline, LocalStorage, OpenWeatherClient, ReportEngine, TomlConfig};
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Air quality report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "air-aware.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be fetched without calling the API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based air quality report");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No API calls will be made");
        return Ok(());
    }

    let client = OpenWeatherClient::from_config(&config).context("failed to build HTTP client")?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AirQualityPipeline::new(client, storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            println!("✅ Report completed!");
            println!(
                "📊 {} readings, {} alerts",
                outcome.report.assessments.len(),
                outcome.report.alerts.len()
            );
            println!("📁 Output saved to: {}", outcome.output_path);
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

            // 根據錯誤嚴重程度決定退出碼
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

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Report: {}", config.report.name);
    if let Some(description) = &config.report.description {
        println!("  Description: {}", description);
    }
    println!("  Source: {}", config.base_url());
    match config.fetch_mode() {
        Ok(mode) => println!("  Mode: {:?}", mode),
        Err(e) => println!("  Mode: invalid ({})", e),
    }
    println!("  Timeout: {}s", config.timeout_seconds());

    let cities = config.cities();
    println!("  Cities ({}):", cities.len());
    for city in cities {
        println!("    - {} ({}, {})", city.name, city.latitude, city.longitude);
    }

    println!("  Output: {}/{}", config.output_path(), config.archive_name());
    println!();
}

use clap::Parser;
use print_quote::core::pricing::PriceCalculator;
use print_quote::utils::{logger, validation::Validate};
use print_quote::{CliConfig, FileQuotePipeline, LocalStorage, PricingFile, QuoteEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting print-quote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // An explicit pricing file must parse and validate; no file means
    // the built-in reference rates.
    let table = match &config.pricing_path {
        Some(path) => {
            let pricing_file = match PricingFile::from_file(path).and_then(|f| {
                f.validate()?;
                Ok(f)
            }) {
                Ok(f) => f,
                Err(e) => {
                    tracing::error!("Failed to load pricing file {}: {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            tracing::info!("Loaded pricing table from {}", path);
            pricing_file.into_table()
        }
        None => {
            tracing::debug!("No pricing file given, using built-in rates");
            Default::default()
        }
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let calculator = PriceCalculator::new(table);
    let pipeline = FileQuotePipeline::new(storage, config, calculator);

    let engine = QuoteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Quote generated successfully");
            println!("✅ Quote generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Quote generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

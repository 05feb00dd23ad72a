pub mod cli;
pub mod pricing_file;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "print-quote")]
#[command(about = "Prices a print-order cart and exports an itemized quote")]
pub struct CliConfig {
    /// Path to the cart JSON file (a list of print jobs).
    #[arg(long, default_value = "./cart.json")]
    pub cart_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Optional TOML pricing table; built-in rates are used when omitted.
    #[arg(long)]
    pub pricing_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON (for non-interactive hosts)")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn cart_path(&self) -> &str {
        &self.cart_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn pricing_path(&self) -> Option<&str> {
        self.pricing_path.as_deref()
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_path("cart_path", &self.cart_path)?;
        crate::utils::validation::validate_path("output_path", &self.output_path)?;
        if let Some(pricing) = &self.pricing_path {
            crate::utils::validation::validate_path("pricing_path", pricing)?;
        }
        Ok(())
    }
}

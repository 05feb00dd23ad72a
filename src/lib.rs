pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;
pub use config::pricing_file::PricingFile;

pub use crate::core::cart::{cart_subtotal, convenience_fee, format_price, summarize};
pub use crate::core::engine::QuoteEngine;
pub use crate::core::pages::parse_page_numbers;
pub use crate::core::pipeline::FileQuotePipeline;
pub use crate::core::pricing::{PriceCalculator, PricingTable};
pub use utils::error::{QuoteError, Result};

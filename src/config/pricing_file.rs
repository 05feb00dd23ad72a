use crate::core::pricing::{PricingTable, SidedRates};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML pricing-table file. Every section is optional; omitted values
/// fall back to the built-in reference rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingFile {
    pub rates: Option<RatesSection>,
    pub binding: Option<BindingSection>,
    pub checkout: Option<CheckoutSection>,
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesSection {
    pub black_and_white: Option<BwRates>,
    pub color: Option<SidedRates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BwRates {
    pub less_than_40: Option<SidedRates>,
    pub forty_or_more: Option<SidedRates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingSection {
    pub spiral_per_copy: Option<f64>,
    pub record_per_copy: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSection {
    pub convenience_fee: Option<f64>,
    pub convenience_fee_threshold: Option<f64>,
    pub bulk_tier_threshold: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency_symbol: Option<String>,
}

impl PricingFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QuoteError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values,
    /// leaving unresolved references in place.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Merges this file over the built-in reference rates.
    pub fn into_table(self) -> PricingTable {
        let mut table = PricingTable::default();

        if let Some(rates) = self.rates {
            if let Some(bw) = rates.black_and_white {
                if let Some(less) = bw.less_than_40 {
                    table.bw_less_than_40 = less;
                }
                if let Some(more) = bw.forty_or_more {
                    table.bw_forty_or_more = more;
                }
            }
            if let Some(color) = rates.color {
                table.color = color;
            }
        }

        if let Some(binding) = self.binding {
            if let Some(spiral) = binding.spiral_per_copy {
                table.spiral_binding_per_copy = spiral;
            }
            if let Some(record) = binding.record_per_copy {
                table.record_binding_per_copy = record;
            }
        }

        if let Some(checkout) = self.checkout {
            if let Some(fee) = checkout.convenience_fee {
                table.convenience_fee = fee;
            }
            if let Some(threshold) = checkout.convenience_fee_threshold {
                table.convenience_fee_threshold = threshold;
            }
            if let Some(tier) = checkout.bulk_tier_threshold {
                table.bulk_tier_threshold = tier;
            }
        }

        if let Some(display) = self.display {
            if let Some(symbol) = display.currency_symbol {
                table.currency_symbol = symbol;
            }
        }

        table
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(rates) = &self.rates {
            if let Some(bw) = &rates.black_and_white {
                if let Some(less) = &bw.less_than_40 {
                    validate_rate("rates.black_and_white.less_than_40.single", less.single)?;
                    validate_rate("rates.black_and_white.less_than_40.double", less.double)?;
                }
                if let Some(more) = &bw.forty_or_more {
                    validate_rate("rates.black_and_white.forty_or_more.single", more.single)?;
                    validate_rate("rates.black_and_white.forty_or_more.double", more.double)?;
                }
            }
            if let Some(color) = &rates.color {
                validate_rate("rates.color.single", color.single)?;
                validate_rate("rates.color.double", color.double)?;
            }
        }

        if let Some(binding) = &self.binding {
            if let Some(spiral) = binding.spiral_per_copy {
                validate_rate("binding.spiral_per_copy", spiral)?;
            }
            if let Some(record) = binding.record_per_copy {
                validate_rate("binding.record_per_copy", record)?;
            }
        }

        if let Some(checkout) = &self.checkout {
            if let Some(fee) = checkout.convenience_fee {
                validate_rate("checkout.convenience_fee", fee)?;
            }
            if let Some(threshold) = checkout.convenience_fee_threshold {
                validate_rate("checkout.convenience_fee_threshold", threshold)?;
            }
            if let Some(tier) = checkout.bulk_tier_threshold {
                crate::utils::validation::validate_positive_number(
                    "checkout.bulk_tier_threshold",
                    tier as usize,
                    1,
                )?;
            }
        }

        if let Some(display) = &self.display {
            if let Some(symbol) = &display.currency_symbol {
                crate::utils::validation::validate_non_empty_string(
                    "display.currency_symbol",
                    symbol,
                )?;
            }
        }

        Ok(())
    }
}

fn validate_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

impl Validate for PricingFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

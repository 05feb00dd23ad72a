use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document-wide color treatment. `Custom` splits pages between black &
/// white and color billing via [`CustomPageSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[serde(rename = "bw")]
    BlackAndWhite,
    Color,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sides {
    Single,
    Double,
}

/// Raw page-range expressions as typed by the customer, e.g. "1-5, 8".
/// Both fields are soft-validated by the page-range parser; the same page
/// appearing in both lists is billed in both (see pricing rules).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomPageSelection {
    #[serde(default)]
    pub bw_pages: String,
    #[serde(default)]
    pub color_pages: String,
}

/// One document configured for printing, the unit the calculator prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    pub document_name: String,
    pub total_pages: u32,
    pub copies: u32,
    pub color_mode: ColorMode,
    pub sides: Sides,
    #[serde(default = "default_paper_size")]
    pub paper_size: String,
    /// Number of copies receiving spiral binding. Absolute count, not
    /// cross-checked against `copies`.
    #[serde(default)]
    pub spiral_binding: u32,
    /// Number of copies receiving record (tape) binding.
    #[serde(default)]
    pub record_binding: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_pages: Option<CustomPageSelection>,
}

fn default_paper_size() -> String {
    "A4".to_string()
}

/// A priced cart entry: the job plus its computed price and, for custom
/// color mode, how many pages landed in each billing bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedItem {
    #[serde(flatten)]
    pub job: PrintJob,
    pub price: f64,
    #[serde(default)]
    pub bw_page_count: u32,
    #[serde(default)]
    pub color_page_count: u32,
}

/// Cart-level aggregation figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: usize,
    pub subtotal: f64,
    pub convenience_fee: f64,
    pub total: f64,
}

/// The full quote document handed to export / the order pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<PricedItem>,
    pub summary: CartSummary,
}

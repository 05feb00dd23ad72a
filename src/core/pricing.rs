use crate::core::pages::parse_page_numbers;
use crate::domain::model::{ColorMode, PricedItem, PrintJob, Sides};
use serde::{Deserialize, Serialize};

/// Per-page rates for one tier of black & white printing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidedRates {
    pub single: f64,
    pub double: f64,
}

impl SidedRates {
    pub fn rate(&self, sides: Sides) -> f64 {
        match sides {
            Sides::Single => self.single,
            Sides::Double => self.double,
        }
    }
}

/// The static pricing configuration. Loaded once (TOML or defaults) and
/// injected into [`PriceCalculator`]; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub bw_less_than_40: SidedRates,
    pub bw_forty_or_more: SidedRates,
    pub color: SidedRates,
    pub spiral_binding_per_copy: f64,
    pub record_binding_per_copy: f64,
    pub convenience_fee: f64,
    pub convenience_fee_threshold: f64,
    pub bulk_tier_threshold: u32,
    pub currency_symbol: String,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            bw_less_than_40: SidedRates {
                single: 2.0,
                double: 3.0,
            },
            bw_forty_or_more: SidedRates {
                single: 1.5,
                double: 2.5,
            },
            color: SidedRates {
                single: 10.0,
                double: 15.0,
            },
            spiral_binding_per_copy: 30.0,
            record_binding_per_copy: 40.0,
            convenience_fee: 4.0,
            convenience_fee_threshold: 50.0,
            bulk_tier_threshold: 40,
            currency_symbol: "₹".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Standard,
    Bulk,
}

/// Advisory tier information for UI messaging; no pricing effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub message: String,
}

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Prices print jobs against an injected pricing table. All methods are
/// pure; concurrent callers share only the read-only table.
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    table: PricingTable,
}

impl PriceCalculator {
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Per-page black & white rate. The bulk tier keys off the effective
    /// page count of a single copy, never the order's total page volume.
    pub fn bw_rate(&self, effective_pages: u32, sides: Sides) -> f64 {
        if effective_pages >= self.table.bulk_tier_threshold {
            self.table.bw_forty_or_more.rate(sides)
        } else {
            self.table.bw_less_than_40.rate(sides)
        }
    }

    /// Per-page color rate; flat, no tiering.
    pub fn color_rate(&self, sides: Sides) -> f64 {
        self.table.color.rate(sides)
    }

    /// Computes the total price for one cart item:
    /// per-copy page charges x copies, plus binding add-ons, rounded to
    /// two decimals. Total over all inputs; a zero-page job prices as
    /// its binding add-ons alone.
    pub fn item_price(&self, job: &PrintJob) -> f64 {
        let price_per_copy = match job.color_mode {
            ColorMode::BlackAndWhite => {
                job.total_pages as f64 * self.bw_rate(job.total_pages, job.sides)
            }
            ColorMode::Color => job.total_pages as f64 * self.color_rate(job.sides),
            ColorMode::Custom => {
                let (bw_count, color_count) = self.custom_page_counts(job);
                // The bw bulk tier compares the bw subset alone. Pages
                // listed in both strings are billed in both buckets;
                // cross-list dedup is deliberately not performed.
                bw_count as f64 * self.bw_rate(bw_count, job.sides)
                    + color_count as f64 * self.color_rate(job.sides)
            }
        };

        let mut total = price_per_copy * job.copies as f64;

        // Binding counts are absolute numbers of bound copies; they are
        // not multiplied by `copies`.
        total += job.spiral_binding as f64 * self.table.spiral_binding_per_copy;
        total += job.record_binding as f64 * self.table.record_binding_per_copy;

        round_money(total)
    }

    /// Prices a job and records the per-bucket custom page counts.
    pub fn price_item(&self, job: PrintJob) -> PricedItem {
        let price = self.item_price(&job);
        let (bw_page_count, color_page_count) = match job.color_mode {
            ColorMode::Custom => self.custom_page_counts(&job),
            _ => (0, 0),
        };
        PricedItem {
            job,
            price,
            bw_page_count,
            color_page_count,
        }
    }

    /// Bulk-tier status plus a UI hint when the job is approaching the
    /// discount threshold.
    pub fn tier_info(&self, effective_pages: u32) -> TierInfo {
        let threshold = self.table.bulk_tier_threshold;
        if effective_pages >= threshold {
            TierInfo {
                tier: Tier::Bulk,
                message: format!("Bulk discount applied! ({}+ pages)", threshold),
            }
        } else if effective_pages >= 30 {
            TierInfo {
                tier: Tier::Standard,
                message: format!("Tip: {}+ pages get bulk discount rates!", threshold),
            }
        } else {
            TierInfo {
                tier: Tier::Standard,
                message: String::new(),
            }
        }
    }

    fn custom_page_counts(&self, job: &PrintJob) -> (u32, u32) {
        match &job.custom_pages {
            Some(selection) => {
                let bw = parse_page_numbers(&selection.bw_pages, job.total_pages);
                let color = parse_page_numbers(&selection.color_pages, job.total_pages);
                (bw.len() as u32, color.len() as u32)
            }
            // Custom mode without a selection bills zero pages.
            None => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CustomPageSelection;

    fn calc() -> PriceCalculator {
        PriceCalculator::new(PricingTable::default())
    }

    fn job(total_pages: u32, copies: u32, color_mode: ColorMode, sides: Sides) -> PrintJob {
        PrintJob {
            document_name: "notes.pdf".to_string(),
            total_pages,
            copies,
            color_mode,
            sides,
            paper_size: "A4".to_string(),
            spiral_binding: 0,
            record_binding: 0,
            custom_pages: None,
        }
    }

    #[test]
    fn test_bw_price_drops_at_tier_boundary() {
        let calc = calc();
        let below = job(39, 1, ColorMode::BlackAndWhite, Sides::Single);
        let at = job(40, 1, ColorMode::BlackAndWhite, Sides::Single);
        assert_eq!(calc.item_price(&below), 78.0);
        assert_eq!(calc.item_price(&at), 60.0);
    }

    #[test]
    fn test_bw_double_sided_tier_boundary() {
        let calc = calc();
        let below = job(39, 1, ColorMode::BlackAndWhite, Sides::Double);
        let at = job(40, 1, ColorMode::BlackAndWhite, Sides::Double);
        assert_eq!(calc.item_price(&below), 117.0);
        assert_eq!(calc.item_price(&at), 100.0);
    }

    #[test]
    fn test_copies_do_not_affect_tier_selection() {
        let calc = calc();
        let item = job(10, 10, ColorMode::BlackAndWhite, Sides::Single);
        // 10 pages per copy stays on the standard rate even though the
        // order totals 100 pages.
        assert_eq!(calc.item_price(&item), 200.0);
    }

    #[test]
    fn test_color_rate_is_flat() {
        let calc = calc();
        let small = job(5, 1, ColorMode::Color, Sides::Single);
        let large = job(50, 1, ColorMode::Color, Sides::Double);
        assert_eq!(calc.item_price(&small), 50.0);
        assert_eq!(calc.item_price(&large), 750.0);
    }

    #[test]
    fn test_custom_mode_additive_pricing() {
        let calc = calc();
        let mut item = job(50, 1, ColorMode::Custom, Sides::Single);
        item.custom_pages = Some(CustomPageSelection {
            bw_pages: "1-20".to_string(),
            color_pages: "21-25".to_string(),
        });
        // 20 bw pages < 40 => 2.00/page = 40.00; 5 color pages = 50.00.
        assert_eq!(calc.item_price(&item), 90.0);
    }

    #[test]
    fn test_custom_bw_tier_uses_subset_count() {
        let calc = calc();
        let mut item = job(100, 1, ColorMode::Custom, Sides::Single);
        item.custom_pages = Some(CustomPageSelection {
            bw_pages: "1-45".to_string(),
            color_pages: String::new(),
        });
        // 45 bw pages crosses the tier on its own subset count.
        assert_eq!(calc.item_price(&item), 67.5);
    }

    #[test]
    fn test_custom_duplicate_pages_billed_in_both_buckets() {
        let calc = calc();
        let mut item = job(10, 1, ColorMode::Custom, Sides::Single);
        item.custom_pages = Some(CustomPageSelection {
            bw_pages: "1-5".to_string(),
            color_pages: "5".to_string(),
        });
        // Page 5 appears in both lists and is charged in both.
        assert_eq!(calc.item_price(&item), 5.0 * 2.0 + 1.0 * 10.0);
    }

    #[test]
    fn test_custom_without_selection_bills_bindings_only() {
        let calc = calc();
        let mut item = job(30, 2, ColorMode::Custom, Sides::Single);
        item.spiral_binding = 1;
        assert_eq!(calc.item_price(&item), 30.0);
    }

    #[test]
    fn test_custom_with_empty_strings_bills_bindings_only() {
        let calc = calc();
        let mut item = job(30, 1, ColorMode::Custom, Sides::Single);
        item.custom_pages = Some(CustomPageSelection::default());
        item.record_binding = 2;
        assert_eq!(calc.item_price(&item), 80.0);
    }

    #[test]
    fn test_zero_page_document_bills_bindings_only() {
        let calc = calc();
        let mut item = job(0, 3, ColorMode::BlackAndWhite, Sides::Single);
        item.spiral_binding = 1;
        item.record_binding = 1;
        assert_eq!(calc.item_price(&item), 70.0);
    }

    #[test]
    fn test_binding_independent_of_copies() {
        let calc = calc();
        let mut item = job(10, 3, ColorMode::BlackAndWhite, Sides::Single);
        item.spiral_binding = 2;
        // 3 copies x 20.00 + 2 spiral bindings x 30.00.
        assert_eq!(calc.item_price(&item), 120.0);
    }

    #[test]
    fn test_price_item_records_custom_counts() {
        let calc = calc();
        let mut item = job(50, 1, ColorMode::Custom, Sides::Single);
        item.custom_pages = Some(CustomPageSelection {
            bw_pages: "1-20".to_string(),
            color_pages: "21-25".to_string(),
        });
        let priced = calc.price_item(item);
        assert_eq!(priced.bw_page_count, 20);
        assert_eq!(priced.color_page_count, 5);
        assert_eq!(priced.price, 90.0);
    }

    #[test]
    fn test_tier_info_messages() {
        let calc = calc();
        assert_eq!(calc.tier_info(45).tier, Tier::Bulk);
        assert_eq!(calc.tier_info(40).tier, Tier::Bulk);

        let approaching = calc.tier_info(35);
        assert_eq!(approaching.tier, Tier::Standard);
        assert!(!approaching.message.is_empty());

        let far = calc.tier_info(10);
        assert_eq!(far.tier, Tier::Standard);
        assert!(far.message.is_empty());
    }
}

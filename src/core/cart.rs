use crate::core::pricing::{round_money, PriceCalculator};
use crate::domain::model::{CartSummary, PrintJob};

/// Sums per-item prices (each already rounded by the calculator) and
/// rounds the result once more. Rounding item-then-total keeps the cart
/// figure stable against floating-point drift.
pub fn cart_subtotal(calc: &PriceCalculator, items: &[PrintJob]) -> f64 {
    let total: f64 = items.iter().map(|item| calc.item_price(item)).sum();
    round_money(total)
}

/// Flat checkout surcharge, applied only when the subtotal is strictly
/// greater than the configured threshold. Binary, never prorated.
pub fn convenience_fee(calc: &PriceCalculator, subtotal: f64) -> f64 {
    if subtotal > calc.table().convenience_fee_threshold {
        calc.table().convenience_fee
    } else {
        0.0
    }
}

/// Aggregates a cart into the figures the checkout flow displays.
pub fn summarize(calc: &PriceCalculator, items: &[PrintJob]) -> CartSummary {
    let subtotal = cart_subtotal(calc, items);
    let fee = convenience_fee(calc, subtotal);
    CartSummary {
        item_count: items.len(),
        subtotal,
        convenience_fee: fee,
        total: round_money(subtotal + fee),
    }
}

/// Formats a monetary amount with the configured currency symbol.
pub fn format_price(calc: &PriceCalculator, amount: f64) -> String {
    format!("{}{:.2}", calc.table().currency_symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::PricingTable;
    use crate::domain::model::{ColorMode, PrintJob, Sides};

    fn calc() -> PriceCalculator {
        PriceCalculator::new(PricingTable::default())
    }

    fn bw_job(total_pages: u32, copies: u32) -> PrintJob {
        PrintJob {
            document_name: "doc.pdf".to_string(),
            total_pages,
            copies,
            color_mode: ColorMode::BlackAndWhite,
            sides: Sides::Single,
            paper_size: "A4".to_string(),
            spiral_binding: 0,
            record_binding: 0,
            custom_pages: None,
        }
    }

    #[test]
    fn test_subtotal_sums_item_prices() {
        let calc = calc();
        // 10 x 2.00 + 5 x 2.00 = 30.00
        let items = vec![bw_job(10, 1), bw_job(5, 1)];
        assert_eq!(cart_subtotal(&calc, &items), 30.0);
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let calc = calc();
        assert_eq!(cart_subtotal(&calc, &[]), 0.0);
    }

    #[test]
    fn test_fee_waived_at_exact_threshold() {
        let calc = calc();
        assert_eq!(convenience_fee(&calc, 50.0), 0.0);
    }

    #[test]
    fn test_fee_applied_just_above_threshold() {
        let calc = calc();
        assert_eq!(convenience_fee(&calc, 50.01), 4.0);
    }

    #[test]
    fn test_summary_includes_fee_above_threshold() {
        let calc = calc();
        // 26 pages x 2.00 = 52.00 > 50.00, so the fee applies.
        let items = vec![bw_job(26, 1)];
        let summary = summarize(&calc, &items);
        assert_eq!(summary.subtotal, 52.0);
        assert_eq!(summary.convenience_fee, 4.0);
        assert_eq!(summary.total, 56.0);
        assert_eq!(summary.item_count, 1);
    }

    #[test]
    fn test_summary_waives_fee_at_or_below_threshold() {
        let calc = calc();
        // 25 pages x 2.00 = 50.00 exactly: strictly-greater rule waives.
        let items = vec![bw_job(25, 1)];
        let summary = summarize(&calc, &items);
        assert_eq!(summary.convenience_fee, 0.0);
        assert_eq!(summary.total, 50.0);
    }

    #[test]
    fn test_total_rounds_once_over_rounded_items() {
        let calc = calc();
        // Per-item prices are already two-decimal values, so summing and
        // re-rounding never diverges from the displayed line items.
        let items = vec![bw_job(7, 3), bw_job(13, 1), bw_job(1, 9)];
        let expected: f64 = items.iter().map(|i| calc.item_price(i)).sum();
        assert_eq!(cart_subtotal(&calc, &items), (expected * 100.0).round() / 100.0);
    }

    #[test]
    fn test_format_price() {
        let calc = calc();
        assert_eq!(format_price(&calc, 78.0), "₹78.00");
        assert_eq!(format_price(&calc, 4.5), "₹4.50");
    }
}

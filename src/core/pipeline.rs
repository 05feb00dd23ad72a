use crate::core::cart::summarize;
use crate::core::pricing::PriceCalculator;
use crate::core::{ConfigProvider, PrintJob, Quote, QuotePipeline, Storage};
use crate::domain::model::{ColorMode, Sides};
use crate::utils::error::{QuoteError, Result};

/// Prices a cart file from storage and exports the quote as CSV and
/// JSON artifacts in the configured output directory.
pub struct FileQuotePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) calculator: PriceCalculator,
}

impl<S: Storage, C: ConfigProvider> FileQuotePipeline<S, C> {
    pub fn new(storage: S, config: C, calculator: PriceCalculator) -> Self {
        Self {
            storage,
            config,
            calculator,
        }
    }

    fn quote_csv(&self, quote: &Quote) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "document",
            "pages",
            "copies",
            "color_mode",
            "sides",
            "paper_size",
            "spiral_binding",
            "record_binding",
            "price",
        ])?;

        for item in &quote.items {
            let color_mode = match item.job.color_mode {
                ColorMode::BlackAndWhite => "bw",
                ColorMode::Color => "color",
                ColorMode::Custom => "custom",
            };
            let sides = match item.job.sides {
                Sides::Single => "single",
                Sides::Double => "double",
            };
            let pages = item.job.total_pages.to_string();
            let copies = item.job.copies.to_string();
            let spiral = item.job.spiral_binding.to_string();
            let record = item.job.record_binding.to_string();
            let price = format!("{:.2}", item.price);
            writer.write_record([
                item.job.document_name.as_str(),
                pages.as_str(),
                copies.as_str(),
                color_mode,
                sides,
                item.job.paper_size.as_str(),
                spiral.as_str(),
                record.as_str(),
                price.as_str(),
            ])?;
        }

        writer.write_record(["", "", "", "", "", "", "", "", ""])?;
        for (label, amount) in [
            ("subtotal", quote.summary.subtotal),
            ("convenience_fee", quote.summary.convenience_fee),
            ("total", quote.summary.total),
        ] {
            let amount = format!("{:.2}", amount);
            writer.write_record([label, "", "", "", "", "", "", "", amount.as_str()])?;
        }

        let bytes = writer.into_inner().map_err(|e| QuoteError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| QuoteError::ProcessingError {
            message: format!("CSV output was not valid UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> QuotePipeline for FileQuotePipeline<S, C> {
    async fn load(&self) -> Result<Vec<PrintJob>> {
        tracing::debug!("Reading cart file: {}", self.config.cart_path());
        let data = self.storage.read_file(self.config.cart_path()).await?;
        let jobs: Vec<PrintJob> = serde_json::from_slice(&data)?;
        Ok(jobs)
    }

    fn price(&self, jobs: Vec<PrintJob>) -> Result<Quote> {
        let summary = summarize(&self.calculator, &jobs);
        let items = jobs
            .into_iter()
            .map(|job| self.calculator.price_item(job))
            .collect();

        Ok(Quote {
            generated_at: chrono::Utc::now(),
            items,
            summary,
        })
    }

    async fn export(&self, quote: Quote) -> Result<String> {
        let csv_output = self.quote_csv(&quote)?;
        tracing::debug!("Writing quote CSV ({} bytes)", csv_output.len());
        self.storage
            .write_file("quote.csv", csv_output.as_bytes())
            .await?;

        let json_output = serde_json::to_string_pretty(&quote)?;
        tracing::debug!("Writing quote JSON ({} bytes)", json_output.len());
        self.storage
            .write_file("quote.json", json_output.as_bytes())
            .await?;

        Ok(format!("{}/quote.csv", self.config.output_path()))
    }
}

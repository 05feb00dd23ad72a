use crate::core::QuotePipeline;
use crate::utils::error::Result;

pub struct QuoteEngine<P: QuotePipeline> {
    pipeline: P,
}

impl<P: QuotePipeline> QuoteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting quote generation...");

        // Load
        tracing::info!("Loading cart...");
        let jobs = self.pipeline.load().await?;
        tracing::info!("Loaded {} cart items", jobs.len());

        // Price
        tracing::info!("Pricing cart items...");
        let quote = self.pipeline.price(jobs)?;
        tracing::info!(
            "Priced {} items, subtotal {:.2}, total {:.2}",
            quote.summary.item_count,
            quote.summary.subtotal,
            quote.summary.total
        );

        // Export
        tracing::info!("Exporting quote...");
        let output_path = self.pipeline.export(quote).await?;
        tracing::info!("Quote saved to: {}", output_path);

        Ok(output_path)
    }
}

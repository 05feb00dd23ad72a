use crate::domain::model::{PrintJob, Quote};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn cart_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn pricing_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait QuotePipeline: Send + Sync {
    /// Read the cart file into print jobs.
    async fn load(&self) -> Result<Vec<PrintJob>>;
    /// Price every job and aggregate cart totals. Pure; job contents
    /// never cause an error.
    fn price(&self, jobs: Vec<PrintJob>) -> Result<Quote>;
    /// Write the quote artifacts and return the primary output path.
    async fn export(&self, quote: Quote) -> Result<String>;
}

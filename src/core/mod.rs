pub mod cart;
pub mod engine;
pub mod pages;
pub mod pipeline;
pub mod pricing;

pub use crate::domain::model::{CartSummary, PricedItem, PrintJob, Quote};
pub use crate::domain::ports::{ConfigProvider, QuotePipeline, Storage};
pub use crate::utils::error::Result;

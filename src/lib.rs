pub mod config;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod records;
pub mod scrape;
pub mod table;

pub use config::{ScrapeConfig, SinkKind, Site};
pub use fetch::{HttpFetcher, PageFetch, PageFetcher};
pub use filter::QuoteFilter;
pub use records::{Book, Dataset, Quote};
pub use scrape::Scraper;
pub use table::Table;

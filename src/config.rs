//! Run configuration, built upfront from CLI arguments and passed into the
//! pipeline as an immutable value.

use std::path::PathBuf;

use crate::filter::QuoteFilter;

/// Which listing site a run scrapes. A run never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Quotes,
    Books,
}

impl Site {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Site::Quotes => "http://quotes.toscrape.com",
            Site::Books => "http://books.toscrape.com",
        }
    }

    /// Listing URL for a 1-based page index, per-site path template.
    pub fn page_url(&self, base_url: &str, page: u32) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Site::Quotes => format!("{}/page/{}/", base, page),
            Site::Books => format!("{}/catalogue/page-{}.html", base, page),
        }
    }
}

impl std::str::FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quotes" => Ok(Site::Quotes),
            "books" => Ok(Site::Books),
            _ => Err(format!("Unknown site: {}", s)),
        }
    }
}

/// Destination that terminates the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SinkKind {
    #[default]
    Csv,
    Pdf,
    Sheets,
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(SinkKind::Csv),
            "pdf" => Ok(SinkKind::Pdf),
            "sheets" => Ok(SinkKind::Sheets),
            _ => Err(format!("Unknown sink: {}", s)),
        }
    }
}

/// Everything one scrape-and-export run needs, gathered before any request
/// is issued.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub site: Site,
    pub base_url: String,
    pub max_pages: u32,
    pub filter: QuoteFilter,
    pub sink: SinkKind,
    /// Output path stem; the sink appends its own extension.
    pub out: PathBuf,
    pub sheet_name: Option<String>,
    pub sheets_token: Option<String>,
    pub wkhtmltopdf: PathBuf,
}

impl ScrapeConfig {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            base_url: site.default_base_url().to_owned(),
            max_pages: 3,
            filter: QuoteFilter::default(),
            sink: SinkKind::default(),
            out: PathBuf::from("scraped_data"),
            sheet_name: None,
            sheets_token: None,
            wkhtmltopdf: PathBuf::from("wkhtmltopdf"),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_filter(mut self, filter: QuoteFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }
}

//! Export sinks. The pipeline hands a finished [`Table`] to exactly one
//! exporter; no scraping logic depends on which one.

mod csv;
mod pdf;
mod sheets;

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ScrapeConfig, SinkKind};
use crate::table::Table;

pub use self::csv::CsvExporter;
pub use self::pdf::PdfExporter;
pub use self::sheets::SheetsExporter;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("renderer failed: {0}")]
    Renderer(String),
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

/// Where the exported table ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Url(url) => write!(f, "{}", url),
        }
    }
}

#[async_trait]
pub trait Exporter {
    async fn export(&self, table: &Table) -> Result<Location, ExportError>;
}

/// Build the exporter the configuration asks for. The Sheets sink is the
/// only one that can fail here, when no token was supplied.
pub fn for_config(config: &ScrapeConfig) -> Result<Box<dyn Exporter>, ExportError> {
    match config.sink {
        SinkKind::Csv => Ok(Box::new(CsvExporter::new(config.out.with_extension("csv")))),
        SinkKind::Pdf => Ok(Box::new(PdfExporter::new(
            config.out.with_extension("pdf"),
            config.wkhtmltopdf.clone(),
        ))),
        SinkKind::Sheets => {
            let token = config.sheets_token.clone().ok_or_else(|| {
                ExportError::MissingCredentials(
                    "set GOOGLE_SHEETS_TOKEN or pass --token for the sheets sink".to_owned(),
                )
            })?;
            let title = config
                .sheet_name
                .clone()
                .unwrap_or_else(|| "Scraped Data".to_owned());
            Ok(Box::new(SheetsExporter::new(title, token)))
        }
    }
}

pub async fn export_table(table: &Table, config: &ScrapeConfig) -> Result<Location, ExportError> {
    for_config(config)?.export(table).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Site;

    #[test]
    fn sheets_sink_without_token_is_rejected_upfront() {
        let mut config = ScrapeConfig::new(Site::Quotes).with_sink(SinkKind::Sheets);
        config.sheet_name = Some("Scraped Data".to_owned());

        match for_config(&config) {
            Err(ExportError::MissingCredentials(_)) => {}
            other => panic!("expected missing credentials, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn sink_extensions_follow_the_out_stem() {
        let config = ScrapeConfig::new(Site::Books);
        assert_eq!(
            config.out.with_extension("csv"),
            PathBuf::from("scraped_data.csv")
        );
    }
}

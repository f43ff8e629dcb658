//! Delimited-file sink.

use std::fs::File;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::table::Table;

use super::{ExportError, Exporter, Location};

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Exporter for CsvExporter {
    async fn export(&self, table: &Table) -> Result<Location, ExportError> {
        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(Location::File(self.path.clone()))
    }
}

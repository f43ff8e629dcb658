//! Google Sheets sink: creates a spreadsheet via the Sheets v4 REST API and
//! writes the whole table starting at A1.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::table::Table;

use super::{ExportError, Exporter, Location};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub struct SheetsExporter {
    client: Client,
    title: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(rename = "spreadsheetId")]
    spreadsheet_id: String,
}

impl SheetsExporter {
    pub fn new(title: String, token: String) -> Self {
        Self {
            client: Client::new(),
            title,
            token,
        }
    }
}

#[async_trait]
impl Exporter for SheetsExporter {
    async fn export(&self, table: &Table) -> Result<Location, ExportError> {
        info!("Creating spreadsheet \"{}\"", self.title);
        let response = self
            .client
            .post(SHEETS_API)
            .bearer_auth(&self.token)
            .json(&json!({ "properties": { "title": self.title } }))
            .send()
            .await?;
        let created: CreateResponse = checked(response).await?.json().await?;

        let url = format!(
            "{}/{}/values/A1?valueInputOption=RAW",
            SHEETS_API, created.spreadsheet_id
        );
        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(&values_body(table))
            .send()
            .await?;
        checked(response).await?;

        Ok(Location::Url(format!(
            "https://docs.google.com/spreadsheets/d/{}",
            created.spreadsheet_id
        )))
    }
}

async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ExportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ExportError::HttpStatus { status, body })
}

/// Header row first, then data rows, row-major.
fn values_body(table: &Table) -> serde_json::Value {
    let mut values = Vec::with_capacity(table.len() + 1);
    values.push(table.columns.clone());
    values.extend(table.rows.iter().cloned());
    json!({ "majorDimension": "ROWS", "values": values })
}

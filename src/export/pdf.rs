//! PDF sink: renders the table to an HTML document, then turns that into a
//! PDF with an external `wkhtmltopdf` binary. The HTML intermediate is kept
//! next to the PDF.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::Command;

use async_trait::async_trait;

use crate::table::Table;

use super::{ExportError, Exporter, Location};

const CSS_STYLES: &str = "\
body { font-family: sans-serif; margin: 24px; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #999; padding: 6px 10px; text-align: left; }
th { background: #eee; }
tr:nth-child(even) { background: #f7f7f7; }";

pub struct PdfExporter {
    path: PathBuf,
    wkhtmltopdf: PathBuf,
}

impl PdfExporter {
    pub fn new(path: PathBuf, wkhtmltopdf: PathBuf) -> Self {
        Self { path, wkhtmltopdf }
    }
}

#[async_trait]
impl Exporter for PdfExporter {
    async fn export(&self, table: &Table) -> Result<Location, ExportError> {
        let html_path = self.path.with_extension("html");
        std::fs::write(&html_path, render_html(table))?;

        let status = Command::new(&self.wkhtmltopdf)
            .arg(&html_path)
            .arg(&self.path)
            .status()
            .map_err(|err| {
                ExportError::Renderer(format!(
                    "failed to run {}: {}",
                    self.wkhtmltopdf.display(),
                    err
                ))
            })?;
        if !status.success() {
            return Err(ExportError::Renderer(format!(
                "{} exited with {}",
                self.wkhtmltopdf.display(),
                status
            )));
        }

        Ok(Location::File(self.path.clone()))
    }
}

fn render_html(table: &Table) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "  <meta charset=\"UTF-8\">");
    let _ = writeln!(out, "  <title>Scraped data</title>");
    let _ = writeln!(out, "  <style>\n{}\n  </style>", CSS_STYLES);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "  <table>");

    let _ = writeln!(out, "    <tr>");
    for column in &table.columns {
        let _ = writeln!(out, "      <th>{}</th>", html_escape(column));
    }
    let _ = writeln!(out, "    </tr>");

    for row in &table.rows {
        let _ = writeln!(out, "    <tr>");
        for cell in row {
            let _ = writeln!(out, "      <td>{}</td>", html_escape(cell));
        }
        let _ = writeln!(out, "    </tr>");
    }

    let _ = writeln!(out, "  </table>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_row_per_record() {
        let mut table = Table::new(vec!["Title", "Price", "Rating"]);
        table.push_row(vec![
            "Sharp Objects".to_owned(),
            "£47.82".to_owned(),
            "Four".to_owned(),
        ]);
        table.push_row(vec![
            "Sapiens".to_owned(),
            "£54.23".to_owned(),
            "Five".to_owned(),
        ]);

        let html = render_html(&table);
        assert_eq!(html.matches("<tr>").count(), 3); // header + 2 rows
        assert!(html.contains("<th>Rating</th>"));
        assert!(html.contains("<td>£47.82</td>"));
    }

    #[test]
    fn escapes_markup_in_cells() {
        let mut table = Table::new(vec!["Quote"]);
        table.push_row(vec!["<b>bold & \"quoted\"</b>".to_owned()]);

        let html = render_html(&table);
        assert!(html.contains("&lt;b&gt;bold &amp; &quot;quoted&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>bold"));
    }

    #[tokio::test]
    async fn missing_binary_is_a_renderer_error() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(
            dir.path().join("out.pdf"),
            PathBuf::from("wkhtmltopdf-does-not-exist"),
        );
        let table = Table::new(vec!["Quote"]);

        match exporter.export(&table).await {
            Err(ExportError::Renderer(_)) => {}
            other => panic!("expected renderer error, got {:?}", other.map(|_| ())),
        }
    }
}

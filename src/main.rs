use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tabled::builder::Builder;
use tabled::settings::Style;

use toscrape_scraper::export;
use toscrape_scraper::{
    Dataset, HttpFetcher, Quote, QuoteFilter, ScrapeConfig, Scraper, SinkKind, Site, Table,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSite {
    Quotes,
    Books,
}

impl From<CliSite> for Site {
    fn from(site: CliSite) -> Self {
        match site {
            CliSite::Quotes => Site::Quotes,
            CliSite::Books => Site::Books,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSink {
    Csv,
    Pdf,
    Sheets,
}

impl From<CliSink> for SinkKind {
    fn from(sink: CliSink) -> Self {
        match sink {
            CliSink::Csv => SinkKind::Csv,
            CliSink::Pdf => SinkKind::Pdf,
            CliSink::Sheets => SinkKind::Sheets,
        }
    }
}

/// Scrape quotes or books listing pages and export the dataset.
#[derive(Parser, Debug)]
#[command(name = "toscrape_scraper")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Site to scrape
    #[arg(value_enum)]
    site: CliSite,

    /// Maximum number of listing pages to fetch
    #[arg(long, default_value_t = 3)]
    max_pages: u32,

    /// Override the site's base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Keep only quotes by this author (exact match, case-insensitive)
    #[arg(long)]
    author: Option<String>,

    /// Keep only quotes with a tag containing this substring
    #[arg(long)]
    tag: Option<String>,

    /// Where to send the dataset
    #[arg(long, value_enum, default_value = "csv")]
    sink: CliSink,

    /// Output path stem; the chosen sink appends its extension
    #[arg(long, default_value = "scraped_data")]
    out: PathBuf,

    /// Title for the created spreadsheet (sheets sink)
    #[arg(long)]
    sheet_name: Option<String>,

    /// OAuth bearer token for the Sheets API (falls back to GOOGLE_SHEETS_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Path to the wkhtmltopdf binary (pdf sink)
    #[arg(long, default_value = "wkhtmltopdf")]
    wkhtmltopdf: PathBuf,
}

fn build_config(cli: Cli) -> Result<ScrapeConfig> {
    let site = Site::from(cli.site);
    if site == Site::Books && (cli.author.is_some() || cli.tag.is_some()) {
        bail!("--author and --tag only apply to the quotes site");
    }

    let mut config = ScrapeConfig::new(site)
        .with_max_pages(cli.max_pages)
        .with_filter(QuoteFilter {
            author: cli.author,
            tag: cli.tag,
        })
        .with_sink(cli.sink.into());
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.out = cli.out;
    config.sheet_name = cli.sheet_name;
    config.sheets_token = cli
        .token
        .or_else(|| std::env::var("GOOGLE_SHEETS_TOKEN").ok());
    config.wkhtmltopdf = cli.wkhtmltopdf;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = build_config(cli)?;

    let scraper = Scraper::new(
        HttpFetcher::new(),
        config.site,
        config.base_url.clone(),
        config.max_pages,
    );
    let dataset = scraper.scrape().await;

    println!("\nDataset after scraping ({} records):", dataset.len());
    print_preview(&dataset.clone().into_table(), 10);

    let dataset = match dataset {
        Dataset::Quotes(quotes) => Dataset::Quotes(config.filter.apply(quotes)),
        books @ Dataset::Books(_) => books,
    };

    if let Dataset::Quotes(quotes) = &dataset {
        if !quotes.is_empty() {
            print_top_authors(quotes);
        }
    }

    let table = dataset.into_table();
    if table.is_empty() {
        println!("No data to save.");
        return Ok(());
    }

    let location = export::export_table(&table, &config)
        .await
        .context("export failed")?;
    println!("Saved to {}", location);
    Ok(())
}

fn print_preview(table: &Table, limit: usize) {
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().cloned());
    for row in table.rows.iter().take(limit) {
        builder.push_record(row.iter().cloned());
    }
    let mut rendered = builder.build();
    rendered.with(Style::sharp());
    println!("{}", rendered);
}

/// Console stand-in for the top-authors bar chart: up to five authors by
/// quote count, descending, ties broken by name.
fn print_top_authors(quotes: &[Quote]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for quote in quotes {
        *counts.entry(quote.author.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("\nTop authors:");
    for (author, count) in ranked.into_iter().take(5) {
        println!("{:<24} {:>3} {}", author, count, "#".repeat(count));
    }
}

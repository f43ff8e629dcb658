//! Paginated fetch-and-extract loop.
//!
//! One GET per 1-based page index, sequential, no retries. The loop stops at
//! the first failed fetch or the first page with zero container elements and
//! returns whatever was collected up to that point.

use select::document::Document;
use select::predicate::{Class, Name, Predicate};
use tracing::{info, warn};

use crate::config::Site;
use crate::fetch::{PageFetch, PageFetcher};
use crate::records::{Book, Dataset, Quote, UNKNOWN_RATING};

pub struct Scraper<F> {
    fetcher: F,
    site: Site,
    base_url: String,
    max_pages: u32,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, site: Site, base_url: String, max_pages: u32) -> Self {
        Self {
            fetcher,
            site,
            base_url,
            max_pages,
        }
    }

    pub async fn scrape(&self) -> Dataset {
        match self.site {
            Site::Quotes => Dataset::Quotes(self.run(parse_quote_page).await),
            Site::Books => Dataset::Books(self.run(parse_book_page).await),
        }
    }

    async fn run<T>(&self, parse: fn(&Document) -> Vec<T>) -> Vec<T> {
        let mut records = Vec::new();

        for page in 1..=self.max_pages {
            let url = self.site.page_url(&self.base_url, page);
            info!("Scraping page {}.", page);

            let body = match self.fetcher.fetch(&url).await {
                PageFetch::Body(body) => body,
                PageFetch::EndOfData => {
                    info!("No page {} available, stopping.", page);
                    break;
                }
                PageFetch::TransportError(err) => {
                    warn!("Failed to fetch page {}: {}", page, err);
                    break;
                }
            };

            let document = Document::from(body.as_str());
            let page_records = parse(&document);
            if page_records.is_empty() {
                info!("No results found for page {}, stopping.", page);
                break;
            }

            records.extend(page_records);
        }

        records
    }
}

/// One quote per `div.quote` container. Missing sub-fields degrade to empty
/// strings rather than dropping the record.
fn parse_quote_page(document: &Document) -> Vec<Quote> {
    document
        .find(Name("div").and(Class("quote")))
        .map(|node| {
            let text = node
                .find(Name("span").and(Class("text")))
                .next()
                .map(|n| n.text().trim().to_owned())
                .unwrap_or_default();

            let author = node
                .find(Name("small").and(Class("author")))
                .next()
                .map(|n| n.text().trim().to_owned())
                .unwrap_or_default();

            let tags = node
                .find(Name("a").and(Class("tag")))
                .map(|n| n.text().trim().to_owned())
                .collect();

            Quote { text, author, tags }
        })
        .collect()
}

/// One book per `article.product_pod` card. The rating lives in the second
/// class of the star-rating element ("star-rating Three"); cards without one
/// get [`UNKNOWN_RATING`].
fn parse_book_page(document: &Document) -> Vec<Book> {
    document
        .find(Name("article").and(Class("product_pod")))
        .map(|node| {
            let title = node
                .find(Name("h3").descendant(Name("a")))
                .next()
                .and_then(|a| a.attr("title"))
                .map(|t| t.trim().to_owned())
                .unwrap_or_default();

            let price = node
                .find(Name("p").and(Class("price_color")))
                .next()
                .map(|n| n.text().trim().to_owned())
                .unwrap_or_default();

            let rating = node
                .find(Name("p").and(Class("star-rating")))
                .next()
                .and_then(|p| p.attr("class"))
                .and_then(|classes| classes.split_whitespace().find(|w| *w != "star-rating"))
                .unwrap_or(UNKNOWN_RATING)
                .to_owned();

            Book {
                title,
                price,
                rating,
            }
        })
        .collect()
}

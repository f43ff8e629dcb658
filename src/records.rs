//! Record shapes scraped from the two listing sites.

use crate::table::Table;

/// Rating text used when a book card carries no star-rating class.
pub const UNKNOWN_RATING: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// Tags in display order; duplicates allowed.
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    /// Currency-formatted text as shown on the page, e.g. "£51.77".
    pub price: String,
    /// One of the star-rating words ("One".."Five") or [`UNKNOWN_RATING`].
    pub rating: String,
}

/// A homogeneous run result. A run scrapes one site, so the two record
/// shapes never mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Quotes(Vec<Quote>),
    Books(Vec<Book>),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Quotes(q) => q.len(),
            Dataset::Books(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the stringly table handed to exporters. Tag lists are
    /// joined with ", " to stay a single column.
    pub fn into_table(self) -> Table {
        match self {
            Dataset::Quotes(quotes) => {
                let mut table = Table::new(vec!["Quote", "Author", "Tags"]);
                for q in quotes {
                    table.push_row(vec![q.text, q.author, q.tags.join(", ")]);
                }
                table
            }
            Dataset::Books(books) => {
                let mut table = Table::new(vec!["Title", "Price", "Rating"]);
                for b in books {
                    table.push_row(vec![b.title, b.price, b.rating]);
                }
                table
            }
        }
    }
}

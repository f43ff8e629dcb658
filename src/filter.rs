//! Post-scrape narrowing of quote datasets.

use crate::records::Quote;

/// Optional author/tag filters, AND-composed when both are given. Empty
/// input on a dimension means no filtering there. Applies to quotes only;
/// the books dataset has no filter step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    /// Exact author match, case-insensitive.
    pub author: Option<String>,
    /// Substring matched case-insensitively against each tag.
    pub tag: Option<String>,
}

impl QuoteFilter {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.tag.is_none()
    }

    /// Takes the quotes by value and returns the narrowed list, preserving
    /// order, so downstream stages never see the pre-filter table.
    pub fn apply(&self, quotes: Vec<Quote>) -> Vec<Quote> {
        if self.is_empty() {
            return quotes;
        }

        let author = self.author.as_deref().map(str::to_lowercase);
        let tag = self.tag.as_deref().map(str::to_lowercase);

        quotes
            .into_iter()
            .filter(|quote| {
                let author_ok = author
                    .as_deref()
                    .map_or(true, |a| quote.author.to_lowercase() == a);
                let tag_ok = tag.as_deref().map_or(true, |needle| {
                    quote
                        .tags
                        .iter()
                        .any(|t| t.to_lowercase().contains(needle))
                });
                author_ok && tag_ok
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(author: &str, tags: &[&str]) -> Quote {
        Quote {
            text: format!("A quote by {}", author),
            author: author.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn sample() -> Vec<Quote> {
        vec![
            quote("Albert Einstein", &["life", "inspirational"]),
            quote("Mark Twain", &["love", "books"]),
            quote("Albert Einstein", &["love"]),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = QuoteFilter::default();
        assert_eq!(filter.apply(sample()).len(), 3);
    }

    #[test]
    fn author_filter_is_case_insensitive_exact_match() {
        let filter = QuoteFilter {
            author: Some("albert einstein".to_owned()),
            tag: None,
        };
        let kept = filter.apply(sample());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|q| q.author == "Albert Einstein"));
    }

    #[test]
    fn tag_filter_matches_substrings() {
        let filter = QuoteFilter {
            author: None,
            tag: Some("LIF".to_owned()),
        };
        let kept = filter.apply(sample());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tags, vec!["life", "inspirational"]);
    }

    #[test]
    fn combined_filters_intersect() {
        let filter = QuoteFilter {
            author: Some("Albert Einstein".to_owned()),
            tag: Some("love".to_owned()),
        };
        let kept = filter.apply(sample());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].tags, vec!["love"]);
    }

    #[test]
    fn partial_author_name_does_not_match() {
        let filter = QuoteFilter {
            author: Some("Einstein".to_owned()),
            tag: None,
        };
        assert!(filter.apply(sample()).is_empty());
    }
}

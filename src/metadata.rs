//! Embedded structured-data reading.
//!
//! Scans schema.org microdata type annotations into an occurrence tally and
//! reads the Open Graph and Twitter card type declarations. Absent or
//! malformed annotations read as "no signal": an empty tally or an empty
//! string, never a failure.

use std::collections::BTreeMap;

use crate::dom::{self, Document, Selection};
use crate::patterns::{ITEMTYPE_SELECTOR, OG_TYPE_SELECTOR, TWITTER_CARD_SELECTOR};

/// Occurrence counts of the schema.org types declared on a page, keyed by
/// the last path segment of the type URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTally {
    counts: BTreeMap<String, u32>,
}

impl TypeTally {
    /// Total number of type annotations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| u64::from(n)).sum()
    }

    /// Number of distinct type names.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The distinct type names joined into one string, for flag regexes.
    #[must_use]
    pub fn joined_names(&self) -> String {
        self.counts.keys().cloned().collect::<Vec<_>>().join(",")
    }

    /// Occurrences of one type name.
    #[must_use]
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }
}

/// Tally the `[itemscope][itemtype]` annotations of a document.
#[must_use]
pub fn type_tally(doc: &Document) -> TypeTally {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for node in doc.select(ITEMTYPE_SELECTOR).nodes() {
        let sel = Selection::from(*node);
        let Some(itemtype) = dom::get_attribute(&sel, "itemtype") else {
            continue;
        };
        let name = itemtype.rsplit('/').next().unwrap_or(&itemtype).trim();
        if name.is_empty() {
            continue;
        }
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    TypeTally { counts }
}

/// Is the page declared as an article through Open Graph?
///
/// Case-insensitive on the content value; both `property` and `name`
/// spellings of the meta tag are honored.
#[must_use]
pub fn has_og_article(doc: &Document) -> bool {
    doc.select(OG_TYPE_SELECTOR).nodes().iter().any(|node| {
        dom::get_attribute(&Selection::from(*node), "content")
            .is_some_and(|content| content.trim().eq_ignore_ascii_case("article"))
    })
}

/// The declared Twitter card type, empty when absent.
#[must_use]
pub fn twitter_card_type(doc: &Document) -> String {
    doc.select(TWITTER_CARD_SELECTOR)
        .nodes()
        .iter()
        .find_map(|node| dom::get_attribute(&Selection::from(*node), "content"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn tally_counts_last_uri_segment() {
        let doc = parse(
            r#"<body>
                <div itemscope itemtype="https://schema.org/NewsArticle"></div>
                <div itemscope itemtype="https://schema.org/NewsArticle"></div>
                <span itemscope itemtype="https://schema.org/Person"></span>
            </body>"#,
        );
        let tally = type_tally(&doc);

        assert_eq!(tally.count("NewsArticle"), 2);
        assert_eq!(tally.count("Person"), 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.distinct(), 2);
        assert_eq!(tally.joined_names(), "NewsArticle,Person");
    }

    #[test]
    fn itemtype_without_itemscope_is_ignored() {
        let doc = parse(r#"<body><div itemtype="https://schema.org/Article"></div></body>"#);
        assert_eq!(type_tally(&doc).total(), 0);
    }

    #[test]
    fn empty_page_reads_as_no_signal() {
        let doc = parse("<body><p>nothing structured</p></body>");
        let tally = type_tally(&doc);

        assert_eq!(tally.total(), 0);
        assert_eq!(tally.distinct(), 0);
        assert_eq!(twitter_card_type(&doc), "");
        assert!(!has_og_article(&doc));
    }

    #[test]
    fn og_article_matches_case_insensitively() {
        let doc = parse(r#"<head><meta property="og:type" content="ARTICLE"></head><body></body>"#);
        assert!(has_og_article(&doc));

        let named = parse(r#"<head><meta name="og:type" content="article"></head><body></body>"#);
        assert!(has_og_article(&named));

        let video = parse(r#"<head><meta property="og:type" content="video"></head><body></body>"#);
        assert!(!has_og_article(&video));
    }

    #[test]
    fn twitter_card_reads_first_declaration() {
        let doc = parse(
            r#"<head>
                <meta name="twitter:card" content="summary_large_image">
                <meta name="twitter:card" content="app">
            </head><body></body>"#,
        );
        assert_eq!(twitter_card_type(&doc), "summary_large_image");
    }
}

//! Compiled regex patterns and CSS selectors for feature scoring.
//!
//! The two ancestry keyword classes are kept as plain word lists and joined
//! into case-insensitive regexes at first use, so the lists can be tuned and
//! tested independently of the walk logic that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Ancestry Keyword Classes
// =============================================================================

/// Markers of boilerplate and navigation chrome. A node whose ancestry chain
/// matches these (and nothing from [`MAYBE_CANDIDATE_KEYWORDS`]) is dropped
/// from scoring.
pub const UNLIKELY_KEYWORDS: &[&str] = &[
    "aside",
    "banner",
    "combx",
    "comment",
    "community",
    "disqus",
    "extra",
    "foot",
    "header",
    "menu",
    "nav",
    "related",
    "remark",
    "rss",
    "share",
    "shoutbox",
    "sidebar",
    "skyscraper",
    "sponsor",
    "ad-break",
    "agegate",
    "pagination",
    "pager",
    "popup",
];

/// Markers of main-content containers. Any hit here overrides an unlikely hit
/// on the same chain.
pub const MAYBE_CANDIDATE_KEYWORDS: &[&str] = &[
    "and", "article", "body", "column", "main", "shadow",
];

/// Join a keyword word list into one case-insensitive alternation.
fn keyword_class(words: &[&str]) -> Regex {
    Regex::new(&format!("(?i){}", words.join("|"))).expect("keyword class regex")
}

/// Compiled unlikely-candidate class.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> =
    LazyLock::new(|| keyword_class(UNLIKELY_KEYWORDS));

/// Compiled maybe-candidate class.
pub static MAYBE_CANDIDATES: LazyLock<Regex> =
    LazyLock::new(|| keyword_class(MAYBE_CANDIDATE_KEYWORDS));

// =============================================================================
// Structured-Data Type Flags
// =============================================================================

// These run against the joined distinct type names of the schema.org tally.
// Case-sensitive on purpose: the vocabulary capitalizes its type names, and
// lowercase occurrences in class-like strings are not type annotations.

pub static TYPE_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Article").expect("TYPE_ARTICLE regex"));

pub static TYPE_NEWS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("News").expect("TYPE_NEWS regex"));

pub static TYPE_BLOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Blog").expect("TYPE_BLOG regex"));

pub static TYPE_POSTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Posting").expect("TYPE_POSTING regex"));

/// Any article-like type, including report and posting variants.
pub static TYPE_ANY_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Article|Blog|Report|Posting").expect("TYPE_ANY_ARTICLE regex"));

pub static TYPE_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Person").expect("TYPE_PERSON regex"));

pub static TYPE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Image").expect("TYPE_IMAGE regex"));

pub static TYPE_ORGANIZATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Organization").expect("TYPE_ORGANIZATION regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Text blocks considered by the density scorer.
pub const TEXT_BLOCK_SELECTOR: &str = "p, pre";

/// Section containers.
pub const SECTION_SELECTOR: &str = "section";

/// Article containers.
pub const ARTICLE_SELECTOR: &str = "article";

/// Heuristically-named post/article/news containers.
pub const ENTRY_SELECTOR: &str = "[class*=\"post\"], [class*=\"article\"], [class*=\"news\"], \
     [id*=\"post\"], [id*=\"article\"], [id*=\"news\"]";

/// Structured-data carriers for the type tally.
pub const ITEMTYPE_SELECTOR: &str = "[itemscope][itemtype]";

/// Open Graph type declarations; some generators emit `name` instead of
/// `property`, so both are scanned.
pub const OG_TYPE_SELECTOR: &str = "meta[property=\"og:type\"], meta[name=\"og:type\"]";

/// Twitter card type declaration.
pub const TWITTER_CARD_SELECTOR: &str = "meta[name=\"twitter:card\"]";

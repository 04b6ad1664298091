//! # page-signals
//!
//! Article-likeness feature extraction from rendered page snapshots.
//!
//! This library computes a flat feature map describing whether a captured
//! document page reads as a single main-content article rather than a
//! listing, app shell, or form page. The map feeds a downstream classifier;
//! the library itself never classifies and never extracts article text.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_signals::extract_features;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here, long enough to matter.</p></article></body></html>"#;
//!
//! let features = extract_features(html)?;
//! println!("paragraph blocks: {:?}", features.get("numPPRE"));
//! # Ok::<(), page_signals::Error>(())
//! ```
//!
//! ## Signals
//!
//! - **Density scoring**: power-law aggregate over visible text blocks, in
//!   seven preset variants up to full same-column geometric clustering.
//! - **Ancestry pattern matching**: boilerplate/content keyword classes
//!   scored over each node's id/tag/class chain.
//! - **Structural counters**: leaf-only container counts and area ratios for
//!   sections, articles, and heuristically-named entries.
//! - **Embedded metadata**: schema.org type tally, Open Graph and Twitter
//!   card flags.
//!
//! Geometry and visibility are read from the snapshot per the convention
//! documented in [`layout`]; each extraction call is a pure function of the
//! document tree it is handed.

mod error;
mod extract;
mod options;

/// Keyword classes and selectors, kept as tunable data.
pub mod patterns;

/// DOM access adapter over `dom_query`.
pub mod dom;

/// Candidate eligibility via ancestry keyword scoring.
pub mod candidate;

/// Visible-text density scoring and its presets.
pub mod density;

/// Layout snapshot reading: boxes, visibility, page extents.
pub mod layout;

/// Embedded structured-data reading.
pub mod metadata;

/// Structural container counting and area signals.
pub mod structural;

/// Feature map output types.
pub mod features;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_features_from_document;
pub use features::{FeatureMap, FeatureValue};
pub use options::Options;

/// Computes the feature map of an HTML snapshot using default options.
///
/// # Example
///
/// ```rust
/// use page_signals::extract_features;
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let features = extract_features(html)?;
/// assert_eq!(features.get("numArticle").and_then(|v| v.as_i64()), Some(1));
/// # Ok::<(), page_signals::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_features(html: &str) -> Result<FeatureMap> {
    extract_features_with_options(html, &Options::default())
}

/// Computes the feature map of an HTML snapshot with custom options.
///
/// # Example
///
/// ```rust
/// use page_signals::{extract_features_with_options, Options};
///
/// let html = "<html><body><p>Content</p></body></html>";
/// let options = Options {
///     url: Some("https://example.com/story".to_string()),
///     ..Options::default()
/// };
/// let features = extract_features_with_options(html, &options)?;
/// # Ok::<(), page_signals::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_features_with_options(html: &str, options: &Options) -> Result<FeatureMap> {
    let doc = dom::parse(html);
    extract::extract_features_from_document(&doc, options)
}

/// Computes the feature map from HTML bytes with automatic encoding
/// detection.
///
/// Detects the charset from meta declarations and converts to UTF-8 before
/// parsing; invalid characters are replaced rather than causing errors.
#[allow(clippy::missing_errors_doc)]
pub fn extract_features_bytes(html: &[u8]) -> Result<FeatureMap> {
    extract_features(&encoding::transcode_to_utf8(html))
}

/// Computes the feature map from HTML bytes with custom options and
/// automatic encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_features_bytes_with_options(html: &[u8], options: &Options) -> Result<FeatureMap> {
    extract_features_with_options(&encoding::transcode_to_utf8(html), options)
}

//! Configuration options for feature extraction.

/// Configuration options for feature extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_signals::Options;
///
/// let options = Options {
///     url: Some("https://example.com/story/1".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Location URL of the captured page.
    ///
    /// The document snapshot carries no location of its own, so the capturing
    /// harness passes it here. Recorded in the feature map under `url`,
    /// normalized when parseable.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

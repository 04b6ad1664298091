//! Visible-text density scoring.
//!
//! Iterates the text-bearing leaf blocks of a page, filters them by
//! visibility, candidate eligibility and list exclusion, and aggregates a
//! power-law score from text length beyond a cutoff. One configurable engine
//! expresses every published preset; the clustered variant first isolates the
//! densest same-column group of blocks and scores only that group.

use crate::candidate;
use crate::dom::{self, Document, NodeRef, Selection};
use crate::layout;
use crate::patterns::TEXT_BLOCK_SELECTOR;

/// Tuning knobs of the density scorer.
///
/// Each published feature is one constant instantiation of this struct, see
/// [`presets`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DensityConfig {
    /// Trim surrounding whitespace before measuring text length.
    pub trim_whitespace: bool,
    /// Exponent of the power-law reward.
    pub power: f64,
    /// Cutoff: blocks shorter than this contribute nothing.
    pub min_length: usize,
    /// Skip paragraphs nested inside list items.
    pub exclude_list_paragraphs: bool,
    /// Score the whole ancestry chain instead of the block alone.
    pub check_parents: bool,
    /// Compose tag names into the ancestry identity strings.
    pub check_tag_name: bool,
    /// Cluster blocks by horizontal geometry and score only the peak column.
    pub cluster_by_geometry: bool,
    /// Ceiling applied to each block's measured length.
    pub saturation: usize,
}

impl DensityConfig {
    /// Clamp applied to the aggregate score, so outlier pages with many long
    /// blocks cannot dominate a downstream linear classifier.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        if self.power == 1.0 {
            6.0 * self.saturation as f64
        } else {
            6.0 * (self.saturation.saturating_sub(self.min_length) as f64).powf(self.power)
        }
    }
}

/// Named preset configurations, one per published density feature.
pub mod presets {
    use super::DensityConfig;

    /// `mozScore`: square-root reward over the 140-character cutoff.
    pub const SQRT: DensityConfig = DensityConfig {
        trim_whitespace: false,
        power: 0.5,
        min_length: 140,
        exclude_list_paragraphs: true,
        check_parents: false,
        check_tag_name: false,
        cluster_by_geometry: false,
        saturation: 1000,
    };

    /// `mozScoreLinear`: linear reward over the 140-character cutoff.
    pub const LINEAR: DensityConfig = DensityConfig { power: 1.0, ..SQRT };

    /// `mozScoreAllSqrt`: square-root reward with no cutoff.
    pub const ALL_SQRT: DensityConfig = DensityConfig { min_length: 0, ..SQRT };

    /// `mozScoreAllLinear`: linear reward with no cutoff.
    pub const ALL_LINEAR: DensityConfig = DensityConfig { power: 1.0, min_length: 0, ..SQRT };

    /// `mozScore2`: ancestry chains join the eligibility check.
    pub const SQRT_ANCESTRY: DensityConfig = DensityConfig { check_parents: true, ..SQRT };

    /// `mozScore3`: ancestry chains with tag names composed in.
    pub const SQRT_TAGGED: DensityConfig =
        DensityConfig { check_parents: true, check_tag_name: true, ..SQRT };

    /// `mozScore4`: full variant, additionally clustered by geometry.
    pub const SQRT_CLUSTERED: DensityConfig = DensityConfig {
        check_parents: true,
        check_tag_name: true,
        cluster_by_geometry: true,
        ..SQRT
    };

    /// Every preset with its feature key, in publication order.
    pub const ALL: [(&str, DensityConfig); 7] = [
        ("mozScore", SQRT),
        ("mozScoreLinear", LINEAR),
        ("mozScoreAllSqrt", ALL_SQRT),
        ("mozScoreAllLinear", ALL_LINEAR),
        ("mozScore2", SQRT_ANCESTRY),
        ("mozScore3", SQRT_TAGGED),
        ("mozScore4", SQRT_CLUSTERED),
    ];
}

/// A text block that survived every filter, with its saturated length and
/// column key.
struct Block<'a> {
    node: NodeRef<'a>,
    length: usize,
    column: (i64, i64),
}

/// Collect the blocks that qualify for scoring, in document order.
fn qualifying_blocks<'a>(doc: &'a Document, config: &DensityConfig) -> Vec<Block<'a>> {
    let body = dom::body(doc);
    let Some(root) = body.nodes().first().copied() else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    for node in body.select(TEXT_BLOCK_SELECTOR).nodes() {
        if !layout::is_visible(node) {
            continue;
        }
        if !candidate::is_candidate_eligible(node, &root, config.check_parents, config.check_tag_name)
        {
            continue;
        }
        let sel = Selection::from(*node);
        if config.exclude_list_paragraphs
            && dom::tag_name(&sel).is_some_and(|tag| tag == "p")
            && dom::is_inside_tag(node, &root, "li")
        {
            continue;
        }

        let text = dom::text_content(&sel);
        let measured = if config.trim_whitespace { text.trim() } else { &*text };
        let length = measured.chars().count().min(config.saturation);
        if length < config.min_length {
            continue;
        }

        let bounds = layout::node_box(&sel);
        blocks.push(Block { node: *node, length, column: (bounds.left, bounds.width) });
    }
    blocks
}

/// Power-law contribution of one block. Lengths below the cutoff were already
/// filtered out, so the base is never negative.
fn contribution(length: usize, config: &DensityConfig) -> f64 {
    ((length - config.min_length) as f64).powf(config.power)
}

/// Group blocks into same-column buckets, preserving encounter order.
fn column_histogram<'a>(blocks: Vec<Block<'a>>) -> Vec<((i64, i64), Vec<Block<'a>>)> {
    let mut histogram: Vec<((i64, i64), Vec<Block<'a>>)> = Vec::new();
    for block in blocks {
        match histogram.iter_mut().find(|(key, _)| *key == block.column) {
            Some((_, bucket)) => bucket.push(block),
            None => histogram.push((block.column, vec![block])),
        }
    }
    histogram
}

/// Pick the bucket holding the most blocks; ties go to the bucket
/// encountered first.
fn peak_bucket<'a>(histogram: Vec<((i64, i64), Vec<Block<'a>>)>) -> Vec<Block<'a>> {
    let mut peak: Vec<Block<'a>> = Vec::new();
    for (_, bucket) in histogram {
        if bucket.len() > peak.len() {
            peak = bucket;
        }
    }
    peak
}

/// Compute the density score of a document under one configuration.
///
/// Side-effect free and deterministic: repeated calls on an unchanged
/// snapshot return bit-identical results. The result is clamped to
/// [`DensityConfig::upper_bound`].
#[must_use]
pub fn density_score(doc: &Document, config: &DensityConfig) -> f64 {
    let blocks = qualifying_blocks(doc, config);

    let score: f64 = if config.cluster_by_geometry {
        peak_bucket(column_histogram(blocks))
            .iter()
            .map(|block| contribution(block.length, config))
            .sum()
    } else {
        blocks.iter().map(|block| contribution(block.length, config)).sum()
    };

    score.min(config.upper_bound())
}

/// The blocks of the densest column, for instrumentation.
///
/// Runs the same filter pipeline as [`density_score`] with clustering forced,
/// and returns the peak bucket's nodes in document order. Feed the list to
/// [`highlight`] to see the selected column on the page.
#[must_use]
pub fn peak_blocks<'a>(doc: &'a Document, config: &DensityConfig) -> Vec<NodeRef<'a>> {
    peak_bucket(column_histogram(qualifying_blocks(doc, config)))
        .into_iter()
        .map(|block| block.node)
        .collect()
}

/// Debug-only instrumentation: outline the given nodes in red.
///
/// This is the sole mutating operation in the crate. It is never called by
/// the scoring paths; gate it out of production use.
pub fn highlight(nodes: &[NodeRef]) {
    for node in nodes {
        let sel = Selection::from(*node);
        let mut style = dom::get_attribute(&sel, "style").unwrap_or_default();
        if !style.is_empty() && !style.trim_end().ends_with(';') {
            style.push(';');
        }
        style.push_str("border: 1px solid red");
        dom::set_attribute(&sel, "style", &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    /// A paragraph of exactly `n` characters.
    fn para(n: usize) -> String {
        format!("<p>{}</p>", "x".repeat(n))
    }

    #[test]
    fn length_at_cutoff_contributes_zero() {
        let doc = parse(&format!("<body>{}</body>", para(140)));
        assert_eq!(density_score(&doc, &presets::SQRT), 0.0);
    }

    #[test]
    fn length_one_past_cutoff_contributes_one() {
        let doc = parse(&format!("<body>{}</body>", para(141)));
        assert_eq!(density_score(&doc, &presets::SQRT), 1.0);
    }

    #[test]
    fn length_below_cutoff_is_skipped() {
        let doc = parse(&format!("<body>{}</body>", para(139)));
        assert_eq!(density_score(&doc, &presets::SQRT), 0.0);
    }

    #[test]
    fn saturation_caps_block_length() {
        // 5000 chars saturate to 1000: contribution (1000 - 140)^0.5.
        let doc = parse(&format!("<body>{}</body>", para(5000)));
        let expected = (1000.0f64 - 140.0).powf(0.5);
        assert_eq!(density_score(&doc, &presets::SQRT), expected);
    }

    #[test]
    fn score_is_clamped_to_upper_bound() {
        // Ten saturated blocks would exceed 6 * sqrt(860) unclamped.
        let blocks: String = (0..10).map(|_| para(5000)).collect();
        let doc = parse(&format!("<body>{blocks}</body>"));
        let bound = presets::SQRT.upper_bound();
        assert_eq!(density_score(&doc, &presets::SQRT), bound);
    }

    #[test]
    fn linear_preset_bound_ignores_cutoff() {
        assert_eq!(presets::LINEAR.upper_bound(), 6000.0);
        assert_eq!(presets::ALL_LINEAR.upper_bound(), 6000.0);
        assert_eq!(presets::SQRT.upper_bound(), 6.0 * (860.0f64).powf(0.5));
        assert_eq!(presets::ALL_SQRT.upper_bound(), 6.0 * (1000.0f64).powf(0.5));
    }

    #[test]
    fn hidden_blocks_do_not_score() {
        let doc = parse(&format!(
            r#"<body><div style="display:none">{}</div>{}</body>"#,
            para(500),
            para(141)
        ));
        assert_eq!(density_score(&doc, &presets::SQRT), 1.0);
    }

    #[test]
    fn list_paragraphs_are_excluded() {
        let doc = parse(&format!("<body><ul><li>{}</li></ul></body>", para(500)));
        assert_eq!(density_score(&doc, &presets::SQRT), 0.0);
    }

    #[test]
    fn preformatted_text_in_lists_still_scores() {
        // Only paragraphs carry the list exclusion.
        let html = format!("<body><ul><li><pre>{}</pre></li></ul></body>", "x".repeat(141));
        let doc = parse(&html);
        assert_eq!(density_score(&doc, &presets::SQRT), 1.0);
    }

    #[test]
    fn boilerplate_chain_is_skipped_under_ancestry_presets() {
        let html = format!(
            r#"<body><div class="sidebar">{}</div>{}</body>"#,
            para(500),
            para(141)
        );
        let doc = parse(&html);
        // Without ancestry checks both paragraphs score.
        assert!(density_score(&doc, &presets::SQRT) > 1.0);
        // With ancestry checks only the clean one remains.
        assert_eq!(density_score(&doc, &presets::SQRT_ANCESTRY), 1.0);
    }

    #[test]
    fn clustered_preset_scores_only_the_peak_column() {
        // Two blocks share column (0, 600); one sits in a narrower side
        // column. Only the peak pair scores.
        let main = format!(
            r#"<p style="left:0px;width:600px">{}</p>"#,
            "x".repeat(340)
        );
        let side = format!(
            r#"<p style="left:700px;width:200px">{}</p>"#,
            "y".repeat(900)
        );
        let doc = parse(&format!("<body>{main}{main}{side}</body>"));

        let expected = 2.0 * (340.0f64 - 140.0).powf(0.5);
        assert_eq!(density_score(&doc, &presets::SQRT_CLUSTERED), expected);
    }

    #[test]
    fn peak_ties_break_toward_first_column_seen() {
        let left = format!(r#"<p style="left:0px;width:400px">{}</p>"#, "a".repeat(200));
        let right = format!(r#"<p style="left:500px;width:400px">{}</p>"#, "b".repeat(600));
        let doc = parse(&format!("<body>{left}{right}</body>"));

        let peak = peak_blocks(&doc, &presets::SQRT_CLUSTERED);
        assert_eq!(peak.len(), 1);
        let text = Selection::from(peak[0]).text();
        assert!(text.starts_with('a'));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let doc = parse(&format!(
            "<body>{}{}{}</body>",
            para(200),
            para(300),
            para(977)
        ));
        let first = density_score(&doc, &presets::SQRT);
        let second = density_score(&doc, &presets::SQRT);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn highlight_appends_to_existing_style() {
        let doc = parse(r#"<body><p style="width:600px">text</p></body>"#);
        let nodes: Vec<_> = doc.select("p").nodes().to_vec();
        highlight(&nodes);

        let style = dom::get_attribute(&doc.select("p"), "style").unwrap_or_default();
        assert!(style.contains("width:600px"));
        assert!(style.contains("border: 1px solid red"));
    }
}

//! Structural container counting and area signals.
//!
//! Each structural category (sections, articles, heuristically-named
//! entries) yields raw and leaf-only counts, eligibility-filtered counts,
//! and two area signals over the leaf set: the largest container's share of
//! the page and its share of the category's summed area.

use crate::candidate;
use crate::dom::{NodeRef, Selection};
use crate::layout;

/// Sentinel recorded for the area signals of an empty category. Deliberately
/// outside the normal `[0, 1]` range so a downstream consumer can tell "no
/// candidates" apart from "one dominant candidate" (1.0) and "many equal
/// candidates" (small).
pub const EMPTY_CATEGORY_SENTINEL: f64 = 2.0;

/// Signals of one structural category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySignals {
    /// All matches under the root.
    pub count: usize,
    /// Matches containing no further match of the same selector.
    pub leaf_count: usize,
    /// Leaf matches passing eligibility over the ancestry chain.
    pub eligible_count: usize,
    /// Same, with tag names composed into the identity strings.
    pub eligible_tagged_count: usize,
    /// Largest leaf container area as a fraction of the page area.
    pub largest_area: f64,
    /// Largest leaf container area over the summed leaf area.
    pub largest_ratio: f64,
}

/// Matches under `root` that contain no further match of the same selector.
///
/// Nested same-category wrappers would otherwise count twice; only the
/// innermost container of each nest remains.
#[must_use]
pub fn select_leaf<'a>(root: &Selection<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .filter(|node| Selection::from(**node).select(selector).nodes().is_empty())
        .copied()
        .collect()
}

/// Largest-area fraction of the page.
///
/// `2.0` for an empty category; `0.0` for a zero-area page.
fn largest_area_fraction(areas: &[i64], page_extent: (i64, i64)) -> f64 {
    let Some(largest) = areas.iter().max() else {
        return EMPTY_CATEGORY_SENTINEL;
    };
    let page_area = page_extent.0 * page_extent.1;
    if page_area == 0 {
        return 0.0;
    }
    *largest as f64 / page_area as f64
}

/// Largest-area share of the category total.
///
/// `2.0` for an empty category; `0.0` when every container has zero area.
fn largest_area_ratio(areas: &[i64]) -> f64 {
    let Some(largest) = areas.iter().max() else {
        return EMPTY_CATEGORY_SENTINEL;
    };
    let total: i64 = areas.iter().sum();
    if total == 0 {
        return 0.0;
    }
    *largest as f64 / total as f64
}

/// Compute every signal of one structural category.
#[must_use]
pub fn category_signals(
    root: &Selection<'_>,
    selector: &str,
    page_extent: (i64, i64),
) -> CategorySignals {
    let count = root.select(selector).nodes().len();
    let leaves = select_leaf(root, selector);
    let areas: Vec<i64> = leaves
        .iter()
        .map(|node| layout::node_box(&Selection::from(*node)).area())
        .collect();

    let (eligible_count, eligible_tagged_count) = match root.nodes().first() {
        Some(root_node) => (
            candidate::count_eligible(&leaves, root_node, true, false),
            candidate::count_eligible(&leaves, root_node, true, true),
        ),
        None => (0, 0),
    };

    CategorySignals {
        count,
        leaf_count: leaves.len(),
        eligible_count,
        eligible_tagged_count,
        largest_area: largest_area_fraction(&areas, page_extent),
        largest_ratio: largest_area_ratio(&areas),
    }
}

//! Candidate eligibility via ancestry keyword scoring.
//!
//! Each node is judged by the identity strings of its ancestry chain: element
//! id, optionally the tag name, and the class string when the element carries
//! few enough classes to be meaningful. Two keyword classes score the chain
//! independently; a single content hit overrides any number of boilerplate
//! hits.

use regex::Regex;

use crate::dom::{self, NodeRef, Selection, MAX_ANCESTRY};
use crate::patterns::{MAYBE_CANDIDATES, UNLIKELY_CANDIDATES};

/// Class strings with more tokens than this are left out of the identity
/// string. Utility-class-heavy markup would otherwise hit keyword classes on
/// nearly every element.
const MAX_COMPOSED_CLASSES: usize = 5;

/// Compose the identity string a keyword class is matched against.
fn identity_string(sel: &Selection, check_tag_name: bool) -> String {
    let mut identity = dom::id(sel);
    if check_tag_name {
        identity.push(' ');
        identity.push_str(&dom::tag_name(sel).unwrap_or_default());
    }
    if dom::class_tokens(sel).len() <= MAX_COMPOSED_CLASSES {
        identity.push(' ');
        identity.push_str(&dom::class_name(sel));
    }
    identity
}

/// Score a node's ancestry chain against one keyword class.
///
/// Walks from `node` upward to (but excluding) `root`, accumulating one point
/// per element whose identity string matches. With `check_parents` false only
/// the starting node is examined. The walk stops at `root` and at
/// [`MAX_ANCESTRY`], so it terminates on detached or pathological chains.
#[must_use]
pub fn match_score(
    node: &NodeRef,
    root: &NodeRef,
    keywords: &Regex,
    check_parents: bool,
    check_tag_name: bool,
) -> u32 {
    let mut score = 0;
    let mut current = Some(*node);
    let mut steps = 0;
    while let Some(n) = current {
        if n.id == root.id || steps >= MAX_ANCESTRY {
            break;
        }
        if n.is_element() && keywords.is_match(&identity_string(&Selection::from(n), check_tag_name)) {
            score += 1;
        }
        if !check_parents {
            break;
        }
        steps += 1;
        current = n.parent();
    }
    score
}

/// Does the parent chain of `node` reach `root`?
fn reaches_root(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = Some(*node);
    let mut steps = 0;
    while let Some(n) = current {
        if n.id == root.id {
            return true;
        }
        if steps >= MAX_ANCESTRY {
            break;
        }
        steps += 1;
        current = n.parent();
    }
    false
}

/// Decide whether a node may contribute to content scoring.
///
/// A node is rejected only when its unlikely-score is positive and its
/// maybe-candidate score is zero: any positive content signal on the chain
/// overrides boilerplate signals. A node whose chain never reaches `root`
/// carries no usable ancestry signal and is treated as eligible.
#[must_use]
pub fn is_candidate_eligible(
    node: &NodeRef,
    root: &NodeRef,
    check_parents: bool,
    check_tag_name: bool,
) -> bool {
    if !reaches_root(node, root) {
        return true;
    }
    let neg_score = match_score(node, root, &UNLIKELY_CANDIDATES, check_parents, check_tag_name);
    if neg_score == 0 {
        return true;
    }
    let pos_score = match_score(node, root, &MAYBE_CANDIDATES, check_parents, check_tag_name);
    pos_score > 0
}

/// Count the nodes in a slice that pass [`is_candidate_eligible`].
#[must_use]
pub fn count_eligible(
    nodes: &[NodeRef],
    root: &NodeRef,
    check_parents: bool,
    check_tag_name: bool,
) -> usize {
    nodes
        .iter()
        .filter(|node| is_candidate_eligible(node, root, check_parents, check_tag_name))
        .count()
}

//! Layout snapshot reading.
//!
//! A static snapshot has no layout engine, so geometry and visibility follow a
//! serialization convention: the capturing harness writes boxes into inline
//! `style` declarations (`left`/`width`/`height` in px, falling back to the
//! `width`/`height` element attributes) and marks hidden elements the way the
//! live page did (`display:none`, `visibility:hidden`, `opacity:0`, the
//! `hidden` attribute, or an explicit zero-size box). Absent layout data reads
//! as a zero box and carries no visibility penalty.

use crate::dom::{self, Document, NodeRef, Selection, MAX_ANCESTRY};

/// Bounding box of a node in device-independent pixels.
///
/// Only the horizontal offset and the size matter to the scoring engine;
/// vertical position never participates in a signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeBox {
    pub left: i64,
    pub width: i64,
    pub height: i64,
}

impl NodeBox {
    /// Pixel area of the box.
    #[inline]
    #[must_use]
    pub fn area(&self) -> i64 {
        self.width * self.height
    }
}

/// Look up one property in an inline `style` attribute.
fn style_value(sel: &Selection, property: &str) -> Option<String> {
    let style = dom::get_attribute(sel, "style")?;
    for declaration in style.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case(property) {
            return Some(value.trim().to_string());
        }
    }
    None
}

/// Parse a pixel length, rounded to an integer. Accepts bare numbers too,
/// since the `width`/`height` attributes carry no unit.
fn parse_px(value: &str) -> Option<i64> {
    let number = value.trim().trim_end_matches("px").trim();
    let parsed: f64 = number.parse().ok()?;
    if parsed.is_finite() {
        Some(parsed.round() as i64)
    } else {
        None
    }
}

/// Read one box dimension: inline style first, then the plain attribute.
fn dimension(sel: &Selection, property: &str) -> Option<i64> {
    style_value(sel, property)
        .as_deref()
        .and_then(parse_px)
        .or_else(|| dom::get_attribute(sel, property).as_deref().and_then(parse_px))
}

/// Read a node's box from the snapshot. Absent values are 0.
#[must_use]
pub fn node_box(sel: &Selection) -> NodeBox {
    NodeBox {
        left: style_value(sel, "left").as_deref().and_then(parse_px).unwrap_or(0),
        width: dimension(sel, "width").unwrap_or(0),
        height: dimension(sel, "height").unwrap_or(0),
    }
}

/// Does this element itself carry a hidden marker?
fn has_hidden_marker(sel: &Selection) -> bool {
    if dom::has_attribute(sel, "hidden") {
        return true;
    }
    if let Some(display) = style_value(sel, "display") {
        if display.eq_ignore_ascii_case("none") {
            return true;
        }
    }
    if let Some(visibility) = style_value(sel, "visibility") {
        if visibility.eq_ignore_ascii_case("hidden") {
            return true;
        }
    }
    if let Some(opacity) = style_value(sel, "opacity") {
        if opacity.trim().parse::<f64>().is_ok_and(|alpha| alpha == 0.0) {
            return true;
        }
    }
    // An explicitly serialized zero-size box. Both dimensions must be
    // declared: a missing measurement is no signal.
    let declared_zero = |property| {
        style_value(sel, property)
            .as_deref()
            .and_then(parse_px)
            .is_some_and(|px| px == 0)
    };
    declared_zero("width") && declared_zero("height")
}

/// Effective visibility: no hidden marker on the node or any ancestor.
///
/// Bounded at [`MAX_ANCESTRY`], so detached or pathological chains terminate.
#[must_use]
pub fn is_visible(node: &NodeRef) -> bool {
    let mut current = Some(*node);
    let mut steps = 0;
    while let Some(n) = current {
        if steps >= MAX_ANCESTRY {
            break;
        }
        if n.is_element() && has_hidden_marker(&Selection::from(n)) {
            return false;
        }
        steps += 1;
        current = n.parent();
    }
    true
}

/// Count the visible nodes in a slice.
#[must_use]
pub fn count_visible(nodes: &[NodeRef]) -> usize {
    nodes.iter().filter(|node| is_visible(node)).count()
}

/// Scrollable page extent: the body box, `(width, height)`.
///
/// Both read 0 on an unrendered or malformed snapshot; every consumer of the
/// extent guards the zero case.
#[must_use]
pub fn page_extent(doc: &Document) -> (i64, i64) {
    let body = dom::body(doc);
    if body.nodes().is_empty() {
        return (0, 0);
    }
    let bounds = node_box(&body);
    (bounds.width, bounds.height)
}

/// Concatenated visible text under `root`, in document order.
///
/// Text inside script/style/noscript or under any hidden element is skipped;
/// pieces are whitespace-trimmed and joined with single spaces. This is the
/// snapshot approximation of rendered text, a payload signal rather than a
/// rendering contract.
#[must_use]
pub fn visible_text(root: &Selection) -> String {
    let Some(root_node) = root.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root_node.descendants() {
        if !node.is_text() {
            continue;
        }
        if text_node_hidden(&node, root_node) {
            continue;
        }
        let text = node.text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(trimmed);
    }
    out
}

/// Is a text node hidden by any element between it and `root` (inclusive of
/// non-rendered containers)?
fn text_node_hidden(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = node.parent();
    let mut steps = 0;
    while let Some(ancestor) = current {
        if steps >= MAX_ANCESTRY {
            break;
        }
        if ancestor.is_element() {
            if let Some(tag) = ancestor.node_name() {
                if tag.eq_ignore_ascii_case("script")
                    || tag.eq_ignore_ascii_case("style")
                    || tag.eq_ignore_ascii_case("noscript")
                {
                    return true;
                }
            }
            if has_hidden_marker(&Selection::from(ancestor)) {
                return true;
            }
        }
        if ancestor.id == root.id {
            break;
        }
        steps += 1;
        current = ancestor.parent();
    }
    false
}

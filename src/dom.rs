//! DOM access adapter.
//!
//! Thin wrappers over `dom_query` giving the scoring modules a consistent,
//! minimal surface: identity strings, class tokens, text payloads, and bounded
//! upward walks. The document handle is always passed in explicitly; nothing
//! in the crate reaches for an ambient "current document".

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Ceiling on upward walks. A well-formed tree never gets near this; a
/// pathological parent chain terminates here instead of spinning.
pub const MAX_ANCESTRY: usize = 512;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Select the document body.
#[inline]
#[must_use]
pub fn body(doc: &Document) -> Selection<'_> {
    doc.select("body")
}

/// Get element ID attribute (empty if absent).
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    sel.attr("id").map(|s| s.to_string()).unwrap_or_default()
}

/// Get element class attribute (empty if absent).
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> String {
    sel.attr("class").map(|s| s.to_string()).unwrap_or_default()
}

/// Get the ordered class token list.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    class_name(sel)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(node_tag_name)
}

/// Get a node's tag name (lowercase), if it is an element.
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Test whether `node` sits inside an element with the given tag name,
/// walking upward to (and excluding) `root`.
///
/// The walk is bounded at `root` and at [`MAX_ANCESTRY`], so it terminates
/// even when `node` belongs to a detached subtree.
#[must_use]
pub fn is_inside_tag(node: &NodeRef, root: &NodeRef, tag: &str) -> bool {
    let mut current = node.parent();
    let mut steps = 0;
    while let Some(ancestor) = current {
        if ancestor.id == root.id || steps >= MAX_ANCESTRY {
            break;
        }
        if let Some(name) = ancestor.node_name() {
            if name.eq_ignore_ascii_case(tag) {
                return true;
            }
        }
        steps += 1;
        current = ancestor.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tokens_split_on_whitespace() {
        let doc = parse(r#"<div class="  a b   c "></div>"#);
        let div = doc.select("div");
        assert_eq!(class_tokens(&div), vec!["a", "b", "c"]);
    }

    #[test]
    fn id_defaults_to_empty() {
        let doc = parse("<div></div>");
        let div = doc.select("div");
        assert_eq!(id(&div), "");
    }

    #[test]
    fn is_inside_tag_finds_list_ancestor() {
        let doc = parse("<body><ul><li><p>item text</p></li></ul><p>free</p></body>");
        let body_sel = body(&doc);
        let root = body_sel.nodes()[0];

        let paragraphs = doc.select("p");
        let nodes = paragraphs.nodes();
        assert!(is_inside_tag(&nodes[0], &root, "li"));
        assert!(!is_inside_tag(&nodes[1], &root, "li"));
    }

    #[test]
    fn is_inside_tag_stops_at_root() {
        // The body sits above the supplied root; the walk must stop at the
        // root and never see it.
        let doc = parse("<body><div><p>text</p></div></body>");
        let div = doc.select("div");
        let root = div.nodes()[0];
        let p = doc.select("p");
        assert!(!is_inside_tag(&p.nodes()[0], &root, "body"));
    }
}

//! Feature assembly.
//!
//! One pass per collaborator — metadata, structural counters, density
//! presets, raw counts — merged into the flat feature map. Assembly is pure
//! aggregation: every field computes from its own local inputs and degrades
//! to a safe default on missing signal, so the map always comes back whole.

use url::Url;

use crate::density::{self, presets};
use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::features::{FeatureMap, FeatureValue};
use crate::layout;
use crate::metadata;
use crate::options::Options;
use crate::patterns;
use crate::structural::{self, CategorySignals};

/// Count matches under a root.
fn count(root: &Selection, selector: &str) -> FeatureValue {
    root.select(selector).nodes().len().into()
}

/// Count visible matches under a root.
fn count_visible(root: &Selection, selector: &str) -> FeatureValue {
    layout::count_visible(root.select(selector).nodes()).into()
}

/// The caller-supplied page URL, normalized when parseable, raw otherwise.
fn page_url(options: &Options) -> String {
    match &options.url {
        Some(raw) => Url::parse(raw).map_or_else(|_| raw.clone(), |url| url.to_string()),
        None => String::new(),
    }
}

/// The document title, empty when absent.
fn document_title(doc: &Document) -> String {
    doc.select("title").text().trim().to_string()
}

/// Merge one structural category into the map under its six keys.
fn insert_category(
    map: &mut FeatureMap,
    keys: [&'static str; 6],
    signals: &CategorySignals,
) {
    let [num, num_leaf, num_eligible, num_tagged, largest, ratio] = keys;
    map.insert(num, signals.count.into());
    map.insert(num_leaf, signals.leaf_count.into());
    map.insert(num_eligible, signals.eligible_count.into());
    map.insert(num_tagged, signals.eligible_tagged_count.into());
    map.insert(largest, signals.largest_area.into());
    map.insert(ratio, signals.largest_ratio.into());
}

/// Compute the full feature map of a parsed document.
///
/// Pure function of the snapshot: repeated calls on an unchanged document
/// yield identical maps.
pub fn extract_features_from_document(doc: &Document, options: &Options) -> Result<FeatureMap> {
    let body = dom::body(doc);
    if body.nodes().is_empty() {
        return Err(Error::MissingBody);
    }

    let page = layout::page_extent(doc);
    let mut map = FeatureMap::new();

    // Structured-data and card metadata.
    let tally = metadata::type_tally(doc);
    let joined = tally.joined_names();
    let twitter = metadata::twitter_card_type(doc);

    map.insert("opengraph", metadata::has_og_article(doc).into());
    map.insert("schemaOrgArticle", patterns::TYPE_ARTICLE.is_match(&joined).into());
    map.insert("schemaOrgNews", patterns::TYPE_NEWS.is_match(&joined).into());
    map.insert("schemaOrgBlog", patterns::TYPE_BLOG.is_match(&joined).into());
    map.insert("schemaOrgPosting", patterns::TYPE_POSTING.is_match(&joined).into());
    map.insert("schemaOrgAllArticle", patterns::TYPE_ANY_ARTICLE.is_match(&joined).into());
    map.insert("schemaOrgPerson", patterns::TYPE_PERSON.is_match(&joined).into());
    map.insert("schemaOrgImage", patterns::TYPE_IMAGE.is_match(&joined).into());
    map.insert("schemaOrgOrg", patterns::TYPE_ORGANIZATION.is_match(&joined).into());
    map.insert("schemaOrgCount", tally.total().into());
    map.insert("schemaOrgLength", tally.distinct().into());
    map.insert("twitterType", twitter.clone().into());
    map.insert("twitterSummary", twitter.contains("summary").into());
    map.insert("twitterApp", twitter.contains("app").into());

    // Page identity.
    map.insert("url", page_url(options).into());
    map.insert("title", document_title(doc).into());

    // Raw structural counts.
    map.insert("numElements", count(&body, "*"));
    map.insert("numAnchors", count(&body, "a"));
    map.insert("numForms", count(&body, "form"));
    map.insert("numTextInput", count(&body, "input[type=\"text\"]"));
    map.insert("numPasswordInput", count(&body, "input[type=\"password\"]"));
    map.insert("numPPRE", count(&body, patterns::TEXT_BLOCK_SELECTOR));
    map.insert("numBr", count(&body, "br"));
    map.insert("numH1", count(&body, "h1"));
    map.insert("numH2", count(&body, "h2"));
    map.insert("numH3", count(&body, "h3"));
    map.insert("numH4", count(&body, "h4"));

    // Container categories.
    insert_category(
        &mut map,
        ["numSection", "numSectionLeaf", "numSection2", "numSection3", "largestSection", "largestSectionRatio"],
        &structural::category_signals(&body, patterns::SECTION_SELECTOR, page),
    );
    insert_category(
        &mut map,
        ["numArticle", "numArticleLeaf", "numArticle2", "numArticle3", "largestArticle", "largestArticleRatio"],
        &structural::category_signals(&body, patterns::ARTICLE_SELECTOR, page),
    );
    insert_category(
        &mut map,
        ["numEntries", "numEntriesLeaf", "numEntries2", "numEntries3", "largestEntry", "largestEntryRatio"],
        &structural::category_signals(&body, patterns::ENTRY_SELECTOR, page),
    );

    // Text and markup payloads.
    map.insert("innerText", layout::visible_text(&body).into());
    map.insert("textContent", dom::text_content(&body).to_string().into());
    map.insert("innerHTML", dom::inner_html(&body).to_string().into());

    // Density presets.
    for (key, config) in presets::ALL {
        map.insert(key, density::density_score(doc, &config).into());
    }

    // Visibility counts.
    map.insert("visibleElements", count_visible(&body, "*"));
    map.insert("visibleAnchors", count_visible(&body, "a"));
    map.insert("visiblePPRE", count_visible(&body, patterns::TEXT_BLOCK_SELECTOR));

    // Page geometry.
    map.insert("bodyWidth", page.0.into());
    map.insert("bodyHeight", page.1.into());

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn page_url_normalizes_when_parseable() {
        let options = Options { url: Some("HTTPS://Example.COM/a?q=1".to_string()) };
        assert_eq!(page_url(&options), "https://example.com/a?q=1");

        let raw = Options { url: Some("not a url".to_string()) };
        assert_eq!(page_url(&raw), "not a url");

        assert_eq!(page_url(&Options::default()), "");
    }

    #[test]
    fn degenerate_markup_still_assembles() {
        // The parser synthesizes a body even for head-only markup; assembly
        // must come back whole with every signal at its safe default.
        let doc = parse("<head><title>only a head</title></head>");
        let map = match extract_features_from_document(&doc, &Options::default()) {
            Ok(map) => map,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(map.get("numElements"), Some(&FeatureValue::Int(0)));
        assert_eq!(map.get("mozScore"), Some(&FeatureValue::Float(0.0)));
        assert_eq!(map.get("largestSection"), Some(&FeatureValue::Float(2.0)));
    }

    #[test]
    fn every_fixed_key_is_present() {
        let doc = parse("<body><p>minimal</p></body>");
        let map = match extract_features_from_document(&doc, &Options::default()) {
            Ok(map) => map,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(map.len(), 60);
        for key in ["mozScore", "numElements", "largestEntryRatio", "twitterType", "bodyHeight"] {
            assert!(map.contains_key(key), "missing {key}");
        }
    }
}

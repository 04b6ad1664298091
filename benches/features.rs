//! Performance benchmarks for page-signals.
//!
//! Run with: `cargo bench`
//!
//! Covers both page shapes the downstream classifier cares about: a single
//! article page and a link-heavy listing page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use page_signals::{extract_features, extract_features_with_options, Options};

const ARTICLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <meta property="og:type" content="article">
    <meta name="twitter:card" content="summary">
</head>
<body style="width:1280px;height:4200px">
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article itemscope itemtype="https://schema.org/NewsArticle" style="width:800px;height:3600px">
        <h1>Sample Article Title</h1>
        <p style="left:240px;width:800px">This is the first paragraph of the article. It contains
        enough meaningful content to clear the density cutoff, flowing across several sentences
        the way a real article body would, with no navigation chrome in sight anywhere at all.</p>
        <p style="left:240px;width:800px">Here is a second paragraph with more content in the
        same visual column as the first. Extraction should reward this block as well, since it
        is long, visible, and carries no boilerplate ancestry on its chain whatsoever.</p>
        <p style="left:240px;width:800px">A third paragraph ensures the clustered presets find a
        clear peak column and the unclustered presets accumulate a meaningful aggregate score
        for benchmarking purposes across every configuration the crate publishes.</p>
    </article>
    <aside class="sidebar" style="width:300px;height:900px">
        <h3>Related Articles</h3>
        <ul>
            <li><a href="/1">Related article 1</a></li>
            <li><a href="/2">Related article 2</a></li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

const LISTING_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head><title>All Stories</title></head>
<body style="width:1280px;height:6000px">
    <section class="post-list">
        <div class="post"><h2><a href="/p/1">Story one</a></h2><p>Teaser one.</p></div>
        <div class="post"><h2><a href="/p/2">Story two</a></h2><p>Teaser two.</p></div>
        <div class="post"><h2><a href="/p/3">Story three</a></h2><p>Teaser three.</p></div>
        <div class="post"><h2><a href="/p/4">Story four</a></h2><p>Teaser four.</p></div>
        <div class="post"><h2><a href="/p/5">Story five</a></h2><p>Teaser five.</p></div>
    </section>
    <nav class="pagination"><a href="/page/2">Next</a></nav>
</body>
</html>
"#;

fn bench_article_page(c: &mut Criterion) {
    c.bench_function("extract_features_article", |b| {
        b.iter(|| extract_features(black_box(ARTICLE_HTML)));
    });
}

fn bench_listing_page(c: &mut Criterion) {
    c.bench_function("extract_features_listing", |b| {
        b.iter(|| extract_features(black_box(LISTING_HTML)));
    });
}

fn bench_with_url(c: &mut Criterion) {
    let options = Options { url: Some("https://example.com/story/1".to_string()) };

    c.bench_function("extract_features_with_options", |b| {
        b.iter(|| extract_features_with_options(black_box(ARTICLE_HTML), black_box(&options)));
    });
}

criterion_group!(benches, bench_article_page, bench_listing_page, bench_with_url);
criterion_main!(benches);

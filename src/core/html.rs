// src/core/html.rs
use std::sync::LazyLock;

use scraper::{Html, Selector};

static LINK_TARGETS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href], link[href]").expect("static selector"));
static ANCHOR_TARGETS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// `href` of every `<a>` and `<link>`, document order, trimmed, empties dropped.
pub fn link_targets(doc: &str) -> Vec<String> {
    hrefs(doc, &LINK_TARGETS)
}

/// `href` of every `<a>`, document order, trimmed, empties dropped.
pub fn anchor_targets(doc: &str) -> Vec<String> {
    hrefs(doc, &ANCHOR_TARGETS)
}

fn hrefs(doc: &str, selector: &Selector) -> Vec<String> {
    let html = Html::parse_document(doc);
    html.select(selector)
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

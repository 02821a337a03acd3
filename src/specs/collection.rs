// src/specs/collection.rs
//! Product handles from the `/collections/all` listing page.
//!
//! Shopify themes link products as `/products/{handle}` or
//! `/collections/{c}/products/{handle}`; both are accepted. Hrefs are
//! resolved against the store base URL, so absolute and relative links to
//! the same product collapse to one handle. Links to other hosts are ignored.

use url::Url;

use crate::core::html::anchor_targets;

/// First `limit` distinct product handles, in document order.
pub fn product_handles(doc: &str, base_url: &str, limit: usize) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else { return Vec::new() };

    let mut out: Vec<String> = Vec::with_capacity(limit);
    for href in anchor_targets(doc) {
        if out.len() >= limit {
            break;
        }
        let Some(handle) = base
            .join(&href)
            .ok()
            .filter(|u| u.host_str() == base.host_str())
            .and_then(|u| handle_from_url(&u))
        else {
            continue;
        };
        if !out.contains(&handle) {
            out.push(handle);
        }
    }
    out
}

/// `…/products/{handle}[.json|.js]` → `handle`
fn handle_from_url(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    segments.find(|s| *s == "products")?;
    let raw = segments.next()?;
    let handle = raw
        .strip_suffix(".json")
        .or_else(|| raw.strip_suffix(".js"))
        .unwrap_or(raw);
    (!handle.is_empty()).then(|| handle.to_string())
}

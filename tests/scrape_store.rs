// tests/scrape_store.rs
//
// Per-store scraping against canned pages.
mod common;

use shop_scrape::data::{Product, Store};
use shop_scrape::scrape::{collect_store, find_contact, load_products};

use common::{FixtureFetcher, BLUE_MUG, COLLECTION, REACHABLE, reachable_store};

fn store(domain: &str) -> Store {
    Store::parse(domain).unwrap()
}

#[test]
fn no_email_anywhere_leaves_email_empty() {
    let fetcher = FixtureFetcher::new()
        .page("https://quiet.example.com/", r#"<a href="https://facebook.com/quiet">fb</a>"#)
        .page("https://quiet.example.com/pages/contact", "<p>Use the form below.</p>");

    let info = find_contact(&fetcher, &store("quiet.example.com"));
    assert_eq!(info.email, None);
    assert_eq!(info.facebook_url.as_deref(), Some("https://facebook.com/quiet"));
    assert_eq!(info.twitter_url, None);
    // Incomplete, so every candidate page was tried.
    assert_eq!(fetcher.requests().len(), 5);
}

#[test]
fn first_page_wins_per_field() {
    let fetcher = FixtureFetcher::new()
        .page("https://two.example.com/", "write to first@two.example.com")
        .page(
            "https://two.example.com/pages/about",
            r#"second@two.example.com <a href="https://twitter.com/two">t</a>"#,
        );

    let info = find_contact(&fetcher, &store("two.example.com"));
    assert_eq!(info.email.as_deref(), Some("first@two.example.com"));
    assert_eq!(info.twitter_url.as_deref(), Some("https://twitter.com/two"));
}

#[test]
fn missing_product_json_keeps_its_slot() {
    let products = load_products(&reachable_store(), &store(REACHABLE), 5);
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].title.as_deref(), Some("Blue Mug"));
    assert_eq!(products[1].title.as_deref(), Some("Red Cap"));
    assert_eq!(products[2], Product::default());
}

#[test]
fn limit_caps_product_requests() {
    let fetcher = FixtureFetcher::new()
        .page("https://cap.example.com/collections/all", COLLECTION)
        .page("https://cap.example.com/products/blue-mug.json", BLUE_MUG);

    let products = load_products(&fetcher, &store("cap.example.com"), 1);
    assert_eq!(products.len(), 1);
    assert_eq!(
        fetcher.requests(),
        vec![
            "https://cap.example.com/collections/all".to_string(),
            "https://cap.example.com/products/blue-mug.json".to_string(),
        ]
    );
}

#[test]
fn invalid_product_json_is_blank() {
    let fetcher = FixtureFetcher::new()
        .page("https://bad.example.com/collections/all", COLLECTION)
        .page("https://bad.example.com/products/blue-mug.json", "<html>not json</html>");

    let products = load_products(&fetcher, &store("bad.example.com"), 5);
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| *p == Product::default()));
}

#[test]
fn unreachable_store_is_empty_row() {
    let row = collect_store(&FixtureFetcher::new(), &store("gone.example.com"));
    assert_eq!(row.domain, "gone.example.com");
    assert!(row.contact.email.is_none());
    assert!(row.products.is_empty());
}

// tests/common/mod.rs
//
// In-memory fetcher and fixture helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use shop_scrape::config::options::AppOptions;
use shop_scrape::core::net::Fetch;
use shop_scrape::error::FetchError;

pub const HOME: &str = include_str!("../fixtures/home.html");
pub const ABOUT: &str = include_str!("../fixtures/about.html");
pub const CONTACT: &str = include_str!("../fixtures/contact.html");
pub const COLLECTION: &str = include_str!("../fixtures/collection.html");
pub const BLUE_MUG: &str = include_str!("../fixtures/blue-mug.json");
pub const RED_CAP: &str = include_str!("../fixtures/red-cap.json");

pub const REACHABLE: &str = "reachable.example.com";
pub const UNREACHABLE: &str = "unreachable.example.com";

/// Serves canned bodies by exact URL; anything else is unavailable.
/// Records every requested URL.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for FixtureFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable { url: url.to_string() })
    }
}

/// The reachable store: about page 404s, contact-us should never be needed,
/// tote-bag JSON is missing.
pub fn reachable_store() -> FixtureFetcher {
    let at = |path: &str| format!("https://{REACHABLE}{path}");
    FixtureFetcher::new()
        .page(&at("/"), HOME)
        .page(&at("/pages/about-us"), ABOUT)
        .page(&at("/pages/contact"), CONTACT)
        .page(&at("/pages/contact-us"), CONTACT)
        .page(&at("/collections/all"), COLLECTION)
        .page(&at("/products/blue-mug.json"), BLUE_MUG)
        .page(&at("/products/red-cap.json"), RED_CAP)
}

/// The report line expected for the reachable store.
pub fn reachable_line() -> String {
    [
        REACHABLE,
        "hello@reachable.example.com",
        "https://www.facebook.com/reachablegoods",
        "https://twitter.com/reachablegoods",
        "Blue Mug",
        "https://cdn.shopify.com/s/files/1/blue-mug.jpg",
        "Red Cap",
        "",
        "", "", "", "", "", "",
    ]
    .join(",")
}

/// Line for a store nothing could be fetched from.
pub fn empty_line(domain: &str) -> String {
    format!("{domain}{}", ",".repeat(13))
}

pub const HEADER_LINE: &str = "domain,email,facebook,twitter,\
product_title_1,product_image_1,product_title_2,product_image_2,\
product_title_3,product_image_3,product_title_4,product_image_4,\
product_title_5,product_image_5";

pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, contents).unwrap();
    p
}

/// Options for a fixture run: no pause between stores.
pub fn options(input: &Path, output: &Path) -> AppOptions {
    let mut opts = AppOptions::new(input, output);
    opts.scrape.pause_ms = 0;
    opts
}

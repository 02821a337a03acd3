// src/config/consts.rs

// Pages checked for contact info, in priority order
pub const CANDIDATE_PAGES: &[&str] = &[
    "/",
    "/pages/about",
    "/pages/about-us",
    "/pages/contact",
    "/pages/contact-us",
];

// Product listing and per-product payload
pub const COLLECTION_PATH: &str = "/collections/all";
pub const PRODUCT_JSON_TMPL: &str = "/products/{handle}.json";
pub const PRODUCT_LIMIT: usize = 5;

// Net config
pub const SCHEME: &str = "https";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const MAX_TIMEOUT_SECS: u64 = 3600;
pub const MAX_REDIRECTS: usize = 5;
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Concurrency
pub const WORKERS: usize = 1;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Logging
pub const DEFAULT_LOG_FILE: &str = "error.log";

// src/specs/mod.rs
//! # Page-reading specs
//!
//! Each spec knows how to read one kind of store page and nothing else:
//!
//! - `contact`    – email and social profile links from content pages.
//! - `collection` – product handles from `/collections/all`.
//! - `product`    – title and featured image from `/products/{handle}.json`.
//!
//! Specs are pure: they take a fetched body and return extracted values.
//! Fetching, ordering across pages and failure handling live in `scrape`.
//!
//! ```text
//! runner → scrape::collect_stores → scrape::collect_store → specs::<page>
//! ```
//!
//! All specs are testable offline against captured fixtures.
pub mod collection;
pub mod contact;
pub mod product;

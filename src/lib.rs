// src/lib.rs
//! Scrape Shopify stores for contact links and featured products.
//!
//! Pipeline: `file::load_store_domains` → `scrape::collect_stores`
//! (`core::net` + `specs`) → `file::write_report`, driven by `runner`.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

// src/data.rs
//
// Per-run data model. Everything here is built fresh from the input file
// and network responses; nothing is cached between runs.
//
// - Store:       one input domain, normalized.
// - ContactInfo: first email / facebook / twitter found for a store.
// - Product:     title + featured image of one product handle.
// - ReportRow:   one flattened output line.

use crate::config::consts::{PRODUCT_LIMIT, SCHEME};
use crate::core::sanitize::normalize_domain;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    pub domain: String,
}

impl Store {
    /// Parse one raw input cell. `None` for values that cannot be a domain.
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_domain(raw).map(|domain| Self { domain })
    }

    /// `https://{domain}`
    pub fn base_url(&self) -> String {
        format!("{SCHEME}://{}", self.domain)
    }

    /// Absolute URL for a path on this store. `path` starts with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
}

impl ContactInfo {
    /// All three fields known; further candidate pages can be skipped.
    pub fn is_complete(&self) -> bool {
        self.email.is_some() && self.facebook_url.is_some() && self.twitter_url.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Product {
    pub title: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub domain: String,
    pub contact: ContactInfo,
    pub products: Vec<Product>,
}

impl ReportRow {
    /// Row for a store nothing could be learned about.
    pub fn empty(store: &Store) -> Self {
        Self {
            domain: store.domain.clone(),
            contact: ContactInfo::default(),
            products: Vec::new(),
        }
    }

    /// Flatten into exactly `report_header().len()` cells.
    /// Products past `PRODUCT_LIMIT` are dropped; missing ones are blank.
    pub fn to_record(&self) -> Vec<String> {
        let cell = |v: &Option<String>| v.clone().unwrap_or_default();

        let mut out = Vec::with_capacity(4 + 2 * PRODUCT_LIMIT);
        out.push(self.domain.clone());
        out.push(cell(&self.contact.email));
        out.push(cell(&self.contact.facebook_url));
        out.push(cell(&self.contact.twitter_url));

        for i in 0..PRODUCT_LIMIT {
            match self.products.get(i) {
                Some(p) => {
                    out.push(cell(&p.title));
                    out.push(cell(&p.image_url));
                }
                None => {
                    out.push(String::new());
                    out.push(String::new());
                }
            }
        }
        out
    }

    /// Nothing was learned: no contact field and no product data.
    pub fn is_empty(&self) -> bool {
        self.contact == ContactInfo::default() && self.products_found() == 0
    }

    /// Number of product slots that carry at least a title or an image.
    pub fn products_found(&self) -> usize {
        self.products
            .iter()
            .filter(|p| p.title.is_some() || p.image_url.is_some())
            .count()
    }
}

/// Fixed report header:
/// `domain,email,facebook,twitter,product_title_1,product_image_1,…,product_image_5`
pub fn report_header() -> Vec<String> {
    let mut h: Vec<String> = ["domain", "email", "facebook", "twitter"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for i in 1..=PRODUCT_LIMIT {
        h.push(format!("product_title_{i}"));
        h.push(format!("product_image_{i}"));
    }
    h
}

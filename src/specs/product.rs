// src/specs/product.rs
//! Product details from `/products/{handle}.json`.
//!
//! Only two fields matter: `product.title` and the featured image, which is
//! `product.images[0].src` with `product.image.src` as fallback.

use serde::Deserialize;

use crate::data::Product;
use crate::error::ParseError;

#[derive(Debug, Deserialize)]
struct Envelope {
    product: Option<ProductPayload>,
}

#[derive(Debug, Deserialize)]
struct ProductPayload {
    title: Option<String>,
    #[serde(default)]
    images: Vec<ImagePayload>,
    image: Option<ImagePayload>,
}

#[derive(Debug, Deserialize)]
struct ImagePayload {
    src: Option<String>,
}

pub fn parse_product(text: &str) -> Result<Product, ParseError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    let payload = envelope.product.ok_or(ParseError::MissingProduct)?;

    let image_url = payload
        .images
        .into_iter()
        .next()
        .and_then(|img| img.src)
        .or_else(|| payload.image.and_then(|img| img.src))
        .filter(|s| !s.is_empty());

    Ok(Product {
        title: payload.title.filter(|s| !s.is_empty()),
        image_url,
    })
}

// src/specs/contact.rs
//! Contact extraction from store content pages (home, about, contact).
//!
//! - Email: first address-shaped match in the raw body. The body is scanned
//!   as text, so `mailto:` hrefs and visible addresses both count.
//! - Social: first `<a>`/`<link>` target whose host is facebook.com or
//!   twitter.com, ignoring share/intent endpoints.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::core::html::link_targets;
use crate::core::sanitize::{looks_like_image_name, trim_email};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+").expect("static pattern")
});

/// Paths that point at share widgets rather than a store's profile.
const SHARE_PREFIXES: &[&str] = &["/sharer", "/share", "/intent"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Facebook,
    Twitter,
}

impl Network {
    fn host(self) -> &'static str {
        match self {
            Network::Facebook => "facebook.com",
            Network::Twitter => "twitter.com",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

/// First email address in `text`, skipping asset names like `logo@2x.png`.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL
        .find_iter(text)
        .map(|m| trim_email(m.as_str()))
        .find(|e| has_dotted_host(e) && !looks_like_image_name(e))
        .map(str::to_string)
}

/// Trimming can leave `a@b` out of `a@b..`; the host needs a dot.
fn has_dotted_host(email: &str) -> bool {
    email.split_once('@').is_some_and(|(_, host)| host.contains('.'))
}

/// First profile link per network, in document order.
pub fn extract_social_links(doc: &str) -> SocialLinks {
    let mut out = SocialLinks::default();
    for target in link_targets(doc) {
        if out.facebook.is_some() && out.twitter.is_some() {
            break;
        }
        let Some((network, link)) = classify(&target) else { continue };
        let slot = match network {
            Network::Facebook => &mut out.facebook,
            Network::Twitter => &mut out.twitter,
        };
        if slot.is_none() {
            *slot = Some(link);
        }
    }
    out
}

/// Which network `href` is a profile link for, plus the link as reported.
pub fn classify(href: &str) -> Option<(Network, String)> {
    let link = if href.starts_with("//") { format!("https:{href}") } else { href.to_string() };
    let url = Url::parse(&link).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();
    let network = [Network::Facebook, Network::Twitter]
        .into_iter()
        .find(|n| host.contains(n.host()))?;

    let path = url.path();
    if path == "/" || SHARE_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return None;
    }
    Some((network, link))
}

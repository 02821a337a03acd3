// src/core/sanitize.rs

/// Normalize a raw input cell into a bare lowercase host.
///
/// `"  HTTPS://Shop.Example.com/collections/all "` → `"shop.example.com"`.
/// Returns `None` when nothing domain-like remains.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let mut s = raw.trim();
    for scheme in ["https://", "http://"] {
        if s.get(..scheme.len()).is_some_and(|head| head.eq_ignore_ascii_case(scheme)) {
            s = &s[scheme.len()..];
            break;
        }
    }
    let end = s.find(['/', '?', '#']).unwrap_or(s.len());
    let host = s[..end].trim_end_matches('.').to_ascii_lowercase();

    let valid = !host.is_empty()
        && host.contains('.')
        && !host.starts_with('.')
        && host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':'));
    valid.then_some(host)
}

/// Drop punctuation the address pattern tends to swallow at a sentence end.
pub fn trim_email(s: &str) -> &str {
    s.trim_end_matches(['.', '-'])
}

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];

/// `logo@2x.png` looks like an address but is an asset name.
pub fn looks_like_image_name(s: &str) -> bool {
    let lc = s.to_ascii_lowercase();
    lc.rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTS.contains(&ext))
}

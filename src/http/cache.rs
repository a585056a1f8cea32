//! Conditional request support
//!
//! `ETag` values are a hash of the body; a matching `If-None-Match` lets the
//! image route answer 304 without resending bytes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Cache-Control value sent with images
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=3600";

/// Quoted `ETag` for a body, e.g. `"9f86d081"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// True when `If-None-Match` lists `etag` or is `*`
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}

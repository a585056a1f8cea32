//! Raw image file serving
//!
//! Files are read from the configured image directory only. Names are
//! percent-decoded and any path resolving outside the directory is a 404.

use hyper::body::Bytes;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::router::RequestContext;
use crate::config::AppState;
use crate::http::{self, cache, mime, response, HttpResponse, RangeOutcome};
use crate::logger;

/// `GET /images/<filename>`
pub async fn serve_image(
    ctx: &RequestContext<'_>,
    state: &AppState,
    raw_name: &str,
) -> HttpResponse {
    let Ok(name) = urlencoding::decode(raw_name) else {
        return http::build_404_response();
    };
    let Some(file_path) = resolve_in_dir(&state.config.gallery.image_dir, &name) else {
        return http::build_404_response();
    };

    let data = match fs::read(&file_path).await {
        Ok(d) => Bytes::from(d),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read image '{}': {e}",
                file_path.display()
            ));
            return http::build_500_response();
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    let etag = cache::generate_etag(&data);
    if cache::etag_matches(ctx.if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let total_size = data.len();
    match http::resolve_range(ctx.range_header, total_size) {
        RangeOutcome::Partial(range) => response::build_partial_response(
            data.slice(range.start..=range.end),
            content_type,
            &etag,
            range,
            total_size,
            ctx.is_head,
        ),
        RangeOutcome::Unsatisfiable => http::build_416_response(total_size),
        RangeOutcome::Full => {
            response::build_image_response(data, content_type, &etag, ctx.is_head)
        }
    }
}

/// Resolve `name` to an existing regular file inside `dir`
fn resolve_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let relative = name.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }

    let base = match dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Image directory not accessible '{}': {e}",
                dir.display()
            ));
            return None;
        }
    };

    // Missing files are ordinary 404s, no logging
    let candidate = base.join(relative).canonicalize().ok()?;
    if !candidate.starts_with(&base) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {name} -> {}",
            candidate.display()
        ));
        return None;
    }

    candidate.is_file().then_some(candidate)
}

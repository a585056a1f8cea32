//! HTTP response building module
//!
//! Builders for every status the gallery sends. Builder failures are logged
//! and degrade to an empty response rather than panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::cache::IMAGE_CACHE_CONTROL;
use super::range::ByteRange;

pub type HttpResponse = Response<Full<Bytes>>;

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

fn body_unless_head(data: Bytes, is_head: bool) -> Full<Bytes> {
    if is_head {
        Full::new(Bytes::new())
    } else {
        Full::new(data)
    }
}

fn finish(
    builder: hyper::http::response::Builder,
    body: Full<Bytes>,
    label: &str,
) -> HttpResponse {
    builder.body(body).unwrap_or_else(|e| {
        log_build_error(label, &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Plain text response with the given status
pub fn build_text_response(status: StatusCode, text: &'static str) -> HttpResponse {
    finish(
        Response::builder()
            .status(status)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Content-Length", text.len()),
        Full::new(Bytes::from_static(text.as_bytes())),
        status.as_str(),
    )
}

/// Build 404 Not Found response
pub fn build_404_response() -> HttpResponse {
    build_text_response(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> HttpResponse {
    build_text_response(StatusCode::PAYLOAD_TOO_LARGE, "413 Payload Too Large")
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> HttpResponse {
    build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Allow", ALLOWED_METHODS),
        Full::new(Bytes::from_static(b"405 Method Not Allowed")),
        "405",
    )
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> HttpResponse {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", ALLOWED_METHODS);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type, Range")
            .header("Access-Control-Max-Age", "86400");
    }

    finish(builder, Full::new(Bytes::new()), "OPTIONS")
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: usize) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Content-Range", format!("bytes */{file_size}")),
        Full::new(Bytes::from_static(b"Range Not Satisfiable")),
        "416",
    )
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header("ETag", etag)
            .header("Cache-Control", IMAGE_CACHE_CONTROL),
        Full::new(Bytes::new()),
        "304",
    )
}

/// Liveness/readiness probe body
pub fn build_health_response(status: &'static str) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "text/plain")
            .header("Cache-Control", "no-store"),
        Full::new(Bytes::from_static(status.as_bytes())),
        "health",
    )
}

/// Build HTML page response
pub fn build_html_response(content: String, is_head: bool) -> HttpResponse {
    let content_length = content.len();
    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "text/html; charset=utf-8")
            .header("Content-Length", content_length)
            .header("Cache-Control", "no-store"),
        body_unless_head(Bytes::from(content), is_head),
        "HTML",
    )
}

/// Serialize `body` as JSON
pub fn json_response<T: Serialize>(status: StatusCode, body: &T, is_head: bool) -> HttpResponse {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return finish(
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .header("Content-Type", "application/json"),
                Full::new(Bytes::from_static(
                    br#"{"success":false,"message":"Internal server error"}"#,
                )),
                "500",
            );
        }
    };

    let content_length = json.len();
    finish(
        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .header("Content-Length", content_length),
        body_unless_head(Bytes::from(json), is_head),
        status.as_str(),
    )
}

/// Full image body with validators
pub fn build_image_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> HttpResponse {
    let content_length = data.len();
    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", content_type)
            .header("Content-Length", content_length)
            .header("Accept-Ranges", "bytes")
            .header("ETag", etag)
            .header("Cache-Control", IMAGE_CACHE_CONTROL)
            .header("X-Content-Type-Options", "nosniff"),
        body_unless_head(data, is_head),
        "200",
    )
}

/// Build 206 Partial Content response; `data` is the already-sliced range
pub fn build_partial_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    range: ByteRange,
    total_size: usize,
    is_head: bool,
) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::PARTIAL_CONTENT)
            .header("Content-Type", content_type)
            .header("Content-Length", range.content_length())
            .header(
                "Content-Range",
                format!("bytes {}-{}/{total_size}", range.start, range.end),
            )
            .header("Accept-Ranges", "bytes")
            .header("ETag", etag)
            .header("Cache-Control", IMAGE_CACHE_CONTROL)
            .header("X-Content-Type-Options", "nosniff"),
        body_unless_head(data, is_head),
        "206",
    )
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

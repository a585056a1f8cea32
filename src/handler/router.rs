//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method and body checks, route
//! dispatch, common headers, and access logging.

use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, HeaderValue};
use hyper::http::request::Parts;
use hyper::{Method, Request, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{api, images, page, upload};
use crate::config::AppState;
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};

const IMAGE_ROUTE_PREFIX: &str = "/images/";
const API_ROUTE_PREFIX: &str = "/api/";
pub const UPLOAD_PATH: &str = "/upload";

/// Per-request values shared by the route handlers
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub method: &'a Method,
    pub is_head: bool,
    /// Visitor identity: `X-Forwarded-For` verbatim, else the peer IP
    pub client_addr: String,
    pub if_none_match: Option<&'a str>,
    pub range_header: Option<&'a str>,
    pub content_type: Option<&'a str>,
}

/// Main entry point for HTTP request handling
///
/// Only `POST /upload` reads the body; every other route drops it unread.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    let ctx = RequestContext {
        path: parts.uri.path(),
        method: &parts.method,
        is_head: parts.method == Method::HEAD,
        client_addr: client_address(&parts.headers, peer_addr),
        if_none_match: header_str(&parts.headers, "if-none-match"),
        range_header: header_str(&parts.headers, "range"),
        content_type: header_str(&parts.headers, "content-type"),
    };

    let mut response = match check_request(&parts, &state) {
        Some(early) => early,
        None => route_request(&ctx, &state, body).await,
    };
    apply_common_headers(&mut response, &state);

    if state.config.logging.access_log {
        log_access(&parts, &ctx, &response, &state, started);
    }

    Ok(response)
}

/// Method and Content-Length checks. Returns a response to send instead of routing.
fn check_request(parts: &Parts, state: &AppState) -> Option<HttpResponse> {
    match parts.method {
        Method::GET | Method::HEAD => {}
        Method::POST if parts.uri.path() == UPLOAD_PATH && state.config.upload.enabled => {}
        Method::OPTIONS => return Some(http::build_options_response(state.config.http.enable_cors)),
        ref other => {
            logger::log_warning(&format!("Method not allowed: {other} {}", parts.uri.path()));
            return Some(http::build_405_response());
        }
    }

    let size_str = header_str(&parts.headers, "content-length")?;
    match size_str.parse::<u64>() {
        Ok(size) if size > state.config.http.max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {})",
                state.config.http.max_body_size
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

/// Route request based on path
async fn route_request<B>(ctx: &RequestContext<'_>, state: &AppState, body: B) -> HttpResponse
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let health = &state.config.routes.health;
    if health.enabled && (ctx.path == health.liveness_path || ctx.path == health.readiness_path) {
        return http::build_health_response("ok");
    }

    match ctx.path {
        "/" | "/index.html" => page::serve_index(ctx, state),
        "/api/images" => api::handle_images(ctx, state),
        "/api/visitor_stats" => api::handle_visitor_stats(ctx, state),
        UPLOAD_PATH if *ctx.method == Method::POST => upload::handle_upload(ctx, state, body).await,
        path => match path.strip_prefix(IMAGE_ROUTE_PREFIX) {
            Some(name) => images::serve_image(ctx, state, name).await,
            None if path == UPLOAD_PATH || path.starts_with(API_ROUTE_PREFIX) => {
                api::error_json(StatusCode::NOT_FOUND, "Not found", ctx.is_head)
            }
            None => http::build_404_response(),
        },
    }
}

/// Visitor address for a request
pub fn client_address(headers: &HeaderMap, peer_addr: SocketAddr) -> String {
    header_str(headers, "x-forwarded-for")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| peer_addr.ip().to_string(), ToString::to_string)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn apply_common_headers(response: &mut HttpResponse, state: &AppState) {
    let headers = response.headers_mut();
    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        headers.insert("Server", server);
    }
    if state.config.http.enable_cors {
        headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    }
}

fn log_access(
    parts: &Parts,
    ctx: &RequestContext<'_>,
    response: &HttpResponse,
    state: &AppState,
    started: Instant,
) {
    let mut entry = AccessLogEntry::new(
        ctx.client_addr.clone(),
        parts.method.to_string(),
        ctx.path.to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = version_label(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header_str(&parts.headers, "referer").map(ToString::to_string);
    entry.user_agent = header_str(&parts.headers, "user-agent").map(ToString::to_string);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::{BodyExt, Full};
    use hyper::body::Bytes;
    use hyper::StatusCode;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        state: Arc<AppState>,
    }

    fn fixture() -> Fixture {
        fixture_with(|_| {})
    }

    fn fixture_with(adjust: impl FnOnce(&mut Config)) -> Fixture {
        let tmp = TempDir::new().unwrap();
        let mut cfg = Config::load_from(tmp.path().join("absent").to_str().unwrap()).unwrap();
        cfg.gallery.image_dir = tmp.path().join("images");
        cfg.gallery.stats_file = tmp.path().join("visitor_stats.json");
        cfg.logging.access_log = false;
        adjust(&mut cfg);
        fs::create_dir_all(&cfg.gallery.image_dir).unwrap();
        Fixture {
            state: Arc::new(AppState::new(&cfg)),
            _tmp: tmp,
        }
    }

    fn peer() -> SocketAddr {
        "192.0.2.10:50000".parse().unwrap()
    }

    fn get(uri: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    async fn send(fx: &Fixture, req: Request<Full<Bytes>>) -> (StatusCode, HeaderMap, Bytes) {
        let resp = handle_request(req, Arc::clone(&fx.state), peer())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body)
    }

    async fn send_json(fx: &Fixture, uri: &str) -> serde_json::Value {
        let (status, _, body) = send(fx, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_client_address_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_address(&headers, peer()), "192.0.2.10");

        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.5, 10.0.0.1"));
        assert_eq!(client_address(&headers, peer()), "203.0.113.5, 10.0.0.1");

        headers.insert("x-forwarded-for", HeaderValue::from_static("  "));
        assert_eq!(client_address(&headers, peer()), "192.0.2.10");
    }

    #[tokio::test]
    async fn test_index_records_visits() {
        let fx = fixture();

        let (status, headers, body) = send(&fx, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
        assert!(String::from_utf8_lossy(&body).contains("id=\"total-visits\">1<"));

        send(&fx, get("/")).await;
        let forwarded = Request::builder()
            .uri("/")
            .header("X-Forwarded-For", "198.51.100.1")
            .body(Full::new(Bytes::new()))
            .unwrap();
        send(&fx, forwarded).await;

        let stats = send_json(&fx, "/api/visitor_stats").await;
        assert_eq!(
            stats,
            serde_json::json!({"success": true, "total_visits": 3, "unique_visitors": 2})
        );
    }

    #[tokio::test]
    async fn test_visitor_stats_is_read_only() {
        let fx = fixture();
        send(&fx, get("/")).await;

        for _ in 0..3 {
            let stats = send_json(&fx, "/api/visitor_stats").await;
            assert_eq!(stats["total_visits"], 1);
        }
    }

    #[tokio::test]
    async fn test_images_api_lists_sorted() {
        let fx = fixture();
        let dir = &fx.state.config.gallery.image_dir;
        fs::write(dir.join("b.png"), vec![0u8; 1536]).unwrap();
        fs::write(dir.join("a.jpg"), b"").unwrap();
        fs::write(dir.join("readme.txt"), b"skip").unwrap();

        let listing = send_json(&fx, "/api/images").await;
        assert_eq!(
            listing,
            serde_json::json!({
                "success": true,
                "count": 2,
                "images": [
                    {"name": "a.jpg", "path": "a.jpg", "size": "0 B"},
                    {"name": "b.png", "path": "b.png", "size": "1.50 KB"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_images_api_creates_missing_dir() {
        let fx = fixture();
        let dir = fx.state.config.gallery.image_dir.clone();
        fs::remove_dir_all(&dir).unwrap();

        let listing = send_json(&fx, "/api/images").await;
        assert_eq!(listing["count"], 0);
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_serve_image_bytes() {
        let fx = fixture();
        let dir = &fx.state.config.gallery.image_dir;
        fs::write(dir.join("my cat.png"), b"\x89PNG fake").unwrap();

        let (status, headers, body) = send(&fx, get("/images/my%20cat.png")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "image/png");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["server"], "image-gallery/0.1");
        assert_eq!(&body[..], b"\x89PNG fake");

        let etag = headers["etag"].clone();
        let conditional = Request::builder()
            .uri("/images/my%20cat.png")
            .header("If-None-Match", etag)
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, _, body) = send(&fx, conditional).await;
        assert_eq!(status, StatusCode::NOT_MODIFIED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_serve_image_range() {
        let fx = fixture();
        fs::write(fx.state.config.gallery.image_dir.join("r.gif"), b"0123456789").unwrap();

        let ranged = Request::builder()
            .uri("/images/r.gif")
            .header("Range", "bytes=2-5")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, headers, body) = send(&fx, ranged).await;
        assert_eq!(status, StatusCode::PARTIAL_CONTENT);
        assert_eq!(headers["content-range"], "bytes 2-5/10");
        assert_eq!(&body[..], b"2345");

        let too_far = Request::builder()
            .uri("/images/r.gif")
            .header("Range", "bytes=50-")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, _, _) = send(&fx, too_far).await;
        assert_eq!(status, StatusCode::RANGE_NOT_SATISFIABLE);
    }

    #[tokio::test]
    async fn test_missing_and_escaping_images_are_404() {
        let fx = fixture();
        fs::write(fx.state.config.gallery.stats_file.with_file_name("secret.png"), b"x").unwrap();

        for uri in ["/images/nope.png", "/images/../secret.png", "/images/%2e%2e/secret.png", "/images/"] {
            let (status, _, _) = send(&fx, get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let fx = fixture();
        let head = Request::builder()
            .method(Method::HEAD)
            .uri("/api/visitor_stats")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, headers, body) = send(&fx, head).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers.contains_key("content-length"));
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_method_and_unknown_route() {
        let fx = fixture();
        let post = Request::builder()
            .method(Method::POST)
            .uri("/api/images")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, headers, _) = send(&fx, post).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers["allow"], "GET, HEAD, OPTIONS");

        let (status, _, _) = send(&fx, get("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, body) = send(&fx, get("/healthz")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let fx = fixture();
        let req = Request::builder()
            .uri("/")
            .header("Content-Length", "999999999999")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, _, _) = send(&fx, req).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_html_in_image_dir_is_not_rendered() {
        let fx = fixture();
        fs::write(fx.state.config.gallery.image_dir.join("x.html"), b"<script></script>").unwrap();

        let (status, headers, _) = send(&fx, get("/images/x.html")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "application/octet-stream");
        assert_eq!(headers["x-content-type-options"], "nosniff");
    }

    #[tokio::test]
    async fn test_unreadable_stats_file_is_500() {
        let fx = fixture();
        fs::create_dir(&fx.state.config.gallery.stats_file).unwrap();

        let (status, headers, body) = send(&fx, get("/")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(headers["content-type"], "text/plain; charset=utf-8");
        assert_eq!(&body[..], b"500 Internal Server Error");

        let (status, headers, body) = send(&fx, get("/api/visitor_stats")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(headers["content-type"], "application/json");
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "message": "Failed to load visitor stats"})
        );
    }

    #[tokio::test]
    async fn test_unreadable_image_dir_is_500() {
        let fx = fixture();
        let dir = &fx.state.config.gallery.image_dir;
        fs::remove_dir_all(dir).unwrap();
        fs::write(dir, b"not a directory").unwrap();

        let (status, _, body) = send(&fx, get("/api/images")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Failed to read image directory");
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_json_404() {
        let fx = fixture();
        for uri in ["/api/nothing", "/upload"] {
            let (status, headers, body) = send(&fx, get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(headers["content-type"], "application/json");
            let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(value["success"], false);
        }
    }

    const BOUNDARY: &str = "gallery-test-boundary";

    /// One multipart part: field name, optional (filename, content type), data
    struct Part<'a> {
        field: &'a str,
        file: Option<(&'a str, &'a str)>,
        data: &'a [u8],
    }

    fn image_part<'a>(filename: &'a str, data: &'a [u8]) -> Part<'a> {
        Part {
            field: "images",
            file: Some((filename, "image/png")),
            data,
        }
    }

    fn upload_request(parts: &[Part<'_>]) -> Request<Full<Bytes>> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part.file {
                Some((filename, content_type)) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n",
                        part.field
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.field).as_bytes(),
                ),
            }
            body.extend_from_slice(part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/upload")
            .header("Content-Type", format!("multipart/form-data; boundary={BOUNDARY}"))
            .header("Content-Length", body.len())
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }

    fn stored_files(fx: &Fixture) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&fx.state.config.gallery.image_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    async fn upload_json(fx: &Fixture, parts: &[Part<'_>]) -> (StatusCode, serde_json::Value) {
        let (status, headers, body) = send(fx, upload_request(parts)).await;
        assert_eq!(headers["content-type"], "application/json");
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_upload_stores_images() {
        let fx = fixture();
        let (status, reply) = upload_json(
            &fx,
            &[
                image_part("cat.png", b"\x89PNG cat"),
                Part {
                    field: "caption",
                    file: None,
                    data: b"ignored text field",
                },
                Part {
                    field: "images",
                    file: Some(("Holiday.JPG", "image/jpeg")),
                    data: b"jpeg bytes",
                },
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["success"], true);
        assert_eq!(reply["uploadedCount"], 2);
        let files = reply["uploadedFiles"].as_array().unwrap();
        assert_eq!(files[0]["originalName"], "cat.png");
        assert_eq!(files[0]["size"], 8);
        assert_eq!(files[1]["originalName"], "Holiday.JPG");

        let first = files[0]["name"].as_str().unwrap();
        assert!(first.starts_with("images-") && first.ends_with(".png"), "{first}");
        assert!(files[1]["name"].as_str().unwrap().ends_with(".jpg"));
        assert_eq!(files[0]["path"], format!("/images/{first}"));

        // Stored uploads show up in the listing and are served back
        let listing = send_json(&fx, "/api/images").await;
        assert_eq!(listing["count"], 2);
        let (status, _, body) = send(&fx, get(&format!("/images/{first}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"\x89PNG cat");
    }

    #[tokio::test]
    async fn test_upload_without_files_is_400() {
        let fx = fixture();
        let (status, reply) = upload_json(
            &fx,
            &[Part {
                field: "caption",
                file: None,
                data: b"no files here",
            }],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            reply,
            serde_json::json!({"success": false, "message": "No files received"})
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_non_images_and_rolls_back() {
        let fx = fixture();
        let (status, reply) = upload_json(
            &fx,
            &[
                image_part("ok.png", b"fine"),
                Part {
                    field: "images",
                    file: Some(("notes.txt", "text/plain")),
                    data: b"hello",
                },
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["success"], false);
        assert!(stored_files(&fx).is_empty());

        // An image mimetype does not make an unlisted extension acceptable
        let (status, _) = upload_json(
            &fx,
            &[Part {
                field: "images",
                file: Some(("page.html", "image/png")),
                data: b"<html>",
            }],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(stored_files(&fx).is_empty());
    }

    #[tokio::test]
    async fn test_upload_file_too_large_is_400() {
        let fx = fixture_with(|cfg| cfg.upload.max_file_size = 8);
        let (status, reply) = upload_json(
            &fx,
            &[image_part("small.png", b"1234"), image_part("big.png", b"123456789012")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["message"], "File too large");
        assert!(stored_files(&fx).is_empty());
    }

    #[tokio::test]
    async fn test_upload_too_many_files_is_400() {
        let fx = fixture_with(|cfg| cfg.upload.max_files = 1);
        let (status, reply) =
            upload_json(&fx, &[image_part("a.png", b"a"), image_part("b.png", b"b")]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["message"], "Too many files (max 1)");
        assert!(stored_files(&fx).is_empty());
    }

    #[tokio::test]
    async fn test_upload_unexpected_field_is_400() {
        let fx = fixture();
        let (status, reply) = upload_json(
            &fx,
            &[Part {
                field: "avatar",
                file: Some(("me.png", "image/png")),
                data: b"png",
            }],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["message"], "Unexpected field: avatar");
    }

    #[tokio::test]
    async fn test_upload_requires_multipart() {
        let fx = fixture();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/upload")
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from_static(b"{}")))
            .unwrap();

        let (status, _, body) = send(&fx, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "Expected multipart/form-data");
    }

    #[tokio::test]
    async fn test_upload_disabled_is_405() {
        let fx = fixture_with(|cfg| cfg.upload.enabled = false);
        let (status, _, _) = send(&fx, upload_request(&[image_part("a.png", b"a")])).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(stored_files(&fx).is_empty());
    }
}

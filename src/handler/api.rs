//! JSON endpoints: image listing and visitor counters, plus the shared error body

use hyper::StatusCode;
use serde::Serialize;

use super::router::RequestContext;
use crate::config::AppState;
use crate::gallery::{self, ImageEntry};
use crate::http::{json_response, HttpResponse};
use crate::logger;

#[derive(Debug, Serialize)]
struct ImagesResponse<'a> {
    success: bool,
    count: usize,
    images: &'a [ImageEntry],
}

#[derive(Debug, Serialize)]
struct VisitorStatsResponse {
    success: bool,
    total_visits: u64,
    unique_visitors: u64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    success: bool,
    message: &'a str,
}

/// `GET /api/images`
pub fn handle_images(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    let gallery_cfg = &state.config.gallery;
    match gallery::list_images(&gallery_cfg.image_dir, &gallery_cfg.allowed_extensions) {
        Ok(images) => json_response(
            StatusCode::OK,
            &ImagesResponse {
                success: true,
                count: images.len(),
                images: &images,
            },
            ctx.is_head,
        ),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list images in {}: {e}",
                gallery_cfg.image_dir.display()
            ));
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read image directory", ctx.is_head)
        }
    }
}

/// `GET /api/visitor_stats`
pub fn handle_visitor_stats(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    match state.visitors.get_stats() {
        Ok(stats) => json_response(
            StatusCode::OK,
            &VisitorStatsResponse {
                success: true,
                total_visits: stats.total_visits,
                unique_visitors: stats.unique_visitors,
            },
            ctx.is_head,
        ),
        Err(e) => {
            logger::log_error(&format!("Failed to load visitor stats: {e}"));
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load visitor stats", ctx.is_head)
        }
    }
}

/// `{"success": false, "message": ...}` with the given status
pub(super) fn error_json(status: StatusCode, message: &str, is_head: bool) -> HttpResponse {
    json_response(
        status,
        &ErrorResponse {
            success: false,
            message,
        },
        is_head,
    )
}

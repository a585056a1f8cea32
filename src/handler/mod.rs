//! Request handler module
//!
//! Routes requests to the gallery page, the JSON API, the image files, and
//! the upload endpoint.

mod api;
mod images;
mod page;
mod upload;
pub mod router;

// Re-export main entry point
pub use router::{client_address, handle_request, RequestContext};

//! HTTP protocol layer module
//!
//! Response builders, MIME lookup, conditional requests and byte ranges,
//! independent of the gallery logic.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used types
pub use range::{resolve_range, ByteRange, RangeOutcome};
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_416_response, build_500_response, build_health_response, build_html_response,
    build_options_response, json_response, HttpResponse,
};

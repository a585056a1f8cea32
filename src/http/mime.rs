//! Content-Type lookup by file extension
//!
//! Only raster image types are named. Everything else, including SVG and
//! HTML, goes out as `application/octet-stream` so a browser never renders
//! a file from the image directory as active content.

/// MIME type for a file extension, compared case-insensitively
///
/// # Examples
/// ```
/// use image_gallery::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("JPG")), "image/jpeg");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    let ext = extension.map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        Some("tif" | "tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

//! Image directory listing
//!
//! Enumerates image files directly inside a directory (no recursion),
//! filtered by an extension allow-list and sorted by file name.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Result;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// A single image found in the gallery directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// File name without directory
    pub name: String,
    /// Path relative to the image directory
    pub path: String,
    /// Human readable size, e.g. `1.50 KB`
    pub size: String,
    /// Absolute location on disk (not exposed over the API)
    #[serde(skip)]
    pub full_path: PathBuf,
}

/// List the images in `directory` whose extension is in `allowed_extensions`.
///
/// A missing directory is created and yields an empty listing. Extensions are
/// compared exactly as given, and names starting with `.` are ignored the way
/// a shell glob ignores them.
pub fn list_images(directory: &Path, allowed_extensions: &[String]) -> Result<Vec<ImageEntry>> {
    if !directory.exists() {
        fs::create_dir_all(directory)?;
        return Ok(Vec::new());
    }

    let base = directory.canonicalize()?;
    let mut images = Vec::new();

    for entry in fs::read_dir(&base)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') || !has_allowed_extension(&name, allowed_extensions) {
            continue;
        }

        let full_path = entry.path();
        let metadata = match fs::metadata(&full_path) {
            Ok(m) => m,
            // Removed between read_dir and stat, or a dangling symlink
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            continue;
        }

        images.push(ImageEntry {
            path: name.clone(),
            name,
            size: format_file_size(metadata.len()),
            full_path,
        });
    }

    images.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(images)
}

fn has_allowed_extension(name: &str, allowed_extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| allowed_extensions.iter().any(|allowed| allowed == ext))
}

/// Format a byte count using the largest unit that keeps the value below 1024.
///
/// # Examples
/// ```
/// use image_gallery::gallery::format_file_size;
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.50 KB");
/// ```
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0 B".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{size:.2} {}", SIZE_UNITS[unit])
}

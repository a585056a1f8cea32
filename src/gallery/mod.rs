//! Gallery core
//!
//! Image directory enumeration and persistent visitor statistics.
//! Both are plain synchronous code invoked directly from request handlers.

mod error;
pub mod lister;
pub mod visitors;

pub use error::{GalleryError, Result};
pub use lister::{format_file_size, list_images, ImageEntry};
pub use visitors::{JsonFileStore, MemoryStore, StatsStore, VisitorCounter, VisitorStats};

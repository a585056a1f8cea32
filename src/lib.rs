//! Image gallery server
//!
//! Serves a directory of images over HTTP with a small web page and JSON
//! API, and keeps visit/visitor counters in a JSON file.

pub mod config;
pub mod gallery;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
